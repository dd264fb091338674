//! Builder of small synthetic DICOM files.
#![allow(dead_code)]

pub const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";
pub const EXPLICIT_VR_BE: &str = "1.2.840.10008.1.2.2";
pub const IMPLICIT_VR_LE: &str = "1.2.840.10008.1.2";
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.70";

const UNDEFINED: u32 = 0xFFFF_FFFF;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoding {
    ExplicitLe,
    ExplicitBe,
    ImplicitLe,
}

#[derive(Debug, Clone)]
pub struct DicomBuilder {
    encoding: Encoding,
    bytes: Vec<u8>,
    pixel_offset: Option<u64>,
}

impl DicomBuilder {
    /// A file with preamble, magic code and a meta group
    /// declaring `transfer_syntax`.
    pub fn prefixed(transfer_syntax: &str) -> Self {
        let encoding = match transfer_syntax {
            EXPLICIT_VR_BE => Encoding::ExplicitBe,
            IMPLICIT_VR_LE => Encoding::ImplicitLe,
            _ => Encoding::ExplicitLe,
        };
        let mut bytes = vec![0u8; 128];
        bytes.extend_from_slice(b"DICM");

        let mut uid = transfer_syntax.as_bytes().to_vec();
        if uid.len() % 2 == 1 {
            uid.push(0);
        }
        let mut meta = Vec::new();
        meta.extend_from_slice(&[0x02, 0x00, 0x10, 0x00, b'U', b'I']);
        meta.extend_from_slice(&(uid.len() as u16).to_le_bytes());
        meta.extend_from_slice(&uid);

        bytes.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00]);
        bytes.extend_from_slice(&(meta.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&meta);

        DicomBuilder {
            encoding,
            bytes,
            pixel_offset: None,
        }
    }

    /// A bare implicit VR little endian data set, without preamble.
    pub fn bare() -> Self {
        DicomBuilder {
            encoding: Encoding::ImplicitLe,
            bytes: Vec::new(),
            pixel_offset: None,
        }
    }

    fn u16(&mut self, v: u16) {
        match self.encoding {
            Encoding::ExplicitBe => self.bytes.extend_from_slice(&v.to_be_bytes()),
            _ => self.bytes.extend_from_slice(&v.to_le_bytes()),
        }
    }

    fn u32(&mut self, v: u32) {
        match self.encoding {
            Encoding::ExplicitBe => self.bytes.extend_from_slice(&v.to_be_bytes()),
            _ => self.bytes.extend_from_slice(&v.to_le_bytes()),
        }
    }

    fn header(&mut self, (group, element): (u16, u16), vr: &[u8; 2], len: u32) {
        self.u16(group);
        self.u16(element);
        if self.encoding == Encoding::ImplicitLe {
            self.u32(len);
            return;
        }
        self.bytes.extend_from_slice(vr);
        if matches!(vr, b"OB" | b"OW" | b"SQ" | b"UN" | b"UT") {
            self.bytes.extend_from_slice(&[0, 0]);
            self.u32(len);
        } else {
            self.u16(len as u16);
        }
    }

    /// Raw value bytes, written as given.
    pub fn raw(mut self, tag: (u16, u16), vr: &[u8; 2], value: &[u8]) -> Self {
        self.header(tag, vr, value.len() as u32);
        self.bytes.extend_from_slice(value);
        self
    }

    /// Text value, padded to even length.
    pub fn text(self, tag: (u16, u16), vr: &[u8; 2], value: &str) -> Self {
        let mut value = value.as_bytes().to_vec();
        if value.len() % 2 == 1 {
            value.push(if vr == b"UI" { 0 } else { b' ' });
        }
        self.raw(tag, vr, &value)
    }

    pub fn us(mut self, tag: (u16, u16), v: u16) -> Self {
        self.header(tag, b"US", 2);
        self.u16(v);
        self
    }

    pub fn ul(mut self, tag: (u16, u16), values: &[u32]) -> Self {
        self.header(tag, b"UL", 4 * values.len() as u32);
        for v in values {
            self.u32(*v);
        }
        self
    }

    pub fn fd(mut self, tag: (u16, u16), v: f64) -> Self {
        self.header(tag, b"FD", 8);
        let bytes = match self.encoding {
            Encoding::ExplicitBe => v.to_be_bytes(),
            _ => v.to_le_bytes(),
        };
        self.bytes.extend_from_slice(&bytes);
        self
    }

    /// Sequence of undefined length.
    pub fn sequence(mut self, tag: (u16, u16)) -> Self {
        self.header(tag, b"SQ", UNDEFINED);
        self
    }

    /// Item of undefined length.
    pub fn item(mut self) -> Self {
        self.u16(0xFFFE);
        self.u16(0xE000);
        self.u32(UNDEFINED);
        self
    }

    pub fn end_item(mut self) -> Self {
        self.u16(0xFFFE);
        self.u16(0xE00D);
        self.u32(0);
        self
    }

    pub fn end_sequence(mut self) -> Self {
        self.u16(0xFFFE);
        self.u16(0xE0DD);
        self.u32(0);
        self
    }

    /// Native pixel data of `len` zero bytes.
    pub fn pixel_data(mut self, len: u32) -> Self {
        self.header((0x7FE0, 0x0010), b"OW", len);
        self.pixel_offset = Some(self.bytes.len() as u64);
        self.bytes.resize(self.bytes.len() + len as usize, 0);
        self
    }

    /// Encapsulated pixel data: an empty offset table,
    /// then one item per fragment length.
    ///
    /// The pixel offset is that of the first fragment.
    pub fn encapsulated(mut self, fragments: &[u32]) -> Self {
        self.header((0x7FE0, 0x0010), b"OB", UNDEFINED);
        self.u16(0xFFFE);
        self.u16(0xE000);
        self.u32(0);
        for (i, len) in fragments.iter().enumerate() {
            self.u16(0xFFFE);
            self.u16(0xE000);
            self.u32(*len);
            if i == 0 {
                self.pixel_offset = Some(self.bytes.len() as u64);
            }
            self.bytes.resize(self.bytes.len() + *len as usize, 0xAB);
        }
        self.end_sequence()
    }

    pub fn pixel_offset(&self) -> Option<u64> {
        self.pixel_offset
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// A plain 64×64 16-bit MR slice, without its pixel data.
pub fn mr_slice(transfer_syntax: &str, manufacturer: &str) -> DicomBuilder {
    mr_elements(DicomBuilder::prefixed(transfer_syntax), manufacturer)
}

pub fn mr_elements(builder: DicomBuilder, manufacturer: &str) -> DicomBuilder {
    builder
        .text((0x0008, 0x0060), b"CS", "MR")
        .text((0x0008, 0x0070), b"LO", manufacturer)
        .text((0x0008, 0x103E), b"LO", "ep2d_bold")
        .text((0x0018, 0x0050), b"DS", "2.5")
        .text((0x0018, 0x0081), b"DS", "30")
        .text((0x0020, 0x000E), b"UI", "1.3.12.2.1107.5.2.32.35131")
        .text((0x0020, 0x0011), b"IS", "7")
        .text((0x0020, 0x0013), b"IS", "12")
        .text((0x0020, 0x0032), b"DS", "-100\\-120.5\\30")
        .text((0x0020, 0x0037), b"DS", "1\\0\\0\\0\\1\\0")
        .us((0x0028, 0x0002), 1)
        .us((0x0028, 0x0010), 64)
        .us((0x0028, 0x0011), 64)
        .text((0x0028, 0x0030), b"DS", "0.75\\0.5")
        .us((0x0028, 0x0100), 16)
}
