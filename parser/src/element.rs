//! A view over one element as seen by the dispatcher.

use std::convert::TryFrom;
use dcmstream_core::{Tag, VR};
use dcmstream_encoding::decode::{
    f32_value, float_or_double, int_value, multi_float_or_double, multi_u16, multi_u32,
    u16_value,
};
use dcmstream_encoding::text::{fixed_str, float_prefix, int_prefix, long_str, multi_float};
use dcmstream_encoding::BasicDecoder;
use smallvec::SmallVec;

/// An element header together with whatever part of its value
/// is available in memory.
///
/// `value` is empty when the value was too large to load
/// or extends past the end of the source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Element<'a> {
    pub tag: Tag,
    /// the declared value representation, explicit VR only
    pub vr: Option<VR>,
    pub length: u32,
    /// absolute offset of the first value byte
    pub offset: u64,
    pub value: &'a [u8],
    pub decoder: BasicDecoder,
}

impl<'a> Element<'a> {
    /// Short text value (at most 64 bytes).
    pub fn text(&self) -> String {
        fixed_str(self.value)
    }

    /// Long text value (at most 256 bytes).
    pub fn long_text(&self) -> String {
        long_str(self.value)
    }

    /// Binary integer, width decided by the value length.
    pub fn int(&self) -> Option<i32> {
        int_value(self.value, self.decoder)
    }

    pub fn u16(&self) -> Option<u16> {
        u16_value(self.value, self.decoder)
    }

    pub fn f32(&self) -> Option<f32> {
        f32_value(self.value, self.decoder)
    }

    pub fn float_or_double(&self) -> Option<f64> {
        float_or_double(self.value, self.decoder)
    }

    pub fn floats(&self, count: usize) -> Option<SmallVec<[f64; 4]>> {
        multi_float_or_double(self.value, count, self.decoder)
    }

    pub fn u16s(&self, count: usize) -> Option<SmallVec<[u16; 4]>> {
        multi_u16(self.value, count, self.decoder)
    }

    pub fn u32s(&self, count: usize) -> Option<SmallVec<[u32; 8]>> {
        multi_u32(self.value, count, self.decoder)
    }

    /// Integer string (IS) value.
    pub fn text_int(&self) -> Option<i32> {
        int_prefix(&self.text())
    }

    /// Decimal string (DS) value.
    pub fn text_float(&self) -> Option<f64> {
        float_prefix(&self.text())
    }

    /// Multi-valued decimal string, `count` values exactly.
    pub fn text_floats(&self, count: usize) -> Option<SmallVec<[f32; 6]>> {
        multi_float(&self.long_text(), count)
    }

    /// Multi-valued decimal string as a fixed-size array.
    pub fn text_array<const N: usize>(&self) -> Option<[f32; N]> {
        let values = self.text_floats(N)?;
        let mut out = [0.; N];
        out.copy_from_slice(&values);
        Some(out)
    }

    /// Multi-valued binary float or double as a fixed-size array.
    pub fn float_array<const N: usize>(&self) -> Option<[f32; N]> {
        let values = self.floats(N)?;
        if values.len() != N {
            return None;
        }
        let mut out = [0.; N];
        for (o, v) in out.iter_mut().zip(values) {
            *o = v as f32;
        }
        Some(out)
    }

    /// Unsigned binary integer, width decided by the value length.
    pub fn uint(&self) -> Option<u32> {
        self.int().and_then(|v| u32::try_from(v).ok())
    }

    /// The value byte at `index`, if loaded.
    pub fn byte(&self, index: usize) -> Option<u8> {
        self.value.get(index).copied()
    }

    /// Whether the whole declared value is in memory.
    pub fn is_complete(&self) -> bool {
        self.value.len() as u64 == u64::from(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmstream_encoding::Endianness;

    fn element(value: &[u8], decoder: BasicDecoder) -> Element<'_> {
        Element {
            tag: Tag(0x0028, 0x0030),
            vr: None,
            length: value.len() as u32,
            offset: 0,
            value,
            decoder,
        }
    }

    #[test]
    fn text_helpers() {
        let e = element(b"0.5\\0.75 ", BasicDecoder::default());
        assert_eq!(e.text(), "0.5\\0.75");
        assert_eq!(e.text_float(), Some(0.5));
        assert_eq!(e.text_floats(2).unwrap().as_slice(), &[0.5, 0.75]);
        assert!(e.text_floats(3).is_none());
        assert!(e.is_complete());

        let e = element(b"12 ", BasicDecoder::default());
        assert_eq!(e.text_int(), Some(12));

        let e = element(b"1\\0\\0\\0\\1\\0", BasicDecoder::default());
        assert_eq!(e.text_array::<6>(), Some([1., 0., 0., 0., 1., 0.]));
        assert_eq!(e.text_array::<3>(), Some([1., 0., 0.]));
    }

    #[test]
    fn binary_helpers() {
        let be = BasicDecoder::new(Endianness::Big);
        let e = element(&[0x00, 0x40], be);
        assert_eq!(e.u16(), Some(64));
        assert_eq!(e.int(), Some(64));
        assert_eq!(e.byte(1), Some(0x40));
        assert_eq!(e.byte(2), None);

        let value = 2.5f32.to_le_bytes();
        let e = element(&value, BasicDecoder::default());
        assert_eq!(e.f32(), Some(2.5));
        assert_eq!(e.float_or_double(), Some(2.5));

        let mut value = Vec::new();
        for v in [0.5f64, -0.25, 1.0] {
            value.extend_from_slice(&v.to_le_bytes());
        }
        let e = element(&value, BasicDecoder::default());
        assert_eq!(e.float_array::<3>(), Some([0.5, -0.25, 1.0]));

        let e = element(&[0xFF, 0xFF, 0xFF, 0xFF], BasicDecoder::default());
        assert_eq!(e.int(), Some(-1));
        assert_eq!(e.uint(), None);
    }
}
