//! Classification enumerations carried by the image record.
//!
//! Each of these is decided from a handful of leading characters
//! of a text value, never from a full dictionary lookup.

use std::fmt;

/// The equipment manufacturer, as detected from (0008,0070).
///
/// Vendor-specific interpretation of private attributes
/// only happens when the detected manufacturer matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manufacturer {
    /// Not yet seen, or not one of the known vendors
    #[default]
    Unknown,
    Siemens,
    Ge,
    Philips,
    /// Toshiba and Canon
    Toshiba,
    Hitachi,
    /// United Imaging Healthcare
    Uih,
    Bruker,
}

impl Manufacturer {
    /// Classify a manufacturer text value by its first two letters,
    /// case insensitive.
    ///
    /// ```
    /// # use dcmstream_core::Manufacturer;
    /// assert_eq!(Manufacturer::from_text(b"SIEMENS "), Manufacturer::Siemens);
    /// assert_eq!(Manufacturer::from_text(b"Canon Medical"), Manufacturer::Toshiba);
    /// assert_eq!(Manufacturer::from_text(b"X"), Manufacturer::Unknown);
    /// ```
    pub fn from_text(value: &[u8]) -> Self {
        let (a, b) = match value {
            [a, b, ..] => (a.to_ascii_uppercase(), b.to_ascii_uppercase()),
            _ => return Manufacturer::Unknown,
        };
        match (a, b) {
            (b'S', b'I') => Manufacturer::Siemens,
            (b'G', b'E') => Manufacturer::Ge,
            (b'H', b'I') => Manufacturer::Hitachi,
            (b'P', b'H') => Manufacturer::Philips,
            (b'T', b'O') | (b'C', b'A') => Manufacturer::Toshiba,
            (b'U', b'I') => Manufacturer::Uih,
            (b'B', b'R') => Manufacturer::Bruker,
            _ => Manufacturer::Unknown,
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Manufacturer::Unknown => "unknown",
            Manufacturer::Siemens => "Siemens",
            Manufacturer::Ge => "GE",
            Manufacturer::Philips => "Philips",
            Manufacturer::Toshiba => "Toshiba",
            Manufacturer::Hitachi => "Hitachi",
            Manufacturer::Uih => "UIH",
            Manufacturer::Bruker => "Bruker",
        };
        f.write_str(name)
    }
}

/// Imaging modality, from (0008,0060).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    #[default]
    Unknown,
    /// Computed radiography
    Cr,
    /// Computed tomography
    Ct,
    /// Magnetic resonance
    Mr,
    /// Positron emission tomography
    Pt,
    /// Ultrasound
    Us,
}

impl Modality {
    /// Classify a modality code string.
    /// Only the first two characters are considered,
    /// with the second one compared case insensitively.
    pub fn from_text(value: &[u8]) -> Option<Self> {
        match value {
            [b'C', b, ..] if b.eq_ignore_ascii_case(&b'R') => Some(Modality::Cr),
            [b'C', b, ..] if b.eq_ignore_ascii_case(&b'T') => Some(Modality::Ct),
            [b'M', b, ..] if b.eq_ignore_ascii_case(&b'R') => Some(Modality::Mr),
            [b'P', b, ..] if b.eq_ignore_ascii_case(&b'T') => Some(Modality::Pt),
            [b'U', b, ..] if b.eq_ignore_ascii_case(&b'S') => Some(Modality::Us),
            _ => None,
        }
    }
}

/// The compression scheme of the pixel payload,
/// as declared by the transfer syntax.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionScheme {
    /// Native (uncompressed) pixel data
    #[default]
    None,
    /// JPEG baseline or extended (lossy)
    JpegLossy,
    /// JPEG lossless, process 14 (SOF type 0xC3)
    JpegLossless,
    /// JPEG 2000, lossless or lossy
    Jpeg2000,
    /// DICOM run length encoding
    Rle,
    /// Elscint/Philips proprietary run length encoding
    PhilipsRle,
}

impl CompressionScheme {
    /// Whether pixel data under this scheme is stored as encapsulated fragments.
    pub fn is_encapsulated(self) -> bool {
        !matches!(self, CompressionScheme::None)
    }
}

/// Slice orientation as declared by the Philips private (2001,100B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceOrientation {
    Transverse,
    Sagittal,
    Coronal,
}

impl SliceOrientation {
    /// Anything other than a leading `S` or `C` counts as transverse.
    pub fn from_text(value: &str) -> Self {
        match value.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('S') => SliceOrientation::Sagittal,
            Some('C') => SliceOrientation::Coronal,
            _ => SliceOrientation::Transverse,
        }
    }
}

/// Phase encoding polarity inferred from the GE private user data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseEncodingPolarity {
    Unflipped,
    Flipped,
}

impl PhaseEncodingPolarity {
    /// The opposite polarity.
    pub fn inverted(self) -> Self {
        match self {
            PhaseEncodingPolarity::Unflipped => PhaseEncodingPolarity::Flipped,
            PhaseEncodingPolarity::Flipped => PhaseEncodingPolarity::Unflipped,
        }
    }
}

/// MR acquisition type, from (0018,0023) or Philips (2005,106F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcquisitionType {
    TwoD,
    ThreeD,
}

impl AcquisitionType {
    pub fn from_text(value: &[u8]) -> Option<Self> {
        match value {
            [b'2', d, ..] if d.eq_ignore_ascii_case(&b'D') => Some(AcquisitionType::TwoD),
            [b'3', d, ..] if d.eq_ignore_ascii_case(&b'D') => Some(AcquisitionType::ThreeD),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manufacturer_detection() {
        assert_eq!(Manufacturer::from_text(b"GE MEDICAL SYSTEMS"), Manufacturer::Ge);
        assert_eq!(Manufacturer::from_text(b"Philips Medical Systems"), Manufacturer::Philips);
        assert_eq!(Manufacturer::from_text(b"UIH"), Manufacturer::Uih);
        assert_eq!(Manufacturer::from_text(b"TOSHIBA"), Manufacturer::Toshiba);
        assert_eq!(Manufacturer::from_text(b"Bruker BioSpin"), Manufacturer::Bruker);
        assert_eq!(Manufacturer::from_text(b"Hitachi"), Manufacturer::Hitachi);
        assert_eq!(Manufacturer::from_text(b"Agfa"), Manufacturer::Unknown);
        assert_eq!(Manufacturer::from_text(b""), Manufacturer::Unknown);
    }

    #[test]
    fn modality_detection() {
        assert_eq!(Modality::from_text(b"MR"), Some(Modality::Mr));
        assert_eq!(Modality::from_text(b"Ct"), Some(Modality::Ct));
        assert_eq!(Modality::from_text(b"PT"), Some(Modality::Pt));
        assert_eq!(Modality::from_text(b"OT"), None);
        assert_eq!(Modality::from_text(b"M"), None);
    }

    #[test]
    fn slice_orientation_text() {
        assert_eq!(SliceOrientation::from_text("SAGITTAL"), SliceOrientation::Sagittal);
        assert_eq!(SliceOrientation::from_text("coronal"), SliceOrientation::Coronal);
        assert_eq!(SliceOrientation::from_text("TRANSVERSAL"), SliceOrientation::Transverse);
        assert_eq!(SliceOrientation::from_text(""), SliceOrientation::Transverse);
    }

    #[test]
    fn acquisition_type_text() {
        assert_eq!(AcquisitionType::from_text(b"2D"), Some(AcquisitionType::TwoD));
        assert_eq!(AcquisitionType::from_text(b"3d"), Some(AcquisitionType::ThreeD));
        assert_eq!(AcquisitionType::from_text(b"3"), None);
    }
}
