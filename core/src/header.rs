//! Element header types: the attribute tag and the value representation.
//!
//! The header scanner never builds element trees,
//! so both types are small and `Copy`.

use std::fmt;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// The file meta information group.
    pub const META_GROUP: GroupNumber = 0x0002;

    /// Item (FFFE,E000).
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item delimitation item (FFFE,E00D).
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence delimitation item (FFFE,E0DD).
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this is one of the three item or delimiter tags,
    /// whose headers never carry a VR.
    #[inline]
    pub fn is_item_or_delimiter(self) -> bool {
        self == Self::ITEM || self == Self::ITEM_DELIMITER || self == Self::SEQUENCE_DELIMITER
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from((group, element): (u16, u16)) -> Tag {
        Tag(group, element)
    }
}

/// A DICOM value representation,
/// as spelled in an explicit VR element header.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    AE,
    AS,
    AT,
    CS,
    DA,
    DS,
    DT,
    FL,
    FD,
    IS,
    LO,
    LT,
    OB,
    OD,
    OF,
    OL,
    OV,
    OW,
    PN,
    SH,
    SL,
    SQ,
    SS,
    ST,
    SV,
    TM,
    UC,
    UI,
    UL,
    UN,
    UR,
    US,
    UT,
    UV,
}

/// Every representation with its two-letter code.
const CODES: [(VR, [u8; 2]); 34] = [
    (VR::AE, *b"AE"),
    (VR::AS, *b"AS"),
    (VR::AT, *b"AT"),
    (VR::CS, *b"CS"),
    (VR::DA, *b"DA"),
    (VR::DS, *b"DS"),
    (VR::DT, *b"DT"),
    (VR::FL, *b"FL"),
    (VR::FD, *b"FD"),
    (VR::IS, *b"IS"),
    (VR::LO, *b"LO"),
    (VR::LT, *b"LT"),
    (VR::OB, *b"OB"),
    (VR::OD, *b"OD"),
    (VR::OF, *b"OF"),
    (VR::OL, *b"OL"),
    (VR::OV, *b"OV"),
    (VR::OW, *b"OW"),
    (VR::PN, *b"PN"),
    (VR::SH, *b"SH"),
    (VR::SL, *b"SL"),
    (VR::SQ, *b"SQ"),
    (VR::SS, *b"SS"),
    (VR::ST, *b"ST"),
    (VR::SV, *b"SV"),
    (VR::TM, *b"TM"),
    (VR::UC, *b"UC"),
    (VR::UI, *b"UI"),
    (VR::UL, *b"UL"),
    (VR::UN, *b"UN"),
    (VR::UR, *b"UR"),
    (VR::US, *b"US"),
    (VR::UT, *b"UT"),
    (VR::UV, *b"UV"),
];

impl VR {
    /// The representation spelled by two header bytes, if any.
    /// Only upper case letters match.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        CODES
            .iter()
            .find(|(_, code)| *code == chars)
            .map(|(vr, _)| *vr)
    }

    /// The two-letter code of this representation.
    pub fn code(self) -> [u8; 2] {
        CODES[self as usize].1
    }

    /// Whether an explicit VR element header with this representation
    /// carries two reserved bytes followed by a 32-bit length,
    /// instead of a 16-bit length.
    pub fn has_extended_length(self) -> bool {
        use VR::*;
        matches!(self, OB | OD | OF | OL | OV | OW | SQ | SV | UC | UN | UR | UT | UV)
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b] = self.code();
        write!(f, "{}{}", char::from(a), char::from(b))
    }
}
