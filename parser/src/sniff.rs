//! Format sniffing from the first bytes of a file.

/// Number of bytes inspected by [`sniff`].
/// Anything shorter is never recognized.
pub const SNIFF_LEN: usize = 256;

/// Length of the file preamble, before the `DICM` magic code.
pub const PREAMBLE_LEN: u64 = 128;

/// Offset of the first element of a prefixed file:
/// preamble plus magic code.
pub const PREFIXED_START: u64 = PREAMBLE_LEN + 4;

/// How the start of a file looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sniff {
    /// Too small, or no known signature.
    NotRecognized,
    /// Standard file with preamble and `DICM` magic code.
    /// The scan starts after the magic code in explicit VR little endian.
    StandardPrefixed,
    /// No preamble, but the first bytes look like a group 0008 element
    /// in little endian. The scan starts at byte 0 in implicit VR.
    /// This is a guess, not a guarantee.
    HeaderOnlyNoPrefix,
}

impl Sniff {
    /// Whether the scan can start at all.
    pub fn is_recognized(self) -> bool {
        !matches!(self, Sniff::NotRecognized)
    }

    /// Absolute offset of the first element.
    pub fn start_offset(self) -> u64 {
        match self {
            Sniff::StandardPrefixed => PREFIXED_START,
            _ => 0,
        }
    }
}

/// Classify a file from its first bytes.
///
/// `head` should hold the first [`SNIFF_LEN`] bytes of the file.
/// Fewer bytes than that means the file is too small.
pub fn sniff(head: &[u8]) -> Sniff {
    if head.len() < SNIFF_LEN {
        return Sniff::NotRecognized;
    }
    if &head[128..132] == b"DICM" {
        return Sniff::StandardPrefixed;
    }
    if head[0] == 0x08 && head[1] == 0x00 && head[3] == 0x00 {
        return Sniff::HeaderOnlyNoPrefix;
    }
    Sniff::NotRecognized
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn prefixed() -> Vec<u8> {
        let mut head = vec![0u8; SNIFF_LEN];
        head[128..132].copy_from_slice(b"DICM");
        head
    }

    fn bare_group_8() -> Vec<u8> {
        let mut head = vec![0u8; SNIFF_LEN];
        head[..4].copy_from_slice(&[0x08, 0x00, 0x05, 0x00]);
        head
    }

    #[rstest]
    #[case(prefixed(), Sniff::StandardPrefixed)]
    #[case(bare_group_8(), Sniff::HeaderOnlyNoPrefix)]
    #[case(vec![0xAA; SNIFF_LEN], Sniff::NotRecognized)]
    #[case(prefixed()[..255].to_vec(), Sniff::NotRecognized)]
    #[case(Vec::new(), Sniff::NotRecognized)]
    fn sniff_cases(#[case] head: Vec<u8>, #[case] expected: Sniff) {
        assert_eq!(sniff(&head), expected);
    }

    #[test]
    fn start_offsets() {
        assert_eq!(Sniff::StandardPrefixed.start_offset(), 132);
        assert_eq!(Sniff::HeaderOnlyNoPrefix.start_offset(), 0);
        assert!(!Sniff::NotRecognized.is_recognized());
    }
}
