//! Interpretation of the transfer syntax UID.
//!
//! The header scanner does not decode pixel data,
//! so a transfer syntax only matters for two things:
//! how the remainder of the data set is encoded,
//! and which compression scheme the pixel payload declares.
//! [`classify`] maps a UID onto one [`TransferSyntaxAction`].

use dcmstream_core::CompressionScheme;
use dcmstream_dictionary::uids;

/// What the scanner should do after reading a transfer syntax UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferSyntaxAction {
    /// Explicit VR little endian, native pixel data.
    Native,
    /// Explicit VR little endian with encapsulated pixel data.
    Compressed(CompressionScheme),
    /// The data set switches to explicit VR big endian
    /// once the file meta group ends.
    SwitchToBigEndian,
    /// The data set switches to implicit VR little endian
    /// once the file meta group ends.
    SwitchToImplicitVr,
    /// The pixel data cannot be handled; scanning stops.
    Unsupported,
}

impl TransferSyntaxAction {
    /// Whether this action ends the scan.
    pub fn is_unsupported(self) -> bool {
        matches!(self, TransferSyntaxAction::Unsupported)
    }
}

/// Classify a transfer syntax UID.
///
/// Trailing padding (spaces or NUL) must be removed beforehand.
/// JPEG 2000 is only accepted when `accept_jpeg2000` is set.
///
/// ```
/// # use dcmstream_encoding::{classify, TransferSyntaxAction};
/// assert_eq!(classify("1.2.840.10008.1.2", false), TransferSyntaxAction::SwitchToImplicitVr);
/// assert_eq!(classify("1.2.840.10008.1.2.4.90", false), TransferSyntaxAction::Unsupported);
/// ```
pub fn classify(uid: &str, accept_jpeg2000: bool) -> TransferSyntaxAction {
    use TransferSyntaxAction::*;
    match uid {
        uids::EXPLICIT_VR_LITTLE_ENDIAN => Native,
        uids::JPEG_BASELINE8_BIT | uids::JPEG_EXTENDED12_BIT => {
            Compressed(CompressionScheme::JpegLossy)
        }
        uids::JPEG_LOSSLESS | uids::JPEG_LOSSLESS_SV1 => Compressed(CompressionScheme::JpegLossless),
        uids::JPEG_LS_LOSSLESS | uids::JPEG_LS_NEAR_LOSSLESS => Unsupported,
        uids::PHILIPS_PMSCT_RLE1 => Compressed(CompressionScheme::PhilipsRle),
        uids::JPEG2000_LOSSLESS | uids::JPEG2000 => {
            if accept_jpeg2000 {
                Compressed(CompressionScheme::Jpeg2000)
            } else {
                Unsupported
            }
        }
        uids::RLE_LOSSLESS => Compressed(CompressionScheme::Rle),
        uids::EXPLICIT_VR_BIG_ENDIAN => SwitchToBigEndian,
        uids::IMPLICIT_VR_LITTLE_ENDIAN => SwitchToImplicitVr,
        _ => Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.840.10008.1.2.1", false, TransferSyntaxAction::Native)]
    #[case(
        "1.2.840.10008.1.2.4.50",
        false,
        TransferSyntaxAction::Compressed(CompressionScheme::JpegLossy)
    )]
    #[case(
        "1.2.840.10008.1.2.4.51",
        false,
        TransferSyntaxAction::Compressed(CompressionScheme::JpegLossy)
    )]
    #[case(
        "1.2.840.10008.1.2.4.57",
        false,
        TransferSyntaxAction::Compressed(CompressionScheme::JpegLossless)
    )]
    #[case(
        "1.2.840.10008.1.2.4.70",
        false,
        TransferSyntaxAction::Compressed(CompressionScheme::JpegLossless)
    )]
    #[case("1.2.840.10008.1.2.4.80", true, TransferSyntaxAction::Unsupported)]
    #[case("1.2.840.10008.1.2.4.81", true, TransferSyntaxAction::Unsupported)]
    #[case(
        "1.3.46.670589.33.1.4.1",
        false,
        TransferSyntaxAction::Compressed(CompressionScheme::PhilipsRle)
    )]
    #[case("1.2.840.10008.1.2.4.90", false, TransferSyntaxAction::Unsupported)]
    #[case(
        "1.2.840.10008.1.2.4.91",
        true,
        TransferSyntaxAction::Compressed(CompressionScheme::Jpeg2000)
    )]
    #[case(
        "1.2.840.10008.1.2.5",
        false,
        TransferSyntaxAction::Compressed(CompressionScheme::Rle)
    )]
    #[case("1.2.840.10008.1.2.2", false, TransferSyntaxAction::SwitchToBigEndian)]
    #[case("1.2.840.10008.1.2", false, TransferSyntaxAction::SwitchToImplicitVr)]
    #[case("1.2.840.10008.1.2.1.99", false, TransferSyntaxAction::Unsupported)]
    #[case("", false, TransferSyntaxAction::Unsupported)]
    fn classify_transfer_syntax(
        #[case] uid: &str,
        #[case] accept_jpeg2000: bool,
        #[case] expected: TransferSyntaxAction,
    ) {
        assert_eq!(classify(uid, accept_jpeg2000), expected);
    }
}
