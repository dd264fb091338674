//! Primitive number decoding in a byte order chosen at run-time.

use byteordered::{ByteOrdered, Endianness};
use std::io::Read;

type Result<T> = std::io::Result<T>;

/// A decoder of primitive binary values.
///
/// The scanner switches byte order when the transfer syntax asks for it,
/// so the order is a plain value rather than a type parameter.
/// Reading does not consume the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicDecoder {
    endianness: Endianness,
}

impl BasicDecoder {
    /// Create a basic decoder for the given byte order.
    pub const fn new(endianness: Endianness) -> Self {
        BasicDecoder { endianness }
    }

    pub fn endianness(self) -> Endianness {
        self.endianness
    }

    /// Whether this decoder reads little endian values.
    pub fn is_little_endian(self) -> bool {
        self.endianness == Endianness::Little
    }

    fn wrap<S: Read>(self, source: S) -> ByteOrdered<S, Endianness> {
        ByteOrdered::runtime(source, self.endianness)
    }

    pub fn decode_us<S: Read>(self, source: S) -> Result<u16> {
        self.wrap(source).read_u16()
    }

    /// Fill `dst` with consecutive unsigned shorts.
    pub fn decode_us_into<S: Read>(self, source: S, dst: &mut [u16]) -> Result<()> {
        self.wrap(source).read_u16_into(dst)
    }

    pub fn decode_ul<S: Read>(self, source: S) -> Result<u32> {
        self.wrap(source).read_u32()
    }

    /// Fill `dst` with consecutive unsigned longs.
    pub fn decode_ul_into<S: Read>(self, source: S, dst: &mut [u32]) -> Result<()> {
        self.wrap(source).read_u32_into(dst)
    }

    pub fn decode_sl<S: Read>(self, source: S) -> Result<i32> {
        self.wrap(source).read_i32()
    }

    pub fn decode_fl<S: Read>(self, source: S) -> Result<f32> {
        self.wrap(source).read_f32()
    }

    pub fn decode_fd<S: Read>(self, source: S) -> Result<f64> {
        self.wrap(source).read_f64()
    }
}

impl Default for BasicDecoder {
    fn default() -> Self {
        BasicDecoder::new(Endianness::Little)
    }
}

impl From<Endianness> for BasicDecoder {
    fn from(endianness: Endianness) -> Self {
        BasicDecoder::new(endianness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_byte_orders() {
        let data: &[u8] = &[0xC3, 0x3C, 0x33, 0xCC, 0x55, 0xAA, 0x55, 0xAA];
        let le = BasicDecoder::default();
        let be = BasicDecoder::from(Endianness::Big);

        assert_eq!(le.decode_us(data).unwrap(), 0x3CC3);
        assert_eq!(be.decode_us(data).unwrap(), 0xC33C);
        assert_eq!(le.decode_ul(data).unwrap(), 0xCC33_3CC3);
        assert_eq!(be.decode_ul(data).unwrap(), 0xC33C_33CC);
        assert!(le.is_little_endian());
        assert!(!be.is_little_endian());
    }

    #[test]
    fn read_into() {
        let data: &[u8] = &[0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00];
        let mut out = [0u16; 4];
        BasicDecoder::default().decode_us_into(data, &mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);

        let mut out = [0u32; 2];
        BasicDecoder::new(Endianness::Big)
            .decode_ul_into(data, &mut out)
            .unwrap();
        assert_eq!(out, [0x0100_0200, 0x0300_0400]);
    }

    #[test]
    fn short_source_fails() {
        let data: &[u8] = &[0x01, 0x02];
        assert!(BasicDecoder::default().decode_ul(data).is_err());
        assert!(BasicDecoder::default().decode_fd(data).is_err());
    }
}
