//! Decoding of binary element values.
//!
//! [`BasicDecoder`] reads primitive numbers from any byte source
//! in a byte order chosen at run-time.
//! The free functions in this module build on it to read element values
//! held in a byte slice. They are forgiving by construction:
//! a value shorter than the requested read yields `None`,
//! and the caller decides what an absent value means.

pub use self::basic::BasicDecoder;
use smallvec::SmallVec;

pub mod basic;

/// Read an unsigned 16-bit value from the start of `bytes`.
pub fn u16_value(bytes: &[u8], decoder: BasicDecoder) -> Option<u16> {
    decoder.decode_us(bytes).ok()
}

/// Read an unsigned 32-bit value from the start of `bytes`.
pub fn u32_value(bytes: &[u8], decoder: BasicDecoder) -> Option<u32> {
    decoder.decode_ul(bytes).ok()
}

/// Read a signed 32-bit value from the start of `bytes`.
pub fn i32_value(bytes: &[u8], decoder: BasicDecoder) -> Option<i32> {
    decoder.decode_sl(bytes).ok()
}

/// Read a single precision float from the start of `bytes`.
pub fn f32_value(bytes: &[u8], decoder: BasicDecoder) -> Option<f32> {
    decoder.decode_fl(bytes).ok()
}

/// Read a double precision float from the start of `bytes`.
pub fn f64_value(bytes: &[u8], decoder: BasicDecoder) -> Option<f64> {
    decoder.decode_fd(bytes).ok()
}

/// Read a binary integer whose width is given by the value length.
///
/// Values of two or three bytes are read as an unsigned short,
/// values of four bytes or more as a signed long.
/// Anything shorter than two bytes is absent.
///
/// ```
/// # use dcmstream_encoding::decode::int_value;
/// # use dcmstream_encoding::BasicDecoder;
/// let le = BasicDecoder::default();
/// assert_eq!(int_value(&[0x00, 0x02], le), Some(512));
/// assert_eq!(int_value(&[0xFF, 0xFF, 0xFF, 0xFF], le), Some(-1));
/// assert_eq!(int_value(&[0x07], le), None);
/// ```
pub fn int_value(bytes: &[u8], decoder: BasicDecoder) -> Option<i32> {
    match bytes.len() {
        0 | 1 => None,
        2 | 3 => u16_value(bytes, decoder).map(i32::from),
        _ => i32_value(bytes, decoder),
    }
}

/// Read a float whose precision is given by the value length:
/// single precision below eight bytes, double precision otherwise.
pub fn float_or_double(bytes: &[u8], decoder: BasicDecoder) -> Option<f64> {
    if bytes.len() < 8 {
        f32_value(bytes, decoder).map(f64::from)
    } else {
        f64_value(bytes, decoder)
    }
}

/// Read `count` floats packed in `bytes`,
/// each taking an equal share of the value length.
///
/// The share decides the precision of each value
/// as in [`float_or_double`].
pub fn multi_float_or_double(
    bytes: &[u8],
    count: usize,
    decoder: BasicDecoder,
) -> Option<SmallVec<[f64; 4]>> {
    if count == 0 {
        return None;
    }
    let width = bytes.len() / count;
    if width < 4 {
        return None;
    }
    bytes
        .chunks_exact(width)
        .take(count)
        .map(|chunk| float_or_double(chunk, decoder))
        .collect()
}

/// Read `count` unsigned shorts from the start of `bytes`.
pub fn multi_u16(bytes: &[u8], count: usize, decoder: BasicDecoder) -> Option<SmallVec<[u16; 4]>> {
    let mut out: SmallVec<[u16; 4]> = SmallVec::from_elem(0, count);
    decoder.decode_us_into(bytes, &mut out).ok()?;
    Some(out)
}

/// Read `count` unsigned longs from the start of `bytes`.
pub fn multi_u32(bytes: &[u8], count: usize, decoder: BasicDecoder) -> Option<SmallVec<[u32; 8]>> {
    let mut out: SmallVec<[u32; 8]> = SmallVec::from_elem(0, count);
    decoder.decode_ul_into(bytes, &mut out).ok()?;
    Some(out)
}
