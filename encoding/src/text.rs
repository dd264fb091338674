//! Extraction of text values and the numbers they hold.
//!
//! Text element values in the header are only ever needed as short,
//! display-friendly strings or as a leading number.
//! No character repertoire conversion is attempted:
//! bytes which are not valid UTF-8 are replaced.
//!
//! The number parsers read the longest numeric prefix of a value,
//! ignoring whatever follows it, so that `"3.5\\1.0"` reads as `3.5`
//! and `"12 slices"` reads as `12`.

use smallvec::SmallVec;

/// Maximum length of a regular text value kept in the record.
pub const MAX_TEXT_LEN: usize = 64;

/// Maximum length of a long text value kept in the record,
/// such as image comments.
pub const MAX_LONG_TEXT_LEN: usize = 256;

/// The separator between values of a multi-valued text element.
pub const VALUE_SEPARATOR: char = '\\';

/// Extract a text value of at most [`MAX_TEXT_LEN`] bytes.
///
/// The value ends at the first NUL byte, if any,
/// and surrounding padding is trimmed.
///
/// ```
/// # use dcmstream_encoding::text::fixed_str;
/// assert_eq!(fixed_str(b"ORIGINAL\\PRIMARY "), "ORIGINAL\\PRIMARY");
/// assert_eq!(fixed_str(b"1.2.3\0"), "1.2.3");
/// ```
pub fn fixed_str(bytes: &[u8]) -> String {
    bounded_str(bytes, MAX_TEXT_LEN)
}

/// Extract a text value of at most [`MAX_LONG_TEXT_LEN`] bytes.
pub fn long_str(bytes: &[u8]) -> String {
    bounded_str(bytes, MAX_LONG_TEXT_LEN)
}

fn bounded_str(bytes: &[u8], max: usize) -> String {
    let end = bytes
        .iter()
        .position(|b| *b == 0)
        .unwrap_or(bytes.len())
        .min(max);
    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
}

/// Parse the leading integer of a text value.
///
/// Leading whitespace and an optional sign are accepted.
/// Returns `None` if the value does not start with a number.
///
/// ```
/// # use dcmstream_encoding::text::int_prefix;
/// assert_eq!(int_prefix(" 42 "), Some(42));
/// assert_eq!(int_prefix("-7\\3"), Some(-7));
/// assert_eq!(int_prefix("none"), None);
/// ```
pub fn int_prefix(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    text[..end].parse::<i64>().ok().map(|v| v as i32)
}

/// Parse the leading decimal number of a text value.
///
/// Accepts the decimal string forms found in DS values,
/// including an optional fraction and exponent.
/// Returns `None` if the value does not start with a number.
///
/// ```
/// # use dcmstream_encoding::text::float_prefix;
/// assert_eq!(float_prefix("3.5\\1.0"), Some(3.5));
/// assert_eq!(float_prefix(" -1e3"), Some(-1000.0));
/// assert_eq!(float_prefix(".25"), Some(0.25));
/// assert_eq!(float_prefix("abc"), None);
/// ```
pub fn float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    // exponent, only if followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    text[..end].parse::<f64>().ok()
}

/// Parse exactly `count` backslash separated decimal values.
///
/// Returns `None` if fewer values are present
/// or any of the first `count` values is not a number.
/// Extra values are ignored.
///
/// ```
/// # use dcmstream_encoding::text::multi_float;
/// let v = multi_float("0.5\\0.75", 2).unwrap();
/// assert_eq!(v.as_slice(), &[0.5, 0.75]);
/// assert!(multi_float("0.5", 2).is_none());
/// ```
pub fn multi_float(text: &str, count: usize) -> Option<SmallVec<[f32; 6]>> {
    let values: SmallVec<[f32; 6]> = text
        .split(VALUE_SEPARATOR)
        .take(count)
        .map(|v| float_prefix(v).map(|f| f as f32))
        .collect::<Option<_>>()?;
    if values.len() == count {
        Some(values)
    } else {
        None
    }
}

/// Parse the run of digits immediately following the first
/// occurrence of `key` in `text`.
///
/// ```
/// # use dcmstream_encoding::text::digits_after_key;
/// assert_eq!(digits_after_key("p2 s3", 'p'), Some(2));
/// assert_eq!(digits_after_key("p2 s3", 's'), Some(3));
/// assert_eq!(digits_after_key("p2", 's'), None);
/// ```
pub fn digits_after_key(text: &str, key: char) -> Option<u32> {
    let start = text.find(key)? + key.len_utf8();
    let rest = &text[start..];
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len == 0 {
        return None;
    }
    rest[..len].parse().ok()
}

/// Case insensitive check for whether `text` contains `needle`.
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_ascii_uppercase()
        .contains(&needle.to_ascii_uppercase())
}
