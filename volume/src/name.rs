//! Slice file names of a real-time series.
//!
//! Scanners exporting slices as they are reconstructed
//! name them `<template><thousands>.<units>[.dcm]`,
//! where `<thousands>` is exactly three digits.
//! The slice index is `thousands × 1000 + units`.

use crate::error::{InvalidFileNameSnafu, Result};
use std::fmt;
use std::str::FromStr;

const EXTENSION: &str = ".dcm";
const THOUSANDS_DIGITS: usize = 3;

/// The name of one slice file, split into its template and index.
///
/// # Example
///
/// ```
/// # use dcmstream_volume::SliceFileName;
/// let name: SliceFileName = "i1234s001.15.dcm".parse()?;
/// assert_eq!(name.template(), "i1234s");
/// assert_eq!(name.index(), 1015);
/// assert_eq!(name.with_index(2001).to_string(), "i1234s002.1.dcm");
/// # Ok::<(), dcmstream_volume::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SliceFileName {
    template: String,
    index: u32,
    extension: bool,
}

impl SliceFileName {
    /// Split a file name into its parts.
    /// The `.dcm` extension is optional and matched in any case.
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = || InvalidFileNameSnafu { name }.build();

        let (stem, extension) = match name.len().checked_sub(EXTENSION.len()) {
            Some(at)
                if name.is_char_boundary(at)
                    && name[at..].eq_ignore_ascii_case(EXTENSION) =>
            {
                (&name[..at], true)
            }
            _ => (name, false),
        };
        let point = stem.rfind('.').ok_or_else(invalid)?;
        let units = &stem[point + 1..];
        let head = &stem[..point];
        let split = head
            .len()
            .checked_sub(THOUSANDS_DIGITS)
            .filter(|at| head.is_char_boundary(*at))
            .ok_or_else(invalid)?;
        let thousands = &head[split..];

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(thousands) || !all_digits(units) {
            return Err(invalid());
        }
        let thousands: u32 = thousands.parse().map_err(|_| invalid())?;
        let units: u32 = units.parse().map_err(|_| invalid())?;
        let index = thousands
            .checked_mul(1000)
            .and_then(|t| t.checked_add(units))
            .ok_or_else(invalid)?;

        Ok(SliceFileName {
            template: head[..split].to_string(),
            index,
            extension,
        })
    }

    /// Everything before the index digits.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Whether the name carries the `.dcm` extension.
    pub fn has_extension(&self) -> bool {
        self.extension
    }

    /// The name of another slice of the same series.
    pub fn with_index(&self, index: u32) -> SliceFileName {
        SliceFileName {
            template: self.template.clone(),
            index,
            extension: self.extension,
        }
    }
}

impl fmt::Display for SliceFileName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{:03}.{}",
            self.template,
            self.index / 1000,
            self.index % 1000
        )?;
        if self.extension {
            f.write_str(EXTENSION)?;
        }
        Ok(())
    }
}

impl FromStr for SliceFileName {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        SliceFileName::parse(s)
    }
}
