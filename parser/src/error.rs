//! Error types of the header scanner.

use crate::Termination;
use snafu::{Backtrace, Snafu};
use std::path::PathBuf;

/// An error which may occur while scanning a DICOM header.
///
/// Only [`OpenFile`](Error::OpenFile) is ever returned directly by the
/// `read_header*` functions.
/// The structural variants are collected as non-fatal issues
/// in [`ParsedHeader::issues`](crate::ParsedHeader::issues),
/// and [`Unusable`](Error::Unusable) is produced by
/// [`ParsedHeader::into_result`](crate::ParsedHeader::into_result).
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The source is too small or carries no recognizable signature.
    #[snafu(display("Not a DICOM file ({} bytes)", len))]
    NotDicom { len: u64, backtrace: Backtrace },

    #[snafu(display("Could not open file '{}'", path.display()))]
    OpenFile {
        path: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    #[snafu(display("Could not read {} bytes at offset {}", len, offset))]
    ReadSegment {
        offset: u64,
        len: u64,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// More nested items were opened than the configured bound.
    #[snafu(display("Nesting depth {} exceeds the supported bound", depth))]
    NestingOverflow { depth: usize },

    /// The per-frame dimension table is full.
    #[snafu(display("Too many frames to track dimensions, only up to {} are supported", capacity))]
    FrameTableFull { capacity: usize },

    /// A dimension index value carries more components than are kept.
    #[snafu(display("{} is too many dimensions, only up to {} are supported", count, max))]
    TooManyDimensions { count: usize, max: usize },

    /// The scan ended without locating usable pixel data.
    #[snafu(display("No usable pixel data ({:?})", termination))]
    Unusable {
        termination: Termination,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
