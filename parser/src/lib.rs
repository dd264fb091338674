#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! Incremental DICOM header scanner.
//!
//! This crate reads the header of a single DICOM file,
//! in a single forward pass and with bounded memory,
//! and produces an [`ImageRecord`]:
//! the metadata needed to place the file's pixels into a volume,
//! plus the byte offset at which those pixels start.
//! It never decodes pixel data.
//!
//! The scan is tolerant: malformed input never panics
//! and never aborts the scan with an error.
//! Instead, the returned [`ParsedHeader`] records why the scan stopped
//! and whether the record is usable.
//!
//! # Example
//!
//! ```no_run
//! use dcmstream_parser::{read_header_from_path, ReadOptions};
//!
//! let header = read_header_from_path("slice_0001.dcm", &ReadOptions::default())?;
//! if header.is_valid() {
//!     let record = &header.record;
//!     println!(
//!         "{}x{} pixels at {:?}",
//!         record.geometry.columns.unwrap_or(0),
//!         record.geometry.rows.unwrap_or(0),
//!         record.pixel.data,
//!     );
//! }
//! # Ok::<(), dcmstream_parser::Error>(())
//! ```

mod dispatch;
mod element;
mod fields;
mod frames;
mod normalize;
mod scan;
mod source;
mod state;

pub mod error;
pub mod nesting;
pub mod options;
pub mod sniff;
pub mod switch;
pub mod vendor;

pub use dcmstream_core::ImageRecord;
pub use error::{Error, Result};
pub use options::ReadOptions;
pub use sniff::Sniff;
pub use vendor::{phase_encoding_polarity, CsaImageHeader};

use crate::error::{NotDicomSnafu, OpenFileSnafu, UnusableSnafu};
use crate::source::SegmentedSource;
use crate::state::ScanState;
use snafu::ResultExt;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, warn};

/// Why a scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Termination {
    /// The pixel data element was reached.
    PixelData,
    /// The end of the source was reached before the pixel data.
    EndOfStream,
    /// The source does not look like DICOM.
    NotRecognized,
    /// The source could not be read.
    ReadFailure,
    /// The transfer syntax cannot be scanned or its pixels cannot be decoded.
    UnsupportedTransferSyntax,
    /// Encapsulated pixel data split over more than one fragment.
    MultipleFragments,
    /// The file holds a waveform rather than an image.
    NotAnImage,
    /// A configured resource bound was hit.
    SafetyBound,
}

/// The outcome of a header scan.
#[derive(Debug)]
pub struct ParsedHeader {
    /// Metadata collected before the scan stopped.
    pub record: ImageRecord,
    pub termination: Termination,
    /// Non-fatal problems met along the way.
    pub issues: Vec<Error>,
}

impl ParsedHeader {
    /// Whether pixel data can be extracted from the file.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.record.is_valid
    }

    /// Take the record if it is usable.
    pub fn into_result(self) -> Result<ImageRecord> {
        if self.record.is_valid {
            Ok(self.record)
        } else {
            UnusableSnafu {
                termination: self.termination,
            }
            .fail()
        }
    }
}

/// Scan the header of a DICOM file from a seekable byte source.
///
/// The source is read in segments of at most
/// [`chunk_size`](ReadOptions::chunk_size) bytes,
/// so only the header region is ever loaded.
pub fn read_header<R>(reader: R, options: &ReadOptions) -> ParsedHeader
where
    R: Read + Seek,
{
    let mut source = match SegmentedSource::new(reader, options) {
        Ok(source) => source,
        Err(e) => {
            warn!("{}", e);
            return ParsedHeader {
                record: ImageRecord::default(),
                termination: Termination::ReadFailure,
                issues: vec![e],
            };
        }
    };
    let file_len = source.file_len();

    let head_len = file_len.min(sniff::SNIFF_LEN as u64);
    let head = match source.ensure(0, head_len) {
        Ok(_) => source.slice(0, head_len).unwrap_or_default(),
        Err(e) => {
            warn!("{}", e);
            return ParsedHeader {
                record: ImageRecord::default(),
                termination: Termination::ReadFailure,
                issues: vec![e],
            };
        }
    };
    let kind = sniff::sniff(head);
    if !kind.is_recognized() {
        debug!("Not a DICOM file ({} bytes)", file_len);
        return ParsedHeader {
            record: ImageRecord::default(),
            termination: Termination::NotRecognized,
            issues: vec![NotDicomSnafu { len: file_len }.build()],
        };
    }
    if kind == Sniff::StandardPrefixed {
        let start = sniff::PREFIXED_START as usize;
        if head.get(start..start + 4) != Some(&[0x02, 0x00, 0x00, 0x00][..]) {
            warn!("File meta information does not start with (0002,0000)");
        }
    }

    let mut state = ScanState::new(options, file_len, kind == Sniff::StandardPrefixed);
    scan::scan(&mut source, &mut state, kind.start_offset(), options);
    normalize::normalize(&mut state);

    let termination = state.stop.unwrap_or(Termination::EndOfStream);
    debug!(
        "Scan ended with {:?}, valid: {}",
        termination, state.record.is_valid
    );
    ParsedHeader {
        record: state.record,
        termination,
        issues: state.issues,
    }
}

/// Scan the header of a DICOM file held in memory.
pub fn read_header_from_bytes(bytes: &[u8], options: &ReadOptions) -> ParsedHeader {
    read_header(Cursor::new(bytes), options)
}

/// Scan the header of the DICOM file at `path`.
///
/// Fails only if the file cannot be opened.
pub fn read_header_from_path<P>(path: P, options: &ReadOptions) -> Result<ParsedHeader>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).context(OpenFileSnafu { path })?;
    Ok(read_header(file, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_buffers_are_not_recognized() {
        for len in [0, 1, 100, 255] {
            let header = read_header_from_bytes(&vec![0u8; len], &ReadOptions::default());
            assert_eq!(header.termination, Termination::NotRecognized);
            assert!(!header.is_valid());
            assert!(matches!(header.issues[0], Error::NotDicom { .. }));
        }
    }

    #[test]
    fn unusable_record_into_result() {
        let header = read_header_from_bytes(&[0xFF; 512], &ReadOptions::default());
        let err = header.into_result().unwrap_err();
        assert!(matches!(
            err,
            Error::Unusable {
                termination: Termination::NotRecognized,
                ..
            }
        ));
    }

    #[test]
    fn missing_file() {
        let err = read_header_from_path("/nonexistent/slice.dcm", &ReadOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::OpenFile { .. }));
    }
}
