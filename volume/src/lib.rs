#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! Real-time assembly of DICOM slice files into volumes.
//!
//! Some scanners export each slice as a separate file
//! as soon as it is reconstructed.
//! This crate follows such a series by file name,
//! scans each slice header with [`dcmstream_parser`]
//! to locate its pixel data,
//! and stacks the slices of each volume in memory.
//!
//! Writing the assembled volumes to disk is left to the caller.
//!
//! ```no_run
//! use dcmstream_parser::ReadOptions;
//! use dcmstream_volume::{DirectorySource, SliceFileName, VolumeAssembler};
//!
//! let first: SliceFileName = "s1024i001.1.dcm".parse()?;
//! let source = DirectorySource::new("/data/realtime/series_5");
//! let mut assembler = VolumeAssembler::new(source, first, ReadOptions::default());
//! loop {
//!     if let Some(volume) = assembler.poll()? {
//!         println!("volume {}: {} bytes", volume.index, volume.data.len());
//!     }
//! #   break;
//! }
//! # Ok::<(), dcmstream_volume::Error>(())
//! ```

pub mod assembler;
pub mod error;
pub mod name;

pub use assembler::{
    DirectorySource, MemorySource, SliceSource, Volume, VolumeAssembler, VolumeLayout,
};
pub use error::{Error, Result};
pub use name::SliceFileName;
