#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmstream, containing the data types
//! shared by the header scanner and its consumers.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   tags, value representations and value lengths.
//! - [`kind`] holds the classification enumerations
//!   (manufacturer, modality, compression scheme, and so on).
//! - [`record`] defines [`ImageRecord`],
//!   the metadata record filled in by a header scan.
//!
//! [`header`]: ./header/index.html
//! [`kind`]: ./kind/index.html
//! [`record`]: ./record/index.html

pub mod header;
pub mod kind;
pub mod record;

pub use header::{ElementNumber, GroupNumber, Tag, VR};
pub use kind::{
    AcquisitionType, CompressionScheme, Manufacturer, Modality, PhaseEncodingPolarity,
    SliceOrientation,
};
pub use record::{ByteRange, DiffusionVector, ImageRecord, VolumeParameters, VolumeShape};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
