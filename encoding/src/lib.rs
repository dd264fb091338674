//! Encoding and decoding primitives for the dcmstream header scanner.
//!
//! This crate provides the small building blocks the scanner needs
//! to interpret an element value without a data dictionary:
//!
//! - [`decode`] reads fixed-width binary numbers from a byte slice
//!   in either byte order, tolerating short values;
//! - [`text`] extracts text values and parses the numbers they hold;
//! - [`transfer_syntax`] tells how a transfer syntax UID affects the rest
//!   of the stream.
//!
//! All decoding here works on in-memory byte slices.
//! A value which is too short for the requested read yields `None`.
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications)]

pub mod decode;
pub mod text;
pub mod transfer_syntax;

pub use byteordered::Endianness;
pub use decode::BasicDecoder;
pub use transfer_syntax::{classify, TransferSyntaxAction};
