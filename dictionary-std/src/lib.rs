//! This crate holds the attribute and transfer syntax constants
//! used by the dcmstream header scanner.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which map an attribute to its tag at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], for every attribute the scanner recognizes,
//!   including vendor-private ones
//! - [`uids`], for the transfer syntaxes the scanner can classify
//!
//! ## Run-time registry
//!
//! - [`data_element`] indexes the same attributes by tag and by alias,
//!   so that diagnostics can name the element being scanned.
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{alias_of, registry, DictionaryEntry, ScannerDictionaryRegistry};
