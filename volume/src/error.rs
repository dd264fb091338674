use snafu::{Backtrace, Snafu};

/// An error which may occur while assembling volumes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The name does not end in `<3 digits>.<digits>[.dcm]`.
    #[snafu(display("Invalid slice file name '{}'", name))]
    InvalidFileName { name: String, backtrace: Backtrace },

    #[snafu(display("Could not read slice file '{}'", name))]
    ReadSlice {
        name: String,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The first slice does not say how large a slice is.
    #[snafu(display("Slice size of '{}' is unknown", name))]
    UnknownSliceSize { name: String, backtrace: Backtrace },

    /// The first slice does not say how many slices make a volume.
    #[snafu(display("Number of slices per volume of '{}' is unknown", name))]
    UnknownSliceCount { name: String, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
