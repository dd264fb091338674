//! Configuration of a header scan.

/// Default size of one buffered segment, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1_000_000;

/// A builder type for the options of a header scan.
///
/// # Example
///
/// ```
/// # use dcmstream_parser::ReadOptions;
/// let options = ReadOptions::new()
///     .chunk_size(64 * 1024)
///     .accept_jpeg2000(true);
/// assert_eq!(options.get_chunk_size(), 64 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ReadOptions {
    chunk_size: usize,
    whole_file: bool,
    max_nesting_depth: usize,
    max_frames: usize,
    max_dimensions: usize,
    max_volumes: usize,
    accept_jpeg2000: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            chunk_size: DEFAULT_CHUNK_SIZE,
            whole_file: false,
            max_nesting_depth: 128,
            max_frames: 65_535,
            max_dimensions: 8,
            max_volumes: 18_000,
            accept_jpeg2000: false,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        ReadOptions::default()
    }

    /// Set the size of each segment read from the source.
    ///
    /// Values below 256 bytes are raised to 256.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(256);
        self
    }

    /// Set whether to load the whole file in a single segment.
    pub fn whole_file(mut self, whole_file: bool) -> Self {
        self.whole_file = whole_file;
        self
    }

    /// Set the maximum number of simultaneously open items.
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Set the capacity of the per-frame dimension table.
    pub fn max_frames(mut self, frames: usize) -> Self {
        self.max_frames = frames;
        self
    }

    /// Set the number of dimension index components kept per frame.
    pub fn max_dimensions(mut self, dimensions: usize) -> Self {
        self.max_dimensions = dimensions.max(1);
        self
    }

    /// Set the maximum number of volumes for which
    /// per-volume parameters are derived.
    pub fn max_volumes(mut self, volumes: usize) -> Self {
        self.max_volumes = volumes;
        self
    }

    /// Set whether JPEG 2000 encapsulated files are accepted.
    /// When not accepted, scanning stops at the transfer syntax.
    pub fn accept_jpeg2000(mut self, accept: bool) -> Self {
        self.accept_jpeg2000 = accept;
        self
    }

    pub fn get_chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn get_whole_file(&self) -> bool {
        self.whole_file
    }

    pub fn get_max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    pub fn get_max_frames(&self) -> usize {
        self.max_frames
    }

    pub fn get_max_dimensions(&self) -> usize {
        self.max_dimensions
    }

    pub fn get_max_volumes(&self) -> usize {
        self.max_volumes
    }

    pub fn get_accept_jpeg2000(&self) -> bool {
        self.accept_jpeg2000
    }
}
