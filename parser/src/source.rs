//! Segmented access to a seekable byte source.
//!
//! The header of a file is usually a small fraction of it,
//! so the source is only ever read one capped segment at a time.
//! A segment is reloaded whenever a requested byte range
//! is not fully contained in the current one.

use crate::error::{ReadSegmentSnafu, Result};
use crate::options::ReadOptions;
use snafu::ResultExt;
use std::io::{Read, Seek, SeekFrom};

#[derive(Debug)]
pub(crate) struct SegmentedSource<R> {
    source: R,
    file_len: u64,
    chunk_size: u64,
    /// absolute offset of `segment[0]`
    segment_start: u64,
    segment: Vec<u8>,
}

impl<R> SegmentedSource<R>
where
    R: Read + Seek,
{
    pub fn new(mut source: R, options: &ReadOptions) -> Result<Self> {
        let file_len = source
            .seek(SeekFrom::End(0))
            .context(ReadSegmentSnafu { offset: 0u64, len: 0u64 })?;
        let chunk_size = if options.get_whole_file() {
            file_len.max(1)
        } else {
            options.get_chunk_size() as u64
        };
        Ok(SegmentedSource {
            source,
            file_len,
            chunk_size,
            segment_start: 0,
            segment: Vec::new(),
        })
    }

    #[inline]
    pub fn file_len(&self) -> u64 {
        self.file_len
    }

    #[inline]
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    fn is_loaded(&self, offset: u64, len: u64) -> bool {
        offset >= self.segment_start
            && offset + len <= self.segment_start + self.segment.len() as u64
    }

    /// Make sure that `len` bytes starting at `offset` are loaded.
    ///
    /// Returns `Ok(false)` if the range extends past the end of the source.
    pub fn ensure(&mut self, offset: u64, len: u64) -> Result<bool> {
        if offset.saturating_add(len) > self.file_len {
            return Ok(false);
        }
        if self.is_loaded(offset, len) {
            return Ok(true);
        }
        let end = (offset + self.chunk_size.max(len)).min(self.file_len);
        let seg_len = end - offset;
        self.source
            .seek(SeekFrom::Start(offset))
            .context(ReadSegmentSnafu { offset, len: seg_len })?;
        self.segment.clear();
        self.segment.resize(seg_len as usize, 0);
        if let Err(e) = self.source.read_exact(&mut self.segment) {
            self.segment.clear();
            return Err(e).context(ReadSegmentSnafu { offset, len: seg_len });
        }
        self.segment_start = offset;
        tracing::trace!("loaded segment of {} bytes at {}", seg_len, offset);
        Ok(true)
    }

    /// Borrow a range previously made available with [`ensure`](Self::ensure).
    pub fn slice(&self, offset: u64, len: u64) -> Option<&[u8]> {
        if !self.is_loaded(offset, len) {
            return None;
        }
        let start = (offset - self.segment_start) as usize;
        self.segment.get(start..start + len as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn data(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn reloads_segments_on_demand() {
        let bytes = data(2000);
        let options = ReadOptions::new().chunk_size(256);
        let mut source = SegmentedSource::new(Cursor::new(&bytes), &options).unwrap();
        assert_eq!(source.file_len(), 2000);

        assert!(source.ensure(0, 16).unwrap());
        assert_eq!(source.slice(0, 4), Some(&bytes[0..4]));
        assert_eq!(source.slice(300, 4), None);

        assert!(source.ensure(300, 4).unwrap());
        assert_eq!(source.slice(300, 4), Some(&bytes[300..304]));
        // the first segment is gone
        assert_eq!(source.slice(0, 4), None);
    }

    #[test]
    fn large_requests_extend_the_segment() {
        let bytes = data(2000);
        let options = ReadOptions::new().chunk_size(256);
        let mut source = SegmentedSource::new(Cursor::new(&bytes), &options).unwrap();
        assert!(source.ensure(100, 1000).unwrap());
        assert_eq!(source.slice(100, 1000), Some(&bytes[100..1100]));
    }

    #[test]
    fn past_the_end_is_not_an_error() {
        let bytes = data(300);
        let options = ReadOptions::new();
        let mut source = SegmentedSource::new(Cursor::new(&bytes), &options).unwrap();
        assert!(!source.ensure(290, 20).unwrap());
        assert!(source.ensure(290, 10).unwrap());
        assert_eq!(source.slice(290, 10), Some(&bytes[290..300]));
    }

    #[test]
    fn whole_file_mode_loads_everything() {
        let bytes = data(5000);
        let options = ReadOptions::new().chunk_size(256).whole_file(true);
        let mut source = SegmentedSource::new(Cursor::new(&bytes), &options).unwrap();
        assert!(source.ensure(0, 1).unwrap());
        assert_eq!(source.slice(4990, 10), Some(&bytes[4990..5000]));
    }
}
