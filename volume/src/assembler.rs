//! Stacking of slice files into volumes as they arrive.
//!
//! A [`VolumeAssembler`] is pointed at the first slice of a series.
//! Every call to [`poll`](VolumeAssembler::poll) fetches the slices
//! of the current volume which were not available yet,
//! and hands out the volume once all of them are in.

use std::convert::TryFrom;
use crate::error::{ReadSliceSnafu, Result, UnknownSliceCountSnafu, UnknownSliceSizeSnafu};
use crate::name::SliceFileName;
use dcmstream_core::ImageRecord;
use dcmstream_parser::{read_header, ReadOptions};
use snafu::ResultExt;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, ErrorKind, Read, Seek, SeekFrom};
use std::path::PathBuf;
use tracing::{debug, info, trace};

/// Where slice files come from.
pub trait SliceSource {
    type Reader: Read + Seek;

    /// Open the slice file called `name`.
    ///
    /// Returns `Ok(None)` if the file does not exist yet.
    fn open(&mut self, name: &str) -> std::io::Result<Option<Self::Reader>>;
}

/// Slice files in a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        DirectorySource { dir: dir.into() }
    }
}

impl SliceSource for DirectorySource {
    type Reader = File;

    fn open(&mut self, name: &str) -> std::io::Result<Option<File>> {
        match File::open(self.dir.join(name)) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Slice files already transferred into memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        MemorySource::default()
    }

    /// Make a slice file available.
    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(name.into(), bytes);
    }
}

impl SliceSource for MemorySource {
    type Reader = Cursor<Vec<u8>>;

    fn open(&mut self, name: &str) -> std::io::Result<Option<Cursor<Vec<u8>>>> {
        Ok(self.files.get(name).cloned().map(Cursor::new))
    }
}

/// Shape of every volume of a series, taken from its first slice.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeLayout {
    /// bytes of one slice
    pub slice_bytes: usize,
    /// slices per volume
    pub slices: usize,
    /// header of the first slice of the series
    pub header: ImageRecord,
}

/// One complete volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// 1-based volume number
    pub index: u32,
    /// slice index of the first slice of the volume
    pub first_slice: u32,
    pub layout: VolumeLayout,
    /// slices stacked in reverse acquisition order
    pub data: Vec<u8>,
}

/// Assembles the slices of a real-time series into volumes.
#[derive(Debug)]
pub struct VolumeAssembler<S> {
    source: S,
    options: ReadOptions,
    name: SliceFileName,
    first_slice: u32,
    volume_index: u32,
    layout: Option<VolumeLayout>,
    buffer: Vec<u8>,
    ready: Vec<bool>,
}

impl<S> VolumeAssembler<S>
where
    S: SliceSource,
{
    /// Start assembling at the slice called `first`.
    pub fn new(source: S, first: SliceFileName, options: ReadOptions) -> Self {
        VolumeAssembler {
            source,
            options,
            first_slice: first.index(),
            name: first,
            volume_index: 1,
            layout: None,
            buffer: Vec::new(),
            ready: Vec::new(),
        }
    }

    /// The layout, once the first slice was read.
    pub fn layout(&self) -> Option<&VolumeLayout> {
        self.layout.as_ref()
    }

    /// Index of the first slice of the volume being assembled.
    pub fn first_slice(&self) -> u32 {
        self.first_slice
    }

    /// Number of the volume being assembled.
    pub fn volume_index(&self) -> u32 {
        self.volume_index
    }

    /// Number of slices of the current volume already in place.
    pub fn slices_ready(&self) -> usize {
        self.ready.iter().filter(|r| **r).count()
    }

    /// Read the first slice of the series to learn the volume layout.
    ///
    /// Returns `Ok(false)` if the first slice is not available yet.
    pub fn prepare(&mut self) -> Result<bool> {
        let name = self.name.with_index(self.first_slice).to_string();
        let reader = match self.source.open(&name).context(ReadSliceSnafu { name: &name })? {
            Some(reader) => reader,
            None => return Ok(false),
        };
        let header = read_header(reader, &self.options).record;
        let slice_bytes = header
            .slice_bytes()
            .filter(|n| *n > 0)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| UnknownSliceSizeSnafu { name: &name }.build())?;
        let slices = header
            .geometry
            .locations_in_acquisition
            .filter(|n| *n > 0)
            .ok_or_else(|| UnknownSliceCountSnafu { name: &name }.build())?
            as usize;
        info!(
            "Slice size={} bytes, {} slices per volume",
            slice_bytes, slices
        );

        self.buffer = vec![0; slice_bytes * slices];
        self.ready = vec![false; slices];
        self.layout = Some(VolumeLayout {
            slice_bytes,
            slices,
            header,
        });
        Ok(true)
    }

    /// Fetch the missing slices of the current volume.
    ///
    /// Returns the volume once all of its slices are in place,
    /// and moves on to the next one.
    pub fn poll(&mut self) -> Result<Option<Volume>> {
        if self.layout.is_none() {
            self.prepare()?;
            return Ok(None);
        }
        let (slice_bytes, slices) = match &self.layout {
            Some(layout) => (layout.slice_bytes, layout.slices),
            None => return Ok(None),
        };

        for t in 0..slices {
            if self.ready[t] {
                continue;
            }
            let name = self.name.with_index(self.first_slice + t as u32).to_string();
            let slice = match self.source.open(&name).context(ReadSliceSnafu { name: &name })? {
                Some(reader) => read_slice(reader, slice_bytes, &self.options),
                None => None,
            };
            match slice {
                Some(bytes) => {
                    let at = (slices - t - 1) * slice_bytes;
                    self.buffer[at..at + slice_bytes].copy_from_slice(&bytes);
                    self.ready[t] = true;
                    trace!("Slice {} of volume {} in place", t + 1, self.volume_index);
                }
                None => trace!("Slice {} not available yet", name),
            }
        }

        if self.ready.iter().any(|r| !*r) {
            return Ok(None);
        }
        Ok(self.take_volume())
    }

    fn take_volume(&mut self) -> Option<Volume> {
        let layout = self.layout.clone()?;
        let volume = Volume {
            index: self.volume_index,
            first_slice: self.first_slice,
            data: std::mem::replace(&mut self.buffer, vec![0; layout.slice_bytes * layout.slices]),
            layout,
        };
        info!(
            "Volume {} complete, first slice {}",
            volume.index, volume.first_slice
        );
        self.first_slice += volume.layout.slices as u32;
        self.volume_index += 1;
        self.ready.iter_mut().for_each(|r| *r = false);
        Some(volume)
    }
}

/// Read the pixel payload of one slice.
///
/// Returns `None` if the file is shorter than one slice,
/// which is the case while it is still being written.
fn read_slice<R>(mut reader: R, slice_bytes: usize, options: &ReadOptions) -> Option<Vec<u8>>
where
    R: Read + Seek,
{
    let header = read_header(&mut reader, options);
    let offset = match header.record.pixel.data {
        Some(data) => data.offset,
        None => {
            let file_len = reader.seek(SeekFrom::End(0)).ok()?;
            let offset = file_len.checked_sub(slice_bytes as u64)?;
            debug!("Pixel data not located, reading the last {} bytes", slice_bytes);
            offset
        }
    };
    let mut bytes = vec![0; slice_bytes];
    reader.seek(SeekFrom::Start(offset)).ok()?;
    reader.read_exact(&mut bytes).ok()?;
    Some(bytes)
}
