//! Per-frame bookkeeping for enhanced multi-frame files.
//!
//! While scanning, each frame item leaves behind one [`FrameEntry`]:
//! its dimension index values, its position on disk,
//! and the parameters in effect when the item closed.
//! After the scan, the entries are sorted by dimension index
//! to recover the display order of the frames,
//! and one sample per packed volume is kept.

use crate::error::{FrameTableFullSnafu, Result};
use dcmstream_core::record::VolumeParameters;
use dcmstream_core::DiffusionVector;
use smallvec::SmallVec;

/// b-value recorded for an isotropic (derived) diffusion frame.
pub(crate) const ISOTROPIC_B_VALUE: f32 = 2000.;

/// Diffusion parameters collected while inside one frame item.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct DiffusionAccumulator {
    pub b_value: Option<f32>,
    pub direction: [f32; 3],
    /// the frame is a derived isotropic image
    pub isotropic: bool,
}

impl DiffusionAccumulator {
    /// Finish the current frame, returning its diffusion vector.
    ///
    /// The accumulator is left empty,
    /// so that nothing carries over into the next frame.
    pub fn take(&mut self) -> DiffusionVector {
        let vector = match self.b_value {
            None => DiffusionVector::NONE,
            Some(_) if self.isotropic => DiffusionVector {
                b_value: Some(ISOTROPIC_B_VALUE),
                direction: [0.; 3],
            },
            Some(b) if b == 0. => DiffusionVector {
                b_value: Some(0.),
                direction: [0.; 3],
            },
            Some(b) => DiffusionVector {
                b_value: Some(b),
                direction: self.direction,
            },
        };
        *self = DiffusionAccumulator::default();
        vector
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FrameEntry {
    pub dimensions: SmallVec<[u32; 8]>,
    /// order of the frame in the file
    pub disk_position: u32,
    pub parameters: VolumeParameters,
}

/// A growable table of frame entries with a fixed capacity.
#[derive(Debug, Clone)]
pub(crate) struct FrameTable {
    entries: Vec<FrameEntry>,
    capacity: usize,
}

impl FrameTable {
    pub fn new(capacity: usize) -> Self {
        FrameTable {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The most frames the table holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a frame, assigning it the next disk position.
    pub fn push(
        &mut self,
        dimensions: SmallVec<[u32; 8]>,
        parameters: VolumeParameters,
    ) -> Result<()> {
        if self.entries.len() >= self.capacity {
            return FrameTableFullSnafu {
                capacity: self.capacity,
            }
            .fail();
        }
        let disk_position = self.entries.len() as u32;
        self.entries.push(FrameEntry {
            dimensions,
            disk_position,
            parameters,
        });
        Ok(())
    }

    /// Sort the entries by dimension index values,
    /// comparing components in declared order.
    /// Frames with equal values keep their order on disk.
    ///
    /// Returns the disk position of each frame in sorted order.
    pub fn sort(&mut self) -> Vec<u32> {
        self.entries
            .sort_by(|a, b| a.dimensions.cmp(&b.dimensions));
        self.entries.iter().map(|e| e.disk_position).collect()
    }

    /// Pick one sample per volume:
    /// frame `first + i × slices` for volume `i`.
    pub fn volume_samples(&self, slices: usize, volumes: usize) -> Vec<VolumeParameters> {
        let first = if slices > 1 { 1 } else { 0 };
        (0..volumes)
            .map_while(|i| self.entries.get(first + i * slices))
            .map(|e| e.parameters.clone())
            .collect()
    }
}
