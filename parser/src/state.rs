//! Mutable state of one header scan.

use crate::error::Error;
use crate::frames::{DiffusionAccumulator, FrameTable};
use crate::options::ReadOptions;
use crate::switch::SyntaxSwitch;
use crate::Termination;
use dcmstream_core::{ByteRange, ImageRecord, Manufacturer};
use dcmstream_encoding::BasicDecoder;
use smallvec::SmallVec;

/// Values which change from frame to frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct FrameState {
    pub echo_time: Option<f32>,
    pub phase: bool,
    pub real: bool,
    pub imaginary: bool,
    pub magnitude: bool,
    /// last public image position
    pub position: Option<[f32; 3]>,
    /// last image position inside the Philips private per-frame sequence
    pub private_position: Option<[f32; 3]>,
}

/// Philips enhanced bookkeeping.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct PhilipsState {
    /// depth at which the MR echo sequence was entered
    pub echo_watermark: Option<usize>,
    pub in_stack_position: u32,
    pub max_in_stack_position: u32,
    pub position_start: Option<[f32; 3]>,
    pub position_end: Option<[f32; 3]>,
    /// (2001,1018)
    pub locations: Option<u32>,
    /// (2001,1081)
    pub dynamic_scans: Option<i32>,
}

/// Everything the dispatcher reads and writes while scanning.
///
/// Owned by one scan, never shared.
#[derive(Debug)]
pub(crate) struct ScanState {
    pub record: ImageRecord,
    pub decoder: BasicDecoder,
    pub explicit_vr: bool,
    pub switch: SyntaxSwitch,
    pub accept_jpeg2000: bool,
    pub max_dimensions: usize,
    pub max_volumes: usize,
    pub file_len: u64,
    /// current nesting depth
    pub depth: usize,

    /// inside an icon or thumbnail sequence
    pub icon: bool,
    /// inside the Philips private per-frame sequence
    pub philips_per_frame: bool,
    /// inside encapsulated pixel data
    pub encapsulated: bool,
    /// the handler asks to scan the contents of the current element
    pub descend: bool,
    pub stop: Option<Termination>,

    pub pixel_element_start: Option<u64>,
    pub fragments: usize,
    pub first_fragment: Option<ByteRange>,

    pub orientation_read: bool,
    pub positions_seen: u32,
    pub frame: FrameState,
    pub diffusion: DiffusionAccumulator,
    /// dimension index values waiting for their frame item to close
    pub dimension_values: Option<SmallVec<[u32; 8]>>,
    pub frames: FrameTable,
    pub philips: PhilipsState,

    pub images_in_acquisition: Option<i32>,
    pub ge_locations: Option<i32>,
    pub pet_image_index: Option<i32>,
    pub mosaic_images: Option<i32>,
    pub imapat_multiband: Option<u32>,
    pub philips_b_value_number: Option<i32>,

    pub issues: Vec<Error>,
}

impl ScanState {
    pub fn new(options: &ReadOptions, file_len: u64, explicit_vr: bool) -> Self {
        let mut record = ImageRecord::default();
        record.encoding.explicit_vr = explicit_vr;
        ScanState {
            record,
            decoder: BasicDecoder::default(),
            explicit_vr,
            switch: SyntaxSwitch::Normal,
            accept_jpeg2000: options.get_accept_jpeg2000(),
            max_dimensions: options.get_max_dimensions(),
            max_volumes: options.get_max_volumes(),
            file_len,
            depth: 0,
            icon: false,
            philips_per_frame: false,
            encapsulated: false,
            descend: false,
            stop: None,
            pixel_element_start: None,
            fragments: 0,
            first_fragment: None,
            orientation_read: false,
            positions_seen: 0,
            frame: FrameState::default(),
            diffusion: DiffusionAccumulator::default(),
            dimension_values: None,
            frames: FrameTable::new(options.get_max_frames()),
            philips: PhilipsState::default(),
            images_in_acquisition: None,
            ge_locations: None,
            pet_image_index: None,
            mosaic_images: None,
            imapat_multiband: None,
            philips_b_value_number: None,
            issues: Vec::new(),
        }
    }

    #[inline]
    pub fn manufacturer(&self) -> Manufacturer {
        self.record.acquisition.manufacturer
    }

    #[inline]
    pub fn is(&self, manufacturer: Manufacturer) -> bool {
        self.manufacturer() == manufacturer
    }

    /// End the scan, keeping the first reason given.
    pub fn stop(&mut self, termination: Termination) {
        self.stop.get_or_insert(termination);
    }
}
