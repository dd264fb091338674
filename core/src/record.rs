//! The image metadata record produced by a header scan.
//!
//! Every field starts out unset (`None`, an empty string or an empty list)
//! and is only written when the corresponding attribute is encountered.
//! An unset field is never the same as a zero.
//!
//! The record is built by a single scan, finalized once by the normalization
//! pass, and then handed out by value. Nothing mutates it afterwards.

use crate::kind::{
    AcquisitionType, CompressionScheme, Manufacturer, Modality, PhaseEncodingPolarity,
    SliceOrientation,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use smallvec::SmallVec;

/// A contiguous run of bytes in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    /// absolute offset from the start of the file
    pub offset: u64,
    /// number of bytes, if known
    pub len: Option<u64>,
}

impl ByteRange {
    pub fn new(offset: u64, len: Option<u64>) -> Self {
        ByteRange { offset, len }
    }
}

/// A diffusion weighting: the b-value and its gradient direction.
///
/// A b-value of `None` means the frame carries no diffusion weighting at all.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DiffusionVector {
    pub b_value: Option<f32>,
    pub direction: [f32; 3],
}

impl DiffusionVector {
    /// A non diffusion-weighted entry.
    pub const NONE: DiffusionVector = DiffusionVector {
        b_value: None,
        direction: [0.; 3],
    };
}

/// Dimensions of the reconstructed array.
///
/// `slices` × `volumes` always equals the number of frames stored in the file
/// after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeShape {
    pub slices: u32,
    pub volumes: u32,
}

impl Default for VolumeShape {
    fn default() -> Self {
        VolumeShape {
            slices: 1,
            volumes: 1,
        }
    }
}

/// How the rest of the stream is encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingInfo {
    pub transfer_syntax: String,
    pub explicit_vr: bool,
    pub little_endian: bool,
    pub compression: CompressionScheme,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        EncodingInfo {
            transfer_syntax: String::new(),
            explicit_vr: true,
            little_endian: true,
            compression: CompressionScheme::None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PatientInfo {
    pub name: String,
    pub id: String,
    pub birth_date: String,
    /// first character of (0010,0040), upper case
    pub sex: Option<char>,
    pub age: String,
    pub weight: Option<f32>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StudyInfo {
    pub instance_uid: String,
    pub id: String,
    pub date: String,
    pub time: String,
    /// `date * 1e6 + time`, as a sortable number
    pub date_time: Option<f64>,
    pub institution_name: String,
    pub institution_address: String,
    pub department: String,
    pub referring_physician: String,
    pub station_name: String,
    pub procedure_step_description: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeriesInfo {
    pub instance_uid: String,
    /// 32-bit checksum (xxh32) of the series instance UID
    pub instance_uid_checksum: Option<u32>,
    pub number: Option<i64>,
    pub description: String,
    pub protocol_name: String,
    pub sequence_name: String,
    pub image_type: String,
    pub image_comments: String,
    pub acquisition_number: Option<i32>,
    pub instance_number: Option<i32>,
}

/// Scanner and sequence parameters.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AcquisitionInfo {
    pub modality: Modality,
    pub manufacturer: Manufacturer,
    pub model_name: String,
    pub device_serial_number: String,
    pub software_versions: String,
    pub body_part: String,
    pub scanning_sequence: String,
    pub sequence_variant: String,
    pub scan_options: String,
    pub acquisition_type: Option<AcquisitionType>,
    /// YYYYMMDD as a number
    pub date: Option<f64>,
    /// HHMMSS.FFFFFF as a number
    pub time: Option<f64>,
    /// (0008,002A) text, only used when date and time are absent
    pub date_time: String,
    pub content_time: Option<f64>,
    pub repetition_time: Option<f32>,
    pub echo_time: Option<f32>,
    pub inversion_time: Option<f32>,
    pub echo_number: Option<i32>,
    pub field_strength: Option<f32>,
    pub flip_angle: Option<f32>,
    pub sar: Option<f32>,
    pub pixel_bandwidth: Option<f32>,
    pub bandwidth_per_pixel_phase_encode: Option<f64>,
    pub phase_encoding_steps: Option<i32>,
    pub phase_encoding_lines: Option<u16>,
    /// `R`ow or `C`olumn, from (0018,1312)
    pub phase_encoding_direction: Option<char>,
    pub echo_train_length: Option<i32>,
    pub phase_field_of_view: Option<f32>,
    pub dwell_time: Option<i32>,
    pub last_scan_location: Option<f32>,
    pub gantry_tilt: Option<f32>,
    pub patient_orientation: String,
    pub trigger_delay_time: Option<f64>,
    /// in-plane parallel imaging acceleration
    pub acceleration_factor: Option<f32>,
    /// simultaneous multi-slice factor
    pub multiband_factor: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Geometry {
    pub columns: Option<u32>,
    pub rows: Option<u32>,
    /// number of frames, as declared by (0028,0008)
    pub frames: Option<u32>,
    pub shape: VolumeShape,
    /// slices per volume
    pub locations_in_acquisition: Option<u32>,
    pub pixel_spacing: Option<[f32; 2]>,
    pub slice_thickness: Option<f32>,
    pub spacing_between_slices: Option<f32>,
    /// resolved (x, y, z) voxel size
    pub voxel_size: Option<[f32; 3]>,
    /// row and column direction cosines
    pub orientation: Option<[f32; 6]>,
    /// position of the first slice
    pub position: Option<[f32; 3]>,
    /// position of the last slice, for files holding more than one
    pub position_last: Option<[f32; 3]>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PixelInfo {
    pub samples_per_pixel: Option<u16>,
    pub bits_allocated: Option<u16>,
    pub bits_stored: Option<u16>,
    pub signed: Option<bool>,
    pub planar_configuration: Option<u16>,
    pub photometric_interpretation: String,
    pub is_float: bool,
    /// location of the pixel payload
    pub data: Option<ByteRange>,
}

/// Stored value to real value mapping.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IntensityInfo {
    pub slope: Option<f32>,
    pub intercept: Option<f32>,
    pub philips_scale: Option<f32>,
    pub real_world_slope: Option<f64>,
    pub real_world_intercept: Option<f64>,
}

/// Which complex-valued components appear in the file.
/// These are not mutually exclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComplexComponents {
    pub magnitude: bool,
    pub phase: bool,
    pub real: bool,
    pub imaginary: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageFlags {
    pub mosaic: bool,
    pub derived: bool,
    pub localizer: bool,
    pub xray: bool,
    pub resampled: bool,
    pub segami_oasis: bool,
    /// scale, echo time or component type differ between packed volumes
    pub scale_or_te_varies: bool,
    pub multi_echo: bool,
    /// a later image position differed from the first one
    pub moved_from_first_position: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiffusionInfo {
    pub b_value: Option<f32>,
    pub gradient: Option<[f32; 3]>,
    /// (0018,9075) text
    pub directionality: String,
}

impl DiffusionInfo {
    pub fn vector(&self) -> DiffusionVector {
        DiffusionVector {
            b_value: self.b_value,
            direction: self.gradient.unwrap_or([0.; 3]),
        }
    }
}

/// Fields decoded from the Siemens CSA image header and related tags.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SiemensInfo {
    pub mosaic_slices: Option<u32>,
    pub slice_timing: Vec<f32>,
    pub slice_normal: Option<[f32; 3]>,
    pub phase_encoding_positive: Option<bool>,
    pub multiband_factor: Option<u32>,
    pub slice_measurement_duration: Option<f32>,
    pub protocol_slice_number: Option<i32>,
    pub series_header: Option<ByteRange>,
    /// receive coil name, from (0051,100F)
    pub coil: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeInfo {
    pub phase_encoding_polarity: Option<PhaseEncodingPolarity>,
    pub effective_echo_spacing: Option<i32>,
    pub rtia_timer: Option<f32>,
    pub protocol_block: Option<ByteRange>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PhilipsInfo {
    pub slice_orientation: Option<SliceOrientation>,
    /// (RL, AP, FH)
    pub angulation: [Option<f32>; 3],
    /// (RL, AP, FH)
    pub stack_offcentre: [Option<f32>; 3],
    pub b_value_number: Option<i32>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UihInfo {
    pub phase_encoding_displayed: String,
    pub images_in_grid: Option<f32>,
    pub acquisition_times: Vec<f64>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PetInfo {
    pub radionuclide_total_dose: Option<f32>,
    pub radionuclide_half_life: Option<f32>,
    pub radionuclide_positron_fraction: Option<f32>,
    pub dose_calibration_factor: Option<f32>,
}

/// Parameters of one volume packed in a multi-frame file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VolumeParameters {
    pub echo_time: Option<f32>,
    pub slope: Option<f32>,
    pub intercept: Option<f32>,
    pub philips_scale: Option<f32>,
    pub real_world_slope: Option<f64>,
    pub real_world_intercept: Option<f64>,
    pub trigger_delay_time: Option<f64>,
    pub phase: bool,
    pub real: bool,
    pub imaginary: bool,
    pub diffusion: DiffusionVector,
}

/// Frame ordering of enhanced multi-frame files.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameLayout {
    /// disk position of each frame, in display order
    pub slice_order: Vec<u32>,
    /// one entry per packed volume
    pub volumes: Vec<VolumeParameters>,
    /// the dimension index values of the last frame seen;
    /// the last component is replaced by the series UID checksum
    /// for files with fewer frames than dimension slots
    pub dimension_index_values: SmallVec<[u32; 8]>,
    /// number of per-frame entries recorded during the scan
    pub frame_entries: usize,
}

/// Everything a header scan learns about one image file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImageRecord {
    pub encoding: EncodingInfo,
    pub patient: PatientInfo,
    pub study: StudyInfo,
    pub series: SeriesInfo,
    pub acquisition: AcquisitionInfo,
    pub geometry: Geometry,
    pub pixel: PixelInfo,
    pub intensity: IntensityInfo,
    pub components: ComplexComponents,
    pub flags: ImageFlags,
    pub diffusion: DiffusionInfo,
    pub siemens: SiemensInfo,
    pub ge: GeInfo,
    pub philips: PhilipsInfo,
    pub uih: UihInfo,
    pub pet: PetInfo,
    pub frames: FrameLayout,
    /// whether pixel data can be extracted from the file
    pub is_valid: bool,
}

impl ImageRecord {
    /// Shorthand for the detected manufacturer.
    #[inline]
    pub fn manufacturer(&self) -> Manufacturer {
        self.acquisition.manufacturer
    }

    /// Number of bytes of one 2D slice:
    /// columns × rows × bytes per sample × samples per pixel.
    ///
    /// Returns `None` while any of the in-plane dimensions
    /// or the bit depth is unknown.
    pub fn slice_bytes(&self) -> Option<u64> {
        let columns = u64::from(self.geometry.columns?);
        let rows = u64::from(self.geometry.rows?);
        let bytes = u64::from(self.pixel.bits_allocated?) / 8;
        let samples = u64::from(self.pixel.samples_per_pixel.unwrap_or(1).max(1));
        Some(columns * rows * bytes * samples)
    }

    /// The study date and time as a typed value.
    pub fn study_date_time(&self) -> Option<NaiveDateTime> {
        let date = parse_da(&self.study.date)?;
        let time = match parse_tm(&self.study.time) {
            Some(time) => time,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        Some(date.and_time(time))
    }

    /// The acquisition date and time as a typed value.
    pub fn acquisition_date_time(&self) -> Option<NaiveDateTime> {
        let date = self.acquisition.date?;
        let date = parse_da(&format!("{:08.0}", date))?;
        let time = match self.acquisition.time {
            Some(t) => parse_tm(&format!("{:013.6}", t))?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        Some(date.and_time(time))
    }
}

fn parse_da(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text.get(..8)?, "%Y%m%d").ok()
}

fn parse_tm(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    let hms = text.get(..6)?;
    let base = NaiveTime::parse_from_str(hms, "%H%M%S").ok()?;
    let micros = text
        .get(6..)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|frac| !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()))
        .map(|frac| {
            let digits: String = frac.chars().chain(std::iter::repeat('0')).take(6).collect();
            digits.parse::<i64>().unwrap_or(0)
        })
        .unwrap_or(0);
    Some(base + chrono::Duration::microseconds(micros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn defaults_are_unset() {
        let record = ImageRecord::default();
        assert_eq!(record.geometry.columns, None);
        assert_eq!(record.geometry.position, None);
        assert_eq!(record.series.number, None);
        assert_eq!(record.acquisition.echo_time, None);
        assert_eq!(record.pixel.data, None);
        assert!(record.encoding.explicit_vr);
        assert!(record.encoding.little_endian);
        assert_eq!(record.geometry.shape, VolumeShape { slices: 1, volumes: 1 });
        assert!(!record.is_valid);
    }

    #[test]
    fn slice_bytes_needs_dimensions() {
        let mut record = ImageRecord::default();
        assert_eq!(record.slice_bytes(), None);
        record.geometry.columns = Some(64);
        record.geometry.rows = Some(32);
        record.pixel.bits_allocated = Some(16);
        assert_eq!(record.slice_bytes(), Some(64 * 32 * 2));
        record.pixel.samples_per_pixel = Some(3);
        record.pixel.bits_allocated = Some(8);
        assert_eq!(record.slice_bytes(), Some(64 * 32 * 3));
    }

    #[test]
    fn study_date_time() {
        let mut record = ImageRecord::default();
        assert_eq!(record.study_date_time(), None);
        record.study.date = "20180905".to_string();
        record.study.time = "131643.250000".to_string();
        let dt = record.study_date_time().unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2018, 9, 5).unwrap());
        assert_eq!(dt.hour(), 13);
        assert_eq!(dt.minute(), 16);
        assert_eq!(dt.second(), 43);
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn acquisition_date_time_from_numbers() {
        let mut record = ImageRecord::default();
        record.acquisition.date = Some(20161117.);
        record.acquisition.time = Some(131643.8);
        let dt = record.acquisition_date_time().unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2016, 11, 17).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (13, 16, 43));
    }
}
