//! Extraction of the public attributes.
//!
//! Each function here is one entry of the dispatch table:
//! it decodes the value of a single element into the record
//! or into the scan state.

use std::convert::TryFrom;
use crate::element::Element;
use crate::error::TooManyDimensionsSnafu;
use crate::state::ScanState;
use crate::vendor::{philips, uih};
use crate::Termination;
use dcmstream_core::{AcquisitionType, ByteRange, Manufacturer, Modality};
use dcmstream_encoding::{classify, TransferSyntaxAction};
use tracing::{debug, error, info, warn};

/// Tolerance when comparing direction cosines.
const ORIENTATION_TOLERANCE: f32 = 1e-4;

fn text_f32(e: &Element) -> Option<f32> {
    e.text_float().map(|v| v as f32)
}

fn int_u16(e: &Element) -> Option<u16> {
    e.int().and_then(|v| u16::try_from(v).ok())
}

// (0002,xxxx)

pub(crate) fn transfer_syntax(s: &mut ScanState, e: &Element) {
    let uid = e.text();
    let action = classify(&uid, s.accept_jpeg2000);
    debug!("Transfer syntax {} ({:?})", uid, action);
    match action {
        TransferSyntaxAction::Compressed(scheme) => s.record.encoding.compression = scheme,
        TransferSyntaxAction::Unsupported => {
            warn!("Unsupported transfer syntax '{}'", uid);
            s.stop(Termination::UnsupportedTransferSyntax);
        }
        other => s.switch.request(other),
    }
    s.record.encoding.transfer_syntax = uid;
}

pub(crate) fn source_ae_title(s: &mut ScanState, e: &Element) {
    let title = e.text();
    if title.len() >= 5 && title.contains("oasis") {
        s.record.flags.segami_oasis = true;
    }
}

// (0008,xxxx)

pub(crate) fn image_type(s: &mut ScanState, e: &Element) {
    let text = e.text();
    let len = text.len();
    if len > 5 && text.ends_with("MOSAIC") {
        s.record.flags.mosaic = true;
    }
    if (len > 3 && text.contains("_R_")) || (len > 6 && text.contains("_REAL_")) {
        s.record.components.real = true;
        s.frame.real = true;
    }
    if (len > 3 && text.contains("_I_")) || (len > 11 && text.contains("_IMAGINARY_")) {
        s.record.components.imaginary = true;
        s.frame.imaginary = true;
    }
    if (len > 3 && text.contains("_P_")) || (len > 6 && text.contains("PHASE")) {
        s.record.components.phase = true;
        s.frame.phase = true;
    }
    if len > 6 && text.contains("DERIVED") {
        s.record.flags.derived = true;
    }
    s.record.series.image_type = text;
}

pub(crate) fn study_date(s: &mut ScanState, e: &Element) {
    s.record.study.date = e.text();
}

pub(crate) fn study_time(s: &mut ScanState, e: &Element) {
    s.record.study.time = e.text();
}

pub(crate) fn acquisition_date(s: &mut ScanState, e: &Element) {
    s.record.acquisition.date = e.text_float();
}

pub(crate) fn acquisition_date_time(s: &mut ScanState, e: &Element) {
    s.record.acquisition.date_time = e.text();
}

pub(crate) fn acquisition_time(s: &mut ScanState, e: &Element) {
    let time = e.text_float();
    s.record.acquisition.time = time;
    if let Some(time) = time {
        uih::acquisition_time(s, time);
    }
}

pub(crate) fn content_time(s: &mut ScanState, e: &Element) {
    s.record.acquisition.content_time = e.text_float();
}

pub(crate) fn modality(s: &mut ScanState, e: &Element) {
    if let Some(modality) = Modality::from_text(e.value) {
        s.record.acquisition.modality = modality;
    }
}

pub(crate) fn manufacturer(s: &mut ScanState, e: &Element) {
    let manufacturer = Manufacturer::from_text(e.value);
    debug!("Manufacturer: {}", manufacturer);
    s.record.acquisition.manufacturer = manufacturer;
}

pub(crate) fn institution_name(s: &mut ScanState, e: &Element) {
    s.record.study.institution_name = e.text();
}

pub(crate) fn institution_address(s: &mut ScanState, e: &Element) {
    s.record.study.institution_address = e.text();
}

pub(crate) fn referring_physician(s: &mut ScanState, e: &Element) {
    s.record.study.referring_physician = e.text();
}

pub(crate) fn station_name(s: &mut ScanState, e: &Element) {
    s.record.study.station_name = e.text();
}

pub(crate) fn series_description(s: &mut ScanState, e: &Element) {
    s.record.series.description = e.text();
}

pub(crate) fn department(s: &mut ScanState, e: &Element) {
    s.record.study.department = e.text();
}

pub(crate) fn model_name(s: &mut ScanState, e: &Element) {
    s.record.acquisition.model_name = e.text();
}

pub(crate) fn derivation_description(s: &mut ScanState, e: &Element) {
    if e.text().eq_ignore_ascii_case("MEDCOM_RESAMPLED") {
        s.record.flags.resampled = true;
    }
}

/// Complex image component (RE, IM, PH, MA).
/// Ignored inside the Philips private per-frame sequence,
/// where it is known to be unreliable.
pub(crate) fn complex_image_component(s: &mut ScanState, e: &Element) {
    if s.philips_per_frame {
        return;
    }
    let (a, b) = match e.value {
        [a, b, ..] => (*a, b.to_ascii_uppercase()),
        _ => return,
    };
    let frame = &mut s.frame;
    frame.real = (a, b) == (b'R', b'E');
    frame.imaginary = (a, b) == (b'I', b'M');
    frame.phase = (a, b) == (b'P', b'H');
    frame.magnitude = (a, b) == (b'M', b'A');

    let components = &mut s.record.components;
    components.real |= frame.real;
    components.imaginary |= frame.imaginary;
    components.phase |= frame.phase;
    components.magnitude |= frame.magnitude;
}

// (0010,xxxx)

pub(crate) fn patient_name(s: &mut ScanState, e: &Element) {
    s.record.patient.name = e.text();
}

pub(crate) fn patient_id(s: &mut ScanState, e: &Element) {
    s.record.patient.id = e.text();
}

pub(crate) fn patient_birth_date(s: &mut ScanState, e: &Element) {
    s.record.patient.birth_date = e.text();
}

pub(crate) fn patient_sex(s: &mut ScanState, e: &Element) {
    if let Some(c) = e.byte(0).filter(u8::is_ascii_alphabetic) {
        s.record.patient.sex = Some(char::from(c.to_ascii_uppercase()));
    }
}

pub(crate) fn patient_age(s: &mut ScanState, e: &Element) {
    s.record.patient.age = e.text();
}

pub(crate) fn patient_weight(s: &mut ScanState, e: &Element) {
    s.record.patient.weight = text_f32(e);
}

pub(crate) fn anatomical_orientation_type(_s: &mut ScanState, e: &Element) {
    let text = e.text();
    if text.len() >= 9 && text.contains("QUADRUPED") {
        warn!("Anatomical orientation type (0010,2210) is QUADRUPED: rotate coordinates accordingly");
    }
}

// (0018,xxxx)

pub(crate) fn body_part(s: &mut ScanState, e: &Element) {
    s.record.acquisition.body_part = e.text();
}

pub(crate) fn scanning_sequence(s: &mut ScanState, e: &Element) {
    s.record.acquisition.scanning_sequence = e.text();
}

pub(crate) fn sequence_variant(s: &mut ScanState, e: &Element) {
    s.record.acquisition.sequence_variant = e.text();
}

pub(crate) fn scan_options(s: &mut ScanState, e: &Element) {
    s.record.acquisition.scan_options = e.text();
}

pub(crate) fn mr_acquisition_type(s: &mut ScanState, e: &Element) {
    if let Some(kind) = AcquisitionType::from_text(e.value) {
        s.record.acquisition.acquisition_type = Some(kind);
    }
}

pub(crate) fn sequence_name(s: &mut ScanState, e: &Element) {
    s.record.series.sequence_name = e.text();
}

pub(crate) fn slice_thickness(s: &mut ScanState, e: &Element) {
    s.record.geometry.slice_thickness = text_f32(e);
}

pub(crate) fn repetition_time(s: &mut ScanState, e: &Element) {
    s.record.acquisition.repetition_time = text_f32(e);
}

fn set_echo_time(s: &mut ScanState, echo_time: Option<f32>) {
    s.frame.echo_time = echo_time;
    let current = &mut s.record.acquisition.echo_time;
    if current.map_or(true, |te| te <= 0.) {
        *current = echo_time;
    }
}

/// Echo time. The first positive value is kept in the record,
/// the latest one is tracked per frame.
pub(crate) fn echo_time(s: &mut ScanState, e: &Element) {
    set_echo_time(s, text_f32(e));
}

pub(crate) fn effective_echo_time(s: &mut ScanState, e: &Element) {
    set_echo_time(s, e.float_or_double().map(|v| v as f32));
}

pub(crate) fn inversion_time(s: &mut ScanState, e: &Element) {
    s.record.acquisition.inversion_time = text_f32(e);
}

pub(crate) fn echo_number(s: &mut ScanState, e: &Element) {
    s.record.acquisition.echo_number = e.text_int();
}

pub(crate) fn field_strength(s: &mut ScanState, e: &Element) {
    s.record.acquisition.field_strength = text_f32(e);
}

pub(crate) fn spacing_between_slices(s: &mut ScanState, e: &Element) {
    s.record.geometry.spacing_between_slices = text_f32(e);
}

pub(crate) fn phase_encoding_steps(s: &mut ScanState, e: &Element) {
    s.record.acquisition.phase_encoding_steps = e.text_int();
}

pub(crate) fn echo_train_length(s: &mut ScanState, e: &Element) {
    s.record.acquisition.echo_train_length = e.text_int();
}

pub(crate) fn phase_field_of_view(s: &mut ScanState, e: &Element) {
    s.record.acquisition.phase_field_of_view = text_f32(e);
}

pub(crate) fn pixel_bandwidth(s: &mut ScanState, e: &Element) {
    s.record.acquisition.pixel_bandwidth = text_f32(e);
}

pub(crate) fn device_serial_number(s: &mut ScanState, e: &Element) {
    s.record.acquisition.device_serial_number = e.text();
}

pub(crate) fn software_versions(s: &mut ScanState, e: &Element) {
    s.record.acquisition.software_versions = e.text();
}

pub(crate) fn protocol_name(s: &mut ScanState, e: &Element) {
    s.record.series.protocol_name = e.text();
}

pub(crate) fn radionuclide_total_dose(s: &mut ScanState, e: &Element) {
    s.record.pet.radionuclide_total_dose = text_f32(e);
}

pub(crate) fn radionuclide_half_life(s: &mut ScanState, e: &Element) {
    s.record.pet.radionuclide_half_life = text_f32(e);
}

pub(crate) fn radionuclide_positron_fraction(s: &mut ScanState, e: &Element) {
    s.record.pet.radionuclide_positron_fraction = text_f32(e);
}

pub(crate) fn gantry_tilt(s: &mut ScanState, e: &Element) {
    s.record.acquisition.gantry_tilt = text_f32(e);
}

/// X-ray exposure stands in for the echo time of CT images,
/// so that different exposures are told apart.
pub(crate) fn exposure(s: &mut ScanState, e: &Element) {
    let te = &mut s.record.acquisition.echo_time;
    if te.map_or(true, |te| te == 0.) {
        s.record.flags.xray = true;
        *te = text_f32(e);
    }
}

pub(crate) fn acquisition_matrix(s: &mut ScanState, e: &Element) {
    if e.length != 8 {
        return;
    }
    if let Some(matrix) = e.u16s(4) {
        if matrix[3] > 0 {
            s.record.acquisition.phase_encoding_lines = Some(matrix[3]);
        }
        if matrix[2] > 0 {
            s.record.acquisition.phase_encoding_lines = Some(matrix[2]);
        }
    }
}

pub(crate) fn in_plane_phase_encoding_direction(s: &mut ScanState, e: &Element) {
    if let Some(c) = e.byte(0).filter(u8::is_ascii_alphabetic) {
        s.record.acquisition.phase_encoding_direction = Some(char::from(c.to_ascii_uppercase()));
    }
}

pub(crate) fn flip_angle(s: &mut ScanState, e: &Element) {
    s.record.acquisition.flip_angle = text_f32(e);
}

pub(crate) fn sar(s: &mut ScanState, e: &Element) {
    s.record.acquisition.sar = text_f32(e);
}

pub(crate) fn patient_position(s: &mut ScanState, e: &Element) {
    s.record.acquisition.patient_orientation = e.text();
}

pub(crate) fn diffusion_directionality(s: &mut ScanState, e: &Element) {
    let text = e.text();
    philips::directionality(s, &text);
    s.record.diffusion.directionality = text;
}

pub(crate) fn diffusion_b_value(s: &mut ScanState, e: &Element) {
    if let Some(b) = e.float_or_double() {
        let b = b as f32;
        s.diffusion.b_value = Some(b);
        s.record.diffusion.b_value = Some(b);
    }
}

/// Diffusion gradient orientation, trusted for Siemens and Philips only.
pub(crate) fn diffusion_gradient_orientation(s: &mut ScanState, e: &Element) {
    if !(s.is(Manufacturer::Siemens) || s.is(Manufacturer::Philips)) {
        return;
    }
    if let Some(direction) = e.float_array::<3>() {
        s.diffusion.direction = direction;
        s.record.diffusion.gradient = Some(direction);
    }
}

/// Entering the MR echo sequence marks the depth
/// at which a Philips frame item is complete.
/// Outside of any item there is no such depth.
pub(crate) fn mr_echo_sequence(s: &mut ScanState, _e: &Element) {
    s.philips.echo_watermark = s.depth.checked_sub(1);
}

// (0019,xxxx), shared

pub(crate) fn dwell_time(s: &mut ScanState, e: &Element) {
    s.record.acquisition.dwell_time = e.text_int();
}

pub(crate) fn last_scan_location(s: &mut ScanState, e: &Element) {
    s.record.acquisition.last_scan_location = text_f32(e);
}

pub(crate) fn bandwidth_per_pixel_phase_encode(s: &mut ScanState, e: &Element) {
    s.record.acquisition.bandwidth_per_pixel_phase_encode = e.float_or_double();
}

// (0020,xxxx)

pub(crate) fn study_instance_uid(s: &mut ScanState, e: &Element) {
    s.record.study.instance_uid = e.text();
}

pub(crate) fn series_instance_uid(s: &mut ScanState, e: &Element) {
    s.record.series.instance_uid = e.text();
}

pub(crate) fn study_id(s: &mut ScanState, e: &Element) {
    s.record.study.id = e.text();
}

pub(crate) fn series_number(s: &mut ScanState, e: &Element) {
    if let Some(number) = e.text_int() {
        s.record.series.number = Some(i64::from(number));
    }
}

pub(crate) fn acquisition_number(s: &mut ScanState, e: &Element) {
    s.record.series.acquisition_number = e.text_int();
}

/// Instance number. Enhanced files repeat it per frame,
/// only the first one is kept.
pub(crate) fn instance_number(s: &mut ScanState, e: &Element) {
    if s.record.series.instance_number.map_or(true, |n| n < 1) {
        s.record.series.instance_number = e.text_int();
    }
}

pub(crate) fn image_position(s: &mut ScanState, e: &Element) {
    let position = e.text_array::<3>();
    if s.philips_per_frame {
        s.frame.private_position = position;
        return;
    }
    s.positions_seen += 1;
    s.frame.position = position;
    let geometry = &mut s.record.geometry;
    match (geometry.position, position) {
        (None, _) => geometry.position = position,
        (Some(first), Some(current)) => {
            geometry.position_last = Some(current);
            if first != current {
                s.record.flags.moved_from_first_position = true;
            }
        }
        (Some(_), None) => {}
    }
}

/// ACR-NEMA image orientation, only used when (0020,0037) is absent.
pub(crate) fn image_orientation_acr(s: &mut ScanState, e: &Element) {
    if !s.orientation_read {
        if let Some(orientation) = e.text_array::<6>() {
            s.record.geometry.orientation = Some(orientation);
        }
    }
}

pub(crate) fn image_orientation(s: &mut ScanState, e: &Element) {
    let orientation = match e.text_array::<6>() {
        Some(orientation) => orientation,
        None => return,
    };
    if let Some(previous) = s.record.geometry.orientation.filter(|_| s.orientation_read) {
        let varies = previous
            .iter()
            .zip(&orientation)
            .any(|(a, b)| (a - b).abs() > ORIENTATION_TOLERANCE);
        if varies {
            if !s.record.flags.localizer {
                info!(
                    "Slice orientation varies (localizer?) {:?} != {:?}",
                    previous, orientation
                );
            }
            s.record.flags.localizer = true;
        }
    }
    s.record.geometry.orientation = Some(orientation);
    s.orientation_read = true;
}

pub(crate) fn images_in_acquisition(s: &mut ScanState, e: &Element) {
    s.images_in_acquisition = e.text_int();
}

pub(crate) fn image_comments(s: &mut ScanState, e: &Element) {
    s.record.series.image_comments = e.long_text();
}

/// Dimension index values of the current frame.
pub(crate) fn dimension_index_values(s: &mut ScanState, e: &Element) {
    if e.length < 4 {
        return;
    }
    let mut count = (e.length / 4) as usize;
    if count > s.max_dimensions {
        let issue = TooManyDimensionsSnafu {
            count,
            max: s.max_dimensions,
        }
        .build();
        error!("{}", issue);
        s.issues.push(issue);
        count = s.max_dimensions;
    }
    if let Some(values) = e.u32s(count) {
        s.record.frames.dimension_index_values = values.clone();
        s.dimension_values = Some(values);
    }
}

// (0028,xxxx)

pub(crate) fn samples_per_pixel(s: &mut ScanState, e: &Element) {
    s.record.pixel.samples_per_pixel = int_u16(e);
}

pub(crate) fn photometric_interpretation(s: &mut ScanState, e: &Element) {
    let text = e.text();
    if text == "PALETTE_COLOR" || text == "PALETTE COLOR" {
        warn!("Photometric interpretation 'PALETTE COLOR' not supported");
    }
    s.record.pixel.photometric_interpretation = text;
}

pub(crate) fn planar_configuration(s: &mut ScanState, e: &Element) {
    s.record.pixel.planar_configuration = int_u16(e);
}

pub(crate) fn number_of_frames(s: &mut ScanState, e: &Element) {
    s.record.geometry.frames = e.text_int().and_then(|n| u32::try_from(n).ok());
}

pub(crate) fn rows(s: &mut ScanState, e: &Element) {
    s.record.geometry.rows = e.uint();
}

pub(crate) fn columns(s: &mut ScanState, e: &Element) {
    s.record.geometry.columns = e.uint();
}

pub(crate) fn pixel_spacing(s: &mut ScanState, e: &Element) {
    if let Some(spacing) = e.text_array::<2>() {
        s.record.geometry.pixel_spacing = Some(spacing);
    }
}

pub(crate) fn bits_allocated(s: &mut ScanState, e: &Element) {
    s.record.pixel.bits_allocated = int_u16(e);
}

pub(crate) fn bits_stored(s: &mut ScanState, e: &Element) {
    s.record.pixel.bits_stored = int_u16(e);
}

pub(crate) fn pixel_representation(s: &mut ScanState, e: &Element) {
    s.record.pixel.signed = e.int().map(|v| v == 1);
}

pub(crate) fn rescale_intercept(s: &mut ScanState, e: &Element) {
    s.record.intensity.intercept = text_f32(e);
}

pub(crate) fn rescale_slope(s: &mut ScanState, e: &Element) {
    s.record.intensity.slope = text_f32(e);
}

// (0040,xxxx), (0054,xxxx)

pub(crate) fn procedure_step_description(s: &mut ScanState, e: &Element) {
    s.record.study.procedure_step_description = e.text();
}

pub(crate) fn locations_in_acquisition(s: &mut ScanState, e: &Element) {
    s.record.geometry.locations_in_acquisition = e.uint();
}

pub(crate) fn dose_calibration_factor(s: &mut ScanState, e: &Element) {
    s.record.pet.dose_calibration_factor = text_f32(e);
}

pub(crate) fn pet_image_index(s: &mut ScanState, e: &Element) {
    s.pet_image_index = e.int();
}

// structure and pixel data

pub(crate) fn icon_image_sequence(s: &mut ScanState, _e: &Element) {
    s.icon = true;
}

pub(crate) fn waveform_sequence(s: &mut ScanState, _e: &Element) {
    info!("Skipping DICOM (audio not image)");
    s.stop(Termination::NotAnImage);
}

/// Pixel data (7FE0,0010).
///
/// Native data ends the scan.
/// Encapsulated data is descended into, so that its fragments are visited.
/// Icon pixel data is passed over.
pub(crate) fn pixel_data(s: &mut ScanState, e: &Element) {
    if s.icon {
        let icon_bytes = s
            .record
            .geometry
            .columns
            .zip(s.record.geometry.rows)
            .zip(s.record.pixel.bits_allocated)
            .map(|((c, r), b)| u64::from(c) * u64::from(r) * u64::from(b / 8));
        if icon_bytes == Some(u64::from(e.length)) {
            s.icon = false;
        }
        if s.depth < 1 {
            warn!("Assuming 7FE0,0010 refers to an icon not the main image");
        }
    }
    if !s.icon {
        if s.record.encoding.compression.is_encapsulated() {
            s.encapsulated = true;
            s.descend = true;
            s.pixel_element_start = Some(e.offset);
        } else {
            let len = Some(u64::from(e.length)).filter(|_| e.length != u32::MAX);
            s.record.pixel.data = Some(ByteRange::new(e.offset, len));
            s.stop(Termination::PixelData);
        }
    }
    s.icon = false;
}

fn float_pixel_data(s: &mut ScanState, e: &Element) {
    s.record.pixel.is_float = true;
    if !s.icon {
        s.record.pixel.data = Some(ByteRange::new(e.offset, Some(u64::from(e.length))));
        s.stop(Termination::PixelData);
    }
    s.icon = false;
}

/// Float pixel data (7FE0,0008).
pub(crate) fn float_pixel_data_single(s: &mut ScanState, e: &Element) {
    float_pixel_data(s, e);
}

/// Double float pixel data (7FE0,0009).
pub(crate) fn float_pixel_data_double(s: &mut ScanState, e: &Element) {
    warn!("Double-precision DICOM conversion untested");
    float_pixel_data(s, e);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReadOptions;
    use dcmstream_core::Tag;
    use dcmstream_encoding::BasicDecoder;

    fn element(tag: Tag, value: &[u8]) -> Element<'_> {
        Element {
            tag,
            vr: None,
            length: value.len() as u32,
            offset: 0,
            value,
            decoder: BasicDecoder::default(),
        }
    }

    #[test]
    fn echo_sequence_outside_items_sets_no_watermark() {
        let mut s = ScanState::new(&ReadOptions::default(), 4096, true);
        let e = element(Tag(0x0018, 0x9114), &[]);
        mr_echo_sequence(&mut s, &e);
        assert_eq!(s.philips.echo_watermark, None);

        s.depth = 2;
        mr_echo_sequence(&mut s, &e);
        assert_eq!(s.philips.echo_watermark, Some(1));
    }

    #[test]
    fn extra_dimensions_are_dropped_and_reported() {
        let options = ReadOptions::default().max_dimensions(2);
        let mut s = ScanState::new(&options, 4096, true);
        let value: Vec<u8> = [3u32, 1, 4].iter().flat_map(|v| v.to_le_bytes()).collect();
        dimension_index_values(&mut s, &element(Tag(0x0020, 0x9157), &value));

        assert_eq!(s.dimension_values.as_deref(), Some(&[3, 1][..]));
        assert_eq!(s.issues.len(), 1);
        assert!(matches!(
            s.issues[0],
            crate::Error::TooManyDimensions { count: 3, max: 2 }
        ));
    }
}
