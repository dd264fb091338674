//! Routing of elements to their handlers.
//!
//! The scanner looks up the tag of each element in a single table.
//! Tags not in the table are skipped without inspecting their value.

use crate::element::Element;
use crate::fields as f;
use crate::state::ScanState;
use crate::vendor::{ge, philips, siemens, uih};
use dcmstream_core::Tag;
use dcmstream_dictionary::tags;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A handler decodes one element into the scan state.
pub(crate) type Action = fn(&mut ScanState, &Element<'_>);

static ROUTES: Lazy<HashMap<Tag, Action>> = Lazy::new(|| ROUTES_TABLE.iter().copied().collect());

/// Look up the handler of a tag.
#[inline]
pub(crate) fn route(tag: Tag) -> Option<Action> {
    ROUTES.get(&tag).copied()
}

#[rustfmt::skip]
static ROUTES_TABLE: &[(Tag, Action)] = &[
    (tags::TRANSFER_SYNTAX_UID, f::transfer_syntax),
    (tags::SOURCE_APPLICATION_ENTITY_TITLE, f::source_ae_title),

    (tags::IMAGE_TYPE, f::image_type),
    (tags::STUDY_DATE, f::study_date),
    (tags::ACQUISITION_DATE, f::acquisition_date),
    (tags::ACQUISITION_DATE_TIME, f::acquisition_date_time),
    (tags::STUDY_TIME, f::study_time),
    (tags::ACQUISITION_TIME, f::acquisition_time),
    (tags::CONTENT_TIME, f::content_time),
    (tags::MODALITY, f::modality),
    (tags::MANUFACTURER, f::manufacturer),
    (tags::INSTITUTION_NAME, f::institution_name),
    (tags::INSTITUTION_ADDRESS, f::institution_address),
    (tags::REFERRING_PHYSICIAN_NAME, f::referring_physician),
    (tags::STATION_NAME, f::station_name),
    (tags::SERIES_DESCRIPTION, f::series_description),
    (tags::INSTITUTIONAL_DEPARTMENT_NAME, f::department),
    (tags::MANUFACTURER_MODEL_NAME, f::model_name),
    (tags::DERIVATION_DESCRIPTION, f::derivation_description),
    (tags::COMPLEX_IMAGE_COMPONENT, f::complex_image_component),

    (tags::PATIENT_NAME, f::patient_name),
    (tags::PATIENT_ID, f::patient_id),
    (tags::PATIENT_BIRTH_DATE, f::patient_birth_date),
    (tags::PATIENT_SEX, f::patient_sex),
    (tags::PATIENT_AGE, f::patient_age),
    (tags::PATIENT_WEIGHT, f::patient_weight),
    (tags::ANATOMICAL_ORIENTATION_TYPE, f::anatomical_orientation_type),

    (tags::BODY_PART_EXAMINED, f::body_part),
    (tags::SCANNING_SEQUENCE, f::scanning_sequence),
    (tags::SEQUENCE_VARIANT, f::sequence_variant),
    (tags::SCAN_OPTIONS, f::scan_options),
    (tags::MR_ACQUISITION_TYPE, f::mr_acquisition_type),
    (tags::SEQUENCE_NAME, f::sequence_name),
    (tags::SLICE_THICKNESS, f::slice_thickness),
    (tags::REPETITION_TIME, f::repetition_time),
    (tags::ECHO_TIME, f::echo_time),
    (tags::INVERSION_TIME, f::inversion_time),
    (tags::ECHO_NUMBERS, f::echo_number),
    (tags::MAGNETIC_FIELD_STRENGTH, f::field_strength),
    (tags::SPACING_BETWEEN_SLICES, f::spacing_between_slices),
    (tags::NUMBER_OF_PHASE_ENCODING_STEPS, f::phase_encoding_steps),
    (tags::ECHO_TRAIN_LENGTH, f::echo_train_length),
    (tags::PERCENT_PHASE_FIELD_OF_VIEW, f::phase_field_of_view),
    (tags::PIXEL_BANDWIDTH, f::pixel_bandwidth),
    (tags::DEVICE_SERIAL_NUMBER, f::device_serial_number),
    (tags::SOFTWARE_VERSIONS, f::software_versions),
    (tags::PROTOCOL_NAME, f::protocol_name),
    (tags::RADIONUCLIDE_TOTAL_DOSE, f::radionuclide_total_dose),
    (tags::RADIONUCLIDE_HALF_LIFE, f::radionuclide_half_life),
    (tags::RADIONUCLIDE_POSITRON_FRACTION, f::radionuclide_positron_fraction),
    (tags::GANTRY_DETECTOR_TILT, f::gantry_tilt),
    (tags::EXPOSURE, f::exposure),
    (tags::ACQUISITION_MATRIX, f::acquisition_matrix),
    (tags::IN_PLANE_PHASE_ENCODING_DIRECTION, f::in_plane_phase_encoding_direction),
    (tags::FLIP_ANGLE, f::flip_angle),
    (tags::SAR, f::sar),
    (tags::PATIENT_POSITION, f::patient_position),
    (tags::DIFFUSION_DIRECTIONALITY, f::diffusion_directionality),
    (tags::EFFECTIVE_ECHO_TIME, f::effective_echo_time),
    (tags::DIFFUSION_B_VALUE, f::diffusion_b_value),
    (tags::DIFFUSION_GRADIENT_ORIENTATION, f::diffusion_gradient_orientation),
    (tags::MR_ECHO_SEQUENCE, f::mr_echo_sequence),

    (tags::SIEMENS_NUMBER_OF_IMAGES_IN_MOSAIC, siemens::mosaic_images),
    (tags::DWELL_TIME, f::dwell_time),
    (tags::LAST_SCAN_LOCATION, f::last_scan_location),
    (tags::BANDWIDTH_PER_PIXEL_PHASE_ENCODE, f::bandwidth_per_pixel_phase_encode),
    (tags::GE_DIFFUSION_DIRECTION_X, ge::diffusion_direction_x),
    (tags::GE_DIFFUSION_DIRECTION_Y, ge::diffusion_direction_y),
    (tags::GE_DIFFUSION_DIRECTION_Z, ge::diffusion_direction_z),

    (tags::STUDY_INSTANCE_UID, f::study_instance_uid),
    (tags::SERIES_INSTANCE_UID, f::series_instance_uid),
    (tags::STUDY_ID, f::study_id),
    (tags::SERIES_NUMBER, f::series_number),
    (tags::ACQUISITION_NUMBER, f::acquisition_number),
    (tags::INSTANCE_NUMBER, f::instance_number),
    (tags::IMAGE_POSITION_PATIENT, f::image_position),
    (tags::IMAGE_ORIENTATION, f::image_orientation_acr),
    (tags::IMAGE_ORIENTATION_PATIENT, f::image_orientation),
    (tags::IMAGES_IN_ACQUISITION, f::images_in_acquisition),
    (tags::IMAGE_COMMENTS, f::image_comments),
    (tags::IN_STACK_POSITION_NUMBER, philips::in_stack_position),
    (tags::TRIGGER_DELAY_TIME, philips::trigger_delay_time),
    (tags::DIMENSION_INDEX_VALUES, f::dimension_index_values),

    (tags::GE_LOCATIONS_IN_ACQUISITION, ge::locations_in_acquisition),
    (tags::GE_RTIA_TIMER, ge::rtia_timer),
    (tags::GE_PROTOCOL_DATA_BLOCK, ge::protocol_data_block),

    (tags::SAMPLES_PER_PIXEL, f::samples_per_pixel),
    (tags::PHOTOMETRIC_INTERPRETATION, f::photometric_interpretation),
    (tags::PLANAR_CONFIGURATION, f::planar_configuration),
    (tags::NUMBER_OF_FRAMES, f::number_of_frames),
    (tags::ROWS, f::rows),
    (tags::COLUMNS, f::columns),
    (tags::PIXEL_SPACING, f::pixel_spacing),
    (tags::BITS_ALLOCATED, f::bits_allocated),
    (tags::BITS_STORED, f::bits_stored),
    (tags::PIXEL_REPRESENTATION, f::pixel_representation),
    (tags::RESCALE_INTERCEPT, f::rescale_intercept),
    (tags::RESCALE_SLOPE, f::rescale_slope),

    (tags::GEIIS_PRIVATE_CREATOR, ge::geiis_private_creator),
    (tags::SIEMENS_CSA_IMAGE_HEADER_INFO, siemens::csa_image_header),
    (tags::SIEMENS_CSA_SERIES_HEADER_INFO, siemens::csa_series_header),

    (tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION, f::procedure_step_description),
    (tags::REAL_WORLD_VALUE_INTERCEPT, philips::real_world_intercept),
    (tags::REAL_WORLD_VALUE_SLOPE, philips::real_world_slope),

    (tags::GE_USER_DEFINE_DATA, ge::user_define_data),
    (tags::GE_EFFECTIVE_ECHO_SPACING, ge::effective_echo_spacing),
    (tags::GE_DIFFUSION_B_VALUE, ge::diffusion_b_value),

    (tags::SIEMENS_ACQUISITION_MATRIX_TEXT, siemens::acquisition_matrix_text),
    (tags::SIEMENS_COIL_STRING, siemens::coil),
    (tags::SIEMENS_PAT_MODE_TEXT, siemens::pat_mode),

    (tags::NUMBER_OF_SLICES, f::locations_in_acquisition),
    (tags::DOSE_CALIBRATION_FACTOR, f::dose_calibration_factor),
    (tags::IMAGE_INDEX, f::pet_image_index),

    (tags::UIH_PHASE_ENCODING_DIRECTION_DISPLAYED, uih::phase_encoding_displayed),
    (tags::UIH_DIFFUSION_B_VALUE, uih::diffusion_b_value),
    (tags::UIH_DIFFUSION_GRADIENT_DIRECTION, uih::diffusion_gradient_direction),
    (tags::UIH_NUMBER_OF_IMAGES_IN_GRID, uih::images_in_grid),

    (tags::ICON_IMAGE_SEQUENCE, f::icon_image_sequence),
    (tags::PHILIPS_PMSCT_RLE1_PIXEL_DATA, philips::rle_pixel_data),

    (tags::PHILIPS_DIFFUSION_B_FACTOR, philips::diffusion_b_factor),
    (tags::PHILIPS_SLICE_NUMBER_MR, philips::slice_number),
    (tags::PHILIPS_SLICE_ORIENTATION, philips::slice_orientation),
    (tags::PHILIPS_NUMBER_OF_SLICES_MR, philips::number_of_slices),
    (tags::PHILIPS_NUMBER_OF_DYNAMIC_SCANS, philips::number_of_dynamic_scans),
    (tags::PHILIPS_SCALE_SLOPE, philips::scale_slope),
    (tags::PHILIPS_MR_ACQUISITION_TYPE, philips::mr_acquisition_type),
    (tags::PHILIPS_ANGULATION_AP, philips::angulation_ap),
    (tags::PHILIPS_ANGULATION_FH, philips::angulation_fh),
    (tags::PHILIPS_ANGULATION_RL, philips::angulation_rl),
    (tags::PHILIPS_OFFCENTRE_AP, philips::offcentre_ap),
    (tags::PHILIPS_OFFCENTRE_FH, philips::offcentre_fh),
    (tags::PHILIPS_OFFCENTRE_RL, philips::offcentre_rl),
    (tags::PHILIPS_DIFFUSION_DIRECTION_RL, philips::diffusion_direction_rl),
    (tags::PHILIPS_DIFFUSION_DIRECTION_AP, philips::diffusion_direction_ap),
    (tags::PHILIPS_DIFFUSION_DIRECTION_FH, philips::diffusion_direction_fh),
    (tags::PHILIPS_PRIVATE_PER_FRAME_SEQUENCE, philips::private_per_frame_sequence),
    (tags::PHILIPS_DIFFUSION_B_VALUE_NUMBER, philips::b_value_number),

    (tags::WAVEFORM_SEQUENCE, f::waveform_sequence),
    (tags::FLOAT_PIXEL_DATA, f::float_pixel_data_single),
    (tags::DOUBLE_FLOAT_PIXEL_DATA, f::float_pixel_data_double),
    (tags::PIXEL_DATA, f::pixel_data),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_routed(tag: Tag) -> bool {
        route(tag).is_some()
    }
    use dcmstream_dictionary::registry;
    use std::collections::HashSet;

    #[test]
    fn every_tag_is_routed_once() {
        let unique: HashSet<_> = ROUTES_TABLE.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(unique.len(), ROUTES_TABLE.len());
        assert_eq!(ROUTES.len(), ROUTES_TABLE.len());
    }

    #[test]
    fn every_routed_tag_is_named() {
        for (tag, _) in ROUTES_TABLE {
            assert!(registry().by_tag(*tag).is_some(), "{} has no alias", tag);
        }
    }

    #[test]
    fn unrouted_tags() {
        assert!(is_routed(tags::PIXEL_DATA));
        assert!(!is_routed(Tag(0x0009, 0x0010)));
        assert!(!is_routed(Tag::ITEM));
        assert!(route(Tag(0x0008, 0x0005)).is_none());
    }
}
