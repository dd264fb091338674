//! Tag registry of the attributes known to the header scanner.
//!
//! This is not a full data dictionary: it only covers the attributes
//! which the scanner routes, so that they can be named in diagnostics.
use crate::tags;
use dcmstream_core::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DICT: Lazy<ScannerDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the registry.
#[inline]
pub fn registry() -> &'static ScannerDictionaryRegistry {
    &DICT
}

/// A single attribute known to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// The attribute tag
    pub tag: Tag,
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase
    pub alias: &'static str,
    /// The typical value representation of the attribute
    pub vr: VR,
}

type E = DictionaryEntry;

/// The data struct containing the registry.
#[derive(Debug)]
pub struct ScannerDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DictionaryEntry>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
}

impl ScannerDictionaryRegistry {
    fn new() -> ScannerDictionaryRegistry {
        ScannerDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len()),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntry) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        self
    }

    /// Fetch an entry by its tag.
    pub fn by_tag(&self, tag: Tag) -> Option<&'static DictionaryEntry> {
        self.by_tag.get(&tag).copied()
    }

    /// Fetch an entry by its alias.
    pub fn by_name(&self, name: &str) -> Option<&'static DictionaryEntry> {
        self.by_name.get(name).copied()
    }

    /// Number of known attributes.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry is empty (it never is).
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// The alias of a known attribute, or `None` for anything the scanner skips.
///
/// ```
/// # use dcmstream_core::Tag;
/// # use dcmstream_dictionary::alias_of;
/// assert_eq!(alias_of(Tag(0x0028, 0x0010)), Some("Rows"));
/// assert_eq!(alias_of(Tag(0x0009, 0x0001)), None);
/// ```
pub fn alias_of(tag: Tag) -> Option<&'static str> {
    registry().by_tag(tag).map(|e| e.alias)
}

fn init_dictionary() -> ScannerDictionaryRegistry {
    let mut d = ScannerDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: tags::FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: VR::UL },
    E { tag: tags::TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: VR::UI },
    E { tag: tags::SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: VR::AE },
    E { tag: tags::IMAGE_TYPE, alias: "ImageType", vr: VR::CS },
    E { tag: tags::STUDY_DATE, alias: "StudyDate", vr: VR::DA },
    E { tag: tags::ACQUISITION_DATE, alias: "AcquisitionDate", vr: VR::DA },
    E { tag: tags::ACQUISITION_DATE_TIME, alias: "AcquisitionDateTime", vr: VR::DT },
    E { tag: tags::STUDY_TIME, alias: "StudyTime", vr: VR::TM },
    E { tag: tags::ACQUISITION_TIME, alias: "AcquisitionTime", vr: VR::TM },
    E { tag: tags::CONTENT_TIME, alias: "ContentTime", vr: VR::TM },
    E { tag: tags::MODALITY, alias: "Modality", vr: VR::CS },
    E { tag: tags::MANUFACTURER, alias: "Manufacturer", vr: VR::LO },
    E { tag: tags::INSTITUTION_NAME, alias: "InstitutionName", vr: VR::LO },
    E { tag: tags::INSTITUTION_ADDRESS, alias: "InstitutionAddress", vr: VR::ST },
    E { tag: tags::REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianSName", vr: VR::PN },
    E { tag: tags::STATION_NAME, alias: "StationName", vr: VR::SH },
    E { tag: tags::SERIES_DESCRIPTION, alias: "SeriesDescription", vr: VR::LO },
    E { tag: tags::INSTITUTIONAL_DEPARTMENT_NAME, alias: "InstitutionalDepartmentName", vr: VR::LO },
    E { tag: tags::MANUFACTURER_MODEL_NAME, alias: "ManufacturerSModelName", vr: VR::LO },
    E { tag: tags::DERIVATION_DESCRIPTION, alias: "DerivationDescription", vr: VR::ST },
    E { tag: tags::COMPLEX_IMAGE_COMPONENT, alias: "ComplexImageComponent", vr: VR::CS },
    E { tag: tags::PATIENT_NAME, alias: "PatientSName", vr: VR::PN },
    E { tag: tags::PATIENT_ID, alias: "PatientID", vr: VR::LO },
    E { tag: tags::PATIENT_BIRTH_DATE, alias: "PatientSBirthDate", vr: VR::DA },
    E { tag: tags::PATIENT_SEX, alias: "PatientSSex", vr: VR::CS },
    E { tag: tags::PATIENT_AGE, alias: "PatientSAge", vr: VR::AS },
    E { tag: tags::PATIENT_WEIGHT, alias: "PatientSWeight", vr: VR::DS },
    E { tag: tags::ANATOMICAL_ORIENTATION_TYPE, alias: "AnatomicalOrientationType", vr: VR::CS },
    E { tag: tags::BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: VR::CS },
    E { tag: tags::SCANNING_SEQUENCE, alias: "ScanningSequence", vr: VR::CS },
    E { tag: tags::SEQUENCE_VARIANT, alias: "SequenceVariant", vr: VR::CS },
    E { tag: tags::SCAN_OPTIONS, alias: "ScanOptions", vr: VR::CS },
    E { tag: tags::MR_ACQUISITION_TYPE, alias: "MRAcquisitionType", vr: VR::CS },
    E { tag: tags::SEQUENCE_NAME, alias: "SequenceName", vr: VR::SH },
    E { tag: tags::SLICE_THICKNESS, alias: "SliceThickness", vr: VR::DS },
    E { tag: tags::REPETITION_TIME, alias: "RepetitionTime", vr: VR::DS },
    E { tag: tags::ECHO_TIME, alias: "EchoTime", vr: VR::DS },
    E { tag: tags::INVERSION_TIME, alias: "InversionTime", vr: VR::DS },
    E { tag: tags::ECHO_NUMBERS, alias: "EchoNumbers", vr: VR::IS },
    E { tag: tags::MAGNETIC_FIELD_STRENGTH, alias: "MagneticFieldStrength", vr: VR::DS },
    E { tag: tags::SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: VR::DS },
    E { tag: tags::NUMBER_OF_PHASE_ENCODING_STEPS, alias: "NumberOfPhaseEncodingSteps", vr: VR::IS },
    E { tag: tags::ECHO_TRAIN_LENGTH, alias: "EchoTrainLength", vr: VR::IS },
    E { tag: tags::PERCENT_PHASE_FIELD_OF_VIEW, alias: "PercentPhaseFieldOfView", vr: VR::DS },
    E { tag: tags::PIXEL_BANDWIDTH, alias: "PixelBandwidth", vr: VR::DS },
    E { tag: tags::DEVICE_SERIAL_NUMBER, alias: "DeviceSerialNumber", vr: VR::LO },
    E { tag: tags::SOFTWARE_VERSIONS, alias: "SoftwareVersions", vr: VR::LO },
    E { tag: tags::PROTOCOL_NAME, alias: "ProtocolName", vr: VR::LO },
    E { tag: tags::RADIONUCLIDE_TOTAL_DOSE, alias: "RadionuclideTotalDose", vr: VR::DS },
    E { tag: tags::RADIONUCLIDE_HALF_LIFE, alias: "RadionuclideHalfLife", vr: VR::DS },
    E { tag: tags::RADIONUCLIDE_POSITRON_FRACTION, alias: "RadionuclidePositronFraction", vr: VR::DS },
    E { tag: tags::GANTRY_DETECTOR_TILT, alias: "GantryDetectorTilt", vr: VR::DS },
    E { tag: tags::EXPOSURE, alias: "Exposure", vr: VR::IS },
    E { tag: tags::ACQUISITION_MATRIX, alias: "AcquisitionMatrix", vr: VR::US },
    E { tag: tags::IN_PLANE_PHASE_ENCODING_DIRECTION, alias: "InPlanePhaseEncodingDirection", vr: VR::CS },
    E { tag: tags::FLIP_ANGLE, alias: "FlipAngle", vr: VR::DS },
    E { tag: tags::SAR, alias: "SAR", vr: VR::DS },
    E { tag: tags::PATIENT_POSITION, alias: "PatientPosition", vr: VR::CS },
    E { tag: tags::DIFFUSION_DIRECTIONALITY, alias: "DiffusionDirectionality", vr: VR::CS },
    E { tag: tags::EFFECTIVE_ECHO_TIME, alias: "EffectiveEchoTime", vr: VR::FD },
    E { tag: tags::DIFFUSION_B_VALUE, alias: "DiffusionBValue", vr: VR::FD },
    E { tag: tags::DIFFUSION_GRADIENT_ORIENTATION, alias: "DiffusionGradientOrientation", vr: VR::FD },
    E { tag: tags::MR_ECHO_SEQUENCE, alias: "MREchoSequence", vr: VR::SQ },
    E { tag: tags::SIEMENS_NUMBER_OF_IMAGES_IN_MOSAIC, alias: "NumberOfImagesInMosaic", vr: VR::US },
    E { tag: tags::DWELL_TIME, alias: "DwellTimeInNanoseconds", vr: VR::IS },
    E { tag: tags::LAST_SCAN_LOCATION, alias: "LastScanLocation", vr: VR::DS },
    E { tag: tags::BANDWIDTH_PER_PIXEL_PHASE_ENCODE, alias: "BandwidthPerPixelPhaseEncode", vr: VR::FD },
    E { tag: tags::GE_DIFFUSION_DIRECTION_X, alias: "DiffusionDirectionPhaseAxis", vr: VR::DS },
    E { tag: tags::GE_DIFFUSION_DIRECTION_Y, alias: "DiffusionDirectionFrequencyAxis", vr: VR::DS },
    E { tag: tags::GE_DIFFUSION_DIRECTION_Z, alias: "DiffusionDirectionSliceAxis", vr: VR::DS },
    E { tag: tags::STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: VR::UI },
    E { tag: tags::SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: VR::UI },
    E { tag: tags::STUDY_ID, alias: "StudyID", vr: VR::SH },
    E { tag: tags::SERIES_NUMBER, alias: "SeriesNumber", vr: VR::IS },
    E { tag: tags::ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: VR::IS },
    E { tag: tags::INSTANCE_NUMBER, alias: "InstanceNumber", vr: VR::IS },
    E { tag: tags::IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: VR::DS },
    E { tag: tags::IMAGE_ORIENTATION, alias: "ImageOrientationACRNEMA", vr: VR::DS },
    E { tag: tags::IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: VR::DS },
    E { tag: tags::IMAGES_IN_ACQUISITION, alias: "ImagesInAcquisition", vr: VR::IS },
    E { tag: tags::IMAGE_COMMENTS, alias: "ImageComments", vr: VR::LT },
    E { tag: tags::IN_STACK_POSITION_NUMBER, alias: "InStackPositionNumber", vr: VR::UL },
    E { tag: tags::TRIGGER_DELAY_TIME, alias: "NominalCardiacTriggerDelayTime", vr: VR::FD },
    E { tag: tags::DIMENSION_INDEX_VALUES, alias: "DimensionIndexValues", vr: VR::UL },
    E { tag: tags::GE_LOCATIONS_IN_ACQUISITION, alias: "LocationsInAcquisition", vr: VR::SS },
    E { tag: tags::GE_RTIA_TIMER, alias: "RTIATimer", vr: VR::DS },
    E { tag: tags::GE_PROTOCOL_DATA_BLOCK, alias: "ProtocolDataBlockCompressed", vr: VR::OB },
    E { tag: tags::SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: VR::US },
    E { tag: tags::PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: VR::CS },
    E { tag: tags::PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: VR::US },
    E { tag: tags::NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: VR::IS },
    E { tag: tags::ROWS, alias: "Rows", vr: VR::US },
    E { tag: tags::COLUMNS, alias: "Columns", vr: VR::US },
    E { tag: tags::PIXEL_SPACING, alias: "PixelSpacing", vr: VR::DS },
    E { tag: tags::BITS_ALLOCATED, alias: "BitsAllocated", vr: VR::US },
    E { tag: tags::BITS_STORED, alias: "BitsStored", vr: VR::US },
    E { tag: tags::PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: VR::US },
    E { tag: tags::RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: VR::DS },
    E { tag: tags::RESCALE_SLOPE, alias: "RescaleSlope", vr: VR::DS },
    E { tag: tags::GEIIS_PRIVATE_CREATOR, alias: "PrivateCreatorSlot", vr: VR::LO },
    E { tag: tags::SIEMENS_CSA_IMAGE_HEADER_INFO, alias: "CSAImageHeaderInfo", vr: VR::OB },
    E { tag: tags::SIEMENS_CSA_SERIES_HEADER_INFO, alias: "CSASeriesHeaderInfo", vr: VR::OB },
    E { tag: tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION, alias: "PerformedProcedureStepDescription", vr: VR::LO },
    E { tag: tags::REAL_WORLD_VALUE_INTERCEPT, alias: "RealWorldValueIntercept", vr: VR::FD },
    E { tag: tags::REAL_WORLD_VALUE_SLOPE, alias: "RealWorldValueSlope", vr: VR::FD },
    E { tag: tags::GE_USER_DEFINE_DATA, alias: "UserDefineData", vr: VR::OB },
    E { tag: tags::GE_EFFECTIVE_ECHO_SPACING, alias: "EffectiveEchoSpacing", vr: VR::SS },
    E { tag: tags::GE_DIFFUSION_B_VALUE, alias: "GEDiffusionBValue", vr: VR::IS },
    E { tag: tags::SIEMENS_ACQUISITION_MATRIX_TEXT, alias: "AcquisitionMatrixText", vr: VR::LO },
    E { tag: tags::SIEMENS_COIL_STRING, alias: "CoilString", vr: VR::LO },
    E { tag: tags::SIEMENS_PAT_MODE_TEXT, alias: "PATModeText", vr: VR::LO },
    E { tag: tags::NUMBER_OF_SLICES, alias: "NumberOfSlicesAKALocationsInAcquisition", vr: VR::US },
    E { tag: tags::DOSE_CALIBRATION_FACTOR, alias: "DoseCalibrationFactor", vr: VR::DS },
    E { tag: tags::IMAGE_INDEX, alias: "ImageIndex", vr: VR::US },
    E { tag: tags::UIH_PHASE_ENCODING_DIRECTION_DISPLAYED, alias: "PhaseEncodingDirectionDisplayed", vr: VR::SH },
    E { tag: tags::UIH_DIFFUSION_B_VALUE, alias: "UIHDiffusionBValue", vr: VR::FD },
    E { tag: tags::UIH_DIFFUSION_GRADIENT_DIRECTION, alias: "DiffusionGradientDirection", vr: VR::FD },
    E { tag: tags::UIH_NUMBER_OF_IMAGES_IN_GRID, alias: "NumberOfImagesInGrid", vr: VR::DS },
    E { tag: tags::ICON_IMAGE_SEQUENCE, alias: "IconImageSequence", vr: VR::SQ },
    E { tag: tags::PHILIPS_PMSCT_RLE1_PIXEL_DATA, alias: "PMSCTRLE1CompressedPixelData", vr: VR::OB },
    E { tag: tags::PHILIPS_DIFFUSION_B_FACTOR, alias: "DiffusionBFactor", vr: VR::FL },
    E { tag: tags::PHILIPS_SLICE_NUMBER_MR, alias: "SliceNumberMR", vr: VR::IS },
    E { tag: tags::PHILIPS_SLICE_ORIENTATION, alias: "SliceOrientation", vr: VR::CS },
    E { tag: tags::PHILIPS_NUMBER_OF_SLICES_MR, alias: "NumberOfSlicesMR", vr: VR::SL },
    E { tag: tags::PHILIPS_NUMBER_OF_DYNAMIC_SCANS, alias: "NumberOfDynamicScans", vr: VR::IS },
    E { tag: tags::PHILIPS_SCALE_SLOPE, alias: "ScaleSlope", vr: VR::FL },
    E { tag: tags::PHILIPS_MR_ACQUISITION_TYPE, alias: "PhilipsMRAcquisitionType", vr: VR::CS },
    E { tag: tags::PHILIPS_ANGULATION_AP, alias: "StackAngulationAP", vr: VR::FL },
    E { tag: tags::PHILIPS_ANGULATION_FH, alias: "StackAngulationFH", vr: VR::FL },
    E { tag: tags::PHILIPS_ANGULATION_RL, alias: "StackAngulationRL", vr: VR::FL },
    E { tag: tags::PHILIPS_OFFCENTRE_AP, alias: "StackOffcentreAP", vr: VR::FL },
    E { tag: tags::PHILIPS_OFFCENTRE_FH, alias: "StackOffcentreFH", vr: VR::FL },
    E { tag: tags::PHILIPS_OFFCENTRE_RL, alias: "StackOffcentreRL", vr: VR::FL },
    E { tag: tags::PHILIPS_DIFFUSION_DIRECTION_RL, alias: "DiffusionDirectionRL", vr: VR::FL },
    E { tag: tags::PHILIPS_DIFFUSION_DIRECTION_AP, alias: "DiffusionDirectionAP", vr: VR::FL },
    E { tag: tags::PHILIPS_DIFFUSION_DIRECTION_FH, alias: "DiffusionDirectionFH", vr: VR::FL },
    E { tag: tags::PHILIPS_PRIVATE_PER_FRAME_SEQUENCE, alias: "PrivatePerFrameSequence", vr: VR::SQ },
    E { tag: tags::PHILIPS_DIFFUSION_B_VALUE_NUMBER, alias: "MRImageDiffusionBValueNumber", vr: VR::IS },
    E { tag: tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE, alias: "SharedFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: tags::WAVEFORM_SEQUENCE, alias: "WaveformSequence", vr: VR::SQ },
    E { tag: tags::FLOAT_PIXEL_DATA, alias: "FloatPixelData", vr: VR::OF },
    E { tag: tags::DOUBLE_FLOAT_PIXEL_DATA, alias: "DoubleFloatPixelData", vr: VR::OD },
    E { tag: tags::PIXEL_DATA, alias: "PixelData", vr: VR::OW },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_unique() {
        assert_eq!(registry().len(), ENTRIES.len());
        assert_eq!(registry().by_name.len(), ENTRIES.len());
    }

    #[test]
    fn lookup_by_tag_and_name() {
        let entry = registry().by_tag(tags::PIXEL_DATA).unwrap();
        assert_eq!(entry.alias, "PixelData");
        assert_eq!(registry().by_name("DimensionIndexValues").map(|e| e.tag), Some(tags::DIMENSION_INDEX_VALUES));
        assert_eq!(registry().by_tag(tags::PHILIPS_SCALE_SLOPE).map(|e| e.vr), Some(VR::FL));
        assert_eq!(alias_of(tags::SIEMENS_CSA_IMAGE_HEADER_INFO), Some("CSAImageHeaderInfo"));
    }
}
