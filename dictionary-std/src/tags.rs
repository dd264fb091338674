//! Attribute tag constants for every attribute the header scanner recognizes,
//! standard and vendor-private alike.
//!
//! Private tags are named after the vendor that defines them.
//! Their meaning only holds when the matching manufacturer was detected.
use dcmstream_core::Tag;

// -- file meta information --

/// File Meta Information Group Length (0002,0000)
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// Transfer Syntax UID (0002,0010)
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Source Application Entity Title (0002,0016)
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);

// -- identification --

/// Image Type (0008,0008)
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Study Date (0008,0020)
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Acquisition Date (0008,0022)
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Acquisition DateTime (0008,002A)
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time (0008,0030)
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Acquisition Time (0008,0032)
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time (0008,0033)
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Modality (0008,0060)
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070)
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name (0008,0080)
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Address (0008,0081)
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// Referring Physician's Name (0008,0090)
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Station Name (0008,1010)
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Series Description (0008,103E)
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Institutional Department Name (0008,1040)
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Manufacturer's Model Name (0008,1090)
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Derivation Description (0008,2111)
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Complex Image Component (0008,9208)
#[rustfmt::skip]
pub const COMPLEX_IMAGE_COMPONENT: Tag = Tag(0x0008, 0x9208);

// -- patient --

/// Patient's Name (0010,0010)
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID (0010,0020)
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Patient's Birth Date (0010,0030)
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Sex (0010,0040)
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Patient's Age (0010,1010)
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient's Weight (0010,1030)
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Anatomical Orientation Type (0010,2210)
#[rustfmt::skip]
pub const ANATOMICAL_ORIENTATION_TYPE: Tag = Tag(0x0010, 0x2210);

// -- acquisition --

/// Body Part Examined (0018,0015)
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Scanning Sequence (0018,0020)
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// Sequence Variant (0018,0021)
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// Scan Options (0018,0022)
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MR Acquisition Type (0018,0023)
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// Sequence Name (0018,0024)
#[rustfmt::skip]
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// Slice Thickness (0018,0050)
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// Repetition Time (0018,0080)
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// Echo Time (0018,0081)
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// Inversion Time (0018,0082)
#[rustfmt::skip]
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// Echo Numbers (0018,0086)
#[rustfmt::skip]
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// Magnetic Field Strength (0018,0087)
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// Spacing Between Slices (0018,0088)
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Number of Phase Encoding Steps (0018,0089)
#[rustfmt::skip]
pub const NUMBER_OF_PHASE_ENCODING_STEPS: Tag = Tag(0x0018, 0x0089);
/// Echo Train Length (0018,0091)
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// Percent Phase Field of View (0018,0094)
#[rustfmt::skip]
pub const PERCENT_PHASE_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x0094);
/// Pixel Bandwidth (0018,0095)
#[rustfmt::skip]
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// Device Serial Number (0018,1000)
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Software Versions (0018,1020)
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Protocol Name (0018,1030)
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Radionuclide Total Dose (0018,1074)
#[rustfmt::skip]
pub const RADIONUCLIDE_TOTAL_DOSE: Tag = Tag(0x0018, 0x1074);
/// Radionuclide Half Life (0018,1075)
#[rustfmt::skip]
pub const RADIONUCLIDE_HALF_LIFE: Tag = Tag(0x0018, 0x1075);
/// Radionuclide Positron Fraction (0018,1076)
#[rustfmt::skip]
pub const RADIONUCLIDE_POSITRON_FRACTION: Tag = Tag(0x0018, 0x1076);
/// Gantry/Detector Tilt (0018,1120)
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// Exposure (0018,1152)
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Acquisition Matrix (0018,1310)
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// In-plane Phase Encoding Direction (0018,1312)
#[rustfmt::skip]
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// Flip Angle (0018,1314)
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// SAR (0018,1316)
#[rustfmt::skip]
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// Patient Position (0018,5100)
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// Diffusion Directionality (0018,9075)
#[rustfmt::skip]
pub const DIFFUSION_DIRECTIONALITY: Tag = Tag(0x0018, 0x9075);
/// Effective Echo Time (0018,9082)
#[rustfmt::skip]
pub const EFFECTIVE_ECHO_TIME: Tag = Tag(0x0018, 0x9082);
/// Diffusion b-value (0018,9087)
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// Diffusion Gradient Orientation (0018,9089)
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// MR Echo Sequence (0018,9114)
#[rustfmt::skip]
pub const MR_ECHO_SEQUENCE: Tag = Tag(0x0018, 0x9114);

// -- Siemens and GE private group 0019 --

/// Siemens: Number of Images in Mosaic (0019,100A)
#[rustfmt::skip]
pub const SIEMENS_NUMBER_OF_IMAGES_IN_MOSAIC: Tag = Tag(0x0019, 0x100A);
/// Dwell Time in nanoseconds (0019,1018)
#[rustfmt::skip]
pub const DWELL_TIME: Tag = Tag(0x0019, 0x1018);
/// Last Scan Location (0019,101B)
#[rustfmt::skip]
pub const LAST_SCAN_LOCATION: Tag = Tag(0x0019, 0x101B);
/// Bandwidth per Pixel Phase Encode (0019,1028)
#[rustfmt::skip]
pub const BANDWIDTH_PER_PIXEL_PHASE_ENCODE: Tag = Tag(0x0019, 0x1028);
/// GE: Diffusion Direction, phase axis (0019,10BB)
#[rustfmt::skip]
pub const GE_DIFFUSION_DIRECTION_X: Tag = Tag(0x0019, 0x10BB);
/// GE: Diffusion Direction, frequency axis (0019,10BC)
#[rustfmt::skip]
pub const GE_DIFFUSION_DIRECTION_Y: Tag = Tag(0x0019, 0x10BC);
/// GE: Diffusion Direction, slice axis (0019,10BD)
#[rustfmt::skip]
pub const GE_DIFFUSION_DIRECTION_Z: Tag = Tag(0x0019, 0x10BD);

// -- relationship and geometry --

/// Study Instance UID (0020,000D)
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID (0020,000E)
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID (0020,0010)
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number (0020,0011)
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number (0020,0012)
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number (0020,0013)
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Image Position (Patient) (0020,0032)
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation, ACR-NEMA (0020,0035)
#[rustfmt::skip]
pub const IMAGE_ORIENTATION: Tag = Tag(0x0020, 0x0035);
/// Image Orientation (Patient) (0020,0037)
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Images in Acquisition (0020,1002)
#[rustfmt::skip]
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// Image Comments (0020,4000)
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// In-Stack Position Number (0020,9057)
#[rustfmt::skip]
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// Nominal Cardiac Trigger Delay Time (0020,9153)
#[rustfmt::skip]
pub const TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9153);
/// Dimension Index Values (0020,9157)
#[rustfmt::skip]
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);

// -- GE private groups 0021, 0025 --

/// GE: Locations in Acquisition (0021,104F)
#[rustfmt::skip]
pub const GE_LOCATIONS_IN_ACQUISITION: Tag = Tag(0x0021, 0x104F);
/// GE: RTIA Timer (0021,105E)
#[rustfmt::skip]
pub const GE_RTIA_TIMER: Tag = Tag(0x0021, 0x105E);
/// GE: Protocol Data Block, compressed (0025,101B)
#[rustfmt::skip]
pub const GE_PROTOCOL_DATA_BLOCK: Tag = Tag(0x0025, 0x101B);

// -- image pixel --

/// Samples per Pixel (0028,0002)
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation (0028,0004)
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration (0028,0006)
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number of Frames (0028,0008)
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010)
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011)
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing (0028,0030)
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Bits Allocated (0028,0100)
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored (0028,0101)
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// Pixel Representation (0028,0103)
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Rescale Intercept (0028,1052)
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope (0028,1053)
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);

// -- Siemens private group 0029 --

/// Private creator slot (0029,0010), used by GEIIS as a marker
#[rustfmt::skip]
pub const GEIIS_PRIVATE_CREATOR: Tag = Tag(0x0029, 0x0010);
/// Siemens: CSA Image Header Info (0029,1010)
#[rustfmt::skip]
pub const SIEMENS_CSA_IMAGE_HEADER_INFO: Tag = Tag(0x0029, 0x1010);
/// Siemens: CSA Series Header Info (0029,1020)
#[rustfmt::skip]
pub const SIEMENS_CSA_SERIES_HEADER_INFO: Tag = Tag(0x0029, 0x1020);

// -- procedure and real world values --

/// Performed Procedure Step Description (0040,0254)
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// Real World Value Intercept (0040,9224)
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);
/// Real World Value Slope (0040,9225)
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);

// -- GE private group 0043 --

/// GE: User Define Data (0043,102A)
#[rustfmt::skip]
pub const GE_USER_DEFINE_DATA: Tag = Tag(0x0043, 0x102A);
/// GE: Effective Echo Spacing (0043,102C)
#[rustfmt::skip]
pub const GE_EFFECTIVE_ECHO_SPACING: Tag = Tag(0x0043, 0x102C);
/// GE: Diffusion b-value (0043,1039)
#[rustfmt::skip]
pub const GE_DIFFUSION_B_VALUE: Tag = Tag(0x0043, 0x1039);

// -- Siemens private group 0051 --

/// Siemens: Acquisition Matrix Text (0051,100B)
#[rustfmt::skip]
pub const SIEMENS_ACQUISITION_MATRIX_TEXT: Tag = Tag(0x0051, 0x100B);
/// Siemens: Coil String (0051,100F)
#[rustfmt::skip]
pub const SIEMENS_COIL_STRING: Tag = Tag(0x0051, 0x100F);
/// Siemens: PAT Mode Text (0051,1011)
#[rustfmt::skip]
pub const SIEMENS_PAT_MODE_TEXT: Tag = Tag(0x0051, 0x1011);

// -- nuclear medicine --

/// Number of Slices, a.k.a. locations in acquisition (0054,0081)
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// Dose Calibration Factor (0054,1322)
#[rustfmt::skip]
pub const DOSE_CALIBRATION_FACTOR: Tag = Tag(0x0054, 0x1322);
/// Image Index (0054,1330)
#[rustfmt::skip]
pub const IMAGE_INDEX: Tag = Tag(0x0054, 0x1330);

// -- UIH private group 0065 --

/// UIH: Phase Encoding Direction Displayed (0065,1005)
#[rustfmt::skip]
pub const UIH_PHASE_ENCODING_DIRECTION_DISPLAYED: Tag = Tag(0x0065, 0x1005);
/// UIH: Diffusion b-value (0065,1009)
#[rustfmt::skip]
pub const UIH_DIFFUSION_B_VALUE: Tag = Tag(0x0065, 0x1009);
/// UIH: Diffusion Gradient Direction (0065,1037)
#[rustfmt::skip]
pub const UIH_DIFFUSION_GRADIENT_DIRECTION: Tag = Tag(0x0065, 0x1037);
/// UIH: Number of Images in Grid (0065,1050)
#[rustfmt::skip]
pub const UIH_NUMBER_OF_IMAGES_IN_GRID: Tag = Tag(0x0065, 0x1050);

// -- icons and proprietary pixel data --

/// Icon Image Sequence (0088,0200)
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// Elscint/Philips: PMSCT_RLE1 compressed pixel data (07A1,100A)
#[rustfmt::skip]
pub const PHILIPS_PMSCT_RLE1_PIXEL_DATA: Tag = Tag(0x07A1, 0x100A);

// -- Philips private groups 2001, 2005 --

/// Philips: Diffusion B-Factor (2001,1003)
#[rustfmt::skip]
pub const PHILIPS_DIFFUSION_B_FACTOR: Tag = Tag(0x2001, 0x1003);
/// Philips: Slice Number MR (2001,100A)
#[rustfmt::skip]
pub const PHILIPS_SLICE_NUMBER_MR: Tag = Tag(0x2001, 0x100A);
/// Philips: Slice Orientation (2001,100B)
#[rustfmt::skip]
pub const PHILIPS_SLICE_ORIENTATION: Tag = Tag(0x2001, 0x100B);
/// Philips: Number of Slices MR (2001,1018)
#[rustfmt::skip]
pub const PHILIPS_NUMBER_OF_SLICES_MR: Tag = Tag(0x2001, 0x1018);
/// Philips: Number of Dynamic Scans (2001,1081)
#[rustfmt::skip]
pub const PHILIPS_NUMBER_OF_DYNAMIC_SCANS: Tag = Tag(0x2001, 0x1081);
/// Philips: Scale Slope (2005,100E)
#[rustfmt::skip]
pub const PHILIPS_SCALE_SLOPE: Tag = Tag(0x2005, 0x100E);
/// Philips: MR Acquisition Type (2005,106F)
#[rustfmt::skip]
pub const PHILIPS_MR_ACQUISITION_TYPE: Tag = Tag(0x2005, 0x106F);
/// Philips: Stack Angulation AP (2005,1071)
#[rustfmt::skip]
pub const PHILIPS_ANGULATION_AP: Tag = Tag(0x2005, 0x1071);
/// Philips: Stack Angulation FH (2005,1072)
#[rustfmt::skip]
pub const PHILIPS_ANGULATION_FH: Tag = Tag(0x2005, 0x1072);
/// Philips: Stack Angulation RL (2005,1073)
#[rustfmt::skip]
pub const PHILIPS_ANGULATION_RL: Tag = Tag(0x2005, 0x1073);
/// Philips: Stack Offcentre AP (2005,1078)
#[rustfmt::skip]
pub const PHILIPS_OFFCENTRE_AP: Tag = Tag(0x2005, 0x1078);
/// Philips: Stack Offcentre FH (2005,1079)
#[rustfmt::skip]
pub const PHILIPS_OFFCENTRE_FH: Tag = Tag(0x2005, 0x1079);
/// Philips: Stack Offcentre RL (2005,107A)
#[rustfmt::skip]
pub const PHILIPS_OFFCENTRE_RL: Tag = Tag(0x2005, 0x107A);
/// Philips: Diffusion Direction RL (2005,10B0)
#[rustfmt::skip]
pub const PHILIPS_DIFFUSION_DIRECTION_RL: Tag = Tag(0x2005, 0x10B0);
/// Philips: Diffusion Direction AP (2005,10B1)
#[rustfmt::skip]
pub const PHILIPS_DIFFUSION_DIRECTION_AP: Tag = Tag(0x2005, 0x10B1);
/// Philips: Diffusion Direction FH (2005,10B2)
#[rustfmt::skip]
pub const PHILIPS_DIFFUSION_DIRECTION_FH: Tag = Tag(0x2005, 0x10B2);
/// Philips: Private Per-frame Sequence (2005,140F)
#[rustfmt::skip]
pub const PHILIPS_PRIVATE_PER_FRAME_SEQUENCE: Tag = Tag(0x2005, 0x140F);
/// Philips: MR Image Diffusion B-Value Number (2005,1412)
#[rustfmt::skip]
pub const PHILIPS_DIFFUSION_B_VALUE_NUMBER: Tag = Tag(0x2005, 0x1412);

// -- functional groups, waveforms and pixel data --

/// Shared Functional Groups Sequence (5200,9229)
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// Per-frame Functional Groups Sequence (5200,9230)
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// Waveform Sequence (5400,0100)
#[rustfmt::skip]
pub const WAVEFORM_SEQUENCE: Tag = Tag(0x5400, 0x0100);
/// Float Pixel Data (7FE0,0008)
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// Double Float Pixel Data (7FE0,0009)
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// Pixel Data (7FE0,0010)
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
