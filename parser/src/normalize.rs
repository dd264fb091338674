//! Post-pass over a completed scan.
//!
//! Reconciles fields which the scan collects from several competing
//! sources, derives the volume layout of multi-frame files,
//! and decides whether the pixel data can be extracted.
//! Runs exactly once per scan, in the order below.

use crate::state::ScanState;
use dcmstream_core::record::VolumeParameters;
use dcmstream_core::{ByteRange, CompressionScheme, Manufacturer, Modality, VolumeShape};
use dcmstream_encoding::text::float_prefix;
use tracing::{error, info, warn};
use xxhash_rust::xxh32::xxh32;

/// Pixel data must start past the preamble and a minimal meta group.
const MIN_PIXEL_OFFSET: u64 = 144;
/// Length of `YYYYMMDD`.
const DATE_LEN: usize = 8;
/// Philips classic DTI series numbers are disambiguated above this.
const PHILIPS_SERIES_LIMIT: i64 = 99_999;

pub(crate) fn normalize(s: &mut ScanState) {
    locate_encapsulated_pixels(s);
    pet_instance_number(s);
    split_acquisition_date_time(s);
    study_date_time(s);
    resolve_slice_count(s);
    validate(s);
    fix_voxel_size(s);
    reject_lossy_high_depth(s);
    mosaic_slices(s);
    siemens_impossible_gradient(s);
    protocol_name_fallbacks(s);
    split_frames(s);
    order_frames(s);
    default_instance_number(s);
    philips_dti_series(s);
    series_checksum(s);
    multiband_factor(s);
}

fn locate_encapsulated_pixels(s: &mut ScanState) {
    if let Some(fragment) = s.first_fragment {
        if s.fragments == 1 {
            s.record.pixel.data = Some(fragment);
        }
    } else if s.encapsulated && s.record.pixel.data.is_none() {
        if let Some(offset) = s.pixel_element_start {
            warn!("Compressed image without image fragments, assuming image offset defined by (7FE0,0010)");
            s.record.pixel.data = Some(ByteRange::new(offset, None));
        }
    }
}

fn pet_instance_number(s: &mut ScanState) {
    if s.record.acquisition.modality == Modality::Pt {
        if let Some(index) = s.pet_image_index.filter(|i| *i > 0) {
            s.record.series.instance_number = Some(index);
        }
    }
}

/// Some files carry only (0008,002A), e.g. `20161117131643.80000`.
fn split_acquisition_date_time(s: &mut ScanState) {
    let acquisition = &mut s.record.acquisition;
    let text = &acquisition.date_time;
    let unset = |v: Option<f64>| v.map_or(true, |v| v == 0.);
    if text.len() <= DATE_LEN + 5 || !unset(acquisition.date) || !unset(acquisition.time) {
        return;
    }
    let (date, time) = match (text.get(..DATE_LEN), text.get(DATE_LEN..)) {
        (Some(date), Some(time)) => (float_prefix(date), float_prefix(time)),
        _ => return,
    };
    acquisition.date = date;
    acquisition.time = time;
}

fn study_date_time(s: &mut ScanState) {
    let study = &mut s.record.study;
    if let Some(date) = float_prefix(&study.date) {
        let time = float_prefix(&study.time).unwrap_or(0.);
        study.date_time = Some(date * 1e6 + time);
    }
}

/// Slices per volume.
///
/// The order of precedence among the three sources is heuristic:
/// it follows what each vendor is known to get right, not a rule.
fn resolve_slice_count(s: &mut ScanState) {
    let manufacturer = s.manufacturer();
    let ge_locations = s.ge_locations.filter(|n| *n > 0).map(|n| n as u32);
    let geometry = &mut s.record.geometry;
    match manufacturer {
        Manufacturer::Philips => {
            if geometry.locations_in_acquisition.map_or(true, |n| n == 0) {
                geometry.locations_in_acquisition = s.philips.locations;
            }
        }
        Manufacturer::Ge => {
            if let Some(images) = s.images_in_acquisition.filter(|n| *n > 0) {
                geometry.locations_in_acquisition = Some(images as u32);
            }
            let current = geometry.locations_in_acquisition.filter(|n| *n > 0);
            match (current, ge_locations) {
                (Some(n), Some(ge)) if n != ge => geometry.locations_in_acquisition = Some(ge),
                (None, Some(ge)) => geometry.locations_in_acquisition = Some(ge),
                _ => {}
            }
        }
        _ => {}
    }

    if manufacturer == Manufacturer::Philips {
        let frames = geometry.frames.unwrap_or(1);
        if s.positions_seen > frames {
            warn!(
                "Please check slice thicknesses: {} positions reported for {} slices",
                s.positions_seen, frames
            );
        }
    }
}

fn validate(s: &mut ScanState) {
    let record = &mut s.record;
    let offset_ok = record
        .pixel
        .data
        .map_or(false, |data| data.offset > MIN_PIXEL_OFFSET);
    let columns_ok = record.geometry.columns.map_or(false, |c| c > 1);
    let rows_ok = record.geometry.rows.map_or(false, |r| r > 1);
    record.is_valid = offset_ok && columns_ok && rows_ok;
}

fn fix_voxel_size(s: &mut ScanState) {
    let geometry = &mut s.record.geometry;
    let [mut x, mut y] = geometry.pixel_spacing.unwrap_or([0., 0.]);
    let mut z = geometry
        .spacing_between_slices
        .filter(|z| *z > 0.)
        .or(geometry.slice_thickness)
        .unwrap_or(0.);
    if x > f32::EPSILON && y < f32::EPSILON {
        warn!("Please check voxel size");
        y = x;
    }
    if y > f32::EPSILON && x < f32::EPSILON {
        warn!("Please check voxel size");
        x = y;
    }
    if z < f32::EPSILON {
        warn!("Unable to determine slice thickness: please check voxel size");
        z = 1.;
    }
    geometry.voxel_size = Some([x, y, z]);
}

fn reject_lossy_high_depth(s: &mut ScanState) {
    let record = &mut s.record;
    if record.encoding.compression != CompressionScheme::JpegLossy {
        return;
    }
    if let Some(bits) = record.pixel.bits_allocated.filter(|b| *b > 8) {
        error!(
            "Unable to decode {}-bit images with transfer syntax {}",
            bits, record.encoding.transfer_syntax
        );
        record.is_valid = false;
    }
}

fn mosaic_slices(s: &mut ScanState) {
    let record = &mut s.record;
    if record.siemens.mosaic_slices.is_none() {
        if let Some(images) = s.mosaic_images.filter(|n| *n > 1) {
            record.siemens.mosaic_slices = Some(images as u32);
        }
    }
    if record.manufacturer() != Manufacturer::Siemens
        || !record.flags.mosaic
        || record.siemens.mosaic_slices.is_some()
    {
        return;
    }
    let steps = match record.acquisition.phase_encoding_steps.filter(|n| *n > 0) {
        Some(steps) => steps as u32,
        None => return,
    };
    if let (Some(columns), Some(rows)) = (record.geometry.columns, record.geometry.rows) {
        if columns % steps == 0 && rows % steps == 0 {
            record.siemens.mosaic_slices = Some((columns / steps) * (rows / steps));
            warn!("Mosaic inferred without CSA header (check number of slices and spatial orientation)");
        }
    }
}

/// Some Siemens software reports b=0 images with an impossible direction.
fn siemens_impossible_gradient(s: &mut ScanState) {
    let diffusion = &mut s.record.diffusion;
    if s.record.acquisition.manufacturer != Manufacturer::Siemens {
        return;
    }
    if let Some(gradient) = diffusion.gradient {
        if gradient.iter().all(|v| *v < -1.) {
            diffusion.b_value = Some(0.);
        }
    }
}

fn protocol_name_fallbacks(s: &mut ScanState) {
    let manufacturer = s.manufacturer();
    let series = &mut s.record.series;
    if manufacturer == Manufacturer::Ge && series.description.len() > 1 {
        series.protocol_name = series.description.clone();
    }
    if series.protocol_name.is_empty() && series.description.len() > 1 {
        series.protocol_name = series.description.clone();
    }
    // Siemens sequence names vary per volume
    if series.protocol_name.is_empty()
        && series.sequence_name.len() > 1
        && manufacturer != Manufacturer::Siemens
    {
        series.protocol_name = series.sequence_name.clone();
    }
}

/// Split the frames of the file into slices × volumes.
/// The first rule that divides the frame count evenly wins.
fn split_frames(s: &mut ScanState) {
    let frames = s.record.geometry.frames.unwrap_or(1).max(1);
    let divides = |n: u32| n > 0 && frames % n == 0;

    let locations = s.philips.locations.filter(|n| divides(*n));
    let dynamics = s
        .philips
        .dynamic_scans
        .filter(|n| *n > 1 && frames > 1)
        .map(|n| n as u32)
        .filter(|n| divides(*n));
    let in_stack = Some(s.philips.max_in_stack_position)
        .filter(|n| *n > 1 && frames > 1 && divides(*n));

    let shape = if let Some(slices) = locations {
        VolumeShape {
            slices,
            volumes: frames / slices,
        }
    } else if let Some(volumes) = dynamics {
        VolumeShape {
            slices: frames / volumes,
            volumes,
        }
    } else if let Some(slices) = in_stack {
        VolumeShape {
            slices,
            volumes: frames / slices,
        }
    } else {
        VolumeShape {
            slices: frames,
            volumes: 1,
        }
    };
    s.record.geometry.shape = shape;

    let geometry = &mut s.record.geometry;
    match (s.philips.position_start, s.philips.position_end) {
        (Some(start), Some(end)) => {
            geometry.position = Some(start);
            geometry.position_last = Some(end);
        }
        (Some(start), None) => geometry.position = Some(start),
        _ => {}
    }
}

/// Recover the display order of enhanced multi-frame files
/// and sample the parameters of each packed volume.
fn order_frames(s: &mut ScanState) {
    let entries = s.frames.len();
    s.record.frames.frame_entries = entries;
    let frames = s.record.geometry.frames.unwrap_or(1).max(1) as usize;
    if entries <= 1 || entries != frames {
        return;
    }
    s.record.frames.slice_order = s.frames.sort();

    let shape = s.record.geometry.shape;
    let volumes = shape.volumes as usize;
    if volumes <= 1 || volumes >= s.max_volumes {
        return;
    }
    let samples = s.frames.volume_samples(shape.slices as usize, volumes);
    let record = &s.record;
    let frame = &s.frame;
    let te_varies = samples
        .iter()
        .any(|p| p.echo_time != record.acquisition.echo_time);
    let scale_varies = samples.iter().any(|p| {
        p.slope != record.intensity.slope || p.intercept != record.intensity.intercept
    });
    let kind_varies = samples.iter().any(|p: &VolumeParameters| {
        p.phase != frame.phase
            || p.real != frame.real
            || p.imaginary != frame.imaginary
            || p.trigger_delay_time != record.acquisition.trigger_delay_time
    });
    if te_varies || scale_varies || kind_varies {
        info!("Parameters vary across 3D volumes packed in a single file");
    }

    let flags = &mut s.record.flags;
    flags.scale_or_te_varies |= te_varies || scale_varies || kind_varies;
    flags.multi_echo |= te_varies;
    s.record.frames.volumes = samples;
}

fn default_instance_number(s: &mut ScanState) {
    if s.record.is_valid && s.record.series.instance_number.is_none() {
        error!("Instance number (0020,0013) not found");
        s.record.series.instance_number = Some(1);
    }
}

/// Philips classic DTI slices may share series, instance and gradient
/// numbers; only the b-value number tells them apart.
fn philips_dti_series(s: &mut ScanState) {
    if s.frames.len() > 0 || s.manufacturer() != Manufacturer::Philips {
        return;
    }
    let b_number = match s.philips_b_value_number.filter(|n| *n > 0) {
        Some(n) => i64::from(n),
        None => return,
    };
    if let Some(number) = s.record.series.number.filter(|n| *n > PHILIPS_SERIES_LIMIT) {
        s.record.series.number = Some(number + b_number * 1000);
    }
}

fn series_checksum(s: &mut ScanState) {
    let checksum = xxh32(s.record.series.instance_uid.as_bytes(), 0);
    s.record.series.instance_uid_checksum = Some(checksum);

    let max_dimensions = s.max_dimensions;
    if s.frames.len() < max_dimensions {
        let values = &mut s.record.frames.dimension_index_values;
        values.resize(max_dimensions, 0);
        values[max_dimensions - 1] = checksum;
    }
    if s.record.series.number.map_or(true, |n| n < 1) {
        s.record.series.number = Some(i64::from(checksum));
    }
}

/// Simultaneous multi-slice may be reported in (0051,1011) only.
fn multiband_factor(s: &mut ScanState) {
    let factor = match (s.record.siemens.multiband_factor, s.imapat_multiband) {
        (Some(csa), Some(pat)) => Some(csa.max(pat)),
        (csa, pat) => csa.or(pat),
    };
    s.record.siemens.multiband_factor = factor;
    s.record.acquisition.multiband_factor = factor;
}
