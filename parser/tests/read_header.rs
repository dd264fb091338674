//! End-to-end scans of synthetic files.

mod support;

use dcmstream_core::{ByteRange, CompressionScheme, Manufacturer, Modality, VolumeShape};
use dcmstream_parser::{
    read_header_from_bytes, read_header_from_path, ReadOptions, Termination,
};
use rstest::rstest;
use std::io::Write;
use support::*;

const PIXEL_BYTES: u32 = 64 * 64 * 2;

#[test]
fn plain_slice() {
    let builder = mr_slice(EXPLICIT_VR_LE, "SIEMENS").pixel_data(PIXEL_BYTES);
    let offset = builder.pixel_offset().unwrap();
    let header = read_header_from_bytes(&builder.build(), &ReadOptions::default());

    assert_eq!(header.termination, Termination::PixelData);
    assert!(header.is_valid());
    assert!(header.issues.is_empty());

    let record = &header.record;
    assert_eq!(record.encoding.transfer_syntax, EXPLICIT_VR_LE);
    assert!(record.encoding.explicit_vr);
    assert!(record.encoding.little_endian);
    assert_eq!(record.acquisition.modality, Modality::Mr);
    assert_eq!(record.acquisition.manufacturer, Manufacturer::Siemens);
    assert_eq!(record.acquisition.echo_time, Some(30.));
    assert_eq!(record.series.number, Some(7));
    assert_eq!(record.series.instance_number, Some(12));
    assert_eq!(record.series.protocol_name, "ep2d_bold");
    assert_eq!(record.geometry.columns, Some(64));
    assert_eq!(record.geometry.rows, Some(64));
    assert_eq!(record.geometry.voxel_size, Some([0.75, 0.5, 2.5]));
    assert_eq!(record.geometry.position, Some([-100., -120.5, 30.]));
    assert_eq!(record.geometry.orientation, Some([1., 0., 0., 0., 1., 0.]));
    assert_eq!(record.geometry.shape, VolumeShape { slices: 1, volumes: 1 });
    assert_eq!(record.pixel.bits_allocated, Some(16));
    assert_eq!(
        record.pixel.data,
        Some(ByteRange::new(offset, Some(u64::from(PIXEL_BYTES))))
    );
    assert_eq!(record.slice_bytes(), Some(u64::from(PIXEL_BYTES)));
}

#[test]
fn big_endian_matches_little_endian() {
    let le = mr_slice(EXPLICIT_VR_LE, "SIEMENS").pixel_data(PIXEL_BYTES).build();
    let be = mr_slice(EXPLICIT_VR_BE, "SIEMENS").pixel_data(PIXEL_BYTES).build();
    let le = read_header_from_bytes(&le, &ReadOptions::default()).record;
    let be = read_header_from_bytes(&be, &ReadOptions::default()).record;

    assert!(!be.encoding.little_endian);
    assert!(be.is_valid);
    assert_eq!(le.acquisition, be.acquisition);
    assert_eq!(le.series, be.series);
    assert_eq!(le.geometry, be.geometry);
    assert_eq!(le.pixel, be.pixel);
}

#[test]
fn implicit_vr_after_meta_group() {
    let builder = mr_slice(IMPLICIT_VR_LE, "SIEMENS").pixel_data(PIXEL_BYTES);
    let offset = builder.pixel_offset().unwrap();
    let header = read_header_from_bytes(&builder.build(), &ReadOptions::default());

    assert!(header.is_valid());
    let record = &header.record;
    assert!(!record.encoding.explicit_vr);
    assert_eq!(record.geometry.rows, Some(64));
    assert_eq!(record.geometry.voxel_size, Some([0.75, 0.5, 2.5]));
    assert_eq!(record.pixel.data.map(|d| d.offset), Some(offset));
}

#[test]
fn bare_data_set_without_preamble() {
    let builder = mr_elements(DicomBuilder::bare(), "SIEMENS").pixel_data(PIXEL_BYTES);
    let offset = builder.pixel_offset().unwrap();
    let header = read_header_from_bytes(&builder.build(), &ReadOptions::default());

    assert_eq!(header.termination, Termination::PixelData);
    assert!(header.is_valid());
    assert!(!header.record.encoding.explicit_vr);
    assert_eq!(header.record.series.instance_number, Some(12));
    assert_eq!(header.record.pixel.data.map(|d| d.offset), Some(offset));
}

#[test]
fn truncated_files_never_panic() {
    let full = mr_slice(EXPLICIT_VR_LE, "SIEMENS").pixel_data(PIXEL_BYTES);
    let header_len = full.len() - PIXEL_BYTES as usize;
    let bytes = full.build();
    for len in 256..header_len {
        let header = read_header_from_bytes(&bytes[..len], &ReadOptions::default());
        assert!(!header.is_valid(), "valid at {} bytes", len);
        assert_eq!(header.termination, Termination::EndOfStream);
    }
}

#[test]
fn short_file_is_invalid() {
    let bytes = mr_slice(EXPLICIT_VR_LE, "SIEMENS").build();
    let header = read_header_from_bytes(&bytes, &ReadOptions::default());
    assert_eq!(header.termination, Termination::EndOfStream);
    assert!(!header.is_valid());
    assert_eq!(header.record.pixel.data, None);
    // everything before the end is still reported
    assert_eq!(header.record.geometry.rows, Some(64));
}

#[test]
fn scans_are_repeatable() {
    let bytes = mr_slice(EXPLICIT_VR_LE, "SIEMENS").pixel_data(PIXEL_BYTES).build();
    let first = read_header_from_bytes(&bytes, &ReadOptions::default());
    let second = read_header_from_bytes(&bytes, &ReadOptions::default());
    assert_eq!(first.record, second.record);
    assert_eq!(first.termination, second.termination);
}

#[rstest]
#[case(256)]
#[case(1024)]
#[case(1 << 20)]
fn segment_size_does_not_change_the_record(#[case] chunk_size: usize) {
    let bytes = mr_slice(EXPLICIT_VR_LE, "SIEMENS").pixel_data(PIXEL_BYTES).build();
    let reference = read_header_from_bytes(&bytes, &ReadOptions::new().whole_file(true));
    let segmented = read_header_from_bytes(&bytes, &ReadOptions::new().chunk_size(chunk_size));
    assert_eq!(reference.record, segmented.record);
}

#[test]
fn vendor_private_tags_are_isolated() {
    let b_value = (0x0043, 0x1039);
    let ge = mr_slice(EXPLICIT_VR_LE, "GE MEDICAL SYSTEMS")
        .text(b_value, b"IS", "1000\\8\\0\\0")
        .pixel_data(PIXEL_BYTES)
        .build();
    let siemens = mr_slice(EXPLICIT_VR_LE, "SIEMENS")
        .text(b_value, b"IS", "1000\\8\\0\\0")
        .pixel_data(PIXEL_BYTES)
        .build();

    let ge = read_header_from_bytes(&ge, &ReadOptions::default()).record;
    let siemens = read_header_from_bytes(&siemens, &ReadOptions::default()).record;
    assert_eq!(ge.acquisition.manufacturer, Manufacturer::Ge);
    assert_eq!(ge.diffusion.b_value, Some(1000.));
    assert_eq!(siemens.diffusion.b_value, None);
}

#[test]
fn single_fragment_is_located() {
    let builder = mr_slice(JPEG_LOSSLESS, "SIEMENS").encapsulated(&[1000]);
    let offset = builder.pixel_offset().unwrap();
    let header = read_header_from_bytes(&builder.build(), &ReadOptions::default());

    assert_eq!(header.termination, Termination::PixelData);
    assert!(header.is_valid());
    assert_eq!(
        header.record.encoding.compression,
        CompressionScheme::JpegLossless
    );
    assert_eq!(
        header.record.pixel.data,
        Some(ByteRange::new(offset, Some(1000)))
    );
}

#[test]
fn multiple_fragments_are_rejected() {
    let bytes = mr_slice(JPEG_LOSSLESS, "SIEMENS")
        .encapsulated(&[1000, 1000])
        .build();
    let header = read_header_from_bytes(&bytes, &ReadOptions::default());
    assert_eq!(header.termination, Termination::MultipleFragments);
    assert!(!header.is_valid());
    assert_eq!(header.record.pixel.data, None);
}

#[test]
fn jpeg2000_needs_opting_in() {
    let uid = "1.2.840.10008.1.2.4.90";
    let bytes = mr_slice(uid, "SIEMENS").encapsulated(&[1000]).build();

    let header = read_header_from_bytes(&bytes, &ReadOptions::default());
    assert_eq!(header.termination, Termination::UnsupportedTransferSyntax);
    assert!(!header.is_valid());

    let header = read_header_from_bytes(&bytes, &ReadOptions::new().accept_jpeg2000(true));
    assert_eq!(header.termination, Termination::PixelData);
    assert!(header.is_valid());
    assert_eq!(header.record.encoding.compression, CompressionScheme::Jpeg2000);
}

/// Four frames of a Philips enhanced file, stored out of order,
/// with dimension index values (volume, slice).
#[test]
fn philips_enhanced_frames_are_reordered() {
    let frames: [([u32; 2], f64); 4] = [
        ([2, 1], 20.),
        ([1, 2], 10.),
        ([1, 1], 10.),
        ([2, 2], 20.),
    ];
    let mut builder = DicomBuilder::prefixed(EXPLICIT_VR_LE)
        .text((0x0008, 0x0060), b"CS", "MR")
        .text((0x0008, 0x0070), b"LO", "Philips Medical Systems")
        .text((0x0020, 0x000E), b"UI", "1.3.46.670589.11.42")
        .text((0x0020, 0x0011), b"IS", "301")
        .text((0x0020, 0x0013), b"IS", "1")
        .text((0x0028, 0x0008), b"IS", "4")
        .us((0x0028, 0x0010), 64)
        .us((0x0028, 0x0011), 64)
        .us((0x0028, 0x0100), 16)
        .sequence((0x5200, 0x9230));
    for (dimensions, echo_time) in frames.iter() {
        builder = builder
            .item()
            .sequence((0x0020, 0x9111))
            .item()
            .ul((0x0020, 0x9157), dimensions)
            .ul((0x0020, 0x9057), &[dimensions[1]])
            .end_item()
            .end_sequence()
            .sequence((0x0018, 0x9114))
            .item()
            .fd((0x0018, 0x9082), *echo_time)
            .end_item()
            .end_sequence()
            .end_item();
    }
    let bytes = builder.end_sequence().pixel_data(4 * PIXEL_BYTES).build();
    let header = read_header_from_bytes(&bytes, &ReadOptions::default());

    assert_eq!(header.termination, Termination::PixelData);
    assert!(header.is_valid());
    let record = &header.record;
    assert_eq!(record.geometry.frames, Some(4));
    assert_eq!(record.geometry.shape, VolumeShape { slices: 2, volumes: 2 });
    assert_eq!(record.frames.frame_entries, 4);
    assert_eq!(record.frames.slice_order, vec![2, 1, 0, 3]);

    let echo_times: Vec<_> = record.frames.volumes.iter().map(|v| v.echo_time).collect();
    assert_eq!(echo_times, vec![Some(10.), Some(20.)]);
    assert!(record.flags.multi_echo);
    assert!(record.flags.scale_or_te_varies);
}

#[test]
fn philips_frame_table_is_bounded() {
    let mut builder = DicomBuilder::prefixed(EXPLICIT_VR_LE)
        .text((0x0008, 0x0070), b"LO", "Philips Medical Systems")
        .sequence((0x5200, 0x9230));
    for slice in 1..=3u32 {
        builder = builder
            .item()
            .ul((0x0020, 0x9157), &[1, slice])
            .sequence((0x0018, 0x9114))
            .item()
            .end_item()
            .end_sequence()
            .end_item();
    }
    let bytes = builder.end_sequence().pixel_data(PIXEL_BYTES).build();
    let header = read_header_from_bytes(&bytes, &ReadOptions::new().max_frames(2));

    assert_eq!(header.termination, Termination::SafetyBound);
    assert!(!header.is_valid());
    assert!(header
        .issues
        .iter()
        .any(|e| matches!(e, dcmstream_parser::Error::FrameTableFull { capacity: 2 })));
}

#[test]
fn icon_pixel_data_does_not_end_the_scan() {
    let builder = mr_slice(EXPLICIT_VR_LE, "SIEMENS")
        .sequence((0x0088, 0x0200))
        .item()
        .us((0x0028, 0x0010), 8)
        .us((0x0028, 0x0011), 8)
        .us((0x0028, 0x0100), 16)
        .raw((0x7FE0, 0x0010), b"OW", &[0x55; 128])
        .end_item()
        .end_sequence()
        .pixel_data(PIXEL_BYTES);
    let offset = builder.pixel_offset().unwrap();
    let header = read_header_from_bytes(&builder.build(), &ReadOptions::default());

    assert_eq!(header.termination, Termination::PixelData);
    assert!(header.is_valid());
    let record = &header.record;
    assert_eq!(record.geometry.rows, Some(64));
    assert_eq!(record.geometry.columns, Some(64));
    assert_eq!(record.pixel.bits_allocated, Some(16));
    assert_eq!(
        record.pixel.data,
        Some(ByteRange::new(offset, Some(u64::from(PIXEL_BYTES))))
    );
}

#[test]
fn deep_nesting_is_reported_and_skipped() {
    let mut builder = mr_slice(EXPLICIT_VR_LE, "SIEMENS");
    for _ in 0..4 {
        builder = builder.sequence((0x0040, 0x0275)).item();
    }
    for _ in 0..4 {
        builder = builder.end_item().end_sequence();
    }
    let builder = builder.pixel_data(PIXEL_BYTES);
    let offset = builder.pixel_offset().unwrap();
    let options = ReadOptions::default().max_nesting_depth(2);
    let header = read_header_from_bytes(&builder.build(), &options);

    assert_eq!(header.termination, Termination::PixelData);
    assert!(header.is_valid());
    assert_eq!(header.issues.len(), 2);
    assert!(header
        .issues
        .iter()
        .all(|e| matches!(e, dcmstream_parser::Error::NestingOverflow { .. })));
    assert_eq!(header.record.pixel.data.map(|d| d.offset), Some(offset));
    assert_eq!(header.record.geometry.rows, Some(64));
}

#[test]
fn read_from_path() {
    let bytes = mr_slice(EXPLICIT_VR_LE, "SIEMENS").pixel_data(PIXEL_BYTES).build();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let header = read_header_from_path(file.path(), &ReadOptions::default()).unwrap();
    let from_bytes = read_header_from_bytes(&bytes, &ReadOptions::default());
    assert!(header.is_valid());
    assert_eq!(header.record, from_bytes.record);
}
