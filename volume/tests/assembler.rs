use dcmstream_parser::ReadOptions;
use dcmstream_volume::{
    DirectorySource, Error, MemorySource, SliceFileName, VolumeAssembler,
};

const COLUMNS: u16 = 3;
const ROWS: u16 = 2;
const SLICE_BYTES: usize = (COLUMNS * ROWS) as usize;

fn element(out: &mut Vec<u8>, group: u16, elem: u16, vr: &[u8; 2], value: &[u8]) {
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&elem.to_le_bytes());
    out.extend_from_slice(vr);
    out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    out.extend_from_slice(value);
}

/// An 8-bit 3×2 slice header, without pixel data.
fn slice_header(slices: Option<u16>) -> Vec<u8> {
    let mut out = vec![0u8; 128];
    out.extend_from_slice(b"DICM");
    let uid = b"1.2.840.10008.1.2.1\0";
    out.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00]);
    out.extend_from_slice(&(8 + uid.len() as u32).to_le_bytes());
    element(&mut out, 0x0002, 0x0010, b"UI", uid);

    let description = [b'x'; 80];
    element(&mut out, 0x0008, 0x103E, b"LO", &description);
    element(&mut out, 0x0028, 0x0010, b"US", &ROWS.to_le_bytes());
    element(&mut out, 0x0028, 0x0011, b"US", &COLUMNS.to_le_bytes());
    element(&mut out, 0x0028, 0x0100, b"US", &8u16.to_le_bytes());
    if let Some(slices) = slices {
        element(&mut out, 0x0054, 0x0081, b"US", &slices.to_le_bytes());
    }
    out
}

/// A complete slice whose pixels all hold `value`.
fn slice_file(slices: u16, value: u8) -> Vec<u8> {
    let mut out = slice_header(Some(slices));
    out.extend_from_slice(&[0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0, 0]);
    out.extend_from_slice(&(SLICE_BYTES as u32).to_le_bytes());
    out.extend_from_slice(&[value; SLICE_BYTES]);
    out
}

fn first_name() -> SliceFileName {
    "rt001.1.dcm".parse().unwrap()
}

#[test]
fn volume_is_released_once_complete() {
    let mut source = MemorySource::new();
    source.insert("rt001.1.dcm", slice_file(3, 1));
    source.insert("rt001.2.dcm", slice_file(3, 2));
    let mut assembler = VolumeAssembler::new(source, first_name(), ReadOptions::default());

    // the first call only learns the layout
    assert_eq!(assembler.poll().unwrap(), None);
    let layout = assembler.layout().unwrap();
    assert_eq!(layout.slice_bytes, SLICE_BYTES);
    assert_eq!(layout.slices, 3);

    assert_eq!(assembler.poll().unwrap(), None);
    assert_eq!(assembler.slices_ready(), 2);
}

#[test]
fn slices_are_stacked_in_reverse() {
    let mut source = MemorySource::new();
    for t in 1..=3u8 {
        source.insert(format!("rt001.{}.dcm", t), slice_file(3, t));
    }
    let mut assembler = VolumeAssembler::new(source, first_name(), ReadOptions::default());
    assert!(assembler.prepare().unwrap());

    let volume = assembler.poll().unwrap().unwrap();
    assert_eq!(volume.index, 1);
    assert_eq!(volume.first_slice, 1001);
    let mut expected = vec![3u8; SLICE_BYTES];
    expected.extend_from_slice(&[2; SLICE_BYTES]);
    expected.extend_from_slice(&[1; SLICE_BYTES]);
    assert_eq!(volume.data, expected);

    assert_eq!(assembler.volume_index(), 2);
    assert_eq!(assembler.first_slice(), 1004);
    assert_eq!(assembler.slices_ready(), 0);
    assert_eq!(assembler.poll().unwrap(), None);
}

#[test]
fn pixels_without_pixel_element_are_taken_from_the_end() {
    let mut bare = slice_header(Some(1));
    bare.extend_from_slice(&[9; SLICE_BYTES]);
    let mut source = MemorySource::new();
    source.insert("rt001.1.dcm", bare);
    let mut assembler = VolumeAssembler::new(source, first_name(), ReadOptions::default());
    assert!(assembler.prepare().unwrap());
    let volume = assembler.poll().unwrap().unwrap();
    assert_eq!(volume.data, vec![9; SLICE_BYTES]);
}

#[test]
fn partial_slice_is_retried() {
    let full = slice_file(1, 7);
    let partial = full[..full.len() - 2].to_vec();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rt001.1.dcm"), &partial).unwrap();
    let source = DirectorySource::new(dir.path());
    let mut assembler = VolumeAssembler::new(source, first_name(), ReadOptions::default());
    assert!(assembler.prepare().unwrap());
    assert_eq!(assembler.poll().unwrap(), None);

    std::fs::write(dir.path().join("rt001.1.dcm"), &full).unwrap();
    let volume = assembler.poll().unwrap().unwrap();
    assert_eq!(volume.data, vec![7; SLICE_BYTES]);
}

#[test]
fn missing_first_slice_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = DirectorySource::new(dir.path());
    let mut assembler = VolumeAssembler::new(source, first_name(), ReadOptions::default());
    assert!(!assembler.prepare().unwrap());
    assert_eq!(assembler.poll().unwrap(), None);
    assert!(assembler.layout().is_none());
}

#[test]
fn slice_count_is_required() {
    let mut source = MemorySource::new();
    source.insert("rt001.1.dcm", slice_header(None));
    let mut assembler = VolumeAssembler::new(source, first_name(), ReadOptions::default());
    let err = assembler.prepare().unwrap_err();
    assert!(matches!(err, Error::UnknownSliceCount { .. }));
}
