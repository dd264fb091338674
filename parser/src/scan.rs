//! The element loop.
//!
//! One pass from the first element to the pixel data.
//! Each iteration reads an element header, updates the nesting state,
//! routes the element to its handler if it has one,
//! and then either skips the value or descends into it.

use crate::dispatch;
use crate::element::Element;
use crate::nesting::NestingTracker;
use crate::options::ReadOptions;
use crate::source::SegmentedSource;
use crate::state::ScanState;
use crate::switch::Applied;
use crate::vendor::philips;
use crate::Termination;
use dcmstream_core::{ByteRange, Manufacturer, Tag, VR};
use dcmstream_dictionary::alias_of;
use dcmstream_encoding::decode::{u16_value, u32_value};
use dcmstream_encoding::{BasicDecoder, Endianness};
use std::io::{Read, Seek};
use tracing::{error, trace, warn};

/// Bytes of the longest element header (explicit VR, 32-bit length).
const MAX_HEADER_LEN: usize = 12;
/// Fragments this small are taken for the basic offset table.
const MIN_FRAGMENT_LEN: u32 = 128;
/// Elements of these groups are ignored inside an icon sequence.
const IMAGE_PIXEL_GROUP_MASK: u16 = 0x0028;

const UNDEFINED_LENGTH: u32 = u32::MAX;

/// The decoded header of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ElementHeader {
    tag: Tag,
    vr: Option<VR>,
    length: u32,
    /// bytes from the start of the element to its value
    header_len: u64,
}

fn read_tag(head: &[u8], decoder: BasicDecoder) -> Tag {
    let group = u16_value(&head[0..2], decoder).unwrap_or_default();
    let element = u16_value(&head[2..4], decoder).unwrap_or_default();
    Tag(group, element)
}

/// Decode the length part of an element header.
fn read_header(tag: Tag, head: &[u8], decoder: BasicDecoder, explicit_vr: bool) -> ElementHeader {
    let u32_at = |at: usize| u32_value(&head[at..at + 4], decoder).unwrap_or_default();
    let short = |vr| ElementHeader {
        tag,
        vr,
        length: u32_at(4),
        header_len: 8,
    };
    if tag.is_item_or_delimiter() || !explicit_vr || head[5] < b'A' {
        return short(None);
    }
    match VR::from_binary([head[4], head[5]]) {
        Some(vr) if vr.has_extended_length() => ElementHeader {
            tag,
            vr: Some(vr),
            length: u32_at(8),
            header_len: 12,
        },
        vr => ElementHeader {
            tag,
            vr,
            length: u32::from(u16_value(&head[6..8], decoder).unwrap_or_default()),
            header_len: 8,
        },
    }
}

/// Scan the stream from `start` until a termination condition is met.
///
/// Stores the reason for stopping in `state.stop`.
pub(crate) fn scan<R>(
    source: &mut SegmentedSource<R>,
    state: &mut ScanState,
    start: u64,
    options: &ReadOptions,
) where
    R: Read + Seek,
{
    let file_len = source.file_len();
    let chunk_size = source.chunk_size();
    let mut nesting = NestingTracker::new(options.get_max_nesting_depth());
    let mut pos = start;

    while state.stop.is_none() && pos + 8 < file_len {
        let head_len = (MAX_HEADER_LEN as u64).min(file_len - pos);
        match source.ensure(pos, head_len) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!("{}", e);
                state.issues.push(e);
                state.stop(Termination::ReadFailure);
                break;
            }
        }
        let mut head = [0u8; MAX_HEADER_LEN];
        match source.slice(pos, head_len) {
            Some(bytes) => head[..bytes.len()].copy_from_slice(bytes),
            None => break,
        }

        let mut tag = read_tag(&head, state.decoder);
        match state.switch.on_element(tag.group()) {
            Some(Applied::ToBigEndian) => {
                state.decoder = BasicDecoder::new(Endianness::Big);
                state.record.encoding.little_endian = false;
                tag = read_tag(&head, state.decoder);
            }
            Some(Applied::ToImplicitVr) => {
                state.explicit_vr = false;
                state.record.encoding.explicit_vr = false;
            }
            None => {}
        }

        // leaving items
        let is_delimiter = tag == Tag::ITEM_DELIMITER || tag == Tag::SEQUENCE_DELIMITER;
        if is_delimiter {
            state.icon = false;
        }
        let mut left = nesting.leave_passed(pos) > 0;
        if tag == Tag::ITEM_DELIMITER {
            nesting.close_item();
            left = true;
        }
        state.depth = nesting.depth();
        if left {
            state.philips_per_frame = false;
            philips::finalize_frame(state);
            if state.stop.is_some() {
                break;
            }
        }

        let header = read_header(tag, &head, state.decoder, state.explicit_vr);
        let value_offset = pos + header.header_len;
        let undefined = header.length == UNDEFINED_LENGTH;
        if value_offset > file_len {
            break;
        }
        trace!(
            "{} {} len={} at {} depth={}",
            tag,
            alias_of(tag).unwrap_or("-"),
            header.length,
            pos,
            state.depth
        );

        if tag == Tag::ITEM {
            if state.encapsulated {
                fragment(state, value_offset, header.length);
                pos = value_offset + if undefined { 0 } else { u64::from(header.length) };
            } else {
                let end = if undefined {
                    None
                } else {
                    Some(value_offset + u64::from(header.length))
                };
                if let Err(e) = nesting.enter_item(end) {
                    warn!("{}", e);
                    state.issues.push(e);
                }
                state.depth = nesting.depth();
                pos = value_offset;
            }
            continue;
        }
        if is_delimiter {
            if state.encapsulated && tag == Tag::SEQUENCE_DELIMITER {
                state.stop(Termination::PixelData);
            }
            pos = value_offset;
            continue;
        }

        state.descend = false;
        let masked = state.icon && (tag.group() & IMAGE_PIXEL_GROUP_MASK) == IMAGE_PIXEL_GROUP_MASK;
        if let Some(action) = dispatch::route(tag).filter(|_| !masked) {
            let available = if undefined {
                0
            } else {
                u64::from(header.length).min(file_len.saturating_sub(value_offset))
            };
            let value: &[u8] = if available <= chunk_size {
                match source.ensure(value_offset, available) {
                    Ok(true) => source.slice(value_offset, available).unwrap_or_default(),
                    Ok(false) => &[],
                    Err(e) => {
                        error!("{}", e);
                        state.issues.push(e);
                        state.stop(Termination::ReadFailure);
                        break;
                    }
                }
            } else {
                &[]
            };
            let element = Element {
                tag,
                vr: header.vr,
                length: header.length,
                offset: value_offset,
                value,
                decoder: state.decoder,
            };
            action(state, &element);
        }

        let implicit_sequence = !state.explicit_vr
            && state.is(Manufacturer::Philips)
            && philips::is_implicit_sequence(tag);
        let descend =
            header.vr == Some(VR::SQ) || undefined || implicit_sequence || state.descend;
        pos = value_offset + if descend { 0 } else { u64::from(header.length) };
    }

    if state.stop.is_none() {
        let termination = if state.encapsulated && state.first_fragment.is_some() {
            Termination::PixelData
        } else {
            Termination::EndOfStream
        };
        state.stop(termination);
    }
}

/// One item inside encapsulated pixel data.
fn fragment(state: &mut ScanState, offset: u64, length: u32) {
    if length <= MIN_FRAGMENT_LEN || length == UNDEFINED_LENGTH {
        return;
    }
    state.fragments += 1;
    if state.first_fragment.is_none() {
        state.first_fragment = Some(ByteRange::new(offset, Some(u64::from(length))));
    } else {
        error!("Compressed image stored as multiple fragments: reassembly is not supported");
        state.stop(Termination::MultipleFragments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    #[test]
    fn header_length_classes() {
        let le = BasicDecoder::default();
        // (0028,0010) US, 16-bit length
        let head = [0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0, 0, 0, 0];
        let h = read_header(read_tag(&head, le), &head, le, true);
        assert_eq!((h.vr, h.length, h.header_len), (Some(VR::US), 2, 8));

        // (7FE0,0010) OW, reserved bytes and 32-bit length
        let head = [0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0, 0, 0x00, 0x20, 0x00, 0x00];
        let h = read_header(read_tag(&head, le), &head, le, true);
        assert_eq!((h.vr, h.length, h.header_len), (Some(VR::OW), 0x2000, 12));

        // explicit VR stream holding an implicit element
        let head = [0x09, 0x00, 0x10, 0x00, 0x06, 0x00, 0x00, 0x00, 0, 0, 0, 0];
        let h = read_header(read_tag(&head, le), &head, le, true);
        assert_eq!((h.vr, h.length, h.header_len), (None, 6, 8));

        // implicit VR
        let head = [0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00, 0, 0, 0, 0];
        let h = read_header(read_tag(&head, le), &head, le, false);
        assert_eq!((h.vr, h.length, h.header_len), (None, 2, 8));

        // item with undefined length
        let head = [0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
        let h = read_header(read_tag(&head, le), &head, le, true);
        assert_eq!(h.tag, Tag::ITEM);
        assert_eq!(h.length, UNDEFINED_LENGTH);
    }

    #[rustfmt::skip]
    #[test]
    fn big_endian_header() {
        let be = BasicDecoder::new(Endianness::Big);
        let head = [0x00, 0x28, 0x00, 0x11, b'U', b'S', 0x00, 0x02, 0, 0, 0, 0];
        let h = read_header(read_tag(&head, be), &head, be, true);
        assert_eq!(h.tag, Tag(0x0028, 0x0011));
        assert_eq!(h.length, 2);
    }
}
