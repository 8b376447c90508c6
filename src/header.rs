//! Identifier & length codec (`spec.md` §4.1).

use crate::{Error, ErrorKind, Length, Tag};
use core::convert::TryFrom;

/// Largest number of big-endian length octets this crate's `u32`-backed
/// [`Length`] can represent. `N` in the long form greater than this is
/// `unsupported`, per `spec.md` §4.1.
const MAX_LENGTH_OCTETS: usize = core::mem::size_of::<u32>();

/// Reserved long-form length octet (`0xFF`, i.e. `N = 0x7F`).
///
/// Grounded on `examples/original_source/src/tests/asn1-tests.c`'s
/// `invalid2` case: `{0x06, 0xFF}` decodes as `ASININE_ERROR_MALFORMED`, not
/// `ASININE_ERROR_UNSUPPORTED` — the all-ones length-of-length octet is a
/// reserved bit pattern, not merely an over-wide (but otherwise legal)
/// length count.
const RESERVED_LENGTH_OCTET_COUNT: u8 = 0x7F;

/// Tag and length of a TLV production (`spec.md` §3, "Token": type
/// descriptor; this is the part of a [`crate::Token`] that precedes its
/// content).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// Tag of the value.
    pub tag: Tag,
    /// Declared length of the value's content, in octets.
    pub length: Length,
}

impl Header {
    /// Decode a [`Header`] from `input` at `offset`.
    ///
    /// On success, returns the header together with the offset of the first
    /// content octet (i.e. `offset` advanced past the identifier and length
    /// octets), having already checked that the content fits within
    /// `input`. A declared length that runs past the end of the buffer is
    /// the "content overrun" `spec.md` §4.1 calls out and is folded into
    /// [`ErrorKind::Malformed`] here rather than left for the caller to
    /// discover.
    pub fn decode(input: &[u8], offset: usize) -> Result<(Self, usize), Error> {
        let position = Length::try_from(offset)?;

        let id_octet = *input
            .get(offset)
            .ok_or_else(|| ErrorKind::Malformed { tag: None }.at(position))?;
        let tag = Tag::from_byte(id_octet, position)?;

        let length_offset = offset + 1;
        let length_octet = *input
            .get(length_offset)
            .ok_or_else(|| ErrorKind::Malformed { tag: Some(tag) }.at(position))?;

        let (length, content_offset) = if length_octet & 0x80 == 0 {
            // Short form: the low 7 bits are the length itself.
            (Length::from(length_octet), length_offset + 1)
        } else {
            let octet_count = length_octet & 0x7F;

            if octet_count == 0 {
                // Indefinite length: unsupported by this crate's DER
                // subset, and reported as malformed per `spec.md` §4.1.
                return Err(ErrorKind::Malformed { tag: Some(tag) }.at(position));
            }
            if octet_count == RESERVED_LENGTH_OCTET_COUNT {
                return Err(ErrorKind::Malformed { tag: Some(tag) }.at(position));
            }
            if usize::from(octet_count) > MAX_LENGTH_OCTETS {
                return Err(ErrorKind::Unsupported { tag: Some(tag) }.at(position));
            }

            let octets_start = length_offset + 1;
            let octets_end = octets_start + usize::from(octet_count);
            let octets = input
                .get(octets_start..octets_end)
                .ok_or_else(|| ErrorKind::Malformed { tag: Some(tag) }.at(position))?;

            if octets[0] == 0 {
                // Leading zero: a longer-than-necessary encoding.
                return Err(ErrorKind::Malformed { tag: Some(tag) }.at(position));
            }

            let mut value: u32 = 0;
            for &byte in octets {
                value = (value << 8) | u32::from(byte);
            }

            if value < 0x80 {
                // Would have fit in short form.
                return Err(ErrorKind::Malformed { tag: Some(tag) }.at(position));
            }

            (Length::from(value), octets_end)
        };

        let content_end = content_offset
            .checked_add(usize::try_from(length)?)
            .ok_or_else(|| ErrorKind::Unsupported { tag: Some(tag) }.at(position))?;

        if content_end > input.len() {
            return Err(ErrorKind::Malformed { tag: Some(tag) }.at(position));
        }

        Ok((Self { tag, length }, content_offset))
    }

    /// The content length as a `usize`, for indexing into the input slice.
    ///
    /// `Header::decode` already proved this length fits both a `u32` and
    /// the remaining input, so the fallback of `0` is unreachable in
    /// practice; it exists only so this helper has no failure mode for
    /// callers holding a [`Header`] built some other way.
    pub(crate) fn data_len(&self) -> usize {
        usize::try_from(self.length).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_length() {
        let (header, content_offset) = Header::decode(&[0x05, 0x02, 0xAA, 0xBB], 0).unwrap();
        assert_eq!(header.length, Length::from(2u8));
        assert_eq!(content_offset, 2);
    }

    #[test]
    fn long_form_minimal_is_accepted() {
        let mut input = [0u8; 3 + 128];
        input[0] = 0x01;
        input[1] = 0x81;
        input[2] = 0x80;
        let (header, content_offset) = Header::decode(&input, 0).unwrap();
        assert_eq!(u32::from(header.length), 128);
        assert_eq!(content_offset, 3);
    }

    #[test]
    fn long_form_non_minimal_is_malformed() {
        // `spec.md` §8 scenario 5: value 1 would fit in short form.
        assert!(Header::decode(&[0x01, 0x81, 0x01], 0).is_err());
    }

    #[test]
    fn long_form_leading_zero_is_malformed() {
        assert!(Header::decode(&[0x01, 0x83, 0x00, 0x01, 0x00], 0).is_err());
    }

    #[test]
    fn long_form_too_many_octets_is_unsupported() {
        let mut input = [0x01u8; 14];
        input[1] = 0x80 | 0x0C;
        assert_eq!(
            Header::decode(&input, 0).unwrap_err().kind(),
            ErrorKind::Unsupported { tag: Some(Tag::from_byte(0x01, Length::ZERO).unwrap()) }
        );
    }

    #[test]
    fn reserved_length_octet_is_malformed() {
        // original source `test_asn1_parse_invalid`'s `invalid2`: 0xFF is
        // the all-ones length-of-length octet, reserved rather than merely
        // over-wide.
        assert_eq!(
            Header::decode(&[0x06, 0xFF], 0).unwrap_err().kind(),
            ErrorKind::Malformed { tag: Some(Tag::from_byte(0x06, Length::ZERO).unwrap()) }
        );
    }

    #[test]
    fn indefinite_length_is_malformed() {
        assert!(Header::decode(&[0x06, 0x80], 0).is_err());
    }

    #[test]
    fn content_overrun_is_malformed() {
        assert!(Header::decode(&[0x05, 0x05, 0x00], 0).is_err());
    }

    #[test]
    fn truncated_header_is_malformed() {
        assert!(Header::decode(&[0x05], 0).is_err());
        assert!(Header::decode(&[], 0).is_err());
    }
}
