//! `INTEGER` decoding (`spec.md` §4.3).

use crate::{Error, ErrorKind, Length, Token};
use core::convert::TryFrom;

/// Content is decoded relative to an unknown absolute offset: a standalone
/// [`Token`] doesn't carry one (`spec.md` §3, "Token" has only a type
/// descriptor, pointer, and length), so every error this module returns is
/// reported at offset zero. Callers that need a real offset should prefer
/// decoding through [`crate::Reader`], whose errors carry the position the
/// failing header was read from.
const NO_POSITION: Length = Length::ZERO;

fn decode_wide(data: &[u8]) -> Result<i128, ErrorKind> {
    if data.is_empty() {
        return Err(ErrorKind::Malformed { tag: None });
    }

    if data.len() > 1 {
        let non_minimal_zero = data[0] == 0x00 && data[1] & 0x80 == 0;
        let non_minimal_ones = data[0] == 0xFF && data[1] & 0x80 != 0;
        if non_minimal_zero || non_minimal_ones {
            return Err(ErrorKind::Malformed { tag: None });
        }
    }

    if data.len() > 16 {
        // Can't fit even the widest integer type this crate decodes into.
        return Err(ErrorKind::Malformed { tag: None });
    }

    let negative = data[0] & 0x80 != 0;
    let mut bytes = [if negative { 0xFFu8 } else { 0u8 }; 16];
    let start = bytes.len() - data.len();
    bytes[start..].copy_from_slice(data);
    Ok(i128::from_be_bytes(bytes))
}

/// Decode an ASN.1 `INTEGER` token as a signed 32-bit machine integer.
///
/// Fails with [`ErrorKind::Malformed`] for empty content, a non-minimal
/// two's-complement encoding, or a value that overflows `i32`
/// (`spec.md` §4.3: "Overflow of the target machine-integer width is
/// malformed").
pub fn decode_i32(token: &Token<'_>) -> Result<i32, Error> {
    let tag = token.tag;
    let wide = decode_wide(token.data).map_err(|kind| reattach_tag(kind, tag).at(NO_POSITION))?;
    i32::try_from(wide).map_err(|_| ErrorKind::Malformed { tag: Some(tag) }.at(NO_POSITION))
}

/// Decode an ASN.1 `INTEGER` token as a signed 64-bit machine integer.
pub fn decode_i64(token: &Token<'_>) -> Result<i64, Error> {
    let tag = token.tag;
    let wide = decode_wide(token.data).map_err(|kind| reattach_tag(kind, tag).at(NO_POSITION))?;
    i64::try_from(wide).map_err(|_| ErrorKind::Malformed { tag: Some(tag) }.at(NO_POSITION))
}

fn reattach_tag(kind: ErrorKind, tag: crate::Tag) -> ErrorKind {
    match kind {
        ErrorKind::Malformed { .. } => ErrorKind::Malformed { tag: Some(tag) },
        ErrorKind::Unsupported { .. } => ErrorKind::Unsupported { tag: Some(tag) },
        other => other,
    }
}
