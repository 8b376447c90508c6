//! `BIT STRING` decoding (`spec.md` §4.3).

use crate::{Error, ErrorKind, Length, Token};

/// A decoded `BIT STRING`, borrowing the caller-supplied buffer it was
/// copied into.
///
/// The bytes this view reports have already had each octet bit-reversed
/// relative to the wire encoding (`spec.md` §9: "bit 0 of each output byte is
/// the first bit of that octet's group on the wire"), and exclude the
/// leading unused-bits-count octet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BitString<'b> {
    data: &'b [u8],
    unused_bits: u8,
}

impl<'b> BitString<'b> {
    /// The decoded, bit-reversed content octets.
    pub fn as_bytes(&self) -> &'b [u8] {
        self.data
    }

    /// Number of unused trailing bits (0..=7) in the last content octet.
    pub fn unused_bits(&self) -> u8 {
        self.unused_bits
    }
}

/// Reverse the bit order of a single octet.
///
/// The wire encoding of a `BIT STRING` is most-significant-bit-first within
/// each octet; this crate's presentation form puts bit 0 of the wire octet
/// first, per `spec.md` §9.
const fn reverse_bits(byte: u8) -> u8 {
    byte.reverse_bits()
}

/// Decode an ASN.1 `BIT STRING` token into `buf`.
///
/// `token` must be primitive: a constructed `BIT STRING` is a BER, not DER,
/// construct and is rejected with [`ErrorKind::Malformed`] (`spec.md` §8
/// scenario 4). The content's leading unused-bits-count octet must be
/// `0..=7`, and the unused bit positions of the last content octet must be
/// zero on the wire; either violation is also [`ErrorKind::Malformed`]. A
/// `buf` shorter than the decoded content is [`ErrorKind::Memory`] — that
/// check runs before the content-validity checks below, since a buffer too
/// small to hold the output is a caller error independent of whether the
/// wire content would otherwise decode cleanly.
pub fn decode_bit_string<'b>(token: &Token<'_>, buf: &'b mut [u8]) -> Result<BitString<'b>, Error> {
    let tag = token.tag;

    if tag.constructed {
        return Err(ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO));
    }

    let (&unused_octet, content) = token
        .data
        .split_first()
        .ok_or_else(|| ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO))?;

    if buf.len() < content.len() {
        return Err(Error::memory(Length::ZERO, content.len(), buf.len()));
    }

    if unused_octet > 7 {
        return Err(ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO));
    }
    if unused_octet > 0 && content.is_empty() {
        return Err(ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO));
    }

    if let Some(&last) = content.last() {
        let padding_mask = (1u8 << unused_octet) - 1;
        if last & padding_mask != 0 {
            return Err(ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO));
        }
    }

    let out = &mut buf[..content.len()];
    for (dst, &src) in out.iter_mut().zip(content) {
        *dst = reverse_bits(src);
    }

    Ok(BitString {
        data: out,
        unused_bits: unused_octet,
    })
}
