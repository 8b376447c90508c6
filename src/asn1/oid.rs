//! `OBJECT IDENTIFIER` value type and decoding (`spec.md` §4.4, §4.3).

use crate::{Error, ErrorKind, Length, Token};
use core::cmp::Ordering;
use core::fmt;

/// Largest number of arcs an [`ObjectIdentifier`] can hold.
///
/// Grounded on `asinine`'s `ASN1_OID_MAXIMUM_ARCS` (the C reference this
/// spec was distilled from); `spec.md` §3 leaves the exact bound
/// implementation-defined so long as it accommodates common X.509 OIDs
/// (arcs ≥ 16).
pub const MAX_ARCS: usize = 16;

/// An owned, fixed-capacity sequence of unsigned arc values (`spec.md` §3,
/// "Object identifier").
///
/// At least two arcs are always present: the wire encoding's first octet is
/// `40 * arc[0] + arc[1]`, so an `ObjectIdentifier` with fewer than two arcs
/// cannot correspond to any valid encoding.
#[derive(Copy, Clone, Eq)]
pub struct ObjectIdentifier {
    arcs: [u32; MAX_ARCS],
    len: u8,
}

impl ObjectIdentifier {
    /// Build an [`ObjectIdentifier`] from an arc list known at compile time.
    ///
    /// Panics (a compile error, in a `const` context) if `arcs` has fewer
    /// than two or more than [`MAX_ARCS`] elements, or if the first two arcs
    /// don't satisfy the `first ∈ {0,1,2}`, `first ∈ {0,1} ⇒ second ≤ 39`
    /// rule of `spec.md` §3. This is the "compile-time OID constants"
    /// mechanism `spec.md` §9 calls for: certificate-layer code can declare
    /// `const` OIDs and compare against them without runtime construction.
    pub const fn from_arcs(arcs: &[u32]) -> Self {
        assert!(arcs.len() >= 2, "object identifier needs at least 2 arcs");
        assert!(arcs.len() <= MAX_ARCS, "object identifier exceeds MAX_ARCS");

        let first = arcs[0];
        let second = arcs[1];
        assert!(first <= 2, "first arc must be 0, 1, or 2");
        assert!(
            first == 2 || second <= 39,
            "second arc must be <= 39 when first arc is 0 or 1"
        );

        let mut out = [0u32; MAX_ARCS];
        let mut i = 0;
        while i < arcs.len() {
            out[i] = arcs[i];
            i += 1;
        }

        Self {
            arcs: out,
            len: arcs.len() as u8,
        }
    }

    /// The arc values, in order.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs[..self.len as usize]
    }

    /// `true` if `self`'s arcs equal `arcs` exactly.
    ///
    /// Intended for comparing a decoded OID against a compile-time constant
    /// arc list without building an intermediate [`ObjectIdentifier`].
    pub fn eq_arcs(&self, arcs: &[u32]) -> bool {
        self.arcs() == arcs
    }

    /// Decode an `OBJECT IDENTIFIER` token's content into an
    /// [`ObjectIdentifier`] (`spec.md` §4.3).
    ///
    /// Content is a sequence of base-128 sub-identifiers, each a run of
    /// high-bit-set octets terminated by a high-bit-clear octet. A
    /// sub-identifier whose leading octet is `0x80` is non-minimal padding
    /// and malformed, as is an empty content, an unterminated run at end of
    /// content, a per-arc value that overflows `u32`, or more arcs than
    /// [`MAX_ARCS`] can hold. The first sub-identifier is split into the
    /// first two arcs per `spec.md` §3.
    pub fn try_from_token(token: &Token<'_>) -> Result<Self, Error> {
        let tag = token.tag;
        let malformed = || ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO);

        if token.data.is_empty() {
            return Err(malformed());
        }

        let mut arcs = [0u32; MAX_ARCS];
        let mut arc_count = 0usize;
        let mut push = |value: u32| -> Result<(), Error> {
            if arc_count >= MAX_ARCS {
                return Err(malformed());
            }
            arcs[arc_count] = value;
            arc_count += 1;
            Ok(())
        };

        let mut first_value: Option<u32> = None;
        let mut i = 0usize;
        while i < token.data.len() {
            if token.data[i] == 0x80 {
                // Leading 0x80 in a sub-identifier is non-minimal padding.
                return Err(malformed());
            }

            let mut value: u64 = 0;
            let mut terminated = false;
            while i < token.data.len() {
                let byte = token.data[i];
                i += 1;
                value = (value << 7) | u64::from(byte & 0x7F);
                if value > u64::from(u32::MAX) {
                    return Err(malformed());
                }
                if byte & 0x80 == 0 {
                    terminated = true;
                    break;
                }
            }
            if !terminated {
                return Err(malformed());
            }

            let value = value as u32;
            match first_value {
                None => {
                    first_value = Some(value);
                    let (first, second) = split_first_subidentifier(value);
                    push(first)?;
                    push(second)?;
                }
                Some(_) => push(value)?,
            }
        }

        Ok(Self {
            arcs,
            len: arc_count as u8,
        })
    }
}

/// Split the first decoded sub-identifier into the first two arcs
/// (`spec.md` §3: `40 * first_arc + second_arc`, `first_arc ∈ {0,1,2}`).
fn split_first_subidentifier(value: u32) -> (u32, u32) {
    if value < 40 {
        (0, value)
    } else if value < 80 {
        (1, value - 40)
    } else {
        (2, value - 80)
    }
}

impl PartialEq for ObjectIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.arcs() == other.arcs()
    }
}

impl PartialOrd for ObjectIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObjectIdentifier {
    /// Lexicographic arc-by-arc comparison; a shorter prefix orders before a
    /// longer extension of it (`spec.md` §3).
    fn cmp(&self, other: &Self) -> Ordering {
        self.arcs().cmp(other.arcs())
    }
}

impl fmt::Display for ObjectIdentifier {
    /// Dotted-decimal form, e.g. `1.2.840.113549`.
    ///
    /// A single-arc value (only reachable by constructing an
    /// [`ObjectIdentifier`] outside its normal two-arc-minimum invariant,
    /// e.g. in a test) formats as just that arc, with no trailing dot
    /// (`spec.md` §4.4).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arcs = self.arcs();
        for (i, arc) in arcs.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectIdentifier({self})")
    }
}

impl ObjectIdentifier {
    /// Format this OID as dotted-decimal text into `buf`, for callers
    /// without `alloc` (`spec.md` §4.4).
    ///
    /// Always null-terminates within `buf` if `buf` is non-empty. Returns
    /// `true` if the text was truncated to fit; a caller that gets `true`
    /// back should treat `buf`'s contents as a valid but incomplete prefix,
    /// not as an error — formatting has no failure mode, only truncation.
    pub fn format_into(&self, buf: &mut [u8]) -> bool {
        if buf.is_empty() {
            return true;
        }

        let mut writer = SliceWriter::new(buf);
        // `SliceWriter::write_str` never fails; the `Result` is `core::fmt`'s.
        let _ = write!(writer, "{self}");
        let written = writer.written();
        let truncated = writer.truncated();
        buf[written] = 0;
        truncated
    }
}

/// A fixed-capacity [`fmt::Write`] sink over a caller-supplied buffer that
/// reserves its last byte for a null terminator.
struct SliceWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
    truncated: bool,
}

impl<'b> SliceWriter<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            truncated: false,
        }
    }

    fn written(&self) -> usize {
        self.len
    }

    fn truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let available = self.buf.len() - 1 - self.len;
        let bytes = s.as_bytes();
        let take = bytes.len().min(available);
        self.buf[self.len..self.len + take].copy_from_slice(&bytes[..take]);
        self.len += take;
        if take < bytes.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, Tag};
    use hex_literal::hex;

    fn oid_token(data: &[u8]) -> Token<'_> {
        Token::new(
            Tag {
                class: Class::Universal,
                constructed: false,
                number: crate::tag::OBJECT_IDENTIFIER,
            },
            data,
        )
    }

    #[test]
    fn decodes_two_oids_from_spec_scenario_1() {
        // `spec.md` §8 scenario 1 inner OIDs: 1.1.2.4 and 2.999.1
        let a = ObjectIdentifier::try_from_token(&oid_token(&hex!("29 02 04"))).unwrap();
        assert!(a.eq_arcs(&[1, 1, 2, 4]));

        let b = ObjectIdentifier::try_from_token(&oid_token(&hex!("88 37 01"))).unwrap();
        assert!(b.eq_arcs(&[2, 999, 1]));
    }

    #[test]
    fn malformed_padding_variants_are_rejected() {
        // `spec.md` §8 scenario 2.
        for data in [
            &hex!("01 80 80 80 80 80 7F")[..],
            &hex!("80 01")[..],
            &hex!("80 7F")[..],
            &hex!("")[..],
        ] {
            assert!(
                ObjectIdentifier::try_from_token(&oid_token(data)).is_err(),
                "expected malformed for {data:?}"
            );
        }
    }

    #[test]
    fn display_is_dotted_decimal() {
        let oid = ObjectIdentifier::from_arcs(&[1, 2, 3]);
        assert_eq!(alloc_string(&oid), "1.2.3");
    }

    #[test]
    fn ordering_is_lexicographic_with_shorter_prefix_first() {
        let a = ObjectIdentifier::from_arcs(&[1, 2]);
        let b = ObjectIdentifier::from_arcs(&[1, 2, 3]);
        let c = ObjectIdentifier::from_arcs(&[1, 3]);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn equality_and_const_construction() {
        const TEST_OID: ObjectIdentifier = ObjectIdentifier::from_arcs(&[1, 1, 2, 4]);
        let decoded = ObjectIdentifier::try_from_token(&oid_token(&hex!("29 02 04"))).unwrap();
        assert_eq!(decoded, TEST_OID);
    }

    // A tiny no_std-friendly helper for the one test above that wants a
    // `String` rather than writing into a fixed buffer.
    fn alloc_string(oid: &ObjectIdentifier) -> std::string::String {
        use std::string::ToString;
        oid.to_string()
    }

    #[test]
    fn format_into_writes_null_terminated_text() {
        let oid = ObjectIdentifier::from_arcs(&[1, 2, 3]);
        let mut buf = [0xFFu8; 8];
        let truncated = oid.format_into(&mut buf);
        assert!(!truncated);
        assert_eq!(&buf[..5], b"1.2.3");
        assert_eq!(buf[5], 0);
    }

    #[test]
    fn format_into_reports_truncation() {
        let oid = ObjectIdentifier::from_arcs(&[1, 2, 3]);
        let mut buf = [0xFFu8; 3];
        let truncated = oid.format_into(&mut buf);
        assert!(truncated);
        assert_eq!(buf[2], 0);
    }
}
