//! Property-based tests for [`ObjectIdentifier`] (`spec.md` §8: "Round-trip
//! on OIDs", "Ordering totality").
//!
//! The crate only decodes OIDs; these tests build the base-128 wire form by
//! hand so that decoding can be checked against the arc list it was built
//! from.

use asn1_der::asn1::oid::MAX_ARCS;
use asn1_der::{Class, ObjectIdentifier, Tag, Token};
use proptest::prelude::*;

fn encode_subidentifier(out: &mut Vec<u8>, mut value: u32) {
    let mut chunks = [0u8; 5];
    let mut n = 0;
    loop {
        chunks[n] = (value & 0x7F) as u8;
        value >>= 7;
        n += 1;
        if value == 0 {
            break;
        }
    }
    for i in (0..n).rev() {
        let continuation = if i == 0 { 0 } else { 0x80 };
        out.push(chunks[i] | continuation);
    }
}

fn encode_arcs(arcs: &[u32]) -> Vec<u8> {
    let first_value = match (arcs[0], arcs[1]) {
        (0, second) => second,
        (1, second) => 40 + second,
        (2, second) => 80 + second,
        _ => unreachable!("arbitrary_arcs only generates first arcs in 0..=2"),
    };

    let mut out = Vec::new();
    encode_subidentifier(&mut out, first_value);
    for &arc in &arcs[2..] {
        encode_subidentifier(&mut out, arc);
    }
    out
}

fn oid_tag() -> Tag {
    Tag {
        class: Class::Universal,
        constructed: false,
        number: 0x06, // universal OBJECT IDENTIFIER
    }
}

/// Arc lists that satisfy `spec.md` §3's validity rule for the first two
/// arcs, with between 2 and [`MAX_ARCS`] arcs total.
fn arbitrary_arcs() -> impl Strategy<Value = Vec<u32>> {
    (0u32..=2).prop_flat_map(|first| {
        let second_range = if first == 2 { 0u32..=1_000 } else { 0u32..=39 };
        (Just(first), second_range, 0usize..=(MAX_ARCS - 2)).prop_flat_map(
            |(first, second, extra_count)| {
                prop::collection::vec(0u32..=100_000, extra_count).prop_map(move |extra| {
                    let mut arcs = vec![first, second];
                    arcs.extend(extra);
                    arcs
                })
            },
        )
    })
}

proptest! {
    #[test]
    fn oid_round_trips_through_wire_encoding(arcs in arbitrary_arcs()) {
        let wire = encode_arcs(&arcs);
        let token = Token { tag: oid_tag(), data: &wire };
        let decoded = ObjectIdentifier::try_from_token(&token).unwrap();
        prop_assert!(decoded.eq_arcs(&arcs));
    }

    #[test]
    fn ordering_is_total(a in arbitrary_arcs(), b in arbitrary_arcs()) {
        let oid_a = ObjectIdentifier::from_arcs(&a);
        let oid_b = ObjectIdentifier::from_arcs(&b);

        let lt = oid_a < oid_b;
        let gt = oid_a > oid_b;
        let eq = oid_a == oid_b;

        prop_assert_eq!(lt, oid_b > oid_a);
        prop_assert_eq!(gt, oid_b < oid_a);
        prop_assert!((lt as u8 + gt as u8 + eq as u8) == 1);
    }
}
