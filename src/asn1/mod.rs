//! Primitive value decoders (`spec.md` §4.3) and the [`oid::ObjectIdentifier`]
//! value type (`spec.md` §4.4).
//!
//! Each decode function is a pure function of a borrowed [`crate::Token`]: no
//! function here holds state across calls, and none allocates. Decoders that
//! need scratch space (bit strings) take a caller-supplied buffer instead.

pub mod bit_string;
pub mod integer;
pub mod null;
pub mod oid;
pub mod time;

pub use bit_string::{decode_bit_string, BitString};
pub use integer::{decode_i32, decode_i64};
pub use null::decode_null;
pub use oid::ObjectIdentifier;
pub use time::{decode_generalized_time, decode_utc_time, CalendarTime};
