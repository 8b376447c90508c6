//! Pure Rust embedded-friendly streaming parser and primitive decoders for the
//! Distinguished Encoding Rules (DER) subset of ASN.1 as described in ITU
//! [X.690], with full support for heapless `no_std` targets.
//!
//! # About
//!
//! This crate is a zero-copy, constant-memory parser for the tag-length-value
//! encoding DER uses, together with decoders for the primitive value types
//! most commonly carried inside it: arbitrary-precision object identifiers,
//! signed machine integers, bit strings, the two ASN.1 calendar-time formats,
//! and the null value.
//!
//! It never allocates, never blocks, and never performs I/O. A [`Reader`]
//! walks a byte slice in constant auxiliary memory, handing out borrowed
//! [`Token`]s that the `asn1` module's decode functions turn into owned
//! values.
//!
//! Only a DER subset is supported: indefinite lengths, constructed strings,
//! the high-tag-number form, and string types other than the two calendar
//! times are rejected rather than accepted loosely. See the module docs for
//! the exact rules each decoder enforces.
//!
//! [X.690]: https://www.itu.int/rec/T-REC-X.690/

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod asn1;
mod error;
mod header;
mod length;
mod reader;
mod tag;
mod token;

pub use crate::{
    error::{Error, ErrorKind, Result},
    header::Header,
    length::Length,
    reader::{Reader, MAX_DEPTH},
    tag::{Class, Tag},
    token::Token,
};

pub use crate::asn1::oid::ObjectIdentifier;
