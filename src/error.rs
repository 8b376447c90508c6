//! Error types.

use crate::{Length, Tag};
use core::fmt;

/// Result type with this crate's [`Error`] as its error type.
pub type Result<T> = core::result::Result<T, Error>;

/// The four kinds of outcome a decode can have (`spec.md` §7).
///
/// [`ErrorKind::Ok`] is never returned inside a [`Result`]; it exists so that
/// [`crate::Reader::get_error`] has something to return once no error has
/// been latched yet, keeping that query total rather than `Option`-wrapped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// No error has been recorded.
    Ok,

    /// The input violates the encoding rules: a non-minimal length, a
    /// non-minimal integer or OID sub-identifier, an out-of-range field, an
    /// invalid calendar date, trailing bytes inside a container, or bad bit
    /// string padding.
    Malformed {
        /// Tag of the value being decoded when the error was detected, if
        /// one had already been read.
        tag: Option<Tag>,
    },

    /// The input is syntactically legal DER/BER but outside the subset this
    /// crate supports: a length exceeding a machine word, nesting deeper
    /// than the parser's fixed stack, the high-tag-number form, or a
    /// constructed bit string.
    Unsupported {
        /// Tag of the value being decoded when the error was detected, if
        /// one had already been read.
        tag: Option<Tag>,
    },

    /// A caller-supplied output buffer was too small to hold a decoded
    /// value.
    Memory {
        /// Number of bytes the decoder needed to write.
        needed: usize,
        /// Number of bytes the caller's buffer actually had.
        available: usize,
    },
}

impl ErrorKind {
    /// Annotate this [`ErrorKind`] with the offset at which it was detected,
    /// turning it into an [`Error`].
    pub fn at(self, position: Length) -> Error {
        Error {
            kind: self,
            position,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Ok => write!(f, "no error"),
            ErrorKind::Malformed { tag: Some(tag) } => write!(f, "malformed {tag}"),
            ErrorKind::Malformed { tag: None } => write!(f, "malformed encoding"),
            ErrorKind::Unsupported { tag: Some(tag) } => write!(f, "unsupported {tag}"),
            ErrorKind::Unsupported { tag: None } => write!(f, "unsupported encoding"),
            ErrorKind::Memory { needed, available } => write!(
                f,
                "output buffer too small: needed {needed}, had {available}"
            ),
        }
    }
}

/// An [`ErrorKind`] together with the byte offset at which it was detected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    position: Length,
}

impl Error {
    /// Build a [`Memory`](ErrorKind::Memory) error at the given position.
    pub fn memory(position: Length, needed: usize, available: usize) -> Self {
        ErrorKind::Memory { needed, available }.at(position)
    }

    /// The kind of error that occurred.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte offset into the original input at which the error was
    /// detected.
    pub fn position(&self) -> Length {
        self.position
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
