//! Checked-arithmetic length type.

use crate::{Error, ErrorKind};
use core::convert::TryFrom;
use core::fmt;
use core::ops::{Add, Sub};

/// Length of a TLV header or its content, in octets.
///
/// All arithmetic on [`Length`] is checked: overflow turns into
/// [`ErrorKind::Unsupported`] rather than panicking or silently wrapping,
/// since every length this crate computes is ultimately derived from
/// attacker-controlled input.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Length(u32);

impl Length {
    /// Length of zero.
    pub const ZERO: Self = Self(0);

    /// Largest length this crate is willing to represent.
    ///
    /// DER permits a long-form length of up to 127 octets; this crate only
    /// supports lengths that fit in a `u32` (see `spec.md` §4.1 on
    /// `unsupported` lengths), so this is simply `u32::MAX`.
    pub const MAX: Self = Self(u32::MAX);

    /// Create a new [`Length`] from a `u32`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Is this length zero?
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating subtraction, used for "remaining length" computations where
    /// a negative result can never be meaningful.
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Checked addition.
    ///
    /// Overflow here means the combined length no longer fits a `u32`, which
    /// is this crate's notion of "exceeds the platform word" (`spec.md`
    /// §4.1), so it is reported as [`ErrorKind::Unsupported`] rather than a
    /// distinct arithmetic-error kind.
    pub fn checked_add(self, other: Self) -> Result<Self, Error> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| ErrorKind::Unsupported { tag: None }.at(self))
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Self) -> Result<Self, Error> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| ErrorKind::Unsupported { tag: None }.at(self))
    }
}

impl Add for Length {
    type Output = Result<Length, Error>;

    fn add(self, other: Length) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for Length {
    type Output = Result<Length, Error>;

    fn sub(self, other: Length) -> Self::Output {
        self.checked_sub(other)
    }
}

impl From<u8> for Length {
    fn from(value: u8) -> Self {
        Self(u32::from(value))
    }
}

impl From<u16> for Length {
    fn from(value: u16) -> Self {
        Self(u32::from(value))
    }
}

impl From<u32> for Length {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for Length {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ErrorKind::Unsupported { tag: None }.at(Length::MAX))
    }
}

impl TryFrom<Length> for usize {
    type Error = Error;

    fn try_from(value: Length) -> Result<Self, Error> {
        usize::try_from(value.0).map_err(|_| ErrorKind::Unsupported { tag: None }.at(value))
    }
}

impl From<Length> for u32 {
    fn from(value: Length) -> Self {
        value.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
