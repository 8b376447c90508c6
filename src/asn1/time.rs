//! `UTCTime` and `GeneralizedTime` decoding (`spec.md` §4.3).

use crate::{Error, ErrorKind, Length, Token};

/// Length in octets of a `UTCTime` value: `YYMMDDHHMMSSZ`.
const UTC_TIME_LEN: usize = 13;
/// Length in octets of a `GeneralizedTime` value: `YYYYMMDDHHMMSSZ`.
const GENERALIZED_TIME_LEN: usize = 15;

/// A calendar date and time, decoded from either wire format
/// (`spec.md` §3, "Calendar time").
///
/// Field order matches the declared ordering rule ("field-wise from year to
/// second"): the derived [`Ord`] compares `year`, then `month`, then `day`,
/// then `hour`, then `minute`, then `second`, in that order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct CalendarTime {
    /// Full four-digit year.
    pub year: u16,
    /// Month, `1..=12`.
    pub month: u8,
    /// Day of month, `1..=31`.
    pub day: u8,
    /// Hour, `0..=23`.
    pub hour: u8,
    /// Minute, `0..=59`.
    pub minute: u8,
    /// Second, `0..=59`.
    pub second: u8,
}

fn digit(byte: u8) -> Option<u8> {
    if byte.is_ascii_digit() {
        Some(byte - b'0')
    } else {
        None
    }
}

fn two_digits(hi: u8, lo: u8) -> Option<u8> {
    let hi = digit(hi)?;
    let lo = digit(lo)?;
    Some(hi * 10 + lo)
}

fn is_leap_year(year: u16, full_gregorian: bool) -> bool {
    if full_gregorian {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    } else {
        // `spec.md` §4.3: the limited two-digit year range makes the
        // 100/400 rule unnecessary for `UTCTime`.
        year % 4 == 0
    }
}

fn days_in_month(year: u16, month: u8, full_gregorian: bool) -> Option<u8> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year, full_gregorian) {
                29
            } else {
                28
            }
        }
        _ => return None,
    };
    Some(days)
}

fn build(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    full_gregorian: bool,
) -> Option<CalendarTime> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let max_day = days_in_month(year, month, full_gregorian)?;
    if day == 0 || day > max_day {
        return None;
    }
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    Some(CalendarTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

/// Decode a `UTCTime` token: `YYMMDDHHMMSSZ` (`spec.md` §4.3).
///
/// The two-digit year is mapped to a four-digit one by `YY ≥ 50 → 1900+YY`,
/// else `2000+YY`. Any length other than 13, a non-digit in a digit
/// position, a trailing character other than `Z`, or a numerically invalid
/// date or time is [`ErrorKind::Malformed`].
pub fn decode_utc_time(token: &Token<'_>) -> Result<CalendarTime, Error> {
    let tag = token.tag;
    let malformed = || ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO);

    let data = token.data;
    if data.len() != UTC_TIME_LEN || data[UTC_TIME_LEN - 1] != b'Z' {
        return Err(malformed());
    }

    let yy = two_digits(data[0], data[1]).ok_or_else(malformed)?;
    let month = two_digits(data[2], data[3]).ok_or_else(malformed)?;
    let day = two_digits(data[4], data[5]).ok_or_else(malformed)?;
    let hour = two_digits(data[6], data[7]).ok_or_else(malformed)?;
    let minute = two_digits(data[8], data[9]).ok_or_else(malformed)?;
    let second = two_digits(data[10], data[11]).ok_or_else(malformed)?;

    let year = if yy >= 50 {
        1900 + u16::from(yy)
    } else {
        2000 + u16::from(yy)
    };

    build(year, month, day, hour, minute, second, false).ok_or_else(malformed)
}

/// Decode a `GeneralizedTime` token: `YYYYMMDDHHMMSSZ` (`spec.md` §4.3).
///
/// As [`decode_utc_time`], but with a full four-digit year and the full
/// Gregorian leap-year rule.
pub fn decode_generalized_time(token: &Token<'_>) -> Result<CalendarTime, Error> {
    let tag = token.tag;
    let malformed = || ErrorKind::Malformed { tag: Some(tag) }.at(Length::ZERO);

    let data = token.data;
    if data.len() != GENERALIZED_TIME_LEN || data[GENERALIZED_TIME_LEN - 1] != b'Z' {
        return Err(malformed());
    }

    let year_hi = two_digits(data[0], data[1]).ok_or_else(malformed)?;
    let year_lo = two_digits(data[2], data[3]).ok_or_else(malformed)?;
    let month = two_digits(data[4], data[5]).ok_or_else(malformed)?;
    let day = two_digits(data[6], data[7]).ok_or_else(malformed)?;
    let hour = two_digits(data[8], data[9]).ok_or_else(malformed)?;
    let minute = two_digits(data[10], data[11]).ok_or_else(malformed)?;
    let second = two_digits(data[12], data[13]).ok_or_else(malformed)?;

    let year = u16::from(year_hi) * 100 + u16::from(year_lo);

    build(year, month, day, hour, minute, second, true).ok_or_else(malformed)
}

#[cfg(feature = "time")]
impl TryFrom<CalendarTime> for time::OffsetDateTime {
    type Error = time::error::ComponentRange;

    fn try_from(value: CalendarTime) -> Result<Self, Self::Error> {
        let month = time::Month::try_from(value.month)?;
        let date = time::Date::from_calendar_date(i32::from(value.year), month, value.day)?;
        let time = time::Time::from_hms(value.hour, value.minute, value.second)?;
        Ok(time::PrimitiveDateTime::new(date, time).assume_utc())
    }
}

#[cfg(feature = "time")]
impl TryFrom<time::OffsetDateTime> for CalendarTime {
    type Error = Error;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Error> {
        let value = value.to_offset(time::UtcOffset::UTC);
        let year = u16::try_from(value.year())
            .map_err(|_| ErrorKind::Unsupported { tag: None }.at(Length::ZERO))?;

        Ok(CalendarTime {
            year,
            month: value.month() as u8,
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        })
    }
}
