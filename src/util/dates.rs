//! Calendar helpers for expiry checks, receipt grouping, and form payloads.
//!
//! The backend hands dates back in whatever shape the ingredient was entered
//! with: `YYYYMMDD`, `YYMMDD`, or an ISO-like `YYYY-MM-DD` with an optional
//! time suffix. Everything here works on whole calendar days in local time.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::{Date, Month};

/// Parse a loosely formatted calendar date. Anything unrecognized is `None`.
pub fn parse_loose_date(raw: &str) -> Option<Date> {
    let s = raw.trim();
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        return ymd(s[..4].parse().ok()?, s[4..6].parse().ok()?, s[6..].parse().ok()?);
    }
    if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year = 2000 + s[..2].parse::<i32>().ok()?;
        return ymd(year, s[2..4].parse().ok()?, s[4..].parse().ok()?);
    }

    let day_part = s.split(['T', ' ']).next()?;
    let mut fields = day_part.split(['-', '/', '.']);
    let (year, month, day) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() || year.len() != 4 || month.len() > 2 || day.len() > 2 {
        return None;
    }
    ymd(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn ymd(year: i32, month: u8, day: u8) -> Option<Date> {
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

/// Whether a date string names a day on or before `today`.
///
/// A blank or unparsable value is never expired.
pub fn is_expired(raw: &str, today: Date) -> bool {
    parse_loose_date(raw).is_some_and(|date| date <= today)
}

/// `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Turn an 8-digit `YYYYMMDD` birth date into `YYYY-MM-DD`, rejecting
/// impossible days.
pub fn format_birth8(digits: &str) -> Option<String> {
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    parse_loose_date(digits).map(format_date)
}

/// Today's date in the user's local time zone.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).unwrap_or(1);
        let day = u8::try_from(now.get_date()).unwrap_or(1);
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        ymd(year, month, day).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Seconds since the Unix epoch, for comparing against token expiry.
pub fn now_unix_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().unix_timestamp()
    }
}
