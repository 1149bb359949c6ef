// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Infers a capture date (and possibly time) from a file name.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// A date (`YYYY MM DD`, optionally separated by one of `-._`), followed
/// anywhere later by an optional time (`HH`, `HH MM` or `HH MM SS`, same
/// separators). The gap before the time is lazy so the first time-shaped run
/// after the date wins.
static FILE_NAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\d{4}[-._]?\d{2}[-._]?\d{2})(?:.*?(\d{2}(?:[-._]?\d{2}(?:[-._]?\d{2})?)?))?")
    .unwrap()
});

/// Extracts a date & time from `file_name`.
///
/// The date digits are mandatory. If a time follows, it is right-padded with
/// zeros (e.g. `14` -> `14:00:00`). When date and time together do not form a
/// valid value, the date alone is used at midnight. Returns `None` if no date
/// is found or the digits are not a real calendar date.
pub fn extract_date_time(file_name: &str) -> Option<NaiveDateTime> {
  let caps = FILE_NAME_DATE.captures(file_name)?;

  let date_digits = digits_only(caps.get(1)?.as_str());

  if let Some(time) = caps.get(2) {
    let mut time_digits = digits_only(time.as_str());
    while time_digits.len() < 6 {
      time_digits.push('0');
    }

    match parse_date(&date_digits).zip(parse_time(&time_digits)) {
      Some((date, time)) => return Some(date.and_time(time)),
      None => log::debug!(
        "{file_name}: Could not parse date & time `{date_digits}{time_digits}`. Trying date only."
      ),
    }
  }

  let Some(date) = parse_date(&date_digits) else {
    log::debug!("{file_name}: Could not parse date `{date_digits}`.");
    return None;
  };

  date.and_hms_opt(0, 0, 0)
}

fn digits_only(s: &str) -> String {
  s.chars().filter(char::is_ascii_digit).collect()
}

/// Parses `YYYYMMDD`.
fn parse_date(digits: &str) -> Option<NaiveDate> {
  if digits.len() != 8 {
    return None;
  }

  let year = digits[0..4].parse().ok()?;
  let month = digits[4..6].parse().ok()?;
  let day = digits[6..8].parse().ok()?;

  NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses `HHMMSS`.
fn parse_time(digits: &str) -> Option<NaiveTime> {
  if digits.len() != 6 {
    return None;
  }

  let hour = digits[0..2].parse().ok()?;
  let min = digits[2..4].parse().ok()?;
  let sec = digits[4..6].parse().ok()?;

  NaiveTime::from_hms_opt(hour, min, sec)
}
