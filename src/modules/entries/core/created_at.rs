// Creation timestamp of an entry.
//
// Purpose
// - Parse the backend date string once, at mapping time.
//
// Responsibilities
// - Accept RFC 3339, Postgres timestamptz text, offset-less date-times (seconds optional),
//   plain dates and the reduced YYYY-MM / YYYY forms.
// - Map anything else to the Invalid sentinel instead of failing the whole entry.
//
// Notes
// - Values without an offset are read as UTC.
// - Serializes as an RFC 3339 UTC string with millisecond precision, or null when invalid.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatedAt {
    Valid(DateTime<Utc>),
    Invalid,
}

impl CreatedAt {
    pub fn parse(raw: &str) -> Self {
        parse_utc(raw).map_or(Self::Invalid, Self::Valid)
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(at) => Some(*at),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn timestamp_millis(&self) -> Option<i64> {
        self.as_datetime().map(|at| at.timestamp_millis())
    }
}

impl From<DateTime<Utc>> for CreatedAt {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Valid(at)
    }
}

impl Serialize for CreatedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid(at) => {
                serializer.serialize_some(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Invalid => serializer.serialize_none(),
        }
    }
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Some(at) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    {
        return Some(at.with_timezone(&Utc));
    }
    if let Some(at) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(at.and_utc());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| parse_reduced_date(raw))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

// YYYY-MM and YYYY resolve to the first day of the period.
fn parse_reduced_date(raw: &str) -> Option<NaiveDate> {
    if !raw.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return None;
    }
    let padded = match raw.len() {
        4 => format!("{raw}-01-01"),
        7 => format!("{raw}-01"),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, DATE_FORMAT).ok()
}
