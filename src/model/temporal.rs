//! Calendar-aware points in time.
//!
//! A `TemporalValue` is what a date-typed property hands to the timeline:
//! integer components plus the precision they were recorded with. Components
//! below the precision carry their canonical value (month/day = 1, time = 0).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Calendar model the components are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalendarModel {
    #[default]
    Gregorian,
    Julian,
}

/// How much of the value was actually specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Precision {
    Year,
    Month,
    Day,
    Minute,
    Second,
}

/// A decomposed calendar date/time.
///
/// Years use historical numbering: there is no year 0, `-1` is 1 BCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTemporal", into = "RawTemporal")]
pub struct TemporalValue {
    calendar: CalendarModel,
    precision: Precision,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl TemporalValue {
    /// Build a value from explicit components, validating every field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        calendar: CalendarModel,
        precision: Precision,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let value = Self { calendar, precision, year, month, day, hour, minute, second };
        value.validate()?;
        Ok(value)
    }

    /// Second-precision Gregorian value.
    pub fn gregorian(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        Self::new(CalendarModel::Gregorian, Precision::Second, year, month, day, hour, minute, second)
    }

    /// Day-precision Gregorian value.
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(CalendarModel::Gregorian, Precision::Day, year, month, day, 0, 0, 0)
    }

    /// Month-precision Gregorian value.
    pub fn year_month(year: i32, month: u32) -> Result<Self> {
        Self::new(CalendarModel::Gregorian, Precision::Month, year, month, 1, 0, 0, 0)
    }

    /// Year-precision Gregorian value.
    pub fn year_only(year: i32) -> Result<Self> {
        Self::new(CalendarModel::Gregorian, Precision::Year, year, 1, 1, 0, 0, 0)
    }

    /// Same components, different calendar model.
    pub fn with_calendar(self, calendar: CalendarModel) -> Result<Self> {
        Self::new(
            calendar, self.precision, self.year, self.month, self.day,
            self.hour, self.minute, self.second,
        )
    }

    pub fn calendar(&self) -> CalendarModel { self.calendar }
    pub fn precision(&self) -> Precision { self.precision }
    pub fn year(&self) -> i32 { self.year }
    pub fn month(&self) -> u32 { self.month }
    pub fn day(&self) -> u32 { self.day }
    pub fn hour(&self) -> u32 { self.hour }
    pub fn minute(&self) -> u32 { self.minute }
    pub fn second(&self) -> u32 { self.second }

    /// Chronological key, ignoring calendar model and precision.
    pub fn sort_key(&self) -> (i32, u32, u32, u32, u32, u32) {
        (self.year, self.month, self.day, self.hour, self.minute, self.second)
    }

    fn validate(&self) -> Result<()> {
        if self.year == 0 {
            return Err(Error::InvalidTemporal("year 0 does not exist".into()));
        }
        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidTemporal(format!("month {} out of range 1-12", self.month)));
        }
        let max_day = days_in_month(self.calendar, self.year, self.month);
        if self.day < 1 || self.day > max_day {
            return Err(Error::InvalidTemporal(format!(
                "day {} out of range 1-{max_day} for {}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 || self.second > 59 {
            return Err(Error::InvalidTemporal(format!(
                "time {:02}:{:02}:{:02} out of range",
                self.hour, self.minute, self.second
            )));
        }
        if self.precision < Precision::Month && self.month != 1 {
            return Err(Error::InvalidTemporal("year precision requires month 1".into()));
        }
        if self.precision < Precision::Day && self.day != 1 {
            return Err(Error::InvalidTemporal("month precision requires day 1".into()));
        }
        if self.precision < Precision::Minute && (self.hour, self.minute, self.second) != (0, 0, 0) {
            return Err(Error::InvalidTemporal("day precision carries no time of day".into()));
        }
        Ok(())
    }
}

fn days_in_month(calendar: CalendarModel, year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(calendar, year) => 29,
        _ => 28,
    }
}

fn is_leap_year(calendar: CalendarModel, year: i32) -> bool {
    // Leap rules are defined on astronomical years (1 BCE = 0).
    let y = if year < 0 { year + 1 } else { year };
    match calendar {
        CalendarModel::Julian => y.rem_euclid(4) == 0,
        CalendarModel::Gregorian => {
            y.rem_euclid(4) == 0 && (y.rem_euclid(100) != 0 || y.rem_euclid(400) == 0)
        }
    }
}

/// chrono counts years astronomically (0 = 1 BCE).
fn historical_year(astronomical: i32) -> i32 {
    if astronomical <= 0 { astronomical - 1 } else { astronomical }
}

// ============================================================================
// chrono conversions
// ============================================================================

impl TryFrom<NaiveDate> for TemporalValue {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::ymd(historical_year(date.year()), date.month(), date.day())
    }
}

impl TryFrom<NaiveDateTime> for TemporalValue {
    type Error = Error;

    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        Self::gregorian(
            historical_year(dt.year()),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            // Leap seconds fold into :59.
            dt.second().min(59),
        )
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `YYYY-MM-DD[T ]HH:MM[:SS]`,
/// with an optional leading `-` for BCE years.
impl FromStr for TemporalValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidTemporal(format!("cannot parse '{s}' as a date"));

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (date_part, time_part) = match rest.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t.trim())),
            None => (rest, None),
        };

        let mut fields = date_part.split('-');
        let year: i32 = fields
            .next()
            .filter(|y| !y.is_empty() && y.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|y| y.parse().ok())
            .ok_or_else(invalid)?;
        let year = if negative { -year } else { year };

        let mut parse_component = |name: &str| -> Result<Option<u32>> {
            match fields.next() {
                None => Ok(None),
                Some(f) if f.len() <= 2 && !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
                    f.parse().map(Some).map_err(|_| invalid())
                }
                Some(f) => Err(Error::InvalidTemporal(format!("bad {name} '{f}' in '{s}'"))),
            }
        };
        let month = parse_component("month")?;
        let day = parse_component("day")?;
        if fields.next().is_some() {
            return Err(invalid());
        }

        match (month, day, time_part) {
            (None, None, None) => Self::year_only(year),
            (Some(m), None, None) => Self::year_month(year, m),
            (Some(m), Some(d), None) => Self::ymd(year, m, d),
            (Some(m), Some(d), Some(t)) => {
                let (time, precision) = NaiveTime::parse_from_str(t, "%H:%M:%S")
                    .map(|time| (time, Precision::Second))
                    .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M").map(|time| (time, Precision::Minute)))
                    .map_err(|_| invalid())?;
                Self::new(
                    CalendarModel::Gregorian, precision, year, m, d,
                    time.hour(), time.minute(), time.second(),
                )
            }
            _ => Err(invalid()),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", -(self.year as i64))?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        if self.precision >= Precision::Month {
            write!(f, "-{:02}", self.month)?;
        }
        if self.precision >= Precision::Day {
            write!(f, "-{:02}", self.day)?;
        }
        if self.precision >= Precision::Minute {
            write!(f, "T{:02}:{:02}", self.hour, self.minute)?;
        }
        if self.precision >= Precision::Second {
            write!(f, ":{:02}", self.second)?;
        }
        if self.calendar == CalendarModel::Julian {
            write!(f, " (Julian)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Serde shadow: deserialized values go through validation
// ============================================================================

#[derive(Serialize, Deserialize)]
struct RawTemporal {
    #[serde(default)]
    calendar: CalendarModel,
    #[serde(default = "default_precision")]
    precision: Precision,
    year: i32,
    #[serde(default = "one")]
    month: u32,
    #[serde(default = "one")]
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: u32,
}

fn default_precision() -> Precision { Precision::Second }
fn one() -> u32 { 1 }

impl TryFrom<RawTemporal> for TemporalValue {
    type Error = Error;

    fn try_from(raw: RawTemporal) -> Result<Self> {
        Self::new(
            raw.calendar, raw.precision, raw.year, raw.month, raw.day,
            raw.hour, raw.minute, raw.second,
        )
    }
}

impl From<TemporalValue> for RawTemporal {
    fn from(v: TemporalValue) -> Self {
        Self {
            calendar: v.calendar,
            precision: v.precision,
            year: v.year,
            month: v.month,
            day: v.day,
            hour: v.hour,
            minute: v.minute,
            second: v.second,
        }
    }
}
