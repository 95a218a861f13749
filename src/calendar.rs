// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Civil calendar → Julian Day Number
//!
//! Conversion of proleptic civil dates to the continuous Julian Day count,
//! following Chapter 7 of *Jean Meeus — Astronomical Algorithms (2nd ed.
//! 1998)*.
//!
//! ## The 1582 cutover
//! The day after **1582 October 4** (Julian calendar) is **1582 October 15**
//! (Gregorian calendar).  Dates strictly before October 15 are computed on
//! the Julian calendar, later ones on the Gregorian, so exactly one Julian
//! Day elapses across the ten skipped civil dates:
//!
//! ```rust
//! use tempoch_sidereal::calendar::julian_day;
//!
//! assert_eq!(julian_day(1582, 10, 4.0).value(), 2_299_159.5);
//! assert_eq!(julian_day(1582, 10, 15.0).value(), 2_299_160.5);
//! ```
//!
//! Dates inside the gap (October 5–14, 1582) and out-of-range days such as
//! the 32nd are not rejected; they produce a number with no real-world
//! meaning.
//!
//! ## Year numbering
//! Years are astronomical: year `0` is 1 BC and `-4712` is 4713 BC.

use chrono::{DateTime, Datelike, Timelike, Utc};
use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::JulianDate;

/// Year in which the Gregorian reform took effect.
const GREGORIAN_REFORM_YEAR: i64 = 1582;
/// Month of the reform (October).
const GREGORIAN_REFORM_MONTH: i64 = 10;
/// First Gregorian day of month in the reform month.
const GREGORIAN_REFORM_DAY: i64 = 15;

/// Gregorian leap-year rule: divisible by 4, and century years only when
/// also divisible by 400.
///
/// For non-century years this coincides with the Julian rule, so callers
/// working on the Julian calendar must handle century years themselves.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Whether the given date falls strictly before 1582-10-15.
///
/// Dates inside the October 5–14 gap are classified as Gregorian without
/// being validated.
#[inline]
pub const fn is_julian_calendar(year: i32, month: u32, day: u32) -> bool {
    precedes_reform(year as i64, month as i64, day as i64)
}

/// Cutover test on widened fields, so the month shift in [`julian_day`]
/// cannot overflow.
#[inline]
const fn precedes_reform(year: i64, month: i64, day: i64) -> bool {
    year < GREGORIAN_REFORM_YEAR
        || (year == GREGORIAN_REFORM_YEAR
            && (month < GREGORIAN_REFORM_MONTH
                || (month == GREGORIAN_REFORM_MONTH && day < GREGORIAN_REFORM_DAY)))
}

/// Fraction of a day covered by the given clock reading.
///
/// Components are not range checked: `day_fraction(0.0, 60.0, 0.0, 0.0)`
/// equals `day_fraction(1.0, 0.0, 0.0, 0.0)` and 24 hours is a whole day.
#[inline]
pub fn day_fraction(hours: f64, minutes: f64, seconds: f64, milliseconds: f64) -> Days {
    Days::new(hours / 24.0 + minutes / 1_440.0 + (seconds + milliseconds / 1_000.0) / 86_400.0)
}

/// Julian Day Number for a proleptic `year`, `month` and fractional `day`.
///
/// The fractional part of `day` is the time of day, so `julian_day(2000, 1,
/// 1.5)` is noon on 2000 January 1, i.e. J2000.0.
pub fn julian_day(year: i32, month: u32, day: f64) -> JulianDate {
    let (year, month) = (i64::from(year), i64::from(month));

    // January and February count as months 13 and 14 of the preceding year.
    let (year, month) = if month == 1 || month == 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    // Integer division truncates toward zero, which the BC branch relies on.
    let b = if precedes_reform(year, month, day.trunc() as i64) {
        0
    } else {
        let a = year / 100;
        2 - a + a / 4
    };

    let year_days = (365.25 * (year as f64 + 4_716.0)).trunc();
    let month_days = (30.6001 * (month + 1) as f64).trunc();

    JulianDate::new(year_days + month_days + day + b as f64 - 1_524.5)
}

// ═══════════════════════════════════════════════════════════════════════════
// CivilDate
// ═══════════════════════════════════════════════════════════════════════════

/// A proleptic calendar date whose `day` carries the time of day in its
/// fractional part.
///
/// Day-of-month bounds are the caller's responsibility.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

impl CivilDate {
    #[inline]
    pub const fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Build from clock components, folding them into the day through
    /// [`day_fraction`].
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hours: f64,
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
    ) -> Self {
        let fraction = day_fraction(hours, minutes, seconds, milliseconds);
        Self::new(year, month, f64::from(day) + fraction.value())
    }

    /// See [`is_julian_calendar`].
    #[inline]
    pub fn is_julian_calendar(&self) -> bool {
        is_julian_calendar(self.year, self.month, self.day.trunc() as u32)
    }

    /// See [`julian_day`].
    #[inline]
    pub fn julian_day(&self) -> JulianDate {
        julian_day(self.year, self.month, self.day)
    }
}

impl From<DateTime<Utc>> for CivilDate {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_ymd_hms(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            f64::from(datetime.hour()),
            f64::from(datetime.minute()),
            f64::from(datetime.second()),
            f64::from(datetime.nanosecond()) / 1e6,
        )
    }
}
