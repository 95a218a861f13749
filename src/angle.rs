// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagesimal time ↔ decimal degrees.
//!
//! One hour of time is 15° of rotation, one minute 0.25°, one second
//! 1/240°.  Neither direction normalizes to `[0, 360)`; use
//! [`normalize_degrees`](crate::sidereal::normalize_degrees) when needed.

use qtty::Degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Degrees of rotation per hour of time.
pub const DEGREES_PER_HOUR: f64 = 360.0 / 24.0;
/// Degrees of rotation per minute of time.
pub const DEGREES_PER_MINUTE: f64 = 360.0 / 1_440.0;
/// Degrees of rotation per second of time.
pub const DEGREES_PER_SECOND: f64 = 360.0 / 86_400.0;

const SECONDS_SCALE: f64 = 1e6;

/// An hours-minutes-seconds reading, either a clock time or an hour angle.
///
/// Fields are not bounded; `hours` may exceed 24 for accumulated totals.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SexagesimalTime {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl SexagesimalTime {
    #[inline]
    pub const fn new(hours: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Equivalent rotation angle, see [`time_to_angle`].
    #[inline]
    pub fn to_degrees(&self) -> Degrees {
        time_to_angle(f64::from(self.hours), f64::from(self.minutes), self.seconds)
    }
}

impl From<Degrees> for SexagesimalTime {
    #[inline]
    fn from(angle: Degrees) -> Self {
        angle_to_time(angle)
    }
}

impl fmt::Display for SexagesimalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Rotation angle swept in the given time.
#[inline]
pub fn time_to_angle(hours: f64, minutes: f64, seconds: f64) -> Degrees {
    Degrees::new(
        hours * DEGREES_PER_HOUR + minutes * DEGREES_PER_MINUTE + seconds * DEGREES_PER_SECOND,
    )
}

/// Split an angle into hours, minutes and seconds of time.
///
/// Hours and minutes are floored, seconds are rounded to 6 decimals.  A
/// seconds value that rounds up to `60.0` is carried into the minutes (and
/// from there into the hours), so `seconds` always stays below 60.
pub fn angle_to_time(angle: Degrees) -> SexagesimalTime {
    let total_hours = angle.value() / DEGREES_PER_HOUR;
    let total_minutes = (total_hours - total_hours.floor()) * 60.0;
    let seconds = (total_minutes - total_minutes.floor()) * 60.0;
    let mut seconds = (seconds * SECONDS_SCALE).round() / SECONDS_SCALE;

    let mut hours = total_hours.floor() as i32;
    let mut minutes = total_minutes.floor() as i32;
    if seconds >= 60.0 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        hours += 1;
    }

    SexagesimalTime::new(hours, minutes, seconds)
}
