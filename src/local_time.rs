// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC → local wall-clock time.
//!
//! * [`mean_local_time`] reads a UTC instant in the process's configured
//!   timezone, delegating the offset rules to chrono's [`Local`].
//! * [`standard_time_at_longitude`] shifts a UTC instant by four minutes per
//!   degree of longitude, the solar time at that exact meridian.

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};
use qtty::Degrees;

use super::error::{TimeError, TimeResult};

/// Seconds of solar time per degree of longitude (Earth turns 1° in 4 min).
const SECONDS_PER_DEGREE: f64 = 240.0;
const NANOS_PER_SECOND: f64 = 1e9;

/// The UTC instant as seen on the system's local clock.
#[inline]
pub fn mean_local_time(utc: DateTime<Utc>) -> DateTime<Local> {
    mean_local_time_in(utc, &Local)
}

/// The UTC instant as seen on the clock of an arbitrary timezone.
#[inline]
pub fn mean_local_time_in<Tz: TimeZone>(utc: DateTime<Utc>, tz: &Tz) -> DateTime<Tz> {
    utc.with_timezone(tz)
}

/// Wall-clock time on the meridian at `longitude` (East positive).
///
/// The offset is `longitude × 4 min`, to nanosecond resolution.
pub fn standard_time_at_longitude(
    utc: DateTime<Utc>,
    longitude: Degrees,
) -> TimeResult<NaiveDateTime> {
    let degrees = longitude.value();
    if !degrees.is_finite() {
        return Err(TimeError::NonFiniteLongitude(degrees));
    }

    let nanos = (degrees * SECONDS_PER_DEGREE * NANOS_PER_SECOND).round();
    if nanos.abs() >= i64::MAX as f64 {
        #[cfg(feature = "log")]
        log::warn!("longitude {degrees} overflows the clock offset");
        return Err(TimeError::OutOfRange(format!("offset for longitude {degrees}°")));
    }

    utc.naive_utc()
        .checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
        .ok_or_else(|| TimeError::OutOfRange(format!("{utc} shifted by {degrees}°")))
}
