// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Days and Sidereal Time
//!
//! Conversions from civil calendar dates to the continuous Julian Day count,
//! and from there to Greenwich and local mean sidereal time.  Sexagesimal
//! time ↔ degree conversions and UTC → local wall-clock helpers sit
//! alongside the pipeline:
//!
//! ```text
//! civil date/time ──julian_day──▶ JulianDate ──GMST──▶ Degrees ──angle_to_time──▶ h m s
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`calendar`] | leap years, Julian/Gregorian cutover, day fractions, [`julian_day`] |
//! | [`sidereal`] | [`mean_sidereal_time_at_greenwich`], [`local_sidereal_time`] |
//! | [`angle`] | [`time_to_angle`], [`angle_to_time`], [`SexagesimalTime`] |
//! | [`local_time`] | [`mean_local_time`], [`standard_time_at_longitude`] |
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — type alias for `Time<JD>`.
//! - [`ModifiedJulianDate`] — type alias for `Time<MJD>`.
//! - [`CivilDate`] — proleptic year, month and fractional day.
//!
//! # Example
//!
//! ```rust
//! use tempoch_sidereal::{julian_day, mean_sidereal_time_at_greenwich, angle_to_time};
//!
//! let jd = julian_day(2000, 1, 1.5);
//! assert_eq!(jd.value(), 2_451_545.0);
//!
//! let gmst = mean_sidereal_time_at_greenwich(jd);
//! let hms = angle_to_time(gmst);
//! assert_eq!((hms.hours, hms.minutes), (18, 41));
//! ```

pub mod angle;
pub mod calendar;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub mod local_time;
pub(crate) mod scales;
pub mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{angle_to_time, time_to_angle, SexagesimalTime};
pub use calendar::{day_fraction, is_julian_calendar, is_leap_year, julian_day, CivilDate};
pub use error::{TimeError, TimeResult};
pub use instant::{Time, TimeScale};
pub use local_time::{mean_local_time, mean_local_time_in, standard_time_at_longitude};
pub use scales::{UnixTime, JD, MJD};
pub use sidereal::{
    local_sidereal_time, mean_sidereal_time_at, mean_sidereal_time_at_greenwich,
    normalize_degrees,
};

/// Julian Day Number — continuous count of days since noon, 4713 BC
/// January 1 (proleptic Julian calendar).
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
