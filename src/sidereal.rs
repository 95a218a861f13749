// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mean Sidereal Time
//!
//! Greenwich and local mean sidereal time from the IAU 1982 expression
//! (Meeus, *Astronomical Algorithms*, eq. 12.4), expressed in degrees.
//!
//! Two formulations are provided:
//!
//! * [`mean_sidereal_time_at_greenwich`] evaluates the polynomial directly
//!   at any Julian Day.
//! * [`local_sidereal_time`] evaluates sidereal time at 0h UT for the
//!   calendar date and advances it by the elapsed clock time, rounding each
//!   intermediate term to a fixed number of decimals.
//!
//! Both results are reduced to `[0, 360)` with a true (non-negative)
//! modulo.  Intermediate rounding is decimal: a value is rounded on its
//! exact binary expansion with ties going to the even digit.
//!
//! ## Known deviation
//! For 1987 April 10, 19h21m00s UT the direct formulation yields
//! `128.73787324433215°`, while Meeus example 12.b prints `128.7378734°`.
//! The computed value is kept as is.

use qtty::Degrees;

use super::calendar::{day_fraction, julian_day};
use super::JulianDate;

/// GMST at J2000.0 (degrees), direct formulation.
const GMST_AT_J2000: f64 = 280.460_618_37;
/// Sidereal advance per solar day (degrees).
const GMST_RATE_PER_DAY: f64 = 360.985_647_366_29;
/// Quadratic coefficient, direct formulation.
const GMST_T2: f64 = 0.000_387_933;
/// Cubic divisor, direct formulation.
const GMST_T3_DIVISOR: f64 = 38_710_000.0;

/// GMST at 0h UT on J2000.0's date (degrees), 0h formulation.
const GMST0_AT_J2000: f64 = 100.460_618_4;
/// Sidereal advance per Julian century at 0h UT (degrees).
const GMST0_RATE_PER_CENTURY: f64 = 36_000.770_053_61;
/// Quadratic coefficient, 0h formulation.
const GMST0_T2: f64 = 0.000_387_93;

/// Sidereal degrees swept per minute of solar time (`360 / 1436.0681755`).
pub const SIDEREAL_DEGREES_PER_MINUTE: f64 = 0.250_684_477_337_462_15;

const ANGLE_DECIMALS: usize = 7;
const TIME_DECIMALS: usize = 8;

/// Reduce an angle to `[0, 360)`.
///
/// Negative inputs wrap upward, so `-1°` becomes `359°`.
#[inline]
pub fn normalize_degrees(angle: Degrees) -> Degrees {
    let wrapped = angle.value().rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    Degrees::new(if wrapped >= 360.0 { 0.0 } else { wrapped })
}

/// Greenwich Mean Sidereal Time for the given Julian Day, in `[0, 360)`.
pub fn mean_sidereal_time_at_greenwich(jd: JulianDate) -> Degrees {
    let days = jd.value() - JulianDate::J2000.value();
    let t = jd.julian_centuries().value();

    let theta =
        GMST_AT_J2000 + GMST_RATE_PER_DAY * days + GMST_T2 * t * t - t * t * t / GMST_T3_DIVISOR;

    normalize_degrees(Degrees::new(theta))
}

/// Local Mean Sidereal Time for a calendar date and UT clock reading.
///
/// `longitude` is East positive.  The sidereal time at 0h UT is rounded to
/// 7 decimals, the clock-time advance to 8, and the final angle to 7.
pub fn local_sidereal_time(
    year: i32,
    month: u32,
    day: u32,
    hours: f64,
    minutes: f64,
    seconds: f64,
    longitude: Degrees,
) -> Degrees {
    let midnight = julian_day(year, month, f64::from(day));
    let t = midnight.julian_centuries().value();

    let gst0 = normalize_degrees(Degrees::new(
        GMST0_AT_J2000 + GMST0_RATE_PER_CENTURY * t + GMST0_T2 * t * t,
    ));
    let gst0 = round_to(gst0.value(), ANGLE_DECIMALS);

    let elapsed_minutes = hours * 60.0 + minutes + seconds / 60.0;
    let advance = round_to(SIDEREAL_DEGREES_PER_MINUTE * elapsed_minutes, TIME_DECIMALS);

    let lst = normalize_degrees(Degrees::new(gst0 + advance + longitude.value()));
    Degrees::new(round_to(lst.value(), ANGLE_DECIMALS))
}

/// Greenwich Mean Sidereal Time for a calendar date and UT clock reading,
/// using the direct formulation.
pub fn mean_sidereal_time_at(
    year: i32,
    month: u32,
    day: u32,
    hours: f64,
    minutes: f64,
    seconds: f64,
) -> Degrees {
    let fraction = day_fraction(hours, minutes, seconds, 0.0);
    let jd = julian_day(year, month, f64::from(day) + fraction.value());
    mean_sidereal_time_at_greenwich(jd)
}

/// Round to `decimals` places on the exact binary value, ties to even.
///
/// Scaling by `10^decimals` first would round the product, which can push
/// a value sitting just below a half-way point over it.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(Degrees::new(370.0)), Degrees::new(10.0));
        assert_eq!(normalize_degrees(Degrees::new(-1.0)), Degrees::new(359.0));
        assert_eq!(normalize_degrees(Degrees::new(360.0)), Degrees::new(0.0));
        assert_eq!(normalize_degrees(Degrees::new(-720.0)), Degrees::new(0.0));
        assert_eq!(normalize_degrees(Degrees::new(-1e-20)), Degrees::new(0.0));
    }

    #[test]
    fn gmst_at_j2000() {
        let gmst = mean_sidereal_time_at_greenwich(JulianDate::J2000);
        assert!((gmst.value() - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn gmst_meeus_example_12b() {
        let gmst = mean_sidereal_time_at(1987, 4, 10, 19.0, 21.0, 0.0);
        assert!(
            (gmst.value() - 128.737_873_244_332_15).abs() < 1e-9,
            "GMST = {}",
            gmst.value()
        );
    }

    #[test]
    fn gmst_textbook_value_is_a_known_deviation() {
        // Meeus prints 128.7378734; the polynomial lands ~1.6e-7 below it.
        let gmst = mean_sidereal_time_at(1987, 4, 10, 19.0, 21.0, 0.0);
        let textbook = 128.737_873_4;
        assert!((gmst.value() - textbook).abs() < 1e-6);
        assert!((gmst.value() - textbook).abs() > 1e-8);
    }

    #[test]
    fn gmst_for_bc_dates_is_non_negative() {
        let gmst = mean_sidereal_time_at_greenwich(julian_day(-4712, 1, 1.5));
        assert!((0.0..360.0).contains(&gmst.value()), "GMST = {}", gmst.value());
    }

    #[test]
    fn lst_reference_vector() {
        let lst = local_sidereal_time(2001, 12, 5, 18.0, 45.0, 30.0, Degrees::new(-80.408_333));
        assert!((lst.value() - 275.600_586_9).abs() < 1e-9, "LST = {}", lst.value());
        // Published value for this date is 275.600766.
        assert!((lst.value() - 275.600_766).abs() < 5e-4);
    }

    #[test]
    fn rounding_is_decimal_half_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(-0.125, 2), -0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        // Stored just below the tie; scaling by 1e7 would round it up.
        assert_eq!(round_to(29.324_077_95, 7), 29.324_077_9);
        assert_eq!(round_to(147.334_665_45, 7), 147.334_665_4);
        assert_eq!(round_to(275.600_586_9, 7), 275.600_586_9);
        assert!(round_to(f64::NAN, 7).is_nan());
    }

    #[test]
    fn lst_at_greenwich_matches_direct_formulation() {
        let lst = local_sidereal_time(1987, 4, 10, 19.0, 21.0, 0.0, Degrees::new(0.0));
        let gmst = mean_sidereal_time_at(1987, 4, 10, 19.0, 21.0, 0.0);
        assert!((lst.value() - gmst.value()).abs() < 1e-4);
    }

    #[test]
    fn lst_wraps_with_large_longitudes() {
        let base = local_sidereal_time(2001, 12, 5, 18.0, 45.0, 30.0, Degrees::new(0.0));
        let east = local_sidereal_time(2001, 12, 5, 18.0, 45.0, 30.0, Degrees::new(200.0));
        assert!((0.0..360.0).contains(&east.value()));
        let expected = (base.value() + 200.0).rem_euclid(360.0);
        assert!((east.value() - expected).abs() < 1e-6);
    }
}
