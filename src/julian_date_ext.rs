// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions.

use qtty::*;

use super::instant::Time;
use super::scales::{JD, MJD};
use super::sidereal::{mean_sidereal_time_at_greenwich, normalize_degrees};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0, the `T` of the sidereal-time polynomials.
    ///
    /// Only this direction exists; a `Centuries` count is not an instant:
    ///
    /// ```compile_fail
    /// use qtty::Centuries;
    /// use tempoch_sidereal::JulianDate;
    ///
    /// let jd = JulianDate::from(Centuries::new(1.0));
    /// ```
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((self.value() - Self::J2000.value()) / Self::JULIAN_CENTURY.value())
    }

    /// Greenwich Mean Sidereal Time at this instant, in `[0, 360)` degrees.
    #[inline]
    pub fn greenwich_mean_sidereal_time(&self) -> Degrees {
        mean_sidereal_time_at_greenwich(*self)
    }

    /// Local Mean Sidereal Time at `longitude` (East positive), in `[0, 360)`.
    #[inline]
    pub fn local_mean_sidereal_time(&self, longitude: Degrees) -> Degrees {
        normalize_degrees(self.greenwich_mean_sidereal_time() + longitude)
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::julian_day;

    #[test]
    fn centuries_since_j2000() {
        let jd = Time::<JD>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));

        let t = julian_day(2001, 12, 5.0).julian_centuries();
        assert_eq!(t.value(), 703.5 / 36_525.0);
    }

    #[test]
    fn centuries_are_negative_before_j2000() {
        let t = julian_day(1987, 4, 10.0).julian_centuries();
        assert!(t.value() < 0.0);
    }

    #[test]
    fn sidereal_shortcuts() {
        let jd = Time::<JD>::J2000;
        assert_eq!(jd.greenwich_mean_sidereal_time(), mean_sidereal_time_at_greenwich(jd));

        let west = jd.local_mean_sidereal_time(Degrees::new(-300.0));
        let expected = (280.460_618_37 - 300.0_f64).rem_euclid(360.0);
        assert!((west.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn mjd_shortcut() {
        assert_eq!(Time::<JD>::J2000.to_mjd().value(), 51_544.5);
    }
}
