use proptest::prelude::*;
use qtty::Degrees;
use tempoch_sidereal::{
    angle_to_time, day_fraction, is_leap_year, julian_day, mean_sidereal_time_at_greenwich,
    time_to_angle, JulianDate,
};

proptest! {
    #[test]
    fn prop_non_century_multiples_of_four_are_leap(k in -10_000i32..10_000) {
        let year = k * 4;
        prop_assume!(year % 100 != 0);
        prop_assert!(is_leap_year(year));
    }

    #[test]
    fn prop_century_years_leap_only_every_fourth(c in -1_000i32..1_000) {
        let year = c * 100;
        prop_assert_eq!(is_leap_year(year), year % 400 == 0);
    }

    #[test]
    fn prop_odd_years_are_never_leap(k in -10_000i32..10_000) {
        prop_assert!(!is_leap_year(k * 2 + 1));
    }

    #[test]
    fn prop_sixty_minutes_is_one_hour(h in 0u32..48, m in 0u32..120) {
        let lhs = day_fraction(f64::from(h), f64::from(m + 60), 0.0, 0.0).value();
        let rhs = day_fraction(f64::from(h + 1), f64::from(m), 0.0, 0.0).value();
        prop_assert!((lhs - rhs).abs() < 1e-12);
    }

    #[test]
    fn prop_gmst_stays_in_range(jd in -5.0e6f64..5.0e6) {
        let gmst = mean_sidereal_time_at_greenwich(JulianDate::new(jd)).value();
        prop_assert!((0.0..360.0).contains(&gmst), "GMST({}) = {}", jd, gmst);
    }

    #[test]
    fn prop_julian_day_increases_within_a_month(
        year in -4000i32..4000,
        month in 1u32..=12,
        day in 1u32..28,
    ) {
        prop_assume!(!(year == 1582 && month == 10));
        let today = julian_day(year, month, f64::from(day));
        let tomorrow = julian_day(year, month, f64::from(day + 1));
        prop_assert_eq!(tomorrow.value() - today.value(), 1.0);
    }

    #[test]
    fn prop_sexagesimal_roundtrip(h in 0u32..24, m in 0u32..60, micros in 0u32..60_000_000) {
        let s = f64::from(micros) / 1e6;
        let angle = time_to_angle(f64::from(h), f64::from(m), s);
        let back = angle_to_time(angle);

        prop_assert_eq!((back.hours, back.minutes), (h as i32, m as i32));
        prop_assert!((back.seconds - s).abs() < 1e-6, "{} vs {}", back.seconds, s);
    }

    #[test]
    fn prop_angle_to_time_matches_inverse(deg in 0.0f64..360.0) {
        let time = angle_to_time(Degrees::new(deg));
        prop_assert!((0.0..60.0).contains(&time.seconds), "{}", time);
        prop_assert!((0..60).contains(&time.minutes), "{}", time);
        // Only a full turn that rounds up may reach 24h.
        prop_assert!(
            (0..24).contains(&time.hours) || (time.hours == 24 && time.minutes == 0 && time.seconds == 0.0),
            "{}", time
        );
        prop_assert!((time.to_degrees().value() - deg).abs() < 1e-7);
    }
}
