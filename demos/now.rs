use chrono::Utc;
use tempoch_sidereal::{angle_to_time, JulianDate, ModifiedJulianDate};

fn main() {
    let now_jd = JulianDate::from_utc(Utc::now());
    let now_mjd: ModifiedJulianDate = now_jd.to_mjd();
    let gmst = now_jd.greenwich_mean_sidereal_time();

    println!("JD: {now_jd}");
    println!("MJD: {now_mjd}");
    println!("GMST: {gmst} ({})", angle_to_time(gmst));
}
