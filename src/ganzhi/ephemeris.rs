//! 太陽視黃經與節氣時刻推算
//!
//! 早先按預製天文曆表查節氣的做法只覆蓋 1970 年起的年份，不敷本 crate 自
//! 1900 年起的支持範圍，故改用低精度太陽黃經級數直接推算。級數誤差約
//! 0.01°（合約一刻鐘），對取節氣所在日期綽綽有餘。

use crate::date::Date;
use crate::time_scales::{Tt, Ut};

/// 太陽每日平均行度（度）。
const MEAN_MOTION: f64 = 360.0 / 365.2422;

/// 太陽視黃經（度，`0..360`）。
///
/// 採用常見的低精度太陽位置級數（幾何平黃經、中心差，附章動與光行差的
/// 簡化修正項）。
pub fn solar_longitude(tt: Tt) -> f64 {
    let t = (tt.0 - 2451545.0) / 36525.0;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

/// 十二節各自的太陽黃經（度），`0` 為小寒（285°）至 `11` 為大雪（255°）。
fn jie_longitude(k: usize) -> f64 {
    ((285 + 30 * k) % 360) as f64
}

/// 公元 `year` 年內第 `k` 節的交節時刻（TT）。
///
/// `k` 取 `0..=11`，依次為小寒至大雪，十二節皆落於當年之內。
///
/// # Panics
///
/// 年份超出 [`Date`] 支持範圍則 panic。
pub fn jie_instant(year: i32, k: usize) -> Tt {
    let jan1 = Date::from_gregorian(year, 1, 1)
        .unwrap_or_else(|| panic!("year {} out of supported range", year));
    // 以平行度粗定交節日，再按黃經殘差迭代收斂
    let mut jd = jan1.jdn() as f64 - 0.5 + 5.0 + 30.44 * k as f64;
    for _ in 0..8 {
        let residual = angle_residual(jie_longitude(k) - solar_longitude(Tt(jd)));
        if residual.abs() < 1e-6 {
            break;
        }
        jd += residual / MEAN_MOTION;
    }
    Tt(jd)
}

/// 公元 `year` 年內第 `k` 節交節當日的北京時間（UTC+8）日期。
///
/// # 用例
///
/// ```
/// use bazilo::Date;
/// use bazilo::ganzhi::ephemeris::jie_date;
///
/// // 2000 年立春
/// assert_eq!(Date::from_gregorian(2000, 2, 4).unwrap(), jie_date(2000, 1));
/// ```
pub fn jie_date(year: i32, k: usize) -> Date {
    Ut::convert(jie_instant(year, k)).date_in_timezone(480)
}

/// 將角度差規整到 `(-180, 180]`。
fn angle_residual(deg: f64) -> f64 {
    180.0 - (180.0 - deg).rem_euclid(360.0)
}


#[cfg(test)]
mod tests_priv {
    use super::*;

    #[test]
    fn priv_angle_residual() {
        assert_eq!(0.0, angle_residual(0.0));
        assert_eq!(-170.0, angle_residual(190.0));
        assert_eq!(170.0, angle_residual(-190.0));
        assert_eq!(-100.0, angle_residual(620.0));
    }
}
