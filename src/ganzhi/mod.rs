//! 干支與四柱
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊提供天干、地支的封閉枚舉與四柱（年、月、日、時柱）推算。月柱
//! 分界依實際太陽黃經推算的十二節（見 [`ephemeris`]，日級精度），年柱
//! 分界為立春。
//!
//! # 用例
//!
//! ```
//! use bazilo::Date;
//! use bazilo::ganzhi::FourPillars;
//!
//! let date = Date::from_gregorian(1990, 1, 1).unwrap();
//! let pillars = FourPillars::compute(date, 12);
//!
//! assert_eq!("己巳 丙子 丙寅 甲午", pillars.to_string());
//! ```

use std::fmt;

use serde::Serialize;

use crate::date::Date;

pub mod ephemeris;

/// 十天干。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    /// 全部天干，甲至癸。
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// 序號，甲為 0 至癸為 9。
    pub fn index(self) -> usize {
        self as usize
    }
    /// 由序號取天干，按 10 取模。
    pub fn from_index(i: u32) -> Stem {
        Self::ALL[(i % 10) as usize]
    }
    /// 天干名。
    pub fn name(self) -> &'static str {
        ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"][self as usize]
    }
    /// 由單字識別天干，非天干字元返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use bazilo::ganzhi::Stem;
    ///
    /// assert_eq!(Some(Stem::Ren), Stem::from_char('壬'));
    /// assert_eq!(None, Stem::from_char('王'));
    /// ```
    pub fn from_char(c: char) -> Option<Stem> {
        "甲乙丙丁戊己庚辛壬癸"
            .chars()
            .position(|x| x == c)
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 十二地支。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    /// 全部地支，子至亥。
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// 序號，子為 0 至亥為 11。
    pub fn index(self) -> usize {
        self as usize
    }
    /// 由序號取地支，按 12 取模。
    pub fn from_index(i: u32) -> Branch {
        Self::ALL[(i % 12) as usize]
    }
    /// 地支名。
    pub fn name(self) -> &'static str {
        [
            "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
        ][self as usize]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一柱，天干地支各一，構成後不再變動。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// 由六十甲子序號（1 為甲子至 60 為癸亥）取得干支，序號按 60 取模。
    ///
    /// # 用例
    ///
    /// ```
    /// use bazilo::ganzhi::Pillar;
    ///
    /// assert_eq!("乙巳", Pillar::from_sexagenary(42).to_string());
    /// ```
    pub fn from_sexagenary(num: i32) -> Pillar {
        let i = (num - 1).rem_euclid(60) as u32;
        Pillar {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// 四柱。日柱於後續分類中作「日主」用，結構上與他柱無異。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// 依公曆日期與時刻（`0..24` 時）推算四柱。
    ///
    /// 年柱以立春為界，月柱以十二節為界（日級精度），日柱即當日干支，
    /// 時柱按二十三時起子時的十二時辰劃分；月干由年干五虎遁、時干由
    /// 日干五鼠遁得出。純函數，同一輸入必得同一結果。
    ///
    /// # 用例
    ///
    /// ```
    /// use bazilo::Date;
    /// use bazilo::ganzhi::FourPillars;
    ///
    /// let date = Date::from_gregorian(1990, 1, 1).unwrap();
    /// let pillars = FourPillars::compute(date, 12);
    ///
    /// assert_eq!("己巳 丙子 丙寅 甲午", pillars.to_string());
    /// ```
    pub fn compute(date: Date, hour: u32) -> Self {
        let (y, _, _) = date.gregorian();
        let jie_passed = (0..12)
            .map(|k| ephemeris::jie_date(y, k))
            .take_while(|jie| *jie <= date)
            .count() as u32;

        // 年柱：立春（年內第 1 節）之前屬前一年
        let pillar_year = if jie_passed >= 2 { y } else { y - 1 };
        let year = Pillar::from_sexagenary(sexagenary_for_year(pillar_year) as i32);

        // 月支：小寒起丑，每過一節進一支；元旦至小寒前日仍屬子月
        let month_branch = Branch::from_index(jie_passed);
        // 月干：五虎遁，由年干定寅月起干
        let month_ord = (month_branch.index() as u32 + 10) % 12;
        let first_stem = (year.stem.index() as u32 % 5) * 2 + 2;
        let month = Pillar {
            stem: Stem::from_index(first_stem + month_ord),
            branch: month_branch,
        };

        let day = Pillar::from_sexagenary(date.sexagenary());

        // 時支：二十三時起子時；時干：五鼠遁
        let hour_branch = Branch::from_index((hour + 1) / 2);
        let zi_stem = (day.stem.index() as u32 % 5) * 2;
        let hour = Pillar {
            stem: Stem::from_index(zi_stem + hour_branch.index() as u32),
            branch: hour_branch,
        };

        FourPillars {
            year,
            month,
            day,
            hour,
        }
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// 取得所給公元年的干支序號。
///
/// # 用例
///
/// ```
/// use bazilo::ganzhi::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_round_trip() {
        for (i, stem) in Stem::ALL.iter().enumerate() {
            assert_eq!(i, stem.index());
            let c = stem.name().chars().next().unwrap();
            assert_eq!(Some(*stem), Stem::from_char(c));
        }
        for (i, branch) in Branch::ALL.iter().enumerate() {
            assert_eq!(i, branch.index());
            assert_eq!(*branch, Branch::from_index(i as u32));
        }
    }

    #[test]
    fn sexagenary_names() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, Pillar::from_sexagenary(num).to_string());
        }
    }

    #[test]
    fn year_sexagenary() {
        for (std, year) in [(60, -2697), (1, -2696), (17, 2000)] {
            assert_eq!(std, sexagenary_for_year(year));
        }
    }

    #[test]
    fn four_pillars() {
        let dataset = [
            ((1990, 1, 1), 12, "己巳 丙子 丙寅 甲午"),
            ((2000, 1, 1), 12, "己卯 丙子 戊午 戊午"),
            ((1990, 2, 4), 0, "庚午 戊寅 庚子 丙子"),
        ];
        for ((y, m, d), hour, std) in dataset {
            let pillars = FourPillars::compute(Date::from_gregorian(y, m, d).unwrap(), hour);
            assert_eq!(std, pillars.to_string(), "{y:04}-{m:02}-{d:02} {hour}時");
        }
    }

    #[test]
    fn hour_boundary() {
        // 二十二時五十九分仍屬亥時，二十三時整轉入子時，支序相鄰
        let date = Date::from_gregorian(1990, 1, 1).unwrap();
        let before = FourPillars::compute(date, 22);
        let after = FourPillars::compute(date, 23);
        assert_eq!(Branch::Hai, before.hour.branch);
        assert_eq!(Branch::Zi, after.hour.branch);
        assert_eq!(
            (before.hour.branch.index() + 1) % 12,
            after.hour.branch.index()
        );
    }

    #[test]
    fn lichun_boundary() {
        // 1990 年立春當日即轉入庚午年寅月
        let feb3 = FourPillars::compute(Date::from_gregorian(1990, 2, 3).unwrap(), 12);
        let feb4 = FourPillars::compute(Date::from_gregorian(1990, 2, 4).unwrap(), 12);
        assert_eq!("己巳", feb3.year.to_string());
        assert_eq!(Branch::Chou, feb3.month.branch);
        assert_eq!("庚午", feb4.year.to_string());
        assert_eq!(Branch::Yin, feb4.month.branch);
    }

    #[test]
    fn deterministic_over_supported_range() {
        for y in 1900..=2026 {
            for (m, d, h) in [(1, 1, 0), (6, 15, 12), (12, 31, 23)] {
                let date = Date::from_gregorian(y, m, d).unwrap();
                let first = FourPillars::compute(date, h);
                assert_eq!(first, FourPillars::compute(date, h), "{y:04}-{m:02}-{d:02}");
            }
        }
    }
}
