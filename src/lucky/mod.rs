//! 喜用神查表與五行分類
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 依日干與月支查傳統對照表，得出喜用神天干、對應五行與五步判讀過程
//! 記錄。全程為靜態表上的純函數，無任何共享可變狀態。
//!
//! # 用例
//!
//! ```
//! use bazilo::ganzhi::{Branch, Stem};
//! use bazilo::lucky::{self, Element};
//!
//! let result = lucky::classify(Stem::Jia, Branch::Yin).unwrap();
//!
//! assert_eq!(vec![Stem::Bing, Stem::Gui], result.useful_stems);
//! assert_eq!(vec![Element::Fire, Element::Water], result.useful_elements);
//! assert_eq!(5, result.process.len());
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::ganzhi::{Branch, Stem};

mod table;

/// 五行。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// 天干所屬五行，十干兩兩一行。
    ///
    /// # 用例
    ///
    /// ```
    /// use bazilo::ganzhi::Stem;
    /// use bazilo::lucky::Element;
    ///
    /// assert_eq!(Element::Wood, Element::of(Stem::Jia));
    /// assert_eq!(Element::Water, Element::of(Stem::Gui));
    /// ```
    pub fn of(stem: Stem) -> Element {
        use Stem::*;
        match stem {
            Jia | Yi => Element::Wood,
            Bing | Ding => Element::Fire,
            Wu | Ji => Element::Earth,
            Geng | Xin => Element::Metal,
            Ren | Gui => Element::Water,
        }
    }
    /// 五行名。
    pub fn name(self) -> &'static str {
        use Element::*;
        match self {
            Wood => "木",
            Fire => "火",
            Earth => "土",
            Metal => "金",
            Water => "水",
        }
    }
    /// 顯示屬性（代表色、色系、描述），供呈現層取用。
    pub fn info(self) -> &'static ElementInfo {
        &ELEMENT_INFO[self as usize]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 五行的顯示屬性。
#[derive(Debug, Serialize)]
pub struct ElementInfo {
    /// 代表色，十六進制色值
    pub color: &'static str,
    /// 色系名
    pub palette: &'static str,
    /// 色彩能量描述
    pub description: &'static str,
}

// 順序須與 Element 變體一致
static ELEMENT_INFO: [ElementInfo; 5] = [
    ElementInfo {
        color: "#16a34a",
        palette: "綠色系",
        description: "木主生長，綠色帶來舒展與生機。",
    },
    ElementInfo {
        color: "#dc2626",
        palette: "紅色・紫色系",
        description: "火主光明，紅紫色提升熱情與行動力。",
    },
    ElementInfo {
        color: "#ca8a04",
        palette: "黃色・棕色系",
        description: "土主厚載，黃棕色帶來安定與包容。",
    },
    ElementInfo {
        color: "#9ca3af",
        palette: "白色・金色系",
        description: "金主肅斂，白金色增添果斷與條理。",
    },
    ElementInfo {
        color: "#2563eb",
        palette: "黑色・藍色系",
        description: "水主潤下，黑藍色涵養智慧與靈活。",
    },
];

/// 查表結果，對一組（日干，月支）輸入恆定。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Classification {
    /// 喜用神天干，保持表中順序
    pub useful_stems: Vec<Stem>,
    /// 各喜用神所屬五行，與天干一一對應（可重複）
    pub useful_elements: Vec<Element>,
    /// 五步判讀過程記錄，僅供顯示
    pub process: Vec<String>,
}

/// 改正原表的轉錄錯誤：凡「王」皆改回「壬」（陽水天干）。
///
/// 原件部分欄位將「壬」誤刻作「王」，誤字與正字只能由表源判別，故每次
/// 查表後一律套用本規則，不以偵錯為條件。冪等；表源修正後刪除此替換
/// 即可。
pub fn normalize(raw: &str) -> String {
    raw.replace('王', "壬")
}

/// 依日干、月支查喜用神。
///
/// 回傳喜用神天干（保持表中順序）、對應五行與五步判讀過程記錄。
///
/// # 用例
///
/// ```
/// use bazilo::ganzhi::{Branch, Stem};
/// use bazilo::lucky;
///
/// let result = lucky::classify(Stem::Bing, Branch::Zi).unwrap();
///
/// assert_eq!("步驟 3：查表得出喜用神天干 = 壬戊己", result.process[2]);
/// ```
pub fn classify(day_stem: Stem, month_branch: Branch) -> Result<Classification> {
    classify_in(table::USEFUL_GOD_TABLE, day_stem, month_branch)
}

fn classify_in(table: table::Table, day_stem: Stem, month_branch: Branch) -> Result<Classification> {
    let row = table
        .iter()
        .find(|(stem, _)| *stem == day_stem)
        .ok_or(Error::UnknownDayStem(day_stem))?
        .1;
    let raw = row
        .iter()
        .find(|(branch, _)| *branch == month_branch)
        .ok_or(Error::UnknownMonthBranch {
            day_stem,
            month_branch,
        })?
        .1;

    let normalized = normalize(raw);
    let useful_stems = normalized
        .chars()
        .map(|c| Stem::from_char(c).ok_or(Error::UnmappedStem(c)))
        .collect::<Result<Vec<_>>>()?;
    let useful_elements: Vec<_> = useful_stems.iter().map(|&stem| Element::of(stem)).collect();

    let stem_steps: Vec<String> = useful_stems
        .iter()
        .zip(&useful_elements)
        .map(|(stem, element)| format!("{stem}→{element}"))
        .collect();
    let palette_steps: Vec<String> = useful_elements
        .iter()
        .map(|element| format!("{element}({})", element.info().palette))
        .collect();
    let process = vec![
        format!("步驟 1：識別日干 = {day_stem}"),
        format!("步驟 2：識別月支 = {month_branch}"),
        format!("步驟 3：查表得出喜用神天干 = {normalized}"),
        format!("步驟 4：將天干轉換為五行 = {}", stem_steps.join(", ")),
        format!("步驟 5：五行對應色系 = {}", palette_steps.join(", ")),
    ];

    Ok(Classification {
        useful_stems,
        useful_elements,
        process,
    })
}

/// 去除重複五行，保留各行首次出現的位置。冪等，不增長、不引入新行。
///
/// # 用例
///
/// ```
/// use bazilo::lucky::{Element::*, dedupe};
///
/// assert_eq!(vec![Water, Earth], dedupe(&[Water, Earth, Earth]));
/// ```
pub fn dedupe(elements: &[Element]) -> Vec<Element> {
    let mut seen = Vec::with_capacity(elements.len());
    for &element in elements {
        if !seen.contains(&element) {
            seen.push(element);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stems_per_element() {
        let mut counts = [0; 5];
        for stem in Stem::ALL {
            counts[Element::of(stem) as usize] += 1;
        }
        assert_eq!([2, 2, 2, 2, 2], counts);
    }

    #[test]
    fn classify_sample() {
        let result = classify(Stem::Bing, Branch::Zi).unwrap();
        let names: String = result.useful_stems.iter().map(|s| s.name()).collect();
        assert_eq!("壬戊己", names);
        assert_eq!(
            vec![Element::Water, Element::Earth, Element::Earth],
            result.useful_elements
        );
        assert_eq!(5, result.process.len());
        assert_eq!("步驟 1：識別日干 = 丙", result.process[0]);
        assert_eq!("步驟 2：識別月支 = 子", result.process[1]);
        assert_eq!("步驟 3：查表得出喜用神天干 = 壬戊己", result.process[2]);
        assert_eq!(
            "步驟 4：將天干轉換為五行 = 壬→水, 戊→土, 己→土",
            result.process[3]
        );
        assert_eq!(
            "步驟 5：五行對應色系 = 水(黑色・藍色系), 土(黃色・棕色系), 土(黃色・棕色系)",
            result.process[4]
        );
    }

    #[test]
    fn whole_table_classifies() {
        // 表資料一致性：任一欄位經改正後必須全數拆為正規天干
        for &(day_stem, row) in table::USEFUL_GOD_TABLE {
            for &(month_branch, raw) in row {
                let result = classify(day_stem, month_branch)
                    .unwrap_or_else(|e| panic!("{day_stem}×{month_branch}: {e}"));
                assert!(!result.useful_stems.is_empty());
                assert_eq!(result.useful_stems.len(), result.useful_elements.len());
                assert_eq!(5, result.process.len());
                // 改正規則冪等
                assert_eq!(normalize(raw), normalize(&normalize(raw)));
            }
        }
    }

    #[test]
    fn normalize_rewrites_mistranscribed_ren() {
        assert_eq!("戊甲壬丙丁", normalize("戊甲王丙丁"));
        assert_eq!("壬壬", normalize("王王"));

        // 原表庚寅、壬巳兩欄帶「王」，查表結果須已改正
        let result = classify(Stem::Geng, Branch::Yin).unwrap();
        assert!(result.useful_stems.contains(&Stem::Ren));
        let result = classify(Stem::Ren, Branch::Si).unwrap();
        assert_eq!(Stem::Ren, result.useful_stems[0]);
        assert_eq!(Element::Water, result.useful_elements[0]);
        assert_eq!("步驟 3：查表得出喜用神天干 = 壬辛庚癸", result.process[2]);
    }

    #[test]
    fn sparse_table_reports_missing() {
        static PARTIAL: table::Table = &[(Stem::Jia, &[(Branch::Yin, "丙癸")])];
        assert_eq!(
            Err(Error::UnknownMonthBranch {
                day_stem: Stem::Jia,
                month_branch: Branch::Zi,
            }),
            classify_in(PARTIAL, Stem::Jia, Branch::Zi)
        );
        assert_eq!(
            Err(Error::UnknownDayStem(Stem::Yi)),
            classify_in(PARTIAL, Stem::Yi, Branch::Yin)
        );
    }

    #[test]
    fn corrupt_cell_reports_unmapped_stem() {
        static BROKEN: table::Table = &[(Stem::Jia, &[(Branch::Yin, "丙亥")])];
        assert_eq!(
            Err(Error::UnmappedStem('亥')),
            classify_in(BROKEN, Stem::Jia, Branch::Yin)
        );
    }

    #[test]
    fn dedupe_properties() {
        use Element::*;
        let dataset: [(&[Element], &[Element]); 4] = [
            (&[], &[]),
            (&[Wood], &[Wood]),
            (&[Water, Earth, Earth], &[Water, Earth]),
            (&[Fire, Water, Fire, Metal, Water], &[Fire, Water, Metal]),
        ];
        for (input, std) in dataset {
            let once = dedupe(input);
            assert_eq!(std.to_vec(), once);
            // 冪等，且不增長、不引入新行
            assert_eq!(once, dedupe(&once));
            assert!(once.len() <= input.len());
            assert!(once.iter().all(|e| input.contains(e)));
        }
    }
}
