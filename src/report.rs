//! The boundary consumed by presentation layers: parse a birth form,
//! compute the chart, classify, and assemble the report structure.
//!
//! Rendering, image/PDF export and form state all live outside this crate;
//! a renderer reads [`Report`] and owns any user-facing error policy.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::{Error, Result};
use crate::ganzhi::{FourPillars, Stem};
use crate::lucky::{self, Element};

/// Hour used when the caller has no time granularity.
const DEFAULT_TIME: &str = "12:00";

/// Birth form input.
///
/// `name` and `gender` are not interpreted, only echoed into the report
/// for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthInfo {
    pub name: String,
    pub gender: String,
    /// Civil birth date, `YYYY-MM-DD`
    pub date: String,
    /// Civil birth time, `HH:MM`; defaults to noon when absent
    pub time: Option<String>,
}

/// Everything a renderer needs to build the visual report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: String,
    pub gender: String,
    /// Echoed birth timestamp, `YYYY-MM-DD HH:MM`
    pub birth_date: String,
    pub pillars: FourPillars,
    /// Useful stems in table order
    pub useful_stems: Vec<Stem>,
    /// One element per useful stem, repeats preserved
    pub useful_elements: Vec<Element>,
    /// First-seen-order deduplication of `useful_elements`
    pub lucky_elements: Vec<Element>,
    /// Five-step derivation trace, display only
    pub process: Vec<String>,
}

/// Computes the full report for a birth form.
///
/// Fails with [`Error::InvalidDate`] when the date or time strings do not
/// parse into a real civil timestamp (`1990-02-30` included); table lookup
/// failures propagate unchanged from [`lucky::classify`].
///
/// # Example
///
/// ```
/// use bazilo::{BirthInfo, analyze};
///
/// let report = analyze(&BirthInfo {
///     name: "陳小明".into(),
///     gender: "男".into(),
///     date: "1990-01-01".into(),
///     time: Some("12:00".into()),
/// })
/// .unwrap();
///
/// assert_eq!("己巳 丙子 丙寅 甲午", report.pillars.to_string());
/// let lucky: String = report.lucky_elements.iter().map(|e| e.name()).collect();
/// assert_eq!("水土", lucky);
/// ```
pub fn analyze(info: &BirthInfo) -> Result<Report> {
    let civil_date = NaiveDate::parse_from_str(&info.date, "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("{}: {e}", info.date)))?;
    let time_str = info.time.as_deref().unwrap_or(DEFAULT_TIME);
    let civil_time = NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|e| Error::InvalidDate(format!("{time_str}: {e}")))?;

    let date = Date::from_gregorian(
        civil_date.year(),
        civil_date.month() as i32,
        civil_date.day() as i32,
    )
    .ok_or_else(|| Error::InvalidDate(info.date.clone()))?;

    let pillars = FourPillars::compute(date, civil_time.hour());
    let classification = lucky::classify(pillars.day.stem, pillars.month.branch)?;
    let lucky_elements = lucky::dedupe(&classification.useful_elements);

    Ok(Report {
        name: info.name.clone(),
        gender: info.gender.clone(),
        birth_date: format!("{date} {time_str}"),
        pillars,
        useful_stems: classification.useful_stems,
        useful_elements: classification.useful_elements,
        lucky_elements,
        process: classification.process,
    })
}
