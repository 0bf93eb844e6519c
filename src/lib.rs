//! Four Pillars of Destiny (八字) chart computation with lucky element
//! classification.
//!
//! This crate converts a civil (solar) birth date into the traditional
//! four sexagenary pillars, then looks up the subject's useful elements
//! (喜用神) in a day-stem × month-branch reference table. Year and month
//! pillar boundaries follow actual solar terms computed from solar
//! longitude. The validated range is 1900 through the present; dates up
//! to 2100 work with gracefully degrading ΔT accuracy.
//!
//! # Examples
//!
//! The whole pipeline through the form boundary:
//!
//! ```
//! use bazilo::{BirthInfo, analyze};
//!
//! let report = analyze(&BirthInfo {
//!     name: "陳小明".into(),
//!     gender: "男".into(),
//!     date: "1990-01-01".into(),
//!     time: Some("12:00".into()),
//! })
//! .unwrap();
//!
//! assert_eq!("己巳 丙子 丙寅 甲午", report.pillars.to_string());
//! ```
//!
//! The pieces individually:
//!
//! ```
//! use bazilo::{Date, ganzhi::FourPillars, lucky};
//!
//! let date = Date::from_gregorian(1990, 1, 1).unwrap();
//! let pillars = FourPillars::compute(date, 12);
//! let result = lucky::classify(pillars.day.stem, pillars.month.branch).unwrap();
//!
//! assert_eq!(5, result.process.len());
//! ```
//!
//! # Planned features
//!
//! - True solar time correction for the hour pillar (by longitude)
//! - Observed ΔT series for pre-1900 charts
//!
//! I wrote this primarily for my own use, so the design and development of
//! this crate will depend heavily on my personal need.

pub mod date;
pub mod error;
pub mod ganzhi;
pub mod lucky;
pub mod report;
pub mod time_scales;

pub use date::Date;
pub use error::{Error, Result};
pub use report::{BirthInfo, Report, analyze};
