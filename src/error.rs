//! Crate-level error type.
//!
//! A single `thiserror`-derived [`Error`] enum plus a crate [`Result`]
//! alias, following the single-error-enum-per-crate convention.

use thiserror::Error;

use crate::ganzhi::{Branch, Stem};

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by chart computation and lucky-element classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The supplied civil date or time string was not a valid calendar
    /// date/time.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The reference table has no row for the given day stem.
    #[error("Missing lookup data for Day Stem {0}")]
    UnknownDayStem(Stem),

    /// The reference table row has no cell for the given month branch.
    #[error("Missing lookup data for Day Stem {day_stem} and Month Branch {month_branch}")]
    UnknownMonthBranch {
        /// Day stem whose row was consulted.
        day_stem: Stem,
        /// Month branch that was missing from the row.
        month_branch: Branch,
    },

    /// A character in the reference table did not map to a known stem.
    #[error("Unmapped stem character: {0}")]
    UnmappedStem(char),
}
