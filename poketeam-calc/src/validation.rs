use std::fmt::Display;

use poketeam_data::StatTable;
use thiserror::Error;

/// Maximum effort value for a single stat.
pub const MAX_EV: i32 = 252;
/// Maximum sum of effort values across all stats.
pub const MAX_EV_TOTAL: i64 = 510;
/// Maximum individual value for a single stat.
pub const MAX_IV: i32 = 31;

/// The result of validating user-entered values.
///
/// Validation never fails outright. Every problem found is recorded, and callers decide whether an
/// invalid report should block anything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// Are there no errors?
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors, in the order they were found.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Records an error.
    pub fn add_error<S>(&mut self, error: S)
    where
        S: Into<String>,
    {
        self.errors.push(error.into())
    }

    /// Appends all errors of another report.
    pub fn merge(&mut self, mut other: Self) {
        self.errors.append(&mut other.errors);
    }

    /// Converts the report into a result, failing if there are any errors.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailure {
                errors: self.errors,
            })
        }
    }
}

impl From<ValidationReport> for Vec<String> {
    fn from(value: ValidationReport) -> Self {
        value.errors
    }
}

/// A failed [`ValidationReport`], as an error.
#[derive(Debug, Error)]
pub struct ValidationFailure {
    errors: Vec<String>,
}

impl ValidationFailure {
    /// All errors.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|s| s.as_str())
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.errors.join("; "))
    }
}

/// Validates effort values.
///
/// Reports a total above [`MAX_EV_TOTAL`] first, then every stat above [`MAX_EV`] or below zero.
pub fn validate_evs(evs: &StatTable) -> ValidationReport {
    let mut report = ValidationReport::default();

    let total = evs.sum();
    if total > MAX_EV_TOTAL {
        report.add_error(format!(
            "努力値の合計が{MAX_EV_TOTAL}を超えています（現在: {total}）"
        ));
    }

    for (stat, value) in evs {
        let stat = stat.key();
        if value > MAX_EV {
            report.add_error(format!(
                "{stat}の努力値が{MAX_EV}を超えています（現在: {value}）"
            ));
        }
        if value < 0 {
            report.add_error(format!("{stat}の努力値が負の値です"));
        }
    }

    report
}

/// Validates individual values, which must each be between 0 and [`MAX_IV`].
pub fn validate_ivs(ivs: &StatTable) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (stat, value) in ivs {
        if !(0..=MAX_IV).contains(&value) {
            report.add_error(format!(
                "{}の個体値は0-{MAX_IV}の範囲で指定してください（現在: {value}）",
                stat.key(),
            ));
        }
    }
    report
}
