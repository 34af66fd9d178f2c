//! Error types with diagnostics using miette
//!
//! Layout itself is total over in-range dates; these errors come from
//! validating a [`WheelConfig`](crate::config::WheelConfig) and from checked
//! date arithmetic at the edges of the supported calendar range.

use chrono::NaiveDate;
use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors produced while configuring or computing a wheel layout
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum WheelError {
    #[error("invalid {field}: {source}")]
    #[diagnostic(code(pregwheel::config::invalid_value))]
    InvalidConfig {
        field: &'static str,
        source: NumericError,
    },

    #[error("radii out of order: inner {inner}, middle {middle}, outer {outer}")]
    #[diagnostic(
        code(pregwheel::config::radius_order),
        help("rings must satisfy inner < middle < outer")
    )]
    RadiusOrder { inner: f64, middle: f64, outer: f64 },

    #[error("lead of {lead_days} days does not fit on a {wheel_days}-day wheel")]
    #[diagnostic(
        code(pregwheel::config::lead_days),
        help("the reference date must fall inside the day array")
    )]
    LeadDaysOutOfRange { lead_days: i64, wheel_days: i64 },

    #[error("date out of range: {date} shifted by {days} days")]
    #[diagnostic(code(pregwheel::calendar::out_of_range))]
    DateOutOfRange { date: NaiveDate, days: i64 },
}
