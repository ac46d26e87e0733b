//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use chrono::{NaiveDate, NaiveDateTime};

/// Formats a datetime as "Feb 20, 2025 10:30".
#[askama::filter_fn]
pub fn short_datetime(value: &NaiveDateTime, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value.format("%b %-d, %Y %H:%M").to_string())
}

/// Formats a date as "Feb 20, 2025".
#[askama::filter_fn]
pub fn short_date(value: &NaiveDate, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value.format("%b %-d, %Y").to_string())
}
