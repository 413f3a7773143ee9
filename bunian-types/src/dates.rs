//! Calendar helpers for the stamps persisted alongside records.
//!
//! All stamps are computed in UTC. Formats follow the shapes already present
//! in stored data: ISO dates for request submission (`2024-12-10`) and long
//! month-year for the trends banner (`December 2024`).

use chrono::Utc;

/// Current Unix time in milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current Unix time in seconds.
#[must_use]
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}

/// Today's date as `YYYY-MM-DD`.
#[must_use]
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// The current month and year as `Month YYYY`, e.g. `December 2024`.
#[must_use]
pub fn month_year() -> String {
    Utc::now().format("%B %Y").to_string()
}
