//! Daily close-price bar representation.

use chrono::NaiveDate;

/// One trading day: calendar date and closing price.
///
/// A price series is chronologically ordered with unique dates and positive
/// closes; rows with missing closes are dropped by the data adapter before
/// they reach the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        PriceBar { date, close }
    }
}
