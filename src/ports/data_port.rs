//! Market-data access port trait.

use crate::domain::error::RsitraderError;
use crate::domain::price::PriceBar;
use chrono::NaiveDate;

/// External collaborator supplying historical daily bars.
///
/// Implementations return a chronologically ordered series; an empty result
/// means "no data for that range" and is not an error.
pub trait DataPort {
    fn fetch_daily_bars(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, RsitraderError>;
}
