//! Shared helpers for integration tests.

use chrono::NaiveDate;
use rsitrader::domain::error::RsitraderError;
use rsitrader::domain::price::PriceBar;
use rsitrader::ports::data_port::DataPort;
use std::collections::HashMap;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Consecutive daily bars starting at 2024-01-01.
pub fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: date(2024, 1, 1) + chrono::Duration::days(i as i64),
            close,
        })
        .collect()
}

/// In-memory data port for pipeline tests; no filesystem involved.
pub struct MockDataPort {
    bars: HashMap<String, Vec<PriceBar>>,
}

impl MockDataPort {
    pub fn new() -> Self {
        MockDataPort {
            bars: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<PriceBar>) -> Self {
        self.bars.insert(ticker.to_string(), bars);
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_daily_bars(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, RsitraderError> {
        Ok(self
            .bars
            .get(ticker)
            .map(|bars| {
                bars.iter()
                    .filter(|b| b.date >= start_date && b.date <= end_date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
