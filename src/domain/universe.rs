//! Ticker universe and default backtest date range.
//!
//! An explicit value passed into the data fetch and the presentation layer,
//! not process-wide state. The built-in list mirrors the tool's stock
//! watchlist of large-cap US tickers.

use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub ticker: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    pub companies: Vec<Company>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Universe {
    /// Build the universe from config, narrowing the built-in list via a
    /// comma-separated `[universe] tickers` key. Tickers outside the
    /// built-in list are kept with the ticker as their display name.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let mut universe = Universe::default();
        if let Some(list) = config.get_string("universe", "tickers") {
            let known = universe.companies.clone();
            universe.companies = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|t| {
                    known
                        .iter()
                        .find(|c| c.ticker.eq_ignore_ascii_case(t))
                        .cloned()
                        .unwrap_or_else(|| Company {
                            name: t.to_uppercase(),
                            ticker: t.to_uppercase(),
                        })
                })
                .collect();
        }
        universe
    }

    pub fn ticker_for(&self, name_or_ticker: &str) -> Option<&str> {
        self.companies
            .iter()
            .find(|c| {
                c.ticker.eq_ignore_ascii_case(name_or_ticker)
                    || c.name.eq_ignore_ascii_case(name_or_ticker)
            })
            .map(|c| c.ticker.as_str())
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.companies
            .iter()
            .any(|c| c.ticker.eq_ignore_ascii_case(ticker))
    }
}

impl Default for Universe {
    fn default() -> Self {
        let companies = [
            ("Apple Inc.", "AAPL"),
            ("Microsoft Corporation", "MSFT"),
            ("Amazon.com, Inc.", "AMZN"),
            ("Alphabet Inc. Class A", "GOOGL"),
            ("Alphabet Inc. Class C", "GOOG"),
            ("Meta Platforms, Inc.", "META"),
            ("Tesla, Inc.", "TSLA"),
            ("NVIDIA Corporation", "NVDA"),
            ("JPMorgan Chase & Co.", "JPM"),
        ]
        .into_iter()
        .map(|(name, ticker)| Company {
            name: name.to_string(),
            ticker: ticker.to_string(),
        })
        .collect();

        Universe {
            companies,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        }
    }
}
