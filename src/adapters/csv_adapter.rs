//! CSV file data adapter.
//!
//! Reads per-ticker files named `{TICKER}.csv`. Two layouts are accepted:
//! a plain `date,close` export and the common `date,open,high,low,close,
//! volume` download format (close taken from column 4). Rows with a
//! missing or unparseable close are dropped rather than rejected.

use crate::domain::error::RsitraderError;
use crate::domain::price::PriceBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", ticker.to_uppercase()))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_daily_bars(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, RsitraderError> {
        let path = self.csv_path(ticker);
        let content = fs::read_to_string(&path).map_err(|e| RsitraderError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| RsitraderError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| RsitraderError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                RsitraderError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            if date < start_date || date > end_date {
                continue;
            }

            // date,close or date,open,high,low,close[,volume]
            let close_field = if record.len() >= 5 {
                record.get(4)
            } else {
                record.get(1)
            };

            let close = match close_field.map(str::trim) {
                Some(s) if !s.is_empty() => match s.parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => continue,
                },
                _ => continue,
            };

            bars.push(PriceBar { date, close });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}
