//! Configuration validation.
//!
//! Validates all config fields at the boundary before the pipeline runs, so
//! a bad file fails with a precise message instead of a mid-run surprise.

use crate::domain::error::RsitraderError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub fn validate_backtest_config(config: &dyn ConfigPort) -> Result<(), RsitraderError> {
    validate_ticker(config)?;
    validate_initial_capital(config)?;
    validate_fee(config)?;
    validate_thresholds(config)?;
    validate_period(config)?;
    validate_dates(config)?;
    Ok(())
}

fn validate_ticker(config: &dyn ConfigPort) -> Result<(), RsitraderError> {
    match config.get_string("backtest", "ticker") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(RsitraderError::ConfigMissing {
            section: "backtest".to_string(),
            key: "ticker".to_string(),
        }),
    }
}

fn validate_initial_capital(config: &dyn ConfigPort) -> Result<(), RsitraderError> {
    let value = config.get_double("backtest", "initial_capital", 0.0);
    if value <= 0.0 {
        return Err(RsitraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "initial_capital".to_string(),
            reason: "initial_capital must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_fee(config: &dyn ConfigPort) -> Result<(), RsitraderError> {
    let value = config.get_double("backtest", "fee_pct", 0.0);
    if value < 0.0 {
        return Err(RsitraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "fee_pct".to_string(),
            reason: "fee_pct must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_thresholds(config: &dyn ConfigPort) -> Result<(), RsitraderError> {
    let overbought = config.get_double("backtest", "overbought", 70.0);
    let oversold = config.get_double("backtest", "oversold", 30.0);

    if !(overbought > 0.0 && overbought < 100.0) {
        return Err(RsitraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "overbought".to_string(),
            reason: "overbought must be between 0 and 100".to_string(),
        });
    }
    if !(oversold > 0.0 && oversold < 100.0) {
        return Err(RsitraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "oversold".to_string(),
            reason: "oversold must be between 0 and 100".to_string(),
        });
    }
    if oversold >= overbought {
        return Err(RsitraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "oversold".to_string(),
            reason: "oversold must be less than overbought".to_string(),
        });
    }
    Ok(())
}

fn validate_period(config: &dyn ConfigPort) -> Result<(), RsitraderError> {
    let value = config.get_int("backtest", "rsi_period", 14);
    if value < 1 {
        return Err(RsitraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "rsi_period".to_string(),
            reason: "rsi_period must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), RsitraderError> {
    let start = parse_date(config, "start_date")?;
    let end = parse_date(config, "end_date")?;

    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            return Err(RsitraderError::ConfigInvalid {
                section: "backtest".to_string(),
                key: "start_date".to_string(),
                reason: "start_date must be before end_date".to_string(),
            });
        }
    }
    Ok(())
}

// Dates are optional; the universe default range applies when absent.
fn parse_date(
    config: &dyn ConfigPort,
    field: &str,
) -> Result<Option<NaiveDate>, RsitraderError> {
    match config.get_string("backtest", field) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| RsitraderError::ConfigInvalid {
                section: "backtest".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            }),
    }
}
