//! Threshold-crossing signal generation.
//!
//! A Buy fires only at the first bar where RSI crosses from at-or-below the
//! oversold level to above it; a Sell fires only at the first bar where RSI
//! crosses from at-or-above the overbought level to below it. Bars inside a
//! threshold region after the initial crossing carry Hold, as does bar 0
//! (no prior value to compare).

use crate::domain::indicator::IndicatorPoint;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "Buy"),
            Signal::Sell => write!(f, "Sell"),
            Signal::Hold => write!(f, "Hold"),
        }
    }
}

/// An indicator point annotated with its trading signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalPoint {
    pub date: NaiveDate,
    pub close: f64,
    pub rsi: f64,
    pub signal: Signal,
}

/// Pure function of the indicator series and thresholds. Precondition
/// (caller-validated): `0 < oversold < overbought < 100`.
pub fn generate_signals(
    points: &[IndicatorPoint],
    overbought: f64,
    oversold: f64,
) -> Vec<SignalPoint> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let signal = if i == 0 {
                Signal::Hold
            } else {
                let prev = points[i - 1].rsi;
                if point.rsi > oversold && prev <= oversold {
                    Signal::Buy
                } else if point.rsi < overbought && prev >= overbought {
                    Signal::Sell
                } else {
                    Signal::Hold
                }
            };

            SignalPoint {
                date: point.date,
                close: point.close,
                rsi: point.rsi,
                signal,
            }
        })
        .collect()
}
