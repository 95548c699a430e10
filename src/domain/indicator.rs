//! RSI (Relative Strength Index) indicator.
//!
//! Uses a rolling simple mean of gains/losses over a trailing window of up
//! to `period` bars, growing from a single bar at the start of the series
//! (no look-ahead, no warm-up gap):
//! - gain[i] = max(close[i] - close[i-1], 0), loss[i] = max(-(diff), 0)
//! - gain[0] = loss[0] = 0 (no prior close)
//! - RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! - avg_loss == 0 with avg_gain > 0 saturates RSI to 100
//! - avg_gain == avg_loss == 0 (ratio undefined) falls back to neutral 50
//!
//! Every input bar produces exactly one RSI value in [0, 100]; the first
//! bar is always 50.

use crate::domain::price::PriceBar;
use chrono::NaiveDate;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Neutral fallback where the gain/loss ratio is undefined.
const NEUTRAL_RSI: f64 = 50.0;

/// A price bar annotated with its RSI value.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub close: f64,
    pub rsi: f64,
}

/// Compute the RSI series for a price series. Infallible: an empty input
/// yields an empty output, and a zero period is clamped to 1.
pub fn compute_rsi(bars: &[PriceBar], period: usize) -> Vec<IndicatorPoint> {
    let window = period.max(1);

    let mut gains = Vec::with_capacity(bars.len());
    let mut losses = Vec::with_capacity(bars.len());
    for i in 0..bars.len() {
        let change = if i == 0 {
            0.0
        } else {
            bars[i].close - bars[i - 1].close
        };
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let lo = (i + 1).saturating_sub(window);
            let n = (i - lo + 1) as f64;
            let avg_gain = gains[lo..=i].iter().sum::<f64>() / n;
            let avg_loss = losses[lo..=i].iter().sum::<f64>() / n;

            let rsi = if avg_loss == 0.0 {
                if avg_gain == 0.0 {
                    NEUTRAL_RSI
                } else {
                    100.0
                }
            } else {
                100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
            };

            IndicatorPoint {
                date: bar.date,
                close: bar.close,
                rsi,
            }
        })
        .collect()
}
