//! Performance metrics: strategy vs. buy-and-hold.

use crate::domain::price::PriceBar;
use crate::domain::signal::Signal;
use crate::domain::simulation::SimulationResult;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annual risk-free rate used in the Sharpe ratio (1%). Fixed by contract,
/// not configurable.
const RISK_FREE_RATE: f64 = 0.01;

/// Summary statistics for one trajectory.
///
/// `fees_paid` and `trade_count` are `None` where the concept does not
/// apply (buy-and-hold), which is distinct from a zero-cost strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub final_value: f64,
    /// final_value / initial_capital - 1.
    pub total_return: f64,
    /// Most negative fractional decline from the running peak; <= 0.
    pub max_drawdown: f64,
    /// Sample std-dev of daily returns, annualized by sqrt(252); >= 0.
    pub volatility: f64,
    /// (mean daily return * 252 - risk-free rate) / volatility; 0 when the
    /// volatility is 0.
    pub sharpe_ratio: f64,
    pub fees_paid: Option<f64>,
    pub trade_count: Option<usize>,
}

/// The pair of summaries a backtest produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    pub strategy: PerformanceMetrics,
    pub buy_hold: PerformanceMetrics,
}

/// Reduce the simulated trajectory and the underlying price series to the
/// strategy/buy-and-hold metric pair.
///
/// An empty trajectory is "nothing to analyze": both sides come back with
/// zeroed statistics, the initial capital as final value, and `None` for
/// the not-applicable fields.
pub fn summarize_performance(
    sim: &SimulationResult,
    bars: &[PriceBar],
    initial_capital: f64,
) -> PerformanceReport {
    if sim.trajectory.is_empty() || bars.is_empty() {
        let empty = PerformanceMetrics {
            final_value: initial_capital,
            total_return: 0.0,
            max_drawdown: 0.0,
            volatility: 0.0,
            sharpe_ratio: 0.0,
            fees_paid: None,
            trade_count: None,
        };
        return PerformanceReport {
            strategy: empty.clone(),
            buy_hold: empty,
        };
    }

    let values: Vec<f64> = sim.trajectory.iter().map(|r| r.portfolio_value).collect();
    let returns: Vec<f64> = sim.trajectory.iter().map(|r| r.daily_return).collect();
    let trade_count = sim
        .trajectory
        .iter()
        .filter(|r| r.action != Signal::Hold)
        .count();

    let strategy = PerformanceMetrics {
        final_value: values[values.len() - 1],
        total_return: values[values.len() - 1] / initial_capital - 1.0,
        max_drawdown: max_drawdown(&values),
        volatility: annualized_volatility(&returns),
        sharpe_ratio: sharpe_ratio(&returns),
        fees_paid: Some(sim.total_fees),
        trade_count: Some(trade_count),
    };

    // Buy-and-hold converts the full capital to (fractional) shares at the
    // first close and never trades again.
    let first_close = bars[0].close;
    let bh_values: Vec<f64> = bars
        .iter()
        .map(|b| initial_capital * b.close / first_close)
        .collect();
    let bh_returns: Vec<f64> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            if i == 0 || bars[i - 1].close == 0.0 {
                0.0
            } else {
                b.close / bars[i - 1].close - 1.0
            }
        })
        .collect();

    let buy_hold = PerformanceMetrics {
        final_value: bh_values[bh_values.len() - 1],
        total_return: bh_values[bh_values.len() - 1] / initial_capital - 1.0,
        max_drawdown: max_drawdown(&bh_values),
        volatility: annualized_volatility(&bh_returns),
        sharpe_ratio: sharpe_ratio(&bh_returns),
        fees_paid: None,
        trade_count: None,
    };

    PerformanceReport { strategy, buy_hold }
}

/// Most negative (value - running_max) / running_max over the series,
/// with the expanding max inclusive of the current value. 0 for an empty
/// series or a zero running max.
fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;
    for &value in values {
        if value > peak {
            peak = value;
        }
        if peak > 0.0 {
            let dd = (value - peak) / peak;
            if dd < worst {
                worst = dd;
            }
        }
    }
    worst
}

/// Sample standard deviation of daily returns, annualized. 0 with fewer
/// than two observations.
fn annualized_volatility(returns: &[f64]) -> f64 {
    let n = returns.len();
    if n < 2 {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / n as f64;
    let variance =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt()
}

fn sharpe_ratio(returns: &[f64]) -> f64 {
    let volatility = annualized_volatility(returns);
    if volatility == 0.0 {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    (mean * TRADING_DAYS_PER_YEAR - RISK_FREE_RATE) / volatility
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::TradeRecord;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(i: usize) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i as i64)
    }

    fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: date(i),
                close,
            })
            .collect()
    }

    fn make_sim(values: &[f64], initial_capital: f64, total_fees: f64) -> SimulationResult {
        let mut prev = initial_capital;
        let trajectory = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let daily_return = if prev != 0.0 { (value - prev) / prev } else { 0.0 };
                prev = value;
                TradeRecord {
                    date: date(i),
                    action: Signal::Hold,
                    portfolio_value: value,
                    long: false,
                    daily_return,
                }
            })
            .collect();
        SimulationResult {
            trajectory,
            total_fees,
        }
    }

    #[test]
    fn empty_trajectory_is_all_not_applicable() {
        let sim = SimulationResult {
            trajectory: vec![],
            total_fees: 0.0,
        };
        let report = summarize_performance(&sim, &[], 10_000.0);

        assert!((report.strategy.final_value - 10_000.0).abs() < f64::EPSILON);
        assert!(report.strategy.total_return.abs() < f64::EPSILON);
        assert_eq!(report.strategy.fees_paid, None);
        assert_eq!(report.strategy.trade_count, None);
        assert_eq!(report.buy_hold.trade_count, None);
    }

    #[test]
    fn single_day_has_zero_fallbacks() {
        let sim = make_sim(&[10_000.0], 10_000.0, 0.0);
        let bars = make_bars(&[100.0]);
        let report = summarize_performance(&sim, &bars, 10_000.0);

        assert!(report.strategy.total_return.abs() < f64::EPSILON);
        assert!(report.strategy.max_drawdown.abs() < f64::EPSILON);
        assert!(report.strategy.volatility.abs() < f64::EPSILON);
        assert!(report.strategy.sharpe_ratio.abs() < f64::EPSILON);
        assert!(report.buy_hold.volatility.abs() < f64::EPSILON);
        assert!(report.buy_hold.sharpe_ratio.abs() < f64::EPSILON);
    }

    #[test]
    fn total_return_from_final_value() {
        let sim = make_sim(&[10_000.0, 11_000.0], 10_000.0, 0.0);
        let bars = make_bars(&[100.0, 100.0]);
        let report = summarize_performance(&sim, &bars, 10_000.0);
        assert_relative_eq!(report.strategy.total_return, 0.10, epsilon = 1e-12);
    }

    #[test]
    fn max_drawdown_most_negative_decline() {
        let values = [100.0, 110.0, 90.0, 95.0, 80.0, 100.0];
        let dd = max_drawdown(&values);
        assert_relative_eq!(dd, (80.0 - 110.0) / 110.0, epsilon = 1e-12);
    }

    #[test]
    fn max_drawdown_monotonic_rise_is_zero() {
        let dd = max_drawdown(&[100.0, 110.0, 120.0]);
        assert!(dd.abs() < f64::EPSILON);
    }

    #[test]
    fn volatility_uses_sample_std() {
        // returns 0.01 and -0.01: mean 0, sample variance 2e-4 / 1
        let vol = annualized_volatility(&[0.01, -0.01]);
        let expected = (2.0 * 0.01_f64.powi(2)).sqrt() * 252.0_f64.sqrt();
        assert_relative_eq!(vol, expected, epsilon = 1e-12);
    }

    #[test]
    fn sharpe_zero_when_volatility_zero() {
        assert!(sharpe_ratio(&[0.01]).abs() < f64::EPSILON);
        assert!(sharpe_ratio(&[0.0, 0.0, 0.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn sharpe_formula() {
        let returns = [0.01, -0.01, 0.02];
        let mean = returns.iter().sum::<f64>() / 3.0;
        let vol = annualized_volatility(&returns);
        let expected = (mean * 252.0 - 0.01) / vol;
        assert_relative_eq!(sharpe_ratio(&returns), expected, epsilon = 1e-12);
    }

    #[test]
    fn buy_hold_total_return_tracks_closes() {
        let sim = make_sim(&[10_000.0, 10_000.0, 10_000.0], 10_000.0, 0.0);
        let bars = make_bars(&[100.0, 90.0, 120.0]);
        let report = summarize_performance(&sim, &bars, 10_000.0);

        assert_relative_eq!(report.buy_hold.total_return, 120.0 / 100.0 - 1.0, epsilon = 1e-12);
        assert_relative_eq!(report.buy_hold.final_value, 12_000.0, epsilon = 1e-9);
        // buy-and-hold drawdown from the 100 peak down to 90
        assert_relative_eq!(report.buy_hold.max_drawdown, -0.10, epsilon = 1e-12);
    }

    #[test]
    fn fees_and_trades_only_on_strategy_side() {
        let mut sim = make_sim(&[10_000.0, 10_500.0], 10_000.0, 21.5);
        sim.trajectory[1].action = Signal::Buy;
        let bars = make_bars(&[100.0, 105.0]);
        let report = summarize_performance(&sim, &bars, 10_000.0);

        assert_eq!(report.strategy.fees_paid, Some(21.5));
        assert_eq!(report.strategy.trade_count, Some(1));
        assert_eq!(report.buy_hold.fees_paid, None);
        assert_eq!(report.buy_hold.trade_count, None);
    }
}
