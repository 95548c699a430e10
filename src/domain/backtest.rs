//! Backtest parameter set and pipeline orchestration.

use crate::domain::error::RsitraderError;
use crate::domain::indicator::{compute_rsi, DEFAULT_RSI_PERIOD};
use crate::domain::metrics::{summarize_performance, PerformanceReport};
use crate::domain::price::PriceBar;
use crate::domain::signal::{generate_signals, SignalPoint};
use crate::domain::simulation::{run_simulation, SimulationResult};

/// Strategy parameters for one backtest invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestParams {
    pub initial_capital: f64,
    /// Fee as a fraction of traded value per side (0.001 = 0.1%).
    pub fee_rate: f64,
    pub overbought: f64,
    pub oversold: f64,
    pub rsi_period: usize,
}

impl Default for BacktestParams {
    fn default() -> Self {
        BacktestParams {
            initial_capital: 10_000.0,
            fee_rate: 0.001,
            overbought: 70.0,
            oversold: 30.0,
            rsi_period: DEFAULT_RSI_PERIOD,
        }
    }
}

impl BacktestParams {
    /// Boundary check of the constraints the pure pipeline stages assume.
    pub fn validate(&self) -> Result<(), RsitraderError> {
        if !(self.initial_capital > 0.0) {
            return Err(RsitraderError::invalid_parameter(
                "initial_capital",
                "must be positive",
            ));
        }
        if !(self.fee_rate >= 0.0) {
            return Err(RsitraderError::invalid_parameter(
                "fee_rate",
                "must be non-negative",
            ));
        }
        if !(self.oversold > 0.0 && self.oversold < 100.0) {
            return Err(RsitraderError::invalid_parameter(
                "oversold",
                "must be between 0 and 100",
            ));
        }
        if !(self.overbought > 0.0 && self.overbought < 100.0) {
            return Err(RsitraderError::invalid_parameter(
                "overbought",
                "must be between 0 and 100",
            ));
        }
        if self.oversold >= self.overbought {
            return Err(RsitraderError::invalid_parameter(
                "oversold",
                "must be less than the overbought level",
            ));
        }
        if self.rsi_period == 0 {
            return Err(RsitraderError::invalid_parameter(
                "rsi_period",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Everything one invocation produces: the annotated series, the simulated
/// trajectory, and the metric pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestRun {
    pub signals: Vec<SignalPoint>,
    pub simulation: SimulationResult,
    pub report: PerformanceReport,
}

/// Run the full pipeline: indicator, signals, simulation, metrics.
///
/// Fails fast on malformed parameters. An empty price series is not an
/// error; it produces empty series and an all-not-applicable report.
pub fn run_backtest(
    bars: &[PriceBar],
    params: &BacktestParams,
) -> Result<BacktestRun, RsitraderError> {
    params.validate()?;

    let indicator = compute_rsi(bars, params.rsi_period);
    let signals = generate_signals(&indicator, params.overbought, params.oversold);
    let simulation = run_simulation(&signals, params.initial_capital, params.fee_rate);
    let report = summarize_performance(&simulation, bars, params.initial_capital);

    Ok(BacktestRun {
        signals,
        simulation,
        report,
    })
}
