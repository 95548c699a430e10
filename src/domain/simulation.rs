//! Day-by-day portfolio simulation.
//!
//! A strict left-to-right fold over the signal series: each day's decision
//! depends only on that day's signal/price and the running state. Whole
//! shares only; a Buy spends all available cash, a Sell liquidates the full
//! position. Cash can never go negative: entry sizing starts from
//! `floor(cash / price)` and backs off while the fee-inclusive cost
//! exceeds the available cash.

use crate::domain::signal::{Signal, SignalPoint};
use chrono::NaiveDate;

/// One simulated day, appended in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub date: NaiveDate,
    /// Action actually executed, not the raw signal: an unaffordable Buy or
    /// a Sell with nothing held records Hold.
    pub action: Signal,
    /// cash + shares * close as of this day.
    pub portfolio_value: f64,
    pub long: bool,
    /// Fractional change against the prior day's portfolio value; day 0 is
    /// measured against the initial capital.
    pub daily_return: f64,
}

/// Mutable running state, owned by the simulation loop and discarded once
/// the trajectory is produced.
#[derive(Debug)]
struct SimulationState {
    cash: f64,
    shares: u64,
    total_fees: f64,
    prev_value: f64,
}

/// Full simulation output: the per-day trajectory plus the cumulative fees
/// needed by the performance analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub trajectory: Vec<TradeRecord>,
    pub total_fees: f64,
}

/// Walk the signal series, maintaining cash and share holdings and
/// executing trades with proportional fees.
///
/// Preconditions (caller-validated): `initial_capital > 0`,
/// `fee_rate >= 0`. An empty series yields an empty trajectory.
pub fn run_simulation(
    points: &[SignalPoint],
    initial_capital: f64,
    fee_rate: f64,
) -> SimulationResult {
    let mut state = SimulationState {
        cash: initial_capital,
        shares: 0,
        total_fees: 0.0,
        prev_value: initial_capital,
    };
    let mut trajectory = Vec::with_capacity(points.len());

    for point in points {
        let price = point.close;
        let mut action = Signal::Hold;

        match point.signal {
            Signal::Buy if state.shares == 0 => {
                let mut shares = (state.cash / price).floor() as u64;
                // when price divides cash almost exactly the fee can push
                // the total cost past available cash; shrink until it fits
                while shares > 0 {
                    let cost = shares as f64 * price;
                    let fee = cost * fee_rate;
                    if cost + fee <= state.cash {
                        state.cash -= cost + fee;
                        state.shares = shares;
                        state.total_fees += fee;
                        action = Signal::Buy;
                        break;
                    }
                    shares -= 1;
                }
            }
            Signal::Sell if state.shares > 0 => {
                let fee = state.shares as f64 * price * fee_rate;
                state.cash += state.shares as f64 * price - fee;
                state.shares = 0;
                state.total_fees += fee;
                action = Signal::Sell;
            }
            _ => {}
        }

        let portfolio_value = state.cash + state.shares as f64 * price;
        let daily_return = if state.prev_value != 0.0 {
            (portfolio_value - state.prev_value) / state.prev_value
        } else {
            0.0
        };
        state.prev_value = portfolio_value;

        trajectory.push(TradeRecord {
            date: point.date,
            action,
            portfolio_value,
            long: state.shares > 0,
            daily_return,
        });
    }

    SimulationResult {
        trajectory,
        total_fees: state.total_fees,
    }
}
