//! Plain-text report adapter.
//!
//! Renders the strategy-vs-buy-and-hold summary table plus the list of
//! executed trades. A thin consumer of the domain's plain data; no
//! computation happens here.

use crate::domain::backtest::BacktestRun;
use crate::domain::error::RsitraderError;
use crate::domain::metrics::PerformanceMetrics;
use crate::domain::signal::Signal;
use crate::ports::report_port::ReportPort;
use std::fs;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn render(&self, ticker: &str, run: &BacktestRun) -> String {
        let mut out = String::new();
        out.push_str(&format!("RSI Backtest Report: {}\n", ticker));
        out.push_str("=========================================\n\n");

        out.push_str(&format!(
            "{:<20} {:>15} {:>15}\n",
            "", "RSI-Strategy", "Buy-n-Hold"
        ));
        for (label, value) in metric_rows(&run.report.strategy, &run.report.buy_hold) {
            out.push_str(&format!("{:<20} {}\n", label, value));
        }

        let trades: Vec<_> = run
            .simulation
            .trajectory
            .iter()
            .filter(|r| r.action != Signal::Hold)
            .collect();

        out.push_str("\nTrades\n------\n");
        if trades.is_empty() {
            out.push_str("(none)\n");
        } else {
            for record in trades {
                out.push_str(&format!(
                    "{}  {:<4} portfolio value {}\n",
                    record.date,
                    record.action.to_string(),
                    format_money(record.portfolio_value),
                ));
            }
        }

        out
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        ticker: &str,
        run: &BacktestRun,
        output_path: &str,
    ) -> Result<(), RsitraderError> {
        let content = self.render(ticker, run);
        fs::write(output_path, content)?;
        Ok(())
    }
}

fn metric_rows(strategy: &PerformanceMetrics, buy_hold: &PerformanceMetrics) -> Vec<(&'static str, String)> {
    vec![
        (
            "Portfolio Value:",
            format!(
                "{:>15} {:>15}",
                format_money(strategy.final_value),
                format_money(buy_hold.final_value)
            ),
        ),
        (
            "Total Return:",
            format!(
                "{:>15} {:>15}",
                format_pct(strategy.total_return),
                format_pct(buy_hold.total_return)
            ),
        ),
        (
            "Max. Drawdown:",
            format!(
                "{:>15} {:>15}",
                format_pct(strategy.max_drawdown),
                format_pct(buy_hold.max_drawdown)
            ),
        ),
        (
            "Volatility:",
            format!(
                "{:>15} {:>15}",
                format_pct(strategy.volatility),
                format_pct(buy_hold.volatility)
            ),
        ),
        (
            "Sharpe Ratio:",
            format!(
                "{:>15.2} {:>15.2}",
                strategy.sharpe_ratio, buy_hold.sharpe_ratio
            ),
        ),
        (
            "Fees Paid:",
            format!(
                "{:>15} {:>15}",
                strategy
                    .fees_paid
                    .map(format_money)
                    .unwrap_or_else(|| "N/A".to_string()),
                buy_hold
                    .fees_paid
                    .map(format_money)
                    .unwrap_or_else(|| "N/A".to_string())
            ),
        ),
        (
            "Number of Trades:",
            format!(
                "{:>15} {:>15}",
                strategy
                    .trade_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                buy_hold
                    .trade_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "N/A".to_string())
            ),
        ),
    ]
}

fn format_pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// `$12,345.67` with thousands separators.
fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = format!("{:.2}", value.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let whole: String = grouped.chars().rev().collect();

    format!("{}${}.{}", if negative { "-" } else { "" }, whole, frac)
}
