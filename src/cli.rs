//! CLI definition and dispatch.
//!
//! Progress goes to stderr; stdout is reserved for machine-readable output
//! (the ticker listing).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::backtest::{run_backtest, BacktestParams};
use crate::domain::config_validation::validate_backtest_config;
use crate::domain::error::RsitraderError;
use crate::domain::indicator::DEFAULT_RSI_PERIOD;
use crate::domain::universe::Universe;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;
use chrono::NaiveDate;

#[derive(Parser, Debug)]
#[command(name = "rsitrader", about = "RSI strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// Override the configured ticker
        #[arg(short, long)]
        ticker: Option<String>,
        /// Report output path (default: report.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the configured ticker universe
    ListTickers {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a backtest configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            ticker,
            output,
        } => run_backtest_command(&config, ticker.as_deref(), output.as_ref()),
        Command::ListTickers { config } => run_list_tickers(config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = RsitraderError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Read the strategy parameter set from the `[backtest]` section.
pub fn build_params(config: &dyn ConfigPort) -> BacktestParams {
    BacktestParams {
        initial_capital: config.get_double("backtest", "initial_capital", 10_000.0),
        // configured as a percentage, consumed as a fraction
        fee_rate: config.get_double("backtest", "fee_pct", 0.1) / 100.0,
        overbought: config.get_double("backtest", "overbought", 70.0),
        oversold: config.get_double("backtest", "oversold", 30.0),
        // clamp before the sign cast so a negative config value cannot
        // wrap into a huge period
        rsi_period: config
            .get_int("backtest", "rsi_period", DEFAULT_RSI_PERIOD as i64)
            .max(1) as usize,
    }
}

/// Resolve the backtest date range: config values win, the universe default
/// range fills the gaps.
pub fn resolve_date_range(
    config: &dyn ConfigPort,
    universe: &Universe,
) -> (NaiveDate, NaiveDate) {
    let parse = |key: &str| {
        config
            .get_string("backtest", key)
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
    };
    (
        parse("start_date").unwrap_or(universe.start_date),
        parse("end_date").unwrap_or(universe.end_date),
    )
}

fn run_backtest_command(
    config_path: &PathBuf,
    ticker_override: Option<&str>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let ticker = match ticker_override {
        Some(t) => t.to_uppercase(),
        None => match config.get_string("backtest", "ticker") {
            Some(t) => t.to_uppercase(),
            None => {
                eprintln!("error: no ticker configured");
                return ExitCode::from(2);
            }
        },
    };

    let csv_dir = config
        .get_string("data", "csv_dir")
        .unwrap_or_else(|| "data".to_string());
    let data_port = CsvAdapter::new(PathBuf::from(csv_dir));

    let universe = Universe::from_config(&config);
    let (start_date, end_date) = resolve_date_range(&config, &universe);
    let params = build_params(&config);

    eprintln!("Fetching {} bars, {} to {}", ticker, start_date, end_date);
    let bars = match data_port.fetch_daily_bars(&ticker, start_date, end_date) {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // nothing to analyze is not an error: the pipeline produces empty
    // series and an all-N/A report
    if bars.is_empty() {
        eprintln!("No data available for the selected parameters; report will show N/A.");
    }

    eprintln!("Running backtest: {} bars", bars.len());
    let run = match run_backtest(&bars, &params) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let strategy = &run.report.strategy;
    let buy_hold = &run.report.buy_hold;
    eprintln!("\n=== {} ===", ticker);
    eprintln!(
        "Total Return:     {:.2}% (buy-and-hold {:.2}%)",
        strategy.total_return * 100.0,
        buy_hold.total_return * 100.0
    );
    eprintln!("Max Drawdown:     {:.2}%", strategy.max_drawdown * 100.0);
    eprintln!("Volatility:       {:.2}%", strategy.volatility * 100.0);
    eprintln!("Sharpe Ratio:     {:.2}", strategy.sharpe_ratio);
    if let Some(fees) = strategy.fees_paid {
        eprintln!("Fees Paid:        ${:.2}", fees);
    }
    if let Some(trades) = strategy.trade_count {
        eprintln!("Trades:           {}", trades);
    }

    let output = output_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("report.txt"));
    match TextReportAdapter.write(&ticker, &run, &output.display().to_string()) {
        Ok(()) => {
            eprintln!("\nReport written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write report: {e}");
            (&e).into()
        }
    }
}

fn run_list_tickers(config_path: Option<&PathBuf>) -> ExitCode {
    let universe = match config_path {
        Some(path) => match load_config(path) {
            Ok(config) => Universe::from_config(&config),
            Err(code) => return code,
        },
        None => Universe::default(),
    };
    for company in &universe.companies {
        println!("{}\t{}", company.ticker, company.name);
    }
    eprintln!(
        "{} tickers, default range {} to {}",
        universe.companies.len(),
        universe.start_date,
        universe.end_date
    );
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match validate_backtest_config(&config) {
        Ok(()) => {
            let params = build_params(&config);
            eprintln!("Config is valid:");
            eprintln!("  initial_capital: {}", params.initial_capital);
            eprintln!("  fee_rate:        {}", params.fee_rate);
            eprintln!("  overbought:      {}", params.overbought);
            eprintln!("  oversold:        {}", params.oversold);
            eprintln!("  rsi_period:      {}", params.rsi_period);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
