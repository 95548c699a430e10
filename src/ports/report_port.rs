//! Report generation port trait.

use crate::domain::backtest::BacktestRun;
use crate::domain::error::RsitraderError;

/// Port for writing a backtest result. The domain hands over plain data;
/// how it is rendered (text table, CSV, chart) is the adapter's concern.
pub trait ReportPort {
    fn write(
        &self,
        ticker: &str,
        run: &BacktestRun,
        output_path: &str,
    ) -> Result<(), RsitraderError>;
}
