//! Core domain types and the backtest pipeline.

pub mod price;
pub mod indicator;
pub mod signal;
pub mod simulation;
pub mod metrics;
pub mod backtest;
pub mod universe;
pub mod config_validation;
pub mod error;
