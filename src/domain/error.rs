//! Domain error types.

/// Top-level error type for rsitrader.
///
/// An empty price series is deliberately not represented here: it produces
/// empty outputs and a not-applicable report, never a failure.
#[derive(Debug, thiserror::Error)]
pub enum RsitraderError {
    #[error("invalid parameter {param}: {reason}")]
    InvalidParameter { param: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RsitraderError {
    pub fn invalid_parameter(param: &str, reason: &str) -> Self {
        RsitraderError::InvalidParameter {
            param: param.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<&RsitraderError> for std::process::ExitCode {
    fn from(err: &RsitraderError) -> Self {
        let code: u8 = match err {
            RsitraderError::Io(_) => 1,
            RsitraderError::ConfigParse { .. }
            | RsitraderError::ConfigMissing { .. }
            | RsitraderError::ConfigInvalid { .. } => 2,
            RsitraderError::Data { .. } => 3,
            RsitraderError::InvalidParameter { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
