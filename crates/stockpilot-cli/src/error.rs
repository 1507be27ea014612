use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stockpilot_core::ValidationError),

    #[error(transparent)]
    Api(#[from] stockpilot_core::ApiError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Api(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpilot_core::ApiError;

    #[test]
    fn api_failures_map_to_exit_code_3() {
        let error = CliError::from(ApiError::transport("connection refused"));
        assert_eq!(error.exit_code(), 3);
    }
}
