use thiserror::Error;

/// A required field was absent from the provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("provider response is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Failures talking to the remote weather provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to weather provider timed out")]
    Timeout,

    #[error("failed to reach weather provider: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse weather provider JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Transport(err)
        }
    }
}

/// Everything that can go wrong between dispatching a lookup and holding a report.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl FetchError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Provider(ProviderError::Timeout) => "timeout",
            FetchError::Provider(ProviderError::Transport(_)) => "unreachable",
            FetchError::Provider(ProviderError::Status { .. }) => "bad_status",
            FetchError::Provider(ProviderError::Decode(_)) => "malformed_body",
            FetchError::Mapping(_) => "missing_field",
        }
    }
}

/// Errors surfaced to callers of the weather service.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to fetch weather data")]
    FetchFailed(#[source] FetchError),
}

impl WeatherError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        WeatherError::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn fetch_failed_keeps_cause_as_source() {
        let err = WeatherError::FetchFailed(MappingError::MissingField("sys").into());

        assert_eq!(err.to_string(), "failed to fetch weather data");
        let source = err.source().expect("cause must be preserved");
        assert!(source.to_string().contains("`sys`"));
    }

    #[test]
    fn fetch_error_kind_distinguishes_provider_from_mapping() {
        let status = FetchError::from(ProviderError::Status { status: 401, body: String::new() });
        let mapping = FetchError::from(MappingError::MissingField("main"));

        assert_eq!(status.kind(), "bad_status");
        assert_eq!(mapping.kind(), "missing_field");
        assert_eq!(FetchError::from(ProviderError::Timeout).kind(), "timeout");
    }
}
