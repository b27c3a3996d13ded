//! Error types for Fretline.

use thiserror::Error;

/// Failures the relay distinguishes internally.
///
/// `Parse` and `Provider` render only their description, since the `/ask`
/// handler embeds that text verbatim into the answer it returns.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Provider(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_displays_description_only() {
        let err = Error::Provider("timeout".into());
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_json_error_becomes_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = json_err.to_string();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_config_error_is_prefixed() {
        let err = Error::Config("OPENAI_API_KEY is not set in the environment".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: OPENAI_API_KEY is not set in the environment"
        );
    }
}
