// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport-level failure: the request never produced a usable response.
    Http(String),
    /// The server answered but reported the operation as failed.
    Backend(String),
}

impl Error {
    /// Returns the i18n message key used when no verbatim server message
    /// is available for display.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Http(_) => "error-connection",
            Error::Backend(_) => "error-analysis-failed",
        }
    }

    /// The raw message carried by this error, suitable for interpolation
    /// into a localized template.
    pub fn message(&self) -> &str {
        match self {
            Error::Io(msg)
            | Error::Config(msg)
            | Error::Http(msg)
            | Error::Backend(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Backend(e) => write!(f, "Backend Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn backend_errors_fall_back_to_analysis_failed_key() {
        let err = Error::Backend("job posting could not be fetched".to_string());
        assert_eq!(err.i18n_key(), "error-analysis-failed");
        assert_eq!(err.message(), "job posting could not be fetched");
    }

    #[test]
    fn every_variant_maps_to_an_error_key() {
        let errors = [
            Error::Io("e".to_string()),
            Error::Config("e".to_string()),
            Error::Http("e".to_string()),
            Error::Backend("e".to_string()),
        ];
        for err in errors {
            assert!(err.i18n_key().starts_with("error-"));
        }
    }
}
