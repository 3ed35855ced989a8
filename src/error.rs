use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Fetch error: {}", fetch_message(.status, .detail))]
    Fetch { status: Option<u16>, detail: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn fetch_status(status: u16, detail: impl Into<String>) -> Self {
        Error::Fetch {
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn fetch_transport(detail: impl Into<String>) -> Self {
        Error::Fetch {
            status: None,
            detail: detail.into(),
        }
    }

    /// HTTP status carried by a fetch error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}

fn fetch_message(status: &Option<u16>, detail: &str) -> String {
    match status {
        Some(code) => format!("status {}: {}", code, detail),
        None => detail.to_string(),
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        match err.status() {
            Some(status) => Error::fetch_status(status.as_u16(), err.to_string()),
            None => Error::fetch_transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = Error::fetch_status(404, "zone not found");
        assert_eq!(err.to_string(), "Fetch error: status 404: zone not found");
        assert_eq!(err.status(), Some(404));

        let err = Error::fetch_transport("connection refused");
        assert_eq!(err.to_string(), "Fetch error: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_parse_error_from_json() {
        let err: Error = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
