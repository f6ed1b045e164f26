use super::Retry;
use crate::graphql::GraphQLError;
use reqwest::StatusCode;
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    GraphQL(Vec<GraphQLError>),
    Reqwest(reqwest::Error),
    Json(serde_json::Error),
    /// Upstream answered with a status that is not worth retrying.
    Status(StatusCode, String),
    /// Every attempt failed; `last` is the failure of the final attempt.
    Exhausted {
        attempts: u32,
        last: Box<Error>,
        retries: Vec<Retry>,
    },
    Custom(String),
}

impl Error {
    /// Network errors, timeouts and 5xx responses.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Reqwest(error) => !error.is_builder(),
            Self::Status(status, ..) => status.is_server_error(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Reqwest(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::GraphQL(errors) => {
                write!(f, "upstream reported {} GraphQL error(s)", errors.len())?;
                if let Some(message) = errors.first().and_then(|error| error.message.as_ref()) {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            Self::Reqwest(error) => write!(f, "request failed: {error}"),
            Self::Json(error) => write!(f, "response is not valid JSON: {error}"),
            Self::Status(status, body) => write!(f, "upstream answered {status}: {body}"),
            Self::Exhausted { attempts, last, .. } => {
                write!(f, "gave up after {attempts} attempt(s), last failure: {last}")
            }
            Self::Custom(message) => message.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_server_errors_are_transient() {
        assert!(Error::Status(StatusCode::SERVICE_UNAVAILABLE, String::new()).is_transient());
        assert!(!Error::Status(StatusCode::BAD_REQUEST, String::new()).is_transient());
        assert!(!Error::Status(StatusCode::FORBIDDEN, String::new()).is_transient());
        assert!(!Error::Custom("x".to_owned()).is_transient());
    }

    #[test]
    fn exhausted_reports_last_failure() {
        let error = Error::Exhausted {
            attempts: 4,
            last: Box::new(Error::Status(StatusCode::BAD_GATEWAY, "down".to_owned())),
            retries: Vec::new(),
        };
        assert_eq!(
            error.to_string(),
            "gave up after 4 attempt(s), last failure: upstream answered 502 Bad Gateway: down"
        );
    }
}
