// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// A non-200 answer from one of the vendor endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub endpoint: String,
    pub code: u16,
    pub canonical_reason: Option<String>,
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = if let Some(reason) = &self.canonical_reason {
            format!("{} {}", self.code, reason)
        } else {
            format!("{}", self.code)
        };
        if let Some(message) = &self.message {
            write!(
                f,
                "'{}' from API endpoint '{}': {}",
                error, self.endpoint, message
            )
        } else {
            write!(f, "'{}' from API endpoint '{}'", error, self.endpoint)
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug)]
pub enum Error {
    SerdeJson(serde_json::Error),
    Reqwest(reqwest::Error),
    Api(ApiError),
    InvalidUrl(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SerdeJson(err) => write!(f, "Failed to decode response: {}", err),
            Self::Reqwest(err) => write!(f, "{}", err),
            Self::Api(err) => write!(f, "{}", err),
            Self::InvalidUrl(url) => write!(f, "Invalid API URL '{}'", url),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJson(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
