#![expect(
    clippy::module_name_repetitions,
    reason = "`ApiError` names the error payload the API sends"
)]

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

use hmac::digest::InvalidLength;
/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;
use serde::Deserialize;
use serde_with::serde_as;

use crate::serde_helpers::StringFromAny;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A request could not be assembled, e.g. an unresolved path placeholder
    Configuration,
    /// The request never produced an HTTP response (DNS, connect, timeout)
    Transport,
    /// Non-successful HTTP response
    Status,
    /// HTTP 404, a specialization of [`Kind::Status`]
    NotFound,
    /// The response body did not match the expected model shape
    Decoding,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Returns the [`Status`] details when this error came from a non-2xx response.
    pub fn status_details(&self) -> Option<&Status> {
        self.downcast_ref::<Status>()
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == Kind::NotFound
    }

    pub fn configuration<S: Into<String>>(reason: S) -> Self {
        Configuration {
            reason: reason.into(),
        }
        .into()
    }

    pub fn decoding<S: Into<String>>(reason: S) -> Self {
        Decoding {
            reason: reason.into(),
        }
        .into()
    }

    /// Builds a status error from a non-2xx response. The body is parsed as an [`ApiError`]
    /// when possible; a 404 yields [`Kind::NotFound`].
    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        body: S,
    ) -> Self {
        let message = body.into();
        let error = serde_json::from_str::<ApiError>(&message).ok();

        Status {
            status_code,
            method,
            path,
            message,
            error,
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Structured error payload carried by non-2xx responses.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Machine readable error code. Some endpoints send it as a number.
    #[serde_as(as = "Option<StringFromAny>")]
    pub code: Option<String>,
    /// Human readable error message.
    pub message: Option<String>,
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    /// Raw response body
    pub message: String,
    /// Decoded error payload, if the body was one
    pub error: Option<ApiError>,
}

impl Status {
    /// The server supplied message, falling back to the raw body.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .unwrap_or(&self.message)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code,
            self.method,
            self.path,
            self.error_message()
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Configuration {
    pub reason: String,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid request: {}", self.reason)
    }
}

impl StdError for Configuration {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Decoding {
    pub reason: String,
}

impl fmt::Display for Decoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to decode response: {}", self.reason)
    }
}

impl StdError for Decoding {}

impl From<Configuration> for Error {
    fn from(err: Configuration) -> Self {
        Error::with_source(Kind::Configuration, err)
    }
}

impl From<Decoding> for Error {
    fn from(err: Decoding) -> Self {
        Error::with_source(Kind::Decoding, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        let kind = if err.status_code == StatusCode::NOT_FOUND {
            Kind::NotFound
        } else {
            Kind::Status
        };
        Error::with_source(kind, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_decode() {
            Kind::Decoding
        } else if e.is_builder() {
            Kind::Configuration
        } else {
            Kind::Transport
        };
        Error::with_source(kind, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Configuration, e)
    }
}

impl From<InvalidLength> for Error {
    fn from(e: InvalidLength) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Decoding, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Configuration, e)
    }
}
