#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod client;
pub mod error;
pub mod events;
pub mod model;
pub mod orders;
pub mod request;
pub(crate) mod serde_helpers;
pub mod settings;
pub mod types;

use reqwest::Request;
use reqwest::header::HeaderMap;
use serde_json::Value;

pub use crate::client::{Client, Config};
use crate::error::Error;
pub use crate::model::{Model, unpack_array};
pub use crate::request::RequestBuilder;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the production API. Every path is rooted at `/{accountname}`.
pub const DEFAULT_HOST: &str = "https://apps.ticketmatic.com/api/1";

/// Environment variable holding the API access key.
pub const ACCESS_KEY_VAR: &str = "TM_ACCESS_KEY";

/// Environment variable holding the API secret key.
pub const SECRET_KEY_VAR: &str = "TM_SECRET_KEY";

/// Executes `request` and returns the decoded JSON payload.
///
/// Non-2xx responses become [`error::Kind::Status`] (or [`error::Kind::NotFound`]) errors carrying
/// the response body. An empty 2xx body decodes to [`Value::Null`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(
    client: &reqwest::Client,
    mut request: Request,
    headers: Option<HeaderMap>,
) -> Result<Value> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    if let Some(h) = headers {
        request.headers_mut().extend(h);
    }

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_slice(&body)?)
}
