use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method, Request,
    header::{HeaderMap, HeaderValue},
};
use serde_json::Value;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::request::RequestBuilder;
use crate::{DEFAULT_HOST, Result};

const DEFAULT_USER_AGENT: &str = "ticketmatic-rust-sdk";

/// Transport settings for a [`Client`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use ticketmatic_client_sdk::Config;
/// use ticketmatic_client_sdk::auth::Credentials;
///
/// let config = Config::builder()
///     .timeout(Duration::from_secs(30))
///     .credentials(Credentials::new("access".to_owned(), "secret".to_owned()))
///     .build();
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Total time allowed for a single request, including reading the body. No timeout if unset.
    timeout: Option<Duration>,
    /// Overrides the `User-Agent` header.
    #[builder(into)]
    user_agent: Option<String>,
    /// Signs every request when set.
    credentials: Option<Credentials>,
}

/// HTTP transport bound to a single account.
///
/// Cloning is cheap; clones share the underlying connection pool. Endpoint operations take a
/// `&Client` and keep no state between calls.
///
/// # Example
///
/// ```no_run
/// use ticketmatic_client_sdk::{Client, Config, DEFAULT_HOST};
/// use ticketmatic_client_sdk::orders;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(DEFAULT_HOST, "myaccount", Config::default())?;
/// let order = orders::get(&client, 42).await?;
/// println!("{:?}", order.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    account: String,
    credentials: Option<Credentials>,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client for `account` against `host`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the host URL is invalid, the account name is empty or
    /// contains a `/`, or the HTTP client fails to build.
    pub fn new(host: &str, account: &str, config: Config) -> Result<Client> {
        let host = Url::parse(host)?;
        if host.cannot_be_a_base() {
            return Err(Error::configuration(format!(
                "{host} cannot be used as a base URL"
            )));
        }
        if account.is_empty() || account.contains('/') {
            return Err(Error::configuration(format!(
                "invalid account name {account:?}"
            )));
        }

        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_str(user_agent)?);
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let mut builder = ReqwestClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            host,
            account: account.to_owned(),
            credentials: config.credentials,
            client: builder.build()?,
        })
    }

    /// Creates a client for `account` against [`DEFAULT_HOST`].
    pub fn for_account(account: &str, config: Config) -> Result<Client> {
        Self::new(DEFAULT_HOST, account, config)
    }

    /// Returns the host URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the account name substituted for `{accountname}`.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Starts a request for `template`, e.g. `"/{accountname}/orders/{id}"`.
    pub fn request(&self, method: Method, template: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, template)
    }

    pub(crate) fn http(&self) -> &ReqwestClient {
        &self.client
    }

    pub(crate) async fn send(&self, request: Request) -> Result<Value> {
        let headers = self
            .credentials
            .as_ref()
            .map(|c| c.create_headers(&self.account))
            .transpose()?;

        crate::request(&self.client, request, headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    #[test]
    fn new_should_reject_invalid_account() {
        for account in ["", "a/b"] {
            let err = Client::new(DEFAULT_HOST, account, Config::default()).unwrap_err();
            assert_eq!(err.kind(), Kind::Configuration, "account {account:?}");
        }
    }

    #[test]
    fn new_should_reject_invalid_host() {
        let err = Client::new("not a url", "myaccount", Config::default()).unwrap_err();
        assert_eq!(err.kind(), Kind::Configuration);

        let err = Client::new("mailto:dev@example.com", "myaccount", Config::default()).unwrap_err();
        assert_eq!(err.kind(), Kind::Configuration);
    }

    #[test]
    fn for_account_should_use_default_host() -> Result<()> {
        let client = Client::for_account("myaccount", Config::default())?;

        assert_eq!(client.host().as_str(), DEFAULT_HOST);
        assert_eq!(client.account(), "myaccount");

        Ok(())
    }
}
