//! Assembly of a single API request from a path template, path parameters, query parameters
//! and an optional JSON body.

#![expect(
    clippy::module_name_repetitions,
    reason = "`RequestBuilder` is re-exported at the crate root where the prefix carries meaning"
)]

use std::fmt::Display;

use reqwest::{Method, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::Result;
use crate::client::Client;
use crate::error::Error;
use crate::model::{decode, unpack_array};
use crate::serde_helpers::ensure_finite;

/// Placeholder resolved from [`Client::account`] unless set explicitly.
const ACCOUNT_PLACEHOLDER: &str = "accountname";

/// Builder for one request, created with [`Client::request`].
///
/// Construction never fails eagerly: the first problem is kept and returned by whichever
/// finisher ([`run`](Self::run), [`fetch`](Self::fetch), [`fetch_list`](Self::fetch_list),
/// [`execute`](Self::execute)) is called.
///
/// # Example
///
/// ```
/// use ticketmatic_client_sdk::{Client, Config};
/// use ticketmatic_client_sdk::error::Method;
///
/// # fn example() -> ticketmatic_client_sdk::Result<()> {
/// let client = Client::new("https://apps.ticketmatic.com/api/1", "myaccount", Config::default())?;
/// let url = client
///     .request(Method::GET, "/{accountname}/orders/{id}")
///     .parameter("id", 42)
///     .query("includearchived", &Some(true))
///     .url()?;
///
/// assert_eq!(
///     url.as_str(),
///     "https://apps.ticketmatic.com/api/1/myaccount/orders/42?includearchived=true"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[must_use = "requests do nothing until sent"]
pub struct RequestBuilder<'client> {
    client: &'client Client,
    method: Method,
    template: String,
    parameters: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    error: Option<Error>,
}

impl<'client> RequestBuilder<'client> {
    pub(crate) fn new(client: &'client Client, method: Method, template: &str) -> Self {
        Self {
            client,
            method,
            template: template.to_owned(),
            parameters: Vec::new(),
            query: Vec::new(),
            body: None,
            error: None,
        }
    }

    /// Substitutes `{name}` in the path template with `value`. Setting the same name twice keeps
    /// the last value.
    pub fn parameter<V: Display>(mut self, name: &str, value: V) -> Self {
        let value = value.to_string();
        match self.parameters.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.parameters.push((name.to_owned(), value)),
        }
        self
    }

    /// Adds a query string entry.
    ///
    /// `None`/`null` values are omitted entirely, sequences become repeated keys
    /// (`key=x&key=y`), timestamps are written as RFC 3339. Objects, nested sequences and
    /// non-finite floats are rejected.
    pub fn query<V: Serialize + ?Sized>(mut self, name: &str, value: &V) -> Self {
        if self.error.is_some() {
            return self;
        }

        let result = encode(value)
            .map_err(|e| {
                Error::configuration(format!("unable to encode query parameter {name}: {e}"))
            })
            .and_then(|value| self.push_query(name, value));

        if let Err(e) = result {
            self.error = Some(e);
        }
        self
    }

    /// Adds every set field of `params` as a query entry, in key order.
    ///
    /// `params` must serialize to a map, typically a `*Parameters` struct whose unset fields are
    /// skipped. Each field is encoded like a [`query`](Self::query) value.
    pub fn query_params<P: Serialize + ?Sized>(mut self, params: &P) -> Self {
        if self.error.is_some() {
            return self;
        }

        let result = encode(params)
            .map_err(|e| Error::configuration(format!("unable to encode query parameters: {e}")))
            .and_then(|value| match value {
                Value::Object(fields) => fields
                    .into_iter()
                    .try_for_each(|(name, value)| self.push_query(&name, value)),
                Value::Null => Ok(()),
                other => Err(Error::configuration(format!(
                    "query parameters must be a map, found {other}"
                ))),
            });

        if let Err(e) = result {
            self.error = Some(e);
        }
        self
    }

    fn push_query(&mut self, name: &str, value: Value) -> Result<()> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .try_for_each(|item| self.push_query_value(name, item)),
            other => self.push_query_value(name, other),
        }
    }

    fn push_query_value(&mut self, name: &str, value: Value) -> Result<()> {
        match value {
            Value::Null => {}
            Value::Array(_) => {
                return Err(Error::configuration(format!(
                    "query parameter {name} cannot contain nested lists"
                )));
            }
            Value::Object(_) => {
                return Err(Error::configuration(format!(
                    "query parameter {name} cannot be an object"
                )));
            }
            Value::String(s) => self.query.push((name.to_owned(), s)),
            other => self.query.push((name.to_owned(), other.to_string())),
        }
        Ok(())
    }

    /// Attaches a JSON body. A request carries at most one body.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        if self.error.is_some() {
            return self;
        }

        if self.body.is_some() {
            self.error = Some(Error::configuration(format!(
                "request to {} already has a body",
                self.template
            )));
            return self;
        }

        match encode(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => {
                self.error = Some(Error::configuration(format!(
                    "unable to encode request body: {e}"
                )));
            }
        }
        self
    }

    /// Resolves the full request URL.
    ///
    /// Fails if the template references a placeholder without a value, or a parameter was set
    /// for which the template has no placeholder.
    pub fn url(&self) -> Result<Url> {
        let placeholders = placeholders(&self.template)?;
        if let Some((name, _)) = self
            .parameters
            .iter()
            .find(|(name, _)| !placeholders.contains(&name.as_str()))
        {
            return Err(Error::configuration(format!(
                "parameter {name} has no placeholder in {}",
                self.template
            )));
        }

        let mut url = self.client.host().clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                Error::configuration(format!(
                    "{} cannot be used as a base URL",
                    self.client.host()
                ))
            })?;
            segments.pop_if_empty();
            for segment in self.template.split('/').filter(|s| !s.is_empty()) {
                segments.push(&self.resolve(segment)?);
            }
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }

    fn resolve(&self, segment: &str) -> Result<String> {
        let mut resolved = String::with_capacity(segment.len());
        let mut rest = segment;

        while let Some((head, tail)) = rest.split_once('{') {
            let (name, after) = tail
                .split_once('}')
                .ok_or_else(|| unterminated(&self.template))?;
            resolved.push_str(head);
            resolved.push_str(self.lookup(name)?);
            rest = after;
        }
        resolved.push_str(rest);

        Ok(resolved)
    }

    fn lookup(&self, name: &str) -> Result<&str> {
        if let Some((_, value)) = self.parameters.iter().find(|(n, _)| n == name) {
            return Ok(value.as_str());
        }
        if name == ACCOUNT_PLACEHOLDER {
            return Ok(self.client.account());
        }

        Err(Error::configuration(format!(
            "unresolved path placeholder {{{name}}} in {}",
            self.template
        )))
    }

    fn build(mut self) -> Result<Request> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        let mut builder = self.client.http().request(self.method.clone(), self.url()?);
        if let Some(body) = &self.body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }

    /// Sends the request and returns the raw JSON payload (`null` for an empty body).
    pub async fn run(self) -> Result<Value> {
        let client = self.client;
        client.send(self.build()?).await
    }

    /// Sends the request and decodes a single model. A `null` payload is reported as
    /// [`crate::error::Kind::NotFound`].
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T> {
        let client = self.client;
        let request = self.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_owned();

        let payload = client.send(request).await?;

        decode(payload)?.ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::warn!(method = %method, path = %path, "API resource not found");
            Error::status(
                StatusCode::NOT_FOUND,
                method,
                path,
                "Unable to find requested resource",
            )
        })
    }

    /// Sends the request and decodes a JSON array of models, preserving order.
    pub async fn fetch_list<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        unpack_array(self.run().await?)
    }

    /// Sends the request and discards the payload.
    pub async fn execute(self) -> Result<()> {
        self.run().await.map(|_| ())
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> std::result::Result<Value, serde_json::Error> {
    ensure_finite(value)?;
    serde_json::to_value(value)
}

fn unterminated(template: &str) -> Error {
    Error::configuration(format!("unterminated placeholder in {template}"))
}

fn placeholders(template: &str) -> Result<Vec<&str>> {
    template
        .split('{')
        .skip(1)
        .map(|part| {
            part.split_once('}')
                .map(|(name, _)| name)
                .ok_or_else(|| unterminated(template))
        })
        .collect()
}
