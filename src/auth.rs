//! Credentials and the signed `Authorization` header attached to every request.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac as _};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::error::Error;
use crate::{ACCESS_KEY_VAR, Result, SECRET_KEY_VAR};

/// Scheme name sent in the `Authorization` header.
pub const SCHEME: &str = "TM-HMAC-SHA256";

/// API key pair for an account. The secret key never leaves the process; only a signature
/// derived from it is sent.
#[derive(Clone, Debug)]
pub struct Credentials {
    access_key: String,
    secret_key: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(access_key: String, secret_key: String) -> Self {
        Self {
            access_key,
            secret_key: SecretString::from(secret_key),
        }
    }

    /// Reads the key pair from [`ACCESS_KEY_VAR`] and [`SECRET_KEY_VAR`].
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .map_err(|e| Error::configuration(format!("unable to read {name}: {e}")))
        };

        Ok(Self::new(read(ACCESS_KEY_VAR)?, read(SECRET_KEY_VAR)?))
    }

    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    #[must_use]
    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }

    /// Builds the `Authorization` header value for `account` at `timestamp`.
    pub fn authorization(&self, account: &str, timestamp: DateTime<Utc>) -> Result<String> {
        let ts = timestamp.format("%Y-%m-%dT%H:%M:%S").to_string();
        let message = format!("{}{account}{ts}", self.access_key);
        let signature = hmac(&self.secret_key, &message)?;

        Ok(format!(
            "{SCHEME} key={} ts={ts} sign={signature}",
            self.access_key
        ))
    }

    pub(crate) fn create_headers(&self, account: &str) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        let value = self.authorization(account, Utc::now())?;
        map.insert(AUTHORIZATION, HeaderValue::from_str(&value)?);
        Ok(map)
    }
}

fn hmac(secret: &SecretString, message: &str) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.expose_secret().as_bytes())?;
    mac.update(message.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}
