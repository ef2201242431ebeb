#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every helper"
)]

use httpmock::MockServer;
use ticketmatic_client_sdk::auth::Credentials;
use ticketmatic_client_sdk::{Client, Config};

pub const ACCOUNT: &str = "myaccount";
pub const ACCESS_KEY: &str = "accesskey";
pub const SECRET_KEY: &str = "secretkey";

/// Path prefix every request is rooted at on the mock server.
pub const PREFIX: &str = "/api/1/myaccount";

pub fn path(suffix: &str) -> String {
    format!("{PREFIX}{suffix}")
}

pub fn client(server: &MockServer) -> anyhow::Result<Client> {
    Ok(Client::new(
        &format!("{}/api/1", server.base_url()),
        ACCOUNT,
        Config::default(),
    )?)
}

pub fn authenticated_client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder()
        .credentials(Credentials::new(
            ACCESS_KEY.to_owned(),
            SECRET_KEY.to_owned(),
        ))
        .build();

    Ok(Client::new(
        &format!("{}/api/1", server.base_url()),
        ACCOUNT,
        config,
    )?)
}
