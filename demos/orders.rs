//! Walks through the order endpoints against a live account.
//!
//! Creates an order, adds a ticket, confirms it and prints the order history.
//!
//! ```sh
//! TM_ACCOUNT=myaccount TM_ACCESS_KEY=... TM_SECRET_KEY=... \
//! TM_SALESCHANNEL=1 TM_TICKETTYPEPRICE=7 \
//! RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off \
//! cargo run --example orders --features tracing
//! ```

use ticketmatic_client_sdk::auth::Credentials;
use ticketmatic_client_sdk::orders::{
    self,
    types::{AddTickets, CreateOrder, CreateTicket, OrderQuery},
};
use ticketmatic_client_sdk::{Client, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn env_id(name: &str) -> anyhow::Result<i64> {
    Ok(std::env::var(name)?.parse()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let account = std::env::var("TM_ACCOUNT")?;
    let config = Config::builder()
        .credentials(Credentials::from_env()?)
        .build();
    let client = Client::for_account(&account, config)?;

    let recent = orders::get_list(&client, &OrderQuery::builder().limit(5).build()).await?;
    info!(
        endpoint = "get_list",
        total = ?recent.nbrofresults,
        page = recent.data.as_ref().map_or(0, Vec::len)
    );

    let data = CreateOrder::builder()
        .saleschannelid(env_id("TM_SALESCHANNEL")?)
        .build();
    let order = orders::create(&client, &data).await?;
    let Some(id) = order.orderid else {
        anyhow::bail!("created order has no id");
    };
    info!(endpoint = "create", id, code = ?order.code);

    let tickets = AddTickets::builder()
        .tickets(vec![
            CreateTicket::builder()
                .tickettypepriceid(env_id("TM_TICKETTYPEPRICE")?)
                .build(),
        ])
        .build();
    match orders::add_tickets(&client, id, &tickets).await {
        Ok(result) => info!(endpoint = "add_tickets", ids = ?result.ids),
        Err(e) => error!(endpoint = "add_tickets", error = %e),
    }

    match orders::confirm(&client, id).await {
        Ok(order) => info!(endpoint = "confirm", status = ?order.status),
        Err(e) => error!(endpoint = "confirm", error = %e),
    }

    for item in orders::get_logs(&client, id).await? {
        info!(endpoint = "get_logs", typeid = ?item.typeid, ts = ?item.ts);
    }

    Ok(())
}
