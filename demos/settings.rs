//! Lists the price lists, order fees and filter definitions of an account.
//!
//! ```sh
//! TM_ACCOUNT=myaccount TM_ACCESS_KEY=... TM_SECRET_KEY=... \
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off \
//! cargo run --example settings --features tracing
//! ```

use std::time::Duration;

use ticketmatic_client_sdk::auth::Credentials;
use ticketmatic_client_sdk::settings::filterdefinitions::{
    self, types::FilterDefinitionParameters,
};
use ticketmatic_client_sdk::settings::orderfees::{self, types::OrderFeeParameters};
use ticketmatic_client_sdk::settings::pricelists::{self, types::PriceListParameters};
use ticketmatic_client_sdk::{Client, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let account = std::env::var("TM_ACCOUNT")?;
    let config = Config::builder()
        .credentials(Credentials::from_env()?)
        .timeout(Duration::from_secs(30))
        .build();
    let client = Client::for_account(&account, config)?;

    match pricelists::get_list(&client, &PriceListParameters::default()).await {
        Ok(lists) => {
            for list in lists {
                info!(endpoint = "pricelists", id = ?list.id, name = ?list.name);
            }
        }
        Err(e) => error!(endpoint = "pricelists", error = %e),
    }

    let params = OrderFeeParameters::builder().includearchived(true).build();
    match orderfees::get_list(&client, &params).await {
        Ok(fees) => {
            for fee in fees {
                info!(
                    endpoint = "orderfees",
                    id = ?fee.id,
                    typeid = ?fee.typeid,
                    archived = ?fee.isarchived
                );
            }
        }
        Err(e) => error!(endpoint = "orderfees", error = %e),
    }

    match filterdefinitions::get_list(&client, &FilterDefinitionParameters::default()).await {
        Ok(definitions) => info!(endpoint = "filterdefinitions", count = definitions.len()),
        Err(e) => error!(endpoint = "filterdefinitions", error = %e),
    }

    Ok(())
}
