//! Price lists (`/{accountname}/settings/pricing/pricelists`).

pub mod types;

use reqwest::Method;

use crate::Result;
use crate::client::Client;
use types::{CreatePriceList, ListPriceList, PriceList, PriceListParameters, UpdatePriceList};

const PRICELISTS: &str = "/{accountname}/settings/pricing/pricelists";
const PRICELIST: &str = "/{accountname}/settings/pricing/pricelists/{id}";

/// Lists price lists matching `params`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn get_list(client: &Client, params: &PriceListParameters) -> Result<Vec<ListPriceList>> {
    client
        .request(Method::GET, PRICELISTS)
        .query_params(params)
        .fetch_list()
        .await
}

/// Gets a single price list, including its prices.
///
/// # Errors
///
/// Returns a [`crate::error::Kind::NotFound`] error if the price list does not exist.
pub async fn get(client: &Client, id: i64) -> Result<PriceList> {
    client
        .request(Method::GET, PRICELIST)
        .parameter("id", id)
        .fetch()
        .await
}

/// Creates a price list.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn create(client: &Client, data: &CreatePriceList) -> Result<PriceList> {
    client
        .request(Method::POST, PRICELISTS)
        .body(data)
        .fetch()
        .await
}

/// Updates the fields set on `data`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn update(client: &Client, id: i64, data: &UpdatePriceList) -> Result<PriceList> {
    client
        .request(Method::PUT, PRICELIST)
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Archives a price list. Price lists are archivable: the item is marked archived, not removed.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete(client: &Client, id: i64) -> Result<()> {
    client
        .request(Method::DELETE, PRICELIST)
        .parameter("id", id)
        .execute()
        .await
}

/// Creates or updates several price lists at once. Items with an `id` are updated.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn batch(client: &Client, data: &[PriceList]) -> Result<()> {
    client
        .request(Method::PUT, PRICELISTS)
        .body(data)
        .execute()
        .await
}
