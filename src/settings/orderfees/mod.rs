//! Order fees (`/{accountname}/settings/ticketsales/orderfees`).

pub mod types;

use reqwest::Method;

use crate::Result;
use crate::client::Client;
use types::{CreateOrderFee, ListOrderFee, OrderFee, OrderFeeParameters, UpdateOrderFee};

const ORDERFEES: &str = "/{accountname}/settings/ticketsales/orderfees";
const ORDERFEE: &str = "/{accountname}/settings/ticketsales/orderfees/{id}";

/// Lists order fees matching `params`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn get_list(client: &Client, params: &OrderFeeParameters) -> Result<Vec<ListOrderFee>> {
    client
        .request(Method::GET, ORDERFEES)
        .query_params(params)
        .fetch_list()
        .await
}

/// Gets a single order fee.
///
/// # Errors
///
/// Returns a [`crate::error::Kind::NotFound`] error if the order fee does not exist.
pub async fn get(client: &Client, id: i64) -> Result<OrderFee> {
    client
        .request(Method::GET, ORDERFEE)
        .parameter("id", id)
        .fetch()
        .await
}

/// Creates an order fee.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn create(client: &Client, data: &CreateOrderFee) -> Result<OrderFee> {
    client
        .request(Method::POST, ORDERFEES)
        .body(data)
        .fetch()
        .await
}

/// Updates the fields set on `data`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn update(client: &Client, id: i64, data: &UpdateOrderFee) -> Result<OrderFee> {
    client
        .request(Method::PUT, ORDERFEE)
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Archives an order fee. Order fees are archivable: the item is marked archived, not removed.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete(client: &Client, id: i64) -> Result<()> {
    client
        .request(Method::DELETE, ORDERFEE)
        .parameter("id", id)
        .execute()
        .await
}

/// Creates or updates several order fees at once.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn batch(client: &Client, data: &[OrderFee]) -> Result<()> {
    client
        .request(Method::PUT, ORDERFEES)
        .body(data)
        .execute()
        .await
}
