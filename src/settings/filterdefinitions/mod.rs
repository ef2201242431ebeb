//! Filter definitions (`/{accountname}/settings/system/filterdefinitions`).

pub mod types;

use reqwest::Method;

use crate::Result;
use crate::client::Client;
use types::{
    CreateFilterDefinition, FilterDefinition, FilterDefinitionParameters, ListFilterDefinition,
    UpdateFilterDefinition,
};

const FILTERDEFINITIONS: &str = "/{accountname}/settings/system/filterdefinitions";
const FILTERDEFINITION: &str = "/{accountname}/settings/system/filterdefinitions/{id}";

/// Lists filter definitions matching `params`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn get_list(
    client: &Client,
    params: &FilterDefinitionParameters,
) -> Result<Vec<ListFilterDefinition>> {
    client
        .request(Method::GET, FILTERDEFINITIONS)
        .query_params(params)
        .fetch_list()
        .await
}

/// Gets a single filter definition.
///
/// # Errors
///
/// Returns a [`crate::error::Kind::NotFound`] error if the filter definition does not exist.
pub async fn get(client: &Client, id: i64) -> Result<FilterDefinition> {
    client
        .request(Method::GET, FILTERDEFINITION)
        .parameter("id", id)
        .fetch()
        .await
}

/// Creates a filter definition.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn create(client: &Client, data: &CreateFilterDefinition) -> Result<FilterDefinition> {
    client
        .request(Method::POST, FILTERDEFINITIONS)
        .body(data)
        .fetch()
        .await
}

/// Updates the fields set on `data`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn update(
    client: &Client,
    id: i64,
    data: &UpdateFilterDefinition,
) -> Result<FilterDefinition> {
    client
        .request(Method::PUT, FILTERDEFINITION)
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Archives a filter definition. Filter definitions are archivable: the item is marked
/// archived, not removed.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete(client: &Client, id: i64) -> Result<()> {
    client
        .request(Method::DELETE, FILTERDEFINITION)
        .parameter("id", id)
        .execute()
        .await
}

/// Creates or updates several filter definitions at once.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn batch(client: &Client, data: &[FilterDefinition]) -> Result<()> {
    client
        .request(Method::PUT, FILTERDEFINITIONS)
        .body(data)
        .execute()
        .await
}
