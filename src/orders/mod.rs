//! Orders: creation, ticket and payment management, and document generation.
//!
//! ## Available Endpoints
//!
//! | Function | Method | Path |
//! |----------|--------|------|
//! | [`get_list`] | `GET` | `/{accountname}/orders` |
//! | [`get`] | `GET` | `/{accountname}/orders/{id}` |
//! | [`create`] | `POST` | `/{accountname}/orders` |
//! | [`update`] | `PUT` | `/{accountname}/orders/{id}` |
//! | [`confirm`] | `POST` | `/{accountname}/orders/{id}` |
//! | [`add_tickets`] | `POST` | `/{accountname}/orders/{id}/tickets` |
//! | [`update_tickets`] | `PUT` | `/{accountname}/orders/{id}/tickets` |
//! | [`delete_tickets`] | `DELETE` | `/{accountname}/orders/{id}/tickets` |
//! | [`add_payments`] | `POST` | `/{accountname}/orders/{id}/payments` |
//! | [`add_refunds`] | `POST` | `/{accountname}/orders/{id}/refunds` |
//! | [`get_logs`] | `GET` | `/{accountname}/orders/{id}/logs` |
//! | [`post_tickets_pdf`] | `POST` | `/{accountname}/orders/{id}/tickets/pdf` |
//! | [`post_tickets_emaildelivery`] | `POST` | `/{accountname}/orders/{id}/tickets/emaildelivery` |
//!
//! Order confirmation is a server-side workflow; the client only issues the request.
//!
//! # Example
//!
//! ```no_run
//! use ticketmatic_client_sdk::orders::{self, types::{AddTickets, CreateOrder, CreateTicket}};
//! use ticketmatic_client_sdk::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::for_account("myaccount", Config::default())?;
//!
//! let order = orders::create(&client, &CreateOrder::builder().saleschannelid(1).build()).await?;
//! let id = order.orderid.ok_or("order without id")?;
//!
//! let tickets = AddTickets::builder()
//!     .tickets(vec![CreateTicket::builder().tickettypepriceid(7).build()])
//!     .build();
//! let result = orders::add_tickets(&client, id, &tickets).await?;
//! println!("added tickets {:?}", result.ids);
//!
//! orders::confirm(&client, id).await?;
//! # Ok(())
//! # }
//! ```

pub mod types;

use reqwest::Method;

use crate::Result;
use crate::client::Client;
use types::{
    AddPayments, AddRefunds, AddTickets, AddTicketsResult, CreateOrder, DeleteTickets, LogItem,
    Order, OrderQuery, OrdersList, TicketsEmaildeliveryRequest, TicketsPdfRequest, UpdateOrder,
    UpdateTickets, Url,
};

const ORDERS: &str = "/{accountname}/orders";
const ORDER: &str = "/{accountname}/orders/{id}";

/// Lists orders matching `query`, one page at a time.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn get_list(client: &Client, query: &OrderQuery) -> Result<OrdersList> {
    client
        .request(Method::GET, ORDERS)
        .query_params(query)
        .fetch()
        .await
}

/// Gets a single order.
///
/// # Errors
///
/// Returns a [`crate::error::Kind::NotFound`] error if the order does not exist.
pub async fn get(client: &Client, id: i64) -> Result<Order> {
    client
        .request(Method::GET, ORDER)
        .parameter("id", id)
        .fetch()
        .await
}

/// Creates a new, unconfirmed order.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn create(client: &Client, data: &CreateOrder) -> Result<Order> {
    client
        .request(Method::POST, ORDERS)
        .body(data)
        .fetch()
        .await
}

/// Updates the fields set on `data`, leaving the others untouched.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn update(client: &Client, id: i64, data: &UpdateOrder) -> Result<Order> {
    client
        .request(Method::PUT, ORDER)
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Confirms an order, making it final.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn confirm(client: &Client, id: i64) -> Result<Order> {
    client
        .request(Method::POST, ORDER)
        .parameter("id", id)
        .fetch()
        .await
}

/// Adds tickets to an order. The result lists the new ticket IDs in request order.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn add_tickets(client: &Client, id: i64, data: &AddTickets) -> Result<AddTicketsResult> {
    client
        .request(Method::POST, "/{accountname}/orders/{id}/tickets")
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Applies one operation to several tickets of an order.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn update_tickets(client: &Client, id: i64, data: &UpdateTickets) -> Result<Order> {
    client
        .request(Method::PUT, "/{accountname}/orders/{id}/tickets")
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Removes tickets from an order.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn delete_tickets(client: &Client, id: i64, data: &DeleteTickets) -> Result<Order> {
    client
        .request(Method::DELETE, "/{accountname}/orders/{id}/tickets")
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Registers payments on an order.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn add_payments(client: &Client, id: i64, data: &AddPayments) -> Result<Order> {
    client
        .request(Method::POST, "/{accountname}/orders/{id}/payments")
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Registers refunds against existing payments of an order.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn add_refunds(client: &Client, id: i64, data: &AddRefunds) -> Result<Order> {
    client
        .request(Method::POST, "/{accountname}/orders/{id}/refunds")
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Gets the history of an order, oldest entry first.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn get_logs(client: &Client, id: i64) -> Result<Vec<LogItem>> {
    client
        .request(Method::GET, "/{accountname}/orders/{id}/logs")
        .parameter("id", id)
        .fetch_list()
        .await
}

/// Generates a PDF with the tickets of an order and returns its location.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn post_tickets_pdf(client: &Client, id: i64, data: &TicketsPdfRequest) -> Result<Url> {
    client
        .request(Method::POST, "/{accountname}/orders/{id}/tickets/pdf")
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}

/// Sends the tickets of an order to the customer by e-mail.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn post_tickets_emaildelivery(
    client: &Client,
    id: i64,
    data: &TicketsEmaildeliveryRequest,
) -> Result<Order> {
    client
        .request(Method::POST, "/{accountname}/orders/{id}/tickets/emaildelivery")
        .parameter("id", id)
        .body(data)
        .fetch()
        .await
}
