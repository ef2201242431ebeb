//! Models for the orders endpoints.

use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{serde_as, skip_serializing_none};

use crate::serde_helpers::{FiniteFloat, IsoTimestamp, Numeric};
use crate::types::{DateTime, Utc};

/// Order status codes.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i64)]
pub enum OrderStatus {
    Unconfirmed = 21001,
    Confirmed = 21002,
    Archived = 21003,
}

/// Filtering, paging and search options for [`crate::orders::get_list`].
///
/// # Example
///
/// ```
/// use ticketmatic_client_sdk::orders::types::OrderQuery;
///
/// let query = OrderQuery::builder()
///     .filter("select id from tm.order where totalamount > 100")
///     .limit(25)
///     .offset(50)
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[non_exhaustive]
pub struct OrderQuery {
    /// SQL filter on the order table.
    #[builder(into)]
    pub filter: Option<String>,
    /// Also return archived orders.
    pub includearchived: Option<bool>,
    /// Only return orders changed since this time.
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatesince: Option<DateTime<Utc>>,
    /// Maximum number of results.
    #[serde_as(as = "Option<Numeric>")]
    pub limit: Option<i64>,
    /// Number of results to skip.
    #[serde_as(as = "Option<Numeric>")]
    pub offset: Option<i64>,
    /// Order by clause.
    #[builder(into)]
    pub orderby: Option<String>,
    /// Output format, e.g. `ids` or `withlookup`.
    #[builder(into)]
    pub output: Option<String>,
    /// Free text search.
    #[builder(into)]
    pub searchterm: Option<String>,
    /// Serialized simple filter.
    #[builder(into)]
    pub simplefilter: Option<String>,
}

/// A page of orders.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrdersList {
    pub data: Option<Vec<Order>>,
    /// Total number of matching orders, not only those on this page.
    #[serde_as(as = "Option<Numeric>")]
    pub nbrofresults: Option<i64>,
}

/// A single order.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Order {
    #[serde_as(as = "Option<Numeric>")]
    pub orderid: Option<i64>,
    /// Short code used to look up an order.
    #[builder(into)]
    pub code: Option<String>,
    #[serde_as(as = "Option<Numeric>")]
    pub customerid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub saleschannelid: Option<i64>,
    pub status: Option<OrderStatus>,
    #[serde_as(as = "Option<Numeric>")]
    pub nbroftickets: Option<i64>,
    #[serde_as(as = "Option<FiniteFloat>")]
    pub totalamount: Option<f64>,
    #[serde_as(as = "Option<FiniteFloat>")]
    pub amountpaid: Option<f64>,
    #[serde_as(as = "Option<Numeric>")]
    pub deliveryscenarioid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub paymentscenarioid: Option<i64>,
    pub tickets: Option<Vec<OrderTicket>>,
    pub payments: Option<Vec<Payment>>,
    /// Unconfirmed orders expire at this time.
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub expiryts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub createdts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatets: Option<DateTime<Utc>>,
}

/// A ticket in an order.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrderTicket {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub orderid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub tickettypeid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub tickettypepriceid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub seatzoneid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub ticketholderid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub bundleid: Option<i64>,
    #[serde_as(as = "Option<FiniteFloat>")]
    pub price: Option<f64>,
    #[builder(into)]
    pub barcode: Option<String>,
}

/// A payment (or refund, when `refundpaymentid` is set) in an order.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Payment {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub orderid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub paymentmethodid: Option<i64>,
    #[serde_as(as = "Option<FiniteFloat>")]
    pub amount: Option<f64>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub paidts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<Numeric>")]
    pub refundpaymentid: Option<i64>,
}

/// Payload for [`crate::orders::create`]. Only `saleschannelid` is required by the server.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreateOrder {
    #[serde_as(as = "Option<Numeric>")]
    pub saleschannelid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub customerid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub deliveryscenarioid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub paymentscenarioid: Option<i64>,
}

/// Partial update for [`crate::orders::update`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UpdateOrder {
    #[serde_as(as = "Option<Numeric>")]
    pub customerid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub deliveryscenarioid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub paymentscenarioid: Option<i64>,
}

/// Payload for [`crate::orders::add_tickets`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AddTickets {
    pub tickets: Option<Vec<CreateTicket>>,
}

/// A ticket to add to an order.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreateTicket {
    #[serde_as(as = "Option<Numeric>")]
    pub tickettypeid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub tickettypepriceid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub ticketholderid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub optionbundleid: Option<i64>,
}

/// Result of [`crate::orders::add_tickets`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AddTicketsResult {
    /// IDs of the newly created tickets, in request order.
    #[serde_as(as = "Option<Vec<Numeric>>")]
    pub ids: Option<Vec<i64>>,
    pub order: Option<Order>,
}

/// Operation applied by [`crate::orders::update_tickets`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateTicketsOperation {
    /// `params.ticketholderids` holds one contact ID per ticket.
    SetTicketHolders,
    /// `params.tickettypepriceids` holds one price type ID per ticket.
    UpdatePriceType,
}

/// Payload for [`crate::orders::update_tickets`]: one operation over any number of tickets.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UpdateTickets {
    #[serde_as(as = "Option<Vec<Numeric>>")]
    pub tickets: Option<Vec<i64>>,
    pub operation: Option<UpdateTicketsOperation>,
    /// Operation specific parameters.
    pub params: Option<BTreeMap<String, Value>>,
}

/// Payload for [`crate::orders::delete_tickets`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DeleteTickets {
    #[serde_as(as = "Option<Vec<Numeric>>")]
    pub tickets: Option<Vec<i64>>,
}

/// Payload for [`crate::orders::add_payments`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AddPayments {
    pub payments: Option<Vec<CreatePayment>>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreatePayment {
    #[serde_as(as = "Option<FiniteFloat>")]
    pub amount: Option<f64>,
    #[serde_as(as = "Option<Numeric>")]
    pub paymentmethodid: Option<i64>,
}

/// Payload for [`crate::orders::add_refunds`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AddRefunds {
    pub refunds: Option<Vec<CreateRefund>>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreateRefund {
    #[serde_as(as = "Option<FiniteFloat>")]
    pub amount: Option<f64>,
    /// The payment being refunded.
    #[serde_as(as = "Option<Numeric>")]
    pub paymentid: Option<i64>,
}

/// An entry in the order history.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct LogItem {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub orderid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub typeid: Option<i64>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub ts: Option<DateTime<Utc>>,
    /// Free-form details, shape depends on `typeid`.
    pub info: Option<BTreeMap<String, Value>>,
}

/// Payload for [`crate::orders::post_tickets_pdf`]. All tickets when `tickets` is unset.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TicketsPdfRequest {
    #[serde_as(as = "Option<Vec<Numeric>>")]
    pub tickets: Option<Vec<i64>>,
}

/// Payload for [`crate::orders::post_tickets_emaildelivery`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TicketsEmaildeliveryRequest {
    /// Delivery e-mail template to use.
    #[serde_as(as = "Option<Numeric>")]
    pub templateid: Option<i64>,
}

/// A generated document location.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Url {
    #[builder(into)]
    pub url: Option<String>,
}

/// A bundle ticket in an imported order. If one bundle ticket sets `price` or
/// `tickettypepriceid`, all of them should, overriding the configured bundle.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ImportBundleTicket {
    /// Manually select a specific ticket.
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    #[serde_as(as = "Option<FiniteFloat>")]
    pub price: Option<f64>,
    #[serde_as(as = "Option<Numeric>")]
    pub seatzoneid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub tickettypeid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub tickettypepriceid: Option<i64>,
}
