use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, skip_serializing_none};

use crate::serde_helpers::{FiniteFloat, IsoTimestamp, Numeric};
use crate::types::{DateTime, Utc};

/// Filters for [`crate::settings::pricelists::get_list`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[non_exhaustive]
pub struct PriceListParameters {
    /// Also return archived price lists.
    pub includearchived: Option<bool>,
    /// Only return price lists changed since this time.
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatesince: Option<DateTime<Utc>>,
    /// SQL filter on the price list table.
    #[builder(into)]
    pub filter: Option<String>,
}

/// A price list as returned by the list operation, without its prices.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ListPriceList {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    /// Set when the prices are per seat zone.
    #[serde_as(as = "Option<Numeric>")]
    pub seatingplanid: Option<i64>,
    pub isarchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub createdts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatets: Option<DateTime<Utc>>,
}

/// A price list.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PriceList {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    #[serde_as(as = "Option<Numeric>")]
    pub seatingplanid: Option<i64>,
    pub prices: Option<PricelistPrices>,
    pub isarchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub createdts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatets: Option<DateTime<Utc>>,
}

/// Prices of a price list, grouped by price type.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PricelistPrices {
    pub pricetypes: Option<Vec<PricelistPrice>>,
}

/// Prices for one price type. `prices` has one entry per seat zone, or a single entry for
/// unseated events.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PricelistPrice {
    #[serde_as(as = "Option<Numeric>")]
    pub pricetypeid: Option<i64>,
    #[serde_as(as = "Option<Vec<FiniteFloat>>")]
    pub prices: Option<Vec<f64>>,
    /// Conditions that must be met before this price type can be sold.
    pub conditions: Option<Vec<Value>>,
}

/// Payload for [`crate::settings::pricelists::create`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreatePriceList {
    #[builder(into)]
    pub name: Option<String>,
    #[serde_as(as = "Option<Numeric>")]
    pub seatingplanid: Option<i64>,
    pub prices: Option<PricelistPrices>,
}

/// Partial update for [`crate::settings::pricelists::update`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UpdatePriceList {
    #[builder(into)]
    pub name: Option<String>,
    #[serde_as(as = "Option<Numeric>")]
    pub seatingplanid: Option<i64>,
    pub prices: Option<PricelistPrices>,
}
