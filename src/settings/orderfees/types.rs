use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{serde_as, skip_serializing_none};

use crate::serde_helpers::{FiniteFloat, IsoTimestamp, Numeric};
use crate::types::{DateTime, Utc};

/// How an order fee is calculated.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i64)]
pub enum OrderFeeType {
    /// Chosen by hand on the order.
    Manual = 2401,
    /// Calculated from the rule.
    Automatic = 2402,
    /// Calculated by a script.
    Script = 2403,
}

/// Filters for [`crate::settings::orderfees::get_list`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[non_exhaustive]
pub struct OrderFeeParameters {
    pub includearchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatesince: Option<DateTime<Utc>>,
    #[builder(into)]
    pub filter: Option<String>,
}

/// Definition of how the fee is applied.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrderFeeRule {
    /// Whether the rule is active.
    pub status: Option<bool>,
    #[serde_as(as = "Option<FiniteFloat>")]
    pub value: Option<f64>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ListOrderFee {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    pub typeid: Option<OrderFeeType>,
    #[builder(into)]
    pub name: Option<String>,
    pub isarchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub createdts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatets: Option<DateTime<Utc>>,
}

/// An order fee, added to orders based on their delivery or payment scenario.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrderFee {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    pub typeid: Option<OrderFeeType>,
    #[builder(into)]
    pub name: Option<String>,
    pub rule: Option<OrderFeeRule>,
    pub isarchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub createdts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatets: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreateOrderFee {
    pub typeid: Option<OrderFeeType>,
    #[builder(into)]
    pub name: Option<String>,
    pub rule: Option<OrderFeeRule>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UpdateOrderFee {
    pub typeid: Option<OrderFeeType>,
    #[builder(into)]
    pub name: Option<String>,
    pub rule: Option<OrderFeeRule>,
}
