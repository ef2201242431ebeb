use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{serde_as, skip_serializing_none};

use crate::serde_helpers::{IsoTimestamp, Numeric};
use crate::types::{DateTime, Utc};

/// The kind of record a filter definition applies to.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i64)]
pub enum FilterDefinitionType {
    Order = 10001,
    Customer = 10002,
    Event = 10003,
    Ticket = 10004,
    Payment = 10005,
}

/// Filters for [`crate::settings::filterdefinitions::get_list`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[non_exhaustive]
pub struct FilterDefinitionParameters {
    pub includearchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatesince: Option<DateTime<Utc>>,
    #[builder(into)]
    pub filter: Option<String>,
    /// Only return definitions for this record type.
    pub typeid: Option<FilterDefinitionType>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ListFilterDefinition {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    pub typeid: Option<FilterDefinitionType>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub sqlclause: Option<String>,
    #[serde_as(as = "Option<Numeric>")]
    pub filtertype: Option<i64>,
    #[builder(into)]
    pub checklistquery: Option<String>,
    pub isarchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub createdts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatets: Option<DateTime<Utc>>,
}

/// A reusable filter shown in list views.
///
/// `sqlclause` is a `WHERE` fragment over the record table; for checklist filters,
/// `checklistquery` produces the selectable values.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct FilterDefinition {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    pub typeid: Option<FilterDefinitionType>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub sqlclause: Option<String>,
    /// Widget used to enter the filter value.
    #[serde_as(as = "Option<Numeric>")]
    pub filtertype: Option<i64>,
    #[builder(into)]
    pub checklistquery: Option<String>,
    pub isarchived: Option<bool>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub createdts: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<IsoTimestamp>")]
    pub lastupdatets: Option<DateTime<Utc>>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreateFilterDefinition {
    pub typeid: Option<FilterDefinitionType>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub sqlclause: Option<String>,
    #[serde_as(as = "Option<Numeric>")]
    pub filtertype: Option<i64>,
    #[builder(into)]
    pub checklistquery: Option<String>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UpdateFilterDefinition {
    pub typeid: Option<FilterDefinitionType>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub sqlclause: Option<String>,
    #[serde_as(as = "Option<Numeric>")]
    pub filtertype: Option<i64>,
    #[builder(into)]
    pub checklistquery: Option<String>,
}
