use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

use crate::serde_helpers::Numeric;

/// A contingent in the seating plan of an event.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct EventSeatingplanContingent {
    #[serde_as(as = "Option<Numeric>")]
    pub id: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub eventid: Option<i64>,
    #[serde_as(as = "Option<Numeric>")]
    pub seatrankid: Option<i64>,
    #[builder(into)]
    pub name: Option<String>,
    /// Number of tickets in the contingent.
    #[serde_as(as = "Option<Numeric>")]
    pub amount: Option<i64>,
}

/// New location for an event. Only the fields that are set are sent.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UpdateEventLocation {
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub street1: Option<String>,
    /// Number and box.
    #[builder(into)]
    pub street2: Option<String>,
    #[builder(into)]
    pub zip: Option<String>,
    #[builder(into)]
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[builder(into)]
    pub countrycode: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Model as _;

    #[test]
    fn update_event_location_should_serialize_set_fields_only() -> crate::Result<()> {
        let location = UpdateEventLocation::builder()
            .name("Concertgebouw")
            .countrycode("BE")
            .build();

        assert_eq!(
            location.to_json()?,
            json!({ "name": "Concertgebouw", "countrycode": "BE" })
        );
        Ok(())
    }

    #[test]
    fn contingent_should_accept_numeric_strings() -> crate::Result<()> {
        let contingent = EventSeatingplanContingent::from_json(json!({
            "id": "12",
            "eventid": 3,
            "name": "Balcony",
            "amount": "150"
        }))?;

        assert_eq!(
            contingent,
            Some(EventSeatingplanContingent {
                id: Some(12),
                eventid: Some(3),
                seatrankid: None,
                name: Some("Balcony".to_owned()),
                amount: Some(150),
            })
        );
        Ok(())
    }
}
