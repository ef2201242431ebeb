//! Conversion between typed models and their JSON representation.
//!
//! Every model field is an `Option`: `None` means the field is unset and is left out of the
//! serialized JSON, so a model with only some fields set expresses a partial update. Absent and
//! `null` fields both decode to `None`. Keys a model does not declare are ignored (and logged with
//! the `tracing` feature).

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;
use crate::error::Error;
use crate::serde_helpers::deserialize_with_warnings;

/// JSON round trip for API models.
///
/// Implemented for every type that is both [`Serialize`] and [`DeserializeOwned`].
pub trait Model: Serialize + DeserializeOwned {
    /// Decodes a model. `null` yields `Ok(None)` rather than a model with every field unset.
    fn from_json(value: Value) -> Result<Option<Self>> {
        decode(value)
    }

    /// Encodes the set fields of this model.
    fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| Error::configuration(format!("unable to encode model: {e}")))
    }
}

impl<T: Serialize + DeserializeOwned> Model for T {}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }

    deserialize_with_warnings(value).map(Some)
}

/// Decodes a JSON array into models, preserving order.
///
/// `[]` and `null` both yield an empty vector. A payload that is not an array, or an array with
/// a `null` element, is a decoding error.
pub fn unpack_array<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                decode(item)?
                    .ok_or_else(|| Error::decoding(format!("null element at index {index}")))
            })
            .collect(),
        other => Err(Error::decoding(format!(
            "expected a JSON array, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;
    use serde_with::skip_serializing_none;

    use super::*;
    use crate::error::Kind;

    #[skip_serializing_none]
    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: Option<i64>,
        name: Option<String>,
    }

    #[test]
    fn from_json_null_should_be_none() -> Result<()> {
        assert_eq!(Item::from_json(Value::Null)?, None);
        Ok(())
    }

    #[test]
    fn from_json_empty_object_should_be_all_unset() -> Result<()> {
        assert_eq!(Item::from_json(json!({}))?, Some(Item::default()));
        Ok(())
    }

    #[test]
    fn to_json_should_skip_unset_fields() -> Result<()> {
        let item = Item {
            id: Some(0),
            name: None,
        };

        assert_eq!(item.to_json()?, json!({ "id": 0 }));
        Ok(())
    }

    #[test]
    fn unpack_array_should_preserve_order() -> Result<()> {
        let items: Vec<Item> = unpack_array(json!([{ "id": 2 }, { "id": 1, "name": "b" }]))?;

        assert_eq!(
            items,
            vec![
                Item {
                    id: Some(2),
                    name: None
                },
                Item {
                    id: Some(1),
                    name: Some("b".to_owned())
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn unpack_array_empty_should_be_empty() -> Result<()> {
        assert!(unpack_array::<Item>(json!([]))?.is_empty());
        assert!(unpack_array::<Item>(Value::Null)?.is_empty());
        Ok(())
    }

    #[test]
    fn unpack_array_should_reject_non_arrays_and_null_elements() {
        let err = unpack_array::<Item>(json!({ "id": 1 })).unwrap_err();
        assert_eq!(err.kind(), Kind::Decoding);

        let err = unpack_array::<Item>(json!([{ "id": 1 }, null])).unwrap_err();
        assert_eq!(err.kind(), Kind::Decoding);
        assert!(err.to_string().contains("index 1"), "{err}");
    }

    #[test]
    fn malformed_field_should_fail_decoding() {
        let err = Item::from_json(json!({ "id": "not a number" })).unwrap_err();
        assert_eq!(err.kind(), Kind::Decoding);
    }
}
