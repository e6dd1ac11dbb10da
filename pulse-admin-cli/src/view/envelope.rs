use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ViewError;

/// Borrow the array stored under `field` in a list envelope.
///
/// Anything else (missing field, non-array field, non-object payload) is a
/// shape error; partially-shaped payloads are never salvaged.
pub fn unwrap_envelope<'a>(payload: &'a Value, field: &str) -> Result<&'a Vec<Value>, ViewError> {
    match payload.get(field) {
        Some(Value::Array(items)) => Ok(items),
        _ => {
            tracing::error!("Invalid {} envelope: {}", field, payload);
            Err(ViewError::Shape {
                field: field.to_string(),
            })
        }
    }
}

/// Decode the record under `field` of a detail envelope; `null` means absent
pub fn unwrap_detail<T: DeserializeOwned>(payload: &Value, field: &str) -> Result<Option<T>, ViewError> {
    match payload.get(field) {
        Some(Value::Null) => Ok(None),
        Some(record @ Value::Object(_)) => serde_json::from_value(record.clone())
            .map(Some)
            .map_err(|e| {
                tracing::error!("Undecodable {} record {}: {}", field, record, e);
                ViewError::Decode(e.to_string())
            }),
        _ => {
            tracing::error!("Invalid {} envelope: {}", field, payload);
            Err(ViewError::Shape {
                field: field.to_string(),
            })
        }
    }
}

/// Read `{ count: n }`
pub fn unwrap_count(payload: &Value) -> Result<i64, ViewError> {
    payload.get("count").and_then(Value::as_i64).ok_or_else(|| {
        tracing::error!("Invalid count envelope: {}", payload);
        ViewError::Shape {
            field: "count".to_string(),
        }
    })
}

pub(crate) fn decode_rows<T: DeserializeOwned>(payload: &Value, field: &str) -> Result<Vec<T>, ViewError> {
    unwrap_envelope(payload, field)?
        .iter()
        .map(|row| decode_row(row, field))
        .collect()
}

/// Decode one bare row, such as the body of a create response
pub(crate) fn decode_row<T: DeserializeOwned>(row: &Value, field: &str) -> Result<T, ViewError> {
    serde_json::from_value(row.clone()).map_err(|e| {
        tracing::error!("Undecodable {} row {}: {}", field, row, e);
        ViewError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope_accepts_array_field() {
        let payload = json!({ "users": [{ "id": 1 }, { "id": 2 }] });
        assert_eq!(unwrap_envelope(&payload, "users").unwrap().len(), 2);
    }

    #[test]
    fn test_unwrap_envelope_rejects_other_shapes() {
        for payload in [
            json!({ "status": "ok" }),
            json!({ "users": { "id": 1 } }),
            json!({ "users": null }),
            json!([{ "id": 1 }]),
            Value::Null,
        ] {
            let err = unwrap_envelope(&payload, "users").unwrap_err();
            assert_eq!(err, ViewError::Shape { field: "users".into() });
        }
    }

    #[test]
    fn test_unwrap_detail() {
        let found: Option<Value> = unwrap_detail(&json!({ "comment": { "id": 3 } }), "comment").unwrap();
        assert_eq!(found, Some(json!({ "id": 3 })));

        let absent: Option<Value> = unwrap_detail(&json!({ "comment": null }), "comment").unwrap();
        assert!(absent.is_none());

        assert!(unwrap_detail::<Value>(&json!({ "id": 3 }), "comment").is_err());
    }

    #[test]
    fn test_unwrap_count() {
        assert_eq!(unwrap_count(&json!({ "count": 42 })).unwrap(), 42);
        assert!(unwrap_count(&json!({ "count": "42" })).is_err());
    }
}
