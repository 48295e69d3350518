//! Request validation: required-field presence and typed decoding.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// All `required` fields must be present and non-null.
    pub fn require(body: &Value, required: &[&str]) -> Result<(), AppError> {
        let map = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))?;
        for field in required {
            match map.get(*field) {
                None | Some(Value::Null) => {
                    return Err(AppError::Validation(format!("{} is required", field)));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Check `required`, then decode into `T`. Wrong field types are validation errors.
    pub fn decode<T: DeserializeOwned>(body: Value, required: &[&str]) -> Result<T, AppError> {
        Self::require(&body, required)?;
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
    }
}
