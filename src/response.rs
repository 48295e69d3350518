//! Response helpers. Entities are returned bare, without an envelope.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 201 with the entity and a `Location` header pointing at it.
pub fn created<T: Serialize>(location: String, data: T) -> Response {
    let mut res = (StatusCode::CREATED, Json(data)).into_response();
    if let Ok(value) = HeaderValue::from_str(&location) {
        res.headers_mut().insert(header::LOCATION, value);
    }
    res
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
