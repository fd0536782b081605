//! Response bodies for the list endpoints.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct MessageWithData<T> {
    pub message: &'static str,
    pub data: T,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<MessageWithData<T>>) {
    (
        StatusCode::CREATED,
        Json(MessageWithData {
            message: "List created successfully",
            data,
        }),
    )
}

pub fn updated<T: Serialize>(data: T) -> (StatusCode, Json<MessageWithData<T>>) {
    (
        StatusCode::OK,
        Json(MessageWithData {
            message: "List updated successfully",
            data,
        }),
    )
}

pub fn deleted() -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: "List deleted successfully",
        }),
    )
}
