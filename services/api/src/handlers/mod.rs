pub mod admin;
pub mod auth;
pub mod branch;
pub mod feedback;
pub mod food_item;
pub mod health;
pub mod listing;
pub mod order;
pub mod user;
pub mod vendor;
pub mod vendor_member;

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use canteen_domain::role::Role;

/// A response body with a `message` next to its own fields.
#[derive(Serialize)]
pub struct WithMessage<T: Serialize> {
    #[serde(flatten)]
    pub body: T,
    pub message: &'static str,
}

impl<T: Serialize> WithMessage<T> {
    pub fn new(body: T, message: &'static str) -> Json<Self> {
        Json(Self { body, message })
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn message(message: &'static str) -> Json<MessageResponse> {
    Json(MessageResponse { message })
}

/// `{token, <claim>: id, message}`, the reply to signup and role login.
pub fn token_reply(role: Role, id: Uuid, token: String, message: &str) -> Json<Value> {
    let mut body = Map::new();
    body.insert("token".into(), Value::String(token));
    body.insert(role.claim_key().into(), Value::String(id.to_string()));
    body.insert("message".into(), Value::String(message.into()));
    Json(Value::Object(body))
}
