//! API models for request and response payloads
//!
//! Request payloads are deserialized after their keys have been lowercased by
//! [`CaseInsensitiveJson`](crate::extract::CaseInsensitiveJson), responses are
//! written with PascalCase keys.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod product;

pub use product::Product;

/// Request for product creation
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Request replacing every field of an existing product.
///
/// Absent fields take their default value, so a missing or nil id always
/// reaches the handler's id check.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", default)]
pub struct UpdateProductRequest {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Response for product operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}
