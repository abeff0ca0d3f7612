//! Product entity as stored in the `products` table

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Product entity
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: Decimal,
    /// Set once when the product is created, never touched by updates
    pub created_at: DateTime<Utc>,
}
