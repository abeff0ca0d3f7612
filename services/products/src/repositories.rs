//! Repositories for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;
use uuid::Uuid;

use crate::models::Product;

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Persistence operations on products.
///
/// Returned products are detached copies; mutating them has no effect on the
/// store until they are passed back to [`ProductRepository::update`].
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get every product, ordered by id
    async fn list_all(&self) -> DatabaseResult<Vec<Product>>;

    /// Get a product by ID, `None` when no row matches
    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Product>>;

    /// Insert a new product
    async fn add(&self, product: &Product) -> DatabaseResult<()>;

    /// Replace every non-key column of the product with the same id.
    /// Does nothing when no row matches.
    async fn update(&self, product: &Product) -> DatabaseResult<()>;

    /// Delete the product with the same id. Does nothing when no row matches.
    async fn delete(&self, product: &Product) -> DatabaseResult<()>;
}
