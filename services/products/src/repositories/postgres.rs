//! PostgreSQL product repository

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::{PgPool, migrate::Migrator};
use tracing::debug;
use uuid::Uuid;

use super::ProductRepository;
use crate::models::Product;

/// Migrations creating the `products` table
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Product repository backed by PostgreSQL
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_all(&self) -> DatabaseResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, quantity, price, created_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Product>> {
        debug!("Finding product by ID: {}", id);

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, quantity, price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn add(&self, product: &Product) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, quantity, price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> DatabaseResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, quantity = $4, price = $5, created_at = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        debug!(
            "Updated product {} ({} row(s))",
            product.id,
            result.rows_affected()
        );
        Ok(())
    }

    async fn delete(&self, product: &Product) -> DatabaseResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        debug!(
            "Deleted product {} ({} row(s))",
            product.id,
            result.rows_affected()
        );
        Ok(())
    }
}
