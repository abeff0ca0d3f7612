//! In-memory product repository used by the handler tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use common::error::DatabaseResult;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ProductRepository;
use crate::models::Product;

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<Uuid, Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> DatabaseResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> DatabaseResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn add(&self, product: &Product) -> DatabaseResult<()> {
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> DatabaseResult<()> {
        if let Some(stored) = self.products.write().await.get_mut(&product.id) {
            *stored = product.clone();
        }
        Ok(())
    }

    async fn delete(&self, product: &Product) -> DatabaseResult<()> {
        self.products.write().await.remove(&product.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product(name: &str) -> Product {
        Product {
            id: Uuid::now_v7(),
            name: name.to_string(),
            description: String::new(),
            quantity: 1,
            price: Decimal::ONE,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_reads_are_detached_copies() {
        let repository = InMemoryProductRepository::default();
        let original = product("Widget");
        repository.add(&original).await.unwrap();

        let mut copy = repository.get_by_id(original.id).await.unwrap().unwrap();
        copy.name = "Changed".to_string();

        let stored = repository.get_by_id(original.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Widget");
    }

    #[tokio::test]
    async fn test_update_of_missing_product_inserts_nothing() {
        let repository = InMemoryProductRepository::default();

        repository.update(&product("Ghost")).await.unwrap();

        assert!(repository.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_id() {
        let repository = InMemoryProductRepository::default();
        let first = product("First");
        let second = product("Second");
        repository.add(&second).await.unwrap();
        repository.add(&first).await.unwrap();

        let ids: Vec<Uuid> = repository
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 2);
    }
}
