//! Conversions between the API payloads and the product entity

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateProductRequest, Product, ProductResponse, UpdateProductRequest};

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity,
            price: product.price,
        }
    }
}

impl CreateProductRequest {
    /// Build a new entity with a fresh time-ordered id, stamped with the current time
    pub fn into_entity(self) -> Product {
        Product {
            id: Uuid::now_v7(),
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            created_at: Utc::now(),
        }
    }
}

impl UpdateProductRequest {
    /// Build the replacement entity for `existing`.
    ///
    /// Every field comes from the request except `created_at`, which is
    /// carried over from the stored product.
    pub fn into_entity(self, existing: &Product) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            created_at: existing.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    fn widget_request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            quantity: 5,
            price: Decimal::new(999, 2),
        }
    }

    #[test]
    fn test_create_request_assigns_id_and_timestamp() {
        let before = Utc::now();
        let product = widget_request().into_entity();

        assert!(!product.id.is_nil());
        assert_eq!(product.id.get_version_num(), 7);
        assert!(product.created_at >= before);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.price, Decimal::new(999, 2));
    }

    #[test]
    fn test_create_request_generates_distinct_ids() {
        let first = widget_request().into_entity();
        let second = widget_request().into_entity();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_request_preserves_created_at() {
        let created_at = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        let existing = Product {
            id: Uuid::now_v7(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            quantity: 5,
            price: Decimal::new(999, 2),
            created_at,
        };

        let request = UpdateProductRequest {
            id: existing.id,
            name: "Gadget".to_string(),
            description: "A gadget".to_string(),
            quantity: 12,
            price: Decimal::new(2450, 2),
        };

        let updated = request.into_entity(&existing);

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.description, "A gadget");
        assert_eq!(updated.quantity, 12);
        assert_eq!(updated.price, Decimal::new(2450, 2));
        assert_eq!(updated.created_at, created_at);
        assert!(updated.created_at < Utc::now() - Duration::days(1));
    }

    #[test]
    fn test_response_omits_created_at() {
        let product = widget_request().into_entity();
        let response = ProductResponse::from(&product);

        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert!(!object.contains_key("CreatedAt"));
        assert_eq!(json["Id"], serde_json::json!(product.id.to_string()));
        assert_eq!(json["Name"], "Widget");
        assert_eq!(json["Quantity"], 5);
        assert_eq!(json["Price"], serde_json::json!(9.99));
    }
}
