//! Products service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    extract::CaseInsensitiveJson,
    models::{CreateProductRequest, ProductResponse, UpdateProductRequest},
    state::AppState,
};

/// Create the router for the products service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/products",
            get(get_products).post(create_product).put(update_product),
        )
        .route("/products/:id", get(get_product).delete(delete_product))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "products-service"
    }))
}

/// Get all products
#[utoipa::path(
    get,
    path = "/products",
    responses((status = 200, description = "All products", body = [ProductResponse])),
    tag = "products"
)]
pub async fn get_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state.product_repository.list_all().await?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProductResponse>> {
    let product = state
        .product_repository
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(ProductResponse::from(&product)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created, body holds the new id", body = String,
            headers(("Location" = String, description = "URI of the created product")))
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    CaseInsensitiveJson(payload): CaseInsensitiveJson<CreateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    let product = payload.into_entity();

    state.product_repository.add(&product).await?;
    info!("Created product {}", product.id);

    let location = product_location(&headers, product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product.id),
    ))
}

/// Absolute URI of a product, built from the request's `Host` header.
/// Falls back to a relative path when the request carries no host.
fn product_location(headers: &HeaderMap, id: Uuid) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty());

    match host {
        Some(host) => {
            let scheme = headers
                .get("x-forwarded-proto")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("http");
            format!("{}://{}/products/{}", scheme, host, id)
        }
        None => format!("/products/{}", id),
    }
}

/// Replace every field of an existing product except its creation time
#[utoipa::path(
    put,
    path = "/products",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = String),
        (status = 400, description = "Product Id is required"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    CaseInsensitiveJson(payload): CaseInsensitiveJson<UpdateProductRequest>,
) -> ApiResult<Json<&'static str>> {
    if payload.id.is_nil() {
        return Err(ApiError::Validation("Product Id is required"));
    }

    // The repository update is a no-op for unknown ids, so check first
    let existing = state
        .product_repository
        .get_by_id(payload.id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let product = payload.into_entity(&existing);
    state.product_repository.update(&product).await?;
    info!("Updated product {}", product.id);

    Ok(Json("Update Successful"))
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let product = state
        .product_repository
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    state.product_repository.delete(&product).await?;
    info!("Deleted product {}", product.id);

    Ok(StatusCode::NO_CONTENT)
}
