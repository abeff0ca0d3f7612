//! OpenAPI document for the product routes

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::{
    models::{CreateProductRequest, ProductResponse, UpdateProductRequest},
    routes,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::get_products,
        routes::get_product,
        routes::create_product,
        routes::update_product,
        routes::delete_product
    ),
    components(schemas(CreateProductRequest, UpdateProductRequest, ProductResponse)),
    tags((name = "products", description = "Product management"))
)]
pub struct ApiDoc;

/// Router serving the document at `/openapi.json`
pub fn router() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
