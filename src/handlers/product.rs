// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::dtos::common::MessageResponse;
use crate::dtos::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::handlers::parse_id;
use crate::managers::catalog;
use crate::state::AppState;
use crate::validation::ValidatedJson;

fn product_id(raw: &str) -> Result<i64, AppError> {
    parse_id(raw).ok_or_else(|| AppError::not_found(catalog::NOT_FOUND))
}

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let products = catalog::list_products(&mut conn).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = product_id(&id)?;
    let mut conn = state.db_pool.acquire().await?;
    let product = catalog::get_product(&mut conn, id).await?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let id = catalog::create_product(&mut conn, &payload).await?;
    info!(id, name = %payload.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("Product created", id)),
    ))
}

// PUT /products/{id} - Replace product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = product_id(&id)?;
    let mut conn = state.db_pool.acquire().await?;
    let id = catalog::update_product(&mut conn, id, &payload).await?;

    Ok(Json(MessageResponse::with_id("Product updated", id)))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = product_id(&id)?;
    let mut conn = state.db_pool.acquire().await?;
    catalog::delete_product(&mut conn, id).await?;
    info!(id, "Product deleted");

    Ok(Json(MessageResponse::new("Product deleted")))
}
