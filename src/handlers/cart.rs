// src/handlers/cart.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::dtos::cart::{CartItemRequest, CartItemResponse};
use crate::dtos::common::MessageResponse;
use crate::error::AppError;
use crate::handlers::parse_id;
use crate::managers::cart;
use crate::state::AppState;
use crate::validation::ValidatedJson;

#[instrument(skip(state))]
pub async fn list_cart(
    State(state): State<AppState>,
) -> Result<Json<Vec<CartItemResponse>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let items = cart::list_items(&mut conn).await?;

    Ok(Json(items.into_iter().map(CartItemResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CartItemRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let id = cart::add_item(&mut conn, &payload).await?;
    info!(id, product_id = payload.product_id, quantity = payload.quantity, "Cart item added");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("Product added to cart", id)),
    ))
}

#[instrument(skip(state))]
pub async fn remove_from_cart(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::not_found(cart::NOT_FOUND))?;
    let mut conn = state.db_pool.acquire().await?;
    cart::remove_item(&mut conn, id).await?;
    info!(id, "Cart item removed");

    Ok(Json(MessageResponse::new("Item removed from cart")))
}
