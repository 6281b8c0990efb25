use axum::{
    routing::{delete, get},
    Router,
};
use crate::handlers::cart::{add_to_cart, list_cart, remove_from_cart};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(list_cart).post(add_to_cart))
        .route("/cart/{id}", delete(remove_from_cart))
}
