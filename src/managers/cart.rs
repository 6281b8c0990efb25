// src/managers/cart.rs
use sqlx::SqliteConnection;

use crate::dtos::cart::CartItemRequest;
use crate::error::AppError;
use crate::models::cart_item::CartItem;

pub const NOT_FOUND: &str = "Item not found";

pub async fn list_items(conn: &mut SqliteConnection) -> Result<Vec<CartItem>, AppError> {
    let items = sqlx::query_as::<_, CartItem>(
        "SELECT id, product_id, quantity FROM cart_items ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(items)
}

/// The product id is stored as given; it is not looked up in the catalog.
pub async fn add_item(
    conn: &mut SqliteConnection,
    fields: &CartItemRequest,
) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO cart_items (product_id, quantity) VALUES (?, ?)")
        .bind(fields.product_id)
        .bind(fields.quantity)
        .execute(&mut *conn)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn remove_item(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(())
}
