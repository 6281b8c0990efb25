// src/managers/catalog.rs
use sqlx::SqliteConnection;

use crate::dtos::product::ProductRequest;
use crate::error::AppError;
use crate::models::product::Product;

pub const NOT_FOUND: &str = "Product not found";

pub async fn list_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image_url FROM products ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(products)
}

pub async fn get_product(conn: &mut SqliteConnection, id: i64) -> Result<Product, AppError> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image_url FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

/// Inserts a product and returns the id storage assigned to it.
pub async fn create_product(
    conn: &mut SqliteConnection,
    fields: &ProductRequest,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO products (name, description, price, image_url) VALUES (?, ?, ?, ?)",
    )
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(fields.price)
    .bind(&fields.image_url)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Full replace of all four fields.
pub async fn update_product(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &ProductRequest,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        "UPDATE products SET name = ?, description = ?, price = ?, image_url = ? WHERE id = ?",
    )
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(fields.price)
    .bind(&fields.image_url)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(id)
}

/// Cart items that point at the product are left untouched.
pub async fn delete_product(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;

    fn mug() -> ProductRequest {
        ProductRequest {
            name: "Mug".to_string(),
            description: "Blue mug".to_string(),
            price: 9.99,
            image_url: "http://x/m.png".to_string(),
        }
    }

    fn lamp() -> ProductRequest {
        ProductRequest {
            name: "Lamp".to_string(),
            description: String::new(),
            price: -3.0,
            image_url: "not a url".to_string(),
        }
    }

    fn same_fields(product: &Product, fields: &ProductRequest) -> bool {
        product.name == fields.name
            && product.description == fields.description
            && product.price == fields.price
            && product.image_url == fields.image_url
    }

    #[tokio::test]
    async fn list_is_empty_on_fresh_store() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        assert!(list_products(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let id = create_product(&mut conn, &mug()).await.unwrap();
        assert_eq!(id, 1);

        let product = get_product(&mut conn, id).await.unwrap();
        assert_eq!(product.id, id);
        assert!(same_fields(&product, &mug()));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let err = get_product(&mut conn, 99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == NOT_FOUND));
    }

    #[tokio::test]
    async fn list_returns_rows_in_id_order() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let first = create_product(&mut conn, &mug()).await.unwrap();
        let second = create_product(&mut conn, &lamp()).await.unwrap();

        let ids: Vec<i64> = list_products(&mut conn)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let id = create_product(&mut conn, &mug()).await.unwrap();
        assert_eq!(update_product(&mut conn, id, &lamp()).await.unwrap(), id);

        let product = get_product(&mut conn, id).await.unwrap();
        assert!(same_fields(&product, &lamp()));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let err = update_product(&mut conn, 7, &mug()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(list_products(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_row_and_second_delete_is_not_found() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let id = create_product(&mut conn, &mug()).await.unwrap();
        delete_product(&mut conn, id).await.unwrap();

        assert!(matches!(get_product(&mut conn, id).await, Err(AppError::NotFound(_))));
        assert!(matches!(delete_product(&mut conn, id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let id = create_product(&mut conn, &mug()).await.unwrap();
        delete_product(&mut conn, id).await.unwrap();

        let next = create_product(&mut conn, &mug()).await.unwrap();
        assert!(next > id);
    }
}
