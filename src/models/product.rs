use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}
