pub mod product;
pub mod cart_item;
