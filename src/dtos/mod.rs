pub mod common;
pub mod product;
pub mod cart;
