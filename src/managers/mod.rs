//! Storage mapping for each entity type.
//!
//! Every operation takes the request's own connection and issues exactly
//! one statement, committed immediately.

pub mod catalog;
pub mod cart;
