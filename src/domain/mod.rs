//! Domain types for the products service.

pub mod product;

pub use product::Product;
