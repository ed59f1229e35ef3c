//! Product catalogue.
//!
//! Every product references the vendor that supplies it.

pub mod product;

pub use product::{NewProduct, Product, ProductId};
