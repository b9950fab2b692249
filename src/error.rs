//! Domain-specific errors for the catalog-and-cart store.
//!
//! Contains error variants for common failure cases like:
//! - Lookup errors (unknown product, unknown customer)
//! - Reservation errors (zero quantity, not enough stock)
//! - Catalog errors (duplicate keys, negative price)
//!
//! These errors represent business logic failures rather than
//! technical errors like I/O or parsing issues. The only exception is
//! [`Error::LockPoisoned`], raised by the shared [`crate::Shop`] handle.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    #[error("insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    #[error("quantity must be positive")]
    InvalidQuantity,

    #[error("price must not be negative: {0}")]
    InvalidPrice(String),

    #[error("product already exists: {0}")]
    DuplicateProduct(String),

    #[error("customer already exists: {0}")]
    DuplicateCustomer(String),

    #[error("store lock poisoned ({0})")]
    LockPoisoned(&'static str),
}
