//! Storage layer for the catalog-and-cart store. Provides storage for:
//! - Products and their remaining stock ([`ProductsStore`])
//! - Customers with their carts and purchase history ([`CustomersStore`])
//!
//! Stores are plain, unsynchronized maps. Locking is the job of
//! [`crate::Shop`].

mod customers;
mod products;

pub use customers::{Customer, CustomersStore, OrderLine, Purchase};
pub use products::{Product, ProductsStore};
