//! Bootstraps a [`Shop`] from catalog and customer CSV files.
//!
//! Loading is all-or-nothing per file: a malformed row or a duplicate key
//! aborts with an error instead of being skipped.

use std::error::Error;
use std::path::Path;
use tracing::info;

use crate::{
    config::Config,
    csv_utils::read_csv,
    dto::{CustomerRow, ProductRow},
    Product, Shop,
};

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Adds every product in `path` to the shop. Returns how many were loaded.
/// The whole file is parsed before anything is inserted.
pub fn load_products<P: AsRef<Path>>(shop: &Shop, path: P) -> Result<usize> {
    let products = read_csv::<ProductRow, _>(&path)?
        .map(|row| row.map(Product::from))
        .collect::<csv::Result<Vec<_>>>()?;
    let count = products.len();
    shop.add_products(products)?;
    info!(count, path = %path.as_ref().display(), "loaded products");
    Ok(count)
}

/// Registers every customer in `path` with an empty cart. Returns how many were loaded.
pub fn load_customers<P: AsRef<Path>>(shop: &Shop, path: P) -> Result<usize> {
    let customers = read_csv::<CustomerRow, _>(&path)?
        .map(|row| row.map(|CustomerRow { name, email }| (name, email)))
        .collect::<csv::Result<Vec<_>>>()?;
    let count = customers.len();
    shop.add_customers(customers)?;
    info!(count, path = %path.as_ref().display(), "loaded customers");
    Ok(count)
}

/// Builds a fresh shop from the catalog and customer files named in `config`.
pub fn load(config: &Config) -> Result<Shop> {
    let shop = Shop::new();
    load_products(&shop, &config.products)?;
    load_customers(&shop, &config.customers)?;
    Ok(shop)
}
