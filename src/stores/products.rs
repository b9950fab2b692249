//! Product catalog storage.
//!
//! Keyed by product name. Stock only ever moves through [`ProductsStore::take`],
//! which never lets the count go below zero.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

#[derive(Default)]
pub struct ProductsStore {
    products: HashMap<String, Product>,
}

impl ProductsStore {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Checks that `product` could be inserted: non-negative price, unused name.
    pub fn check_new(&self, product: &Product) -> Result<(), Error> {
        if product.price < Decimal::ZERO {
            return Err(Error::InvalidPrice(product.price.to_string()));
        }
        if self.products.contains_key(&product.name) {
            return Err(Error::DuplicateProduct(product.name.clone()));
        }
        Ok(())
    }

    /// Adds a product to the catalog.
    /// Returns an error if the name is taken or the price is negative.
    pub fn insert(&mut self, product: Product) -> Result<(), Error> {
        self.check_new(&product)?;
        self.products.insert(product.name.clone(), product);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Product, Error> {
        self.products
            .get(name)
            .ok_or_else(|| Error::ProductNotFound(name.to_owned()))
    }

    /// Removes `quantity` units from stock.
    /// `already_held` is what the caller is giving back in the same step, so the
    /// check is against `stock + already_held`. Nothing changes on error.
    pub fn take(&mut self, name: &str, quantity: u32, already_held: u32) -> Result<(), Error> {
        let product = self
            .products
            .get_mut(name)
            .ok_or_else(|| Error::ProductNotFound(name.to_owned()))?;
        let available = product.quantity.saturating_add(already_held);
        if quantity > available {
            return Err(Error::InsufficientStock {
                product: name.to_owned(),
                requested: quantity,
                available,
            });
        }
        product.quantity = available - quantity;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}
