use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::stores::{Customer, CustomersStore, OrderLine, Product, ProductsStore, Purchase};
use crate::Error;

/// Products and customers plus the cart/checkout rules that keep them consistent.
///
/// Every mutation validates fully before touching any state, so an `Err` always
/// means nothing changed. `Inventory` itself is not synchronized; share it
/// through [`crate::Shop`].
#[derive(Default)]
pub struct Inventory {
    products: ProductsStore,
    customers: CustomersStore,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: ProductsStore::new(),
            customers: CustomersStore::new(),
        }
    }

    pub fn add_product(&mut self, product: Product) -> Result<(), Error> {
        self.products.insert(product)
    }

    pub fn add_customer(&mut self, name: &str, email: &str) -> Result<(), Error> {
        self.customers.insert(Customer::new(name, email))
    }

    /// Adds a batch of products, or none of them.
    /// Names must be new to the catalog and unique within the batch.
    pub fn add_products(&mut self, products: Vec<Product>) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for product in &products {
            self.products.check_new(product)?;
            if !seen.insert(product.name.as_str()) {
                return Err(Error::DuplicateProduct(product.name.clone()));
            }
        }
        for product in products {
            self.products.insert(product)?;
        }
        Ok(())
    }

    /// Registers a batch of `(name, email)` customers, or none of them.
    pub fn add_customers(&mut self, customers: Vec<(String, String)>) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for (_, email) in &customers {
            self.customers.check_new(email)?;
            if !seen.insert(email.as_str()) {
                return Err(Error::DuplicateCustomer(email.clone()));
            }
        }
        for (name, email) in customers {
            self.customers.insert(Customer::new(name, email))?;
        }
        Ok(())
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.products.iter().cloned().collect()
    }

    pub fn get_product(&self, name: &str) -> Result<Product, Error> {
        self.products.get(name).cloned()
    }

    /// Reserves `quantity` units of `product` for the customer.
    ///
    /// The cart entry is overwritten, not accumulated. Whatever the customer had
    /// reserved for the same product before goes back to stock first, so the
    /// request is checked against `stock + previous reservation`.
    pub fn add_to_cart(&mut self, email: &str, product: &str, quantity: u32) -> Result<(), Error> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }
        let customer = self.customers.get_mut(email)?;
        let previous = customer.reserved(product);

        // Fails without side effects on unknown product or short stock
        self.products.take(product, quantity, previous)?;
        customer.cart.insert(product.to_owned(), quantity);
        Ok(())
    }

    pub fn view_cart(&self, email: &str) -> Result<Vec<OrderLine>, Error> {
        Ok(self.customers.get(email)?.cart_lines())
    }

    /// Turns the customer's reservations into a purchase and empties the cart.
    ///
    /// Stock was already taken when the items were reserved, so it is not
    /// checked or changed here. Returns `None` when the cart is empty.
    pub fn checkout(&mut self, email: &str) -> Result<Option<Purchase>, Error> {
        let customer = self.customers.get_mut(email)?;
        if customer.cart.is_empty() {
            return Ok(None);
        }

        let lines = customer.cart_lines();
        let total: Decimal = lines
            .iter()
            .map(|line| {
                // A line for a product no longer in the catalog is priced at zero
                let price = self
                    .products
                    .get(&line.product)
                    .map_or(Decimal::ZERO, |p| p.price);
                price * Decimal::from(line.quantity)
            })
            .sum();

        let purchase = Purchase { lines, total };
        customer.orders.push(purchase.clone());
        customer.cart.clear();
        Ok(Some(purchase))
    }

    pub fn order_history(&self, email: &str) -> Result<Vec<Purchase>, Error> {
        Ok(self.customers.get(email)?.orders.clone())
    }
}
