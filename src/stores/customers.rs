//! Customer records keyed by email.
//!
//! Each customer owns a cart of reservations and a history of completed
//! purchases. The cart is ordered by product name so that viewing it is
//! deterministic.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::Error;

/// A single (product, quantity) pair, as shown when listing a cart or a purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product: String,
    pub quantity: u32,
}

/// A completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    /// Reserved quantity per product name.
    pub cart: BTreeMap<String, u32>,
    pub orders: Vec<Purchase>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cart: BTreeMap::new(),
            orders: Vec::new(),
        }
    }

    /// Quantity currently reserved for `product`, 0 if none.
    pub fn reserved(&self, product: &str) -> u32 {
        self.cart.get(product).copied().unwrap_or(0)
    }

    pub fn cart_lines(&self) -> Vec<OrderLine> {
        self.cart
            .iter()
            .map(|(product, &quantity)| OrderLine {
                product: product.clone(),
                quantity,
            })
            .collect()
    }
}

#[derive(Default)]
pub struct CustomersStore {
    customers: HashMap<String, Customer>,
}

impl CustomersStore {
    pub fn new() -> Self {
        Self {
            customers: HashMap::new(),
        }
    }

    /// Registers a customer.
    /// Returns an error if another customer already uses the same email.
    pub fn insert(&mut self, customer: Customer) -> Result<(), Error> {
        self.check_new(&customer.email)?;
        self.customers.insert(customer.email.clone(), customer);
        Ok(())
    }

    pub fn check_new(&self, email: &str) -> Result<(), Error> {
        if self.customers.contains_key(email) {
            return Err(Error::DuplicateCustomer(email.to_owned()));
        }
        Ok(())
    }

    pub fn get(&self, email: &str) -> Result<&Customer, Error> {
        self.customers
            .get(email)
            .ok_or_else(|| Error::CustomerNotFound(email.to_owned()))
    }

    pub fn get_mut(&mut self, email: &str) -> Result<&mut Customer, Error> {
        self.customers
            .get_mut(email)
            .ok_or_else(|| Error::CustomerNotFound(email.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = CustomersStore::new();
        store
            .insert(Customer::new("Ada", "ada@example.com"))
            .unwrap();

        let customer = store.get("ada@example.com").unwrap();
        assert_eq!(customer.name, "Ada");
        assert!(customer.cart.is_empty());
        assert!(customer.orders.is_empty());
    }

    #[test]
    fn test_get_unknown_customer() {
        let mut store = CustomersStore::new();
        assert_eq!(
            store.get("nobody@example.com").unwrap_err(),
            Error::CustomerNotFound("nobody@example.com".into())
        );
        assert!(matches!(
            store.get_mut("nobody@example.com"),
            Err(Error::CustomerNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_email_is_rejected() {
        let mut store = CustomersStore::new();
        store
            .insert(Customer::new("Ada", "ada@example.com"))
            .unwrap();

        let result = store.insert(Customer::new("Impostor", "ada@example.com"));
        assert_eq!(
            result,
            Err(Error::DuplicateCustomer("ada@example.com".into()))
        );
        assert_eq!(store.get("ada@example.com").unwrap().name, "Ada");
    }

    #[test]
    fn test_cart_lines_are_sorted_by_product() {
        let mut customer = Customer::new("Ada", "ada@example.com");
        customer.cart.insert("Widget".into(), 3);
        customer.cart.insert("Anvil".into(), 1);

        assert_eq!(
            customer.cart_lines(),
            vec![
                OrderLine {
                    product: "Anvil".into(),
                    quantity: 1
                },
                OrderLine {
                    product: "Widget".into(),
                    quantity: 3
                },
            ]
        );
        assert_eq!(customer.reserved("Widget"), 3);
        assert_eq!(customer.reserved("Gadget"), 0);
    }
}
