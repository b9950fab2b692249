//! Shared, thread-safe handle to an [`Inventory`].
//!
//! A single `RwLock` covers both products and customers, so every mutation runs
//! its whole read-check-write sequence in one exclusive section and readers
//! never see a half-applied change. Reads hand back owned snapshots.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::stores::{OrderLine, Product, Purchase};
use crate::{Error, Inventory};

#[derive(Clone, Default)]
pub struct Shop {
    inner: Arc<RwLock<Inventory>>,
}

impl Shop {
    pub fn new() -> Self {
        Self::from_inventory(Inventory::new())
    }

    pub fn from_inventory(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inventory>, Error> {
        self.inner.read().map_err(|_| Error::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inventory>, Error> {
        self.inner.write().map_err(|_| Error::LockPoisoned("write"))
    }

    pub fn add_product(&self, product: Product) -> Result<(), Error> {
        self.write()?.add_product(product)
    }

    pub fn add_customer(&self, name: &str, email: &str) -> Result<(), Error> {
        self.write()?.add_customer(name, email)
    }

    pub fn add_products(&self, products: Vec<Product>) -> Result<(), Error> {
        self.write()?.add_products(products)
    }

    pub fn add_customers(&self, customers: Vec<(String, String)>) -> Result<(), Error> {
        self.write()?.add_customers(customers)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, Error> {
        Ok(self.read()?.list_products())
    }

    pub fn get_product(&self, name: &str) -> Result<Product, Error> {
        self.read()?.get_product(name)
    }

    pub fn add_to_cart(&self, email: &str, product: &str, quantity: u32) -> Result<(), Error> {
        self.write()?.add_to_cart(email, product, quantity)
    }

    pub fn view_cart(&self, email: &str) -> Result<Vec<OrderLine>, Error> {
        self.read()?.view_cart(email)
    }

    pub fn checkout(&self, email: &str) -> Result<Option<Purchase>, Error> {
        self.write()?.checkout(email)
    }

    pub fn order_history(&self, email: &str) -> Result<Vec<Purchase>, Error> {
        self.read()?.order_history(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::thread;

    fn shop_with_customers(stock: u32, customers: usize) -> Shop {
        let shop = Shop::new();
        shop.add_product(Product::new("Widget", dec!(9.99), stock))
            .unwrap();
        for i in 0..customers {
            shop.add_customer(&format!("Customer {i}"), &format!("c{i}@example.com"))
                .unwrap();
        }
        shop
    }

    #[test]
    fn test_clones_share_state() {
        let shop = shop_with_customers(10, 1);
        let other = shop.clone();

        other.add_to_cart("c0@example.com", "Widget", 4).unwrap();
        assert_eq!(shop.get_product("Widget").unwrap().quantity, 6);
        assert_eq!(shop.view_cart("c0@example.com").unwrap().len(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shop = shop_with_customers(10, 1);
        let holder = shop.clone();
        let panicked = thread::spawn(move || {
            let _guard = holder.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(panicked.is_err());

        assert_eq!(shop.get_product("Widget"), Err(Error::LockPoisoned("read")));
        assert_eq!(
            shop.add_to_cart("c0@example.com", "Widget", 1),
            Err(Error::LockPoisoned("write"))
        );
    }

    #[test]
    fn test_concurrent_reservations_never_oversell() {
        // 16 customers each want 3 of 20 in stock: at most 6 can win
        let shop = shop_with_customers(20, 16);

        let results: Vec<Result<(), Error>> = thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let shop = shop.clone();
                    s.spawn(move || shop.add_to_cart(&format!("c{i}@example.com"), "Widget", 3))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        let rejected = results
            .iter()
            .filter(|r| matches!(r, Err(Error::InsufficientStock { .. })))
            .count();
        assert_eq!(succeeded, 6);
        assert_eq!(rejected, 10);
        assert_eq!(shop.get_product("Widget").unwrap().quantity, 2);

        let reserved: u32 = (0..16)
            .flat_map(|i| shop.view_cart(&format!("c{i}@example.com")).unwrap())
            .map(|line| line.quantity)
            .sum();
        assert_eq!(reserved, 18);
    }

    #[test]
    fn test_concurrent_exact_fit_exhausts_stock() {
        let shop = shop_with_customers(8, 8);

        thread::scope(|s| {
            for i in 0..8 {
                let shop = shop.clone();
                s.spawn(move || {
                    shop.add_to_cart(&format!("c{i}@example.com"), "Widget", 1)
                        .unwrap();
                    shop.checkout(&format!("c{i}@example.com")).unwrap();
                });
            }
        });

        assert_eq!(shop.get_product("Widget").unwrap().quantity, 0);
        for i in 0..8 {
            let email = format!("c{i}@example.com");
            assert!(shop.view_cart(&email).unwrap().is_empty());
            assert_eq!(shop.order_history(&email).unwrap().len(), 1);
        }
    }

    #[test]
    fn test_readers_never_see_partial_reservation() {
        let shop = shop_with_customers(1_000, 1);

        thread::scope(|s| {
            let writer = shop.clone();
            s.spawn(move || {
                for _ in 0..500 {
                    writer.add_to_cart("c0@example.com", "Widget", 1).unwrap();
                    writer.checkout("c0@example.com").unwrap();
                }
            });

            let reader = shop.clone();
            s.spawn(move || {
                for _ in 0..500 {
                    let guard = reader.read().unwrap();
                    let stock = guard.get_product("Widget").unwrap().quantity;
                    let in_cart: u32 = guard
                        .view_cart("c0@example.com")
                        .unwrap()
                        .iter()
                        .map(|l| l.quantity)
                        .sum();
                    let bought: u32 = guard
                        .order_history("c0@example.com")
                        .unwrap()
                        .iter()
                        .flat_map(|p| p.lines.iter())
                        .map(|l| l.quantity)
                        .sum();
                    assert_eq!(stock + in_cart + bought, 1_000);
                }
            });
        });
    }
}
