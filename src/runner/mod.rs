//! The runner loads a shop from the catalog and customer files, replays an
//! orders file against it, and writes the final stock report to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementation.
//! Rejected orders are logged and skipped; file and CSV errors abort the run.
//!
mod async_runner;
mod sync_runner;

use std::error::Error;
use std::io::Write;
use tracing::{debug, warn};

use crate::{csv_utils::write_csv, dto::Order, dto::ProductRow, Shop};

pub use async_runner::run as run_async;
pub use sync_runner::run;

pub(crate) type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Applies one order to the shop, logging the outcome.
/// Domain errors are reported here and never abort the run.
pub(crate) fn apply_order(shop: &Shop, order: Order) {
    let outcome = match &order {
        Order::AddToCart {
            email,
            product,
            quantity,
        } => shop.add_to_cart(email, product, *quantity).map(|()| {
            debug!(%email, %product, quantity, "reserved");
        }),
        Order::Checkout { email } => shop.checkout(email).map(|purchase| match purchase {
            Some(purchase) => debug!(
                %email,
                total = %purchase.total,
                lines = purchase.lines.len(),
                "checked out"
            ),
            None => debug!(%email, "checkout with empty cart"),
        }),
    };
    if let Err(err) = outcome {
        warn!(email = order.email(), error = %err, "order rejected");
    }
}

/// Writes `name,price,quantity` for every product, sorted by name.
pub(crate) fn write_stock_report<W: Write>(shop: &Shop, writer: W) -> Result<()> {
    let mut rows: Vec<ProductRow> = shop
        .list_products()?
        .iter()
        .map(ProductRow::from)
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    write_csv(writer, rows)?;
    Ok(())
}
