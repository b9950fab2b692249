use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use super::{apply_order, write_stock_report, Result};
use crate::{
    config::Config,
    csv_utils::read_csv,
    dto::{Order, OrderRow},
    loader, Shop,
};

/// Loads the shop, replays the orders file in order and writes the stock report.
///
/// # Arguments
/// * `config` - Paths to the products, customers and orders CSV files
/// * `writer` - Where to write the stock report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * An input file cannot be read
/// * A CSV file is malformed, or the catalog has duplicate keys
/// * Writing to the output fails
pub fn run<W: Write>(config: &Config, writer: W) -> Result<()> {
    let shop = loader::load(config)?;
    let applied = replay_orders(&shop, &config.orders)?;
    info!(applied, "orders replayed");
    write_stock_report(&shop, writer)
}

/// Applies every valid order in `path` to the shop, in file order.
/// Returns how many orders were applied; rows that fail validation are skipped.
fn replay_orders(shop: &Shop, path: &Path) -> Result<usize> {
    let mut applied = 0;
    for row in read_csv::<OrderRow, _>(path)? {
        // CSV parsing errors are critical - propagate them
        match Order::try_from(row?) {
            Ok(order) => {
                apply_order(shop, order);
                applied += 1;
            }
            Err(err) => warn!(error = %err, "skipping order"),
        }
    }
    Ok(applied)
}
