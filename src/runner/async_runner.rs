use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::path::Path;

use super::{apply_order, write_stock_report, Result};
use crate::{
    config::Config,
    dto::{Order, OrderRow},
    loader, Shop,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{info, warn};

const BUFFER_SIZE: usize = 1024;

/// Loads the shop and replays the orders file with concurrent customer sessions.
/// Spawns:
/// * CSV reader - streams orders from the input file and routes each to a worker by customer email.
/// * `config.workers` workers - apply their orders to the shared shop until their channel closes.
///
/// Orders of one customer always land on the same worker, so they are applied in file
/// order. Orders of different customers interleave freely.
///
/// # Arguments
/// * `config` - Paths to the products, customers and orders CSV files, plus the worker count
/// * `writer` - Where to write the stock report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * An input file cannot be read
/// * A CSV file is malformed, or the catalog has duplicate keys
/// * Writing to the output fails
pub async fn run<W: Write>(config: &Config, writer: W) -> Result<()> {
    let shop = loader::load(config)?;
    let applied = replay_orders(&shop, config).await?;
    info!(applied, "orders replayed");
    write_stock_report(&shop, writer)
}

/// Streams the orders file through `config.workers` worker tasks sharing `shop`.
/// Returns how many orders the workers applied; rows that fail validation are skipped.
async fn replay_orders(shop: &Shop, config: &Config) -> Result<usize> {
    let (senders, workers): (Vec<_>, Vec<_>) = (0..config.workers.max(1))
        .map(|_| {
            let (tx, rx) = mpsc::channel(BUFFER_SIZE);
            (tx, tokio::spawn(process_orders(shop.clone(), rx)))
        })
        .unzip();

    let reader_handle = tokio::spawn(read_orders(config.orders.clone(), senders));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    let mut applied = 0;
    for worker in workers {
        applied += worker.await?;
    }
    Ok(applied)
}

/// Index of the worker responsible for `email`.
fn worker_for(email: &str, workers: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    email.hash(&mut hasher);
    (hasher.finish() % workers as u64) as usize
}

/// Reads and validates orders from a CSV file.
/// Sends each one to its customer's worker; dropping `senders` on return closes the workers.
async fn read_orders(
    input_path: impl AsRef<Path> + Send,
    senders: Vec<mpsc::Sender<Order>>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<OrderRow>();
    while let Some(result) = records.next().await {
        // CSV parsing errors are critical - propagate them
        let order = match Order::try_from(result?) {
            Ok(order) => order,
            Err(err) => {
                warn!(error = %err, "skipping order");
                continue;
            }
        };
        let worker = worker_for(order.email(), senders.len());
        if senders[worker].send(order).await.is_err() {
            // Worker dropped, exit gracefully
            break;
        }
    }
    Ok(())
}

/// Applies orders received through the channel until the reader closes it.
/// Returns how many orders this worker applied.
async fn process_orders(shop: Shop, mut rx: mpsc::Receiver<Order>) -> usize {
    let mut applied = 0;
    while let Some(order) = rx.recv().await {
        apply_order(&shop, order);
        applied += 1;
    }
    applied
}
