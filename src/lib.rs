pub mod config;
mod csv_utils;
mod dto;
mod error;
mod inventory;
pub mod loader;
mod runner;
mod shop;
mod stores;
pub mod telemetry;

pub use config::Config;
pub use dto::{CustomerRow, Order, OrderError, OrderRow, OrderType, ProductRow};
pub use error::Error;
pub use inventory::Inventory;
pub use runner::{run, run_async};
pub use shop::Shop;
pub use stores::{Customer, OrderLine, Product, Purchase};
