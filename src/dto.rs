use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stores::Product;

/// Catalog row, used both for loading products and for the stock report.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductRow {
    pub name: String,
    #[serde(deserialize_with = "deserialize_price_2dp")]
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomerRow {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Add,
    Checkout,
}

/// One line of an orders file. `product` and `quantity` are empty for checkouts.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderRow {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub email: String,
    pub product: Option<String>,
    pub quantity: Option<u32>,
}

/// Why an orders-file row could not be turned into an [`Order`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("add for {0} without product")]
    MissingProduct(String),
    #[error("add for {0} without quantity")]
    MissingQuantity(String),
}

/// A validated order, ready to be applied to a [`crate::Shop`].
#[derive(Debug, PartialEq)]
pub enum Order {
    AddToCart {
        email: String,
        product: String,
        quantity: u32,
    },
    Checkout {
        email: String,
    },
}

impl Order {
    pub fn email(&self) -> &str {
        match self {
            Order::AddToCart { email, .. } | Order::Checkout { email } => email,
        }
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = OrderError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        match row.order_type {
            OrderType::Add => {
                let product = row
                    .product
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| OrderError::MissingProduct(row.email.clone()))?;
                let quantity = row
                    .quantity
                    .ok_or_else(|| OrderError::MissingQuantity(row.email.clone()))?;
                Ok(Order::AddToCart {
                    email: row.email,
                    product,
                    quantity,
                })
            }
            OrderType::Checkout => Ok(Order::Checkout { email: row.email }),
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(row.name, row.price, row.quantity)
    }
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        ProductRow {
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }
}

fn deserialize_price_2dp<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer)
        .map(|price| price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
