use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfilment status of an order.
///
/// The string forms are the wire values the frontend and admin panel already
/// use. Status is set directly by admin endpoints with no transition table;
/// the one customer-driven change is `Completed` → `ReturnInitiated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Return Initiated")]
    ReturnInitiated,
    #[serde(rename = "Return")]
    Returned,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::ReturnInitiated => "Return Initiated",
            OrderStatus::Returned => "Return",
        };
        f.write_str(s)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "In Progress" => Ok(OrderStatus::InProgress),
            "Completed" => Ok(OrderStatus::Completed),
            "Return Initiated" => Ok(OrderStatus::ReturnInitiated),
            "Return" => Ok(OrderStatus::Returned),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }
}

/// Snapshot of one cart row at checkout time. Copied into the order so later
/// catalog edits don't rewrite order history.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

/// Represents a customer order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub payment_intent_id: String,
    pub shipping_address: String,
    pub parcel_shop_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for persisting a new order after checkout orchestration.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub payment_intent_id: String,
    pub shipping_address: String,
    pub parcel_shop_id: Option<String>,
}
