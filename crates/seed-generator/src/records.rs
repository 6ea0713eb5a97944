//! Food-delivery domain records.
//!
//! Each record serializes to the BSON document stored in its collection. Dates use
//! native BSON datetimes and references use native ObjectIds.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed restaurant category vocabulary.
pub const CATEGORIES: &[&str] = &[
    "italian",
    "mexican",
    "japanese",
    "cafe",
    "desserts",
    "fast food",
];

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub location: Location,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    pub location: Location,
    pub average_rating: f64,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub restaurant_id: ObjectId,
    pub available: bool,
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of an order. The unit price is captured when the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: ObjectId,
    pub quantity: i32,
    pub unit_price: f64,
}

impl OrderLine {
    /// Price times quantity, unrounded.
    pub fn extension(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub user_id: ObjectId,
    pub restaurant_id: ObjectId,
    #[serde(rename = "items")]
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total: f64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub ordered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user_id: ObjectId,
    pub restaurant_id: ObjectId,
    pub order_id: ObjectId,
    pub rating: i32,
    pub comment: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub reviewed_at: DateTime<Utc>,
}

/// The subset of a persisted order that reviews are generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: ObjectId,
    pub user_id: ObjectId,
    pub restaurant_id: ObjectId,
    pub ordered_at: DateTime<Utc>,
}

impl OrderSummary {
    pub fn new(order_id: ObjectId, order: &Order) -> Self {
        Self {
            order_id,
            user_id: order.user_id,
            restaurant_id: order.restaurant_id,
            ordered_at: order.ordered_at,
        }
    }
}
