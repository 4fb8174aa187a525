use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Scooter colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Black,
    Gray,
}

/// A scooter rental order, as posted to `POST /api/v1/orders`.
///
/// Every field is required by the wire contract; `color` may be empty (no colour
/// preference) and is always sent, as an empty array in that case.
///
/// See [`impl ResourceLifecycleClient for OrderClient`](crate::clients::OrderClient) for
/// how an order is created, resolved through its [`TrackNumber`] and finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub metro_station: String,
    pub phone: String,
    /// Rental length in days.
    pub rent_time: u32,
    pub delivery_date: String,
    pub comment: String,
    /// Ordered set: insertion order is kept, duplicates are dropped.
    pub color: Vec<Color>,
}

impl Order {
    /// Creates an order for the given customer with no colour preference.
    ///
    /// # Arguments
    /// * `first_name` - Customer's first name
    /// * `last_name` - Customer's last name
    /// * `address` - Delivery address
    /// * `metro_station` - Nearest metro station, as the backend's station id
    /// * `phone` - Contact phone number
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        metro_station: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            metro_station: metro_station.into(),
            phone: phone.into(),
            rent_time: 1,
            delivery_date: String::new(),
            comment: String::new(),
            color: Vec::new(),
        }
    }

    pub fn with_rent_time(mut self, days: u32) -> Self {
        self.rent_time = days;
        self
    }

    pub fn with_delivery_date(mut self, date: impl Into<String>) -> Self {
        self.delivery_date = date.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Replaces the colour selection, keeping first occurrences only.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.color.clear();
        for color in colors {
            if !self.color.contains(&color) {
                self.color.push(color);
            }
        }
        self
    }
}

/// Public reference returned by order creation. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackNumber(pub u64);

impl Display for TrackNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of a successful `POST /api/v1/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreated {
    pub track: Option<u64>,
}

/// Body of `GET /api/v1/orders/track`.
///
/// The id is read from the top level, falling back to the nested `order` object.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLookup {
    pub id: Option<i64>,
    pub order: Option<OrderRecord>,
}

impl OrderLookup {
    pub fn internal_id(&self) -> Option<i64> {
        self.id.or_else(|| self.order.as_ref().and_then(|o| o.id))
    }
}

/// One order as the backend reports it. Fields beyond `id`/`track` are kept untyped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub track: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /api/v1/orders`. Only the `orders` array is part of the contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub orders: Option<Vec<OrderRecord>>,
}
