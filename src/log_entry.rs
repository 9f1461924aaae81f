use serde::Deserialize;
use serde::Serialize;

use crate::item::Item;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
pub struct CustomerId(pub u32);

/// A single purchase event, as produced by log ingestion.
///
/// Every field is independently optional: what a missing field means is decided by
/// [`crate::classifier::classify`], never by the entry itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    customer_id: Option<CustomerId>,
    points_used: Option<u64>,
    items: Option<Vec<Item>>,
}

impl LogEntry {
    pub const fn new(customer_id: Option<CustomerId>, points_used: Option<u64>, items: Option<Vec<Item>>) -> Self {
        Self {
            customer_id,
            points_used,
            items,
        }
    }

    pub const fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub const fn points_used(&self) -> Option<u64> {
        self.points_used
    }

    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }
}
