//! Per entry disposition.
//!
//! [`classify`] is a pure decision: it never touches the ledger, the counts or the error log.
//! Acting on the returned [`Disposition`] is up to [`crate::engine::RewardsEngine`].

use crate::item::Item;
use crate::log_entry::CustomerId;
use crate::log_entry::LogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition<'a> {
    /// No usable item list. Only goes to the error log.
    Malformed,
    /// Items but no customer. Only counted.
    Anonymous { items: &'a [Item] },
    /// Items and customer. Counted, debited and accumulated into the daily spend.
    Attributed {
        customer_id: CustomerId,
        points_used: u64,
        items: &'a [Item],
    },
}

/// Decides the [`Disposition`] of `entry`.
///
/// - absent or empty item list => [`Disposition::Malformed`], whatever the other fields hold.
/// - absent customer => [`Disposition::Anonymous`].
/// - absent points used => zero points used.
pub fn classify(entry: &LogEntry) -> Disposition<'_> {
    let Some(items) = entry.items().filter(|items| !items.is_empty()) else {
        return Disposition::Malformed;
    };

    match entry.customer_id() {
        Some(customer_id) => Disposition::Attributed {
            customer_id,
            points_used: entry.points_used().unwrap_or(0),
            items,
        },
        None => Disposition::Anonymous { items },
    }
}
