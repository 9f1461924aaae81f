use std::collections::HashMap;

use crate::log_entry::CustomerId;

pub mod ops;

pub use ops::LedgerError;
pub use ops::credit;
pub use ops::debit;

/// Running reward point balance per customer.
///
/// Balances can be negative: points used are debited as soon as an entry is processed while
/// earned points are only credited at the end of the day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RewardsLedger(HashMap<CustomerId, i64>);

impl RewardsLedger {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Restores balances kept by the caller, e.g. from a previous run.
    pub fn from_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = (CustomerId, i64)>,
    {
        Self(balances.into_iter().collect())
    }

    /// Balance of `customer_id`, 0 if never seen. Reading never inserts.
    pub fn balance(&self, customer_id: CustomerId) -> i64 {
        self.0.get(&customer_id).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CustomerId, i64)> + '_ {
        self.0.iter().map(|(customer_id, balance)| (*customer_id, *balance))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
