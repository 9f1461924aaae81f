use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::item::Item;
use crate::log_entry::CustomerId;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SpendError {
    #[error("daily spend overflow customer_id={customer_id} spend={spend}")]
    SpendOverflow { customer_id: CustomerId, spend: Decimal },
}

/// Cumulative spend per customer for the day being processed.
///
/// Lives for a single [`crate::engine::RewardsEngine::process_log`] call.
#[derive(Debug, Default)]
pub struct DailySpend(HashMap<CustomerId, Decimal>);

impl DailySpend {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Adds the sum of `items` prices to the `customer_id` running total.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The running total overflows ([`SpendError::SpendOverflow`]). The total is left untouched.
    pub fn add(&mut self, customer_id: CustomerId, items: &[Item]) -> Result<(), SpendError> {
        let spend = self.spend(customer_id);
        let new_spend = items.iter().try_fold(spend, |acc, item| {
            acc.checked_add(item.price().as_inner())
                .ok_or(SpendError::SpendOverflow { customer_id, spend: acc })
        })?;
        self.0.insert(customer_id, new_spend);
        Ok(())
    }

    /// Spend of `customer_id` so far, zero if never seen. Reading never inserts.
    pub fn spend(&self, customer_id: CustomerId) -> Decimal {
        self.0.get(&customer_id).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CustomerId, Decimal)> + '_ {
        self.0.iter().map(|(customer_id, spend)| (*customer_id, *spend))
    }
}
