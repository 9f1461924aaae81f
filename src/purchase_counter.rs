use std::collections::HashMap;

use crate::item::Item;
use crate::item::ItemId;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PurchaseCountError {
    #[error("purchase count overflow item_id={item_id} count={count}")]
    CountOverflow { item_id: ItemId, count: u64 },
}

/// Units sold per item, across every well formed entry of the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PurchaseCounts(HashMap<ItemId, u64>);

impl PurchaseCounts {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Increments by one the count of every item occurrence in `items`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An item count overflows ([`PurchaseCountError::CountOverflow`]). Occurrences preceding the
    ///   overflowing one stay recorded.
    pub fn record(&mut self, items: &[Item]) -> Result<(), PurchaseCountError> {
        for item in items {
            let count = self.0.entry(item.id()).or_insert(0);
            *count = count.checked_add(1).ok_or(PurchaseCountError::CountOverflow {
                item_id: item.id(),
                count: *count,
            })?;
        }
        Ok(())
    }

    /// Units sold of `item_id`, 0 if never seen. Reading never inserts.
    pub fn count(&self, item_id: ItemId) -> u64 {
        self.0.get(&item_id).copied().unwrap_or(0)
    }

    /// Sum of all the counts, `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        self.0.values().try_fold(0_u64, |acc, count| acc.checked_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u64)> + '_ {
        self.0.iter().map(|(item_id, count)| (*item_id, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use assert2::let_assert;
    use rust_decimal::Decimal;

    use super::*;
    use crate::item::Price;

    #[test]
    fn record_counts_every_occurrence() {
        let mut counts = PurchaseCounts::new();
        counts.record(&[item(1), item(1), item(2)]).unwrap();
        counts.record(&[item(1)]).unwrap();
        assert_eq!(counts.count(ItemId(1)), 3);
        assert_eq!(counts.count(ItemId(2)), 1);
        assert_eq!(counts.total(), Some(4));
    }

    #[test]
    fn count_of_unseen_item_is_zero_and_does_not_insert() {
        let counts = PurchaseCounts::new();
        assert_eq!(counts.count(ItemId(42)), 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn record_overflow_errors() {
        let mut counts = PurchaseCounts(HashMap::from([(ItemId(1), u64::MAX)]));
        let_assert!(Err(PurchaseCountError::CountOverflow { item_id, count }) = counts.record(&[item(1)]));
        assert_eq!(item_id, ItemId(1));
        assert_eq!(count, u64::MAX);
        assert_eq!(counts.count(ItemId(1)), u64::MAX);
    }

    fn item(id: u32) -> Item {
        Item::new(ItemId(id), Price::try_from(Decimal::ONE).unwrap())
    }
}
