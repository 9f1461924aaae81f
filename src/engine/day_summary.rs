use std::collections::BTreeMap;

use crate::log_entry::CustomerId;

/// What a single [`crate::engine::RewardsEngine::process_log`] call did.
#[derive(Debug, Default, Clone, PartialEq, Eq, parse_display::Display)]
#[display("day=(attributed={attributed} anonymous={anonymous} malformed={malformed})")]
pub struct DaySummary {
    pub(in crate::engine) attributed: usize,
    pub(in crate::engine) anonymous: usize,
    pub(in crate::engine) malformed: usize,
    pub(in crate::engine) credits: BTreeMap<CustomerId, u64>,
}

impl DaySummary {
    pub const fn attributed(&self) -> usize {
        self.attributed
    }

    pub const fn anonymous(&self) -> usize {
        self.anonymous
    }

    pub const fn malformed(&self) -> usize {
        self.malformed
    }

    /// Points credited at end of day, by customer.
    pub const fn credits(&self) -> &BTreeMap<CustomerId, u64> {
        &self.credits
    }
}
