//! Day log processing engine.
//!
//! Provides [`RewardsEngine`] which classifies incoming [`crate::log_entry::LogEntry`]s, debits
//! and credits the [`crate::ledger::RewardsLedger`] via [`crate::ledger`] helpers and tallies
//! [`crate::purchase_counter::PurchaseCounts`].
//! [`day_summary`] module provides the per day statistics returned by each run.

pub mod day_summary;
pub mod rewards_engine;

pub use day_summary::DaySummary;
pub use rewards_engine::RewardsEngine;
pub use rewards_engine::RewardsEngineError;
