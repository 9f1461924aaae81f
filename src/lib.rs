//! End of day reward points and purchase counts.
//!
//! A day's [`log_entry::LogEntry`]s are fed once through [`engine::RewardsEngine::process_log`]:
//! well formed entries are counted, attributed entries debit the points they used immediately and
//! accumulate their spend, malformed entries end up in the [`error_log::ErrorLog`]. Earned points
//! are credited once, after the whole day has been consumed.

pub mod classifier;
pub mod daily_spend;
pub mod engine;
pub mod error_log;
pub mod item;
pub mod ledger;
pub mod log_entry;
pub mod policy;
pub mod purchase_counter;
