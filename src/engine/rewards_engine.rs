use crate::classifier::Disposition;
use crate::classifier::classify;
use crate::daily_spend::DailySpend;
use crate::daily_spend::SpendError;
use crate::engine::DaySummary;
use crate::error_log::ErrorLog;
use crate::item::ItemId;
use crate::ledger::LedgerError;
use crate::ledger::RewardsLedger;
use crate::log_entry::CustomerId;
use crate::log_entry::LogEntry;
use crate::policy::PolicyError;
use crate::policy::RewardPolicy;
use crate::purchase_counter::PurchaseCountError;
use crate::purchase_counter::PurchaseCounts;

#[cfg(test)]
#[path = "tests/rewards_engine_tests.rs"]
mod rewards_engine_tests;

/// Owns the state accumulated across runs: balances, purchase counts and malformed entries.
///
/// Calling [`RewardsEngine::process_log`] once per day on the same instance accumulates days.
#[derive(Debug, Default)]
pub struct RewardsEngine {
    policy: RewardPolicy,
    ledger: RewardsLedger,
    purchase_counts: PurchaseCounts,
    error_log: ErrorLog,
}

impl RewardsEngine {
    pub fn new() -> Self {
        Self::with_policy(RewardPolicy::default())
    }

    pub fn with_policy(policy: RewardPolicy) -> Self {
        Self::with_ledger(policy, RewardsLedger::new())
    }

    /// Starts from balances restored by the caller.
    pub fn with_ledger(policy: RewardPolicy, ledger: RewardsLedger) -> Self {
        Self {
            policy,
            ledger,
            purchase_counts: PurchaseCounts::new(),
            error_log: ErrorLog::new(),
        }
    }

    /// Drops balances, counts and collected errors. The policy is kept.
    pub fn reset(&mut self) {
        *self = Self::with_policy(self.policy);
    }

    /// Processes one day of `day_log` entries in input order.
    ///
    /// Points used are debited entry by entry; earned points are credited once, after the last
    /// entry, from each customer's whole day spend. Malformed entries are only appended to the
    /// error log.
    ///
    /// # Errors
    ///
    /// Returns an error if a balance, a purchase count or a daily spend overflows, or if a day
    /// spend cannot be converted to points. On error the engine is left exactly as it was before
    /// the call, so the day can be fixed and processed again.
    pub fn process_log<I>(&mut self, day_log: I) -> Result<DaySummary, RewardsEngineError>
    where
        I: IntoIterator<Item = LogEntry>,
    {
        // The day is applied to copies, committed only once it fully succeeds.
        let mut ledger = self.ledger.clone();
        let mut purchase_counts = self.purchase_counts.clone();
        let mut malformed_entries = Vec::new();
        let mut daily_spend = DailySpend::new();
        let mut summary = DaySummary::default();

        for entry in day_log {
            match classify(&entry) {
                Disposition::Malformed => {
                    log::warn!("malformed log entry, missing items entry={entry:?}");
                    summary.malformed += 1;
                    malformed_entries.push(entry);
                }
                Disposition::Anonymous { items } => {
                    log::debug!("anonymous log entry items={}", items.len());
                    purchase_counts.record(items)?;
                    summary.anonymous += 1;
                }
                Disposition::Attributed {
                    customer_id,
                    points_used,
                    items,
                } => {
                    log::debug!(
                        "attributed log entry customer_id={customer_id} points_used={points_used} items={}",
                        items.len()
                    );
                    crate::ledger::debit(&mut ledger, customer_id, points_used)?;
                    daily_spend.add(customer_id, items)?;
                    purchase_counts.record(items)?;
                    summary.attributed += 1;
                }
            }
        }

        credit_end_of_day(&self.policy, &mut ledger, &daily_spend, &mut summary)?;

        self.ledger = ledger;
        self.purchase_counts = purchase_counts;
        for entry in malformed_entries {
            self.error_log.push(entry);
        }

        log::info!("{summary}");
        Ok(summary)
    }

    /// Units of `item_id` sold across all the processed days, 0 if never sold.
    pub fn get_purchase_count(&self, item_id: ItemId) -> u64 {
        self.purchase_counts.count(item_id)
    }

    /// Current point balance of `customer_id`, 0 if never seen.
    pub fn get_balance(&self, customer_id: CustomerId) -> i64 {
        self.ledger.balance(customer_id)
    }

    /// Malformed entries in input order.
    pub fn get_errors(&self) -> &[LogEntry] {
        self.error_log.entries()
    }

    pub const fn ledger(&self) -> &RewardsLedger {
        &self.ledger
    }

    pub const fn purchase_counts(&self) -> &PurchaseCounts {
        &self.purchase_counts
    }

    pub const fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    pub const fn policy(&self) -> &RewardPolicy {
        &self.policy
    }
}

fn credit_end_of_day(
    policy: &RewardPolicy,
    ledger: &mut RewardsLedger,
    daily_spend: &DailySpend,
    summary: &mut DaySummary,
) -> Result<(), RewardsEngineError> {
    for (customer_id, spend) in daily_spend.iter().filter(|(_, spend)| !spend.is_zero()) {
        let earned = policy.earned_points(spend)?;
        log::debug!("end of day credit customer_id={customer_id} spend={spend} earned={earned}");
        summary.credits.insert(customer_id, earned);
    }
    for (customer_id, earned) in &summary.credits {
        crate::ledger::credit(ledger, *customer_id, *earned)?;
    }
    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum RewardsEngineError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    PurchaseCount(#[from] PurchaseCountError),
    #[error(transparent)]
    Spend(#[from] SpendError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}
