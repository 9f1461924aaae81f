use std::io::Write;

use csv::Writer;
use rewardpoints::item::ItemId;
use rewardpoints::ledger::RewardsLedger;
use rewardpoints::log_entry::CustomerId;
use rewardpoints::purchase_counter::PurchaseCounts;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvReportError {
    #[error("csv serialization error for customer_id={customer_id}, source_error={source:?}")]
    Balance {
        customer_id: CustomerId,
        #[source]
        source: csv::Error,
    },
    #[error("csv serialization error for item_id={item_id}, source_error={source:?}")]
    PurchaseCount {
        item_id: ItemId,
        #[source]
        source: csv::Error,
    },
    #[error("csv header serialization error, source_error={source:?}")]
    Header {
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the supplied balances and purchase counts to stdout as two CSV tables, in ascending
/// id order. Each table starts with its header even when it has no rows. Returns a [`Vec`] of
/// [`CsvReportError`] representing all the possible errors encountered during reporting.
///
/// Sorting happens here so that [`RewardsLedger`] and [`PurchaseCounts`] can stay
/// [`std::collections::HashMap`] based.
pub fn write_to_stdout(ledger: &RewardsLedger, purchase_counts: &PurchaseCounts) -> Vec<CsvReportError> {
    write_to(std::io::stdout(), ledger, purchase_counts)
}

fn write_to<W: Write>(mut out: W, ledger: &RewardsLedger, purchase_counts: &PurchaseCounts) -> Vec<CsvReportError> {
    let mut errors: Vec<CsvReportError> = Vec::new();

    let mut balances: Vec<(CustomerId, i64)> = ledger.iter().collect();
    balances.sort_unstable_by_key(|(customer_id, _)| *customer_id);

    let mut writer = Writer::from_writer(&mut out);
    if balances.is_empty() {
        write_header(&mut writer, BALANCE_HEADER, &mut errors);
    }
    for (customer_id, balance) in balances {
        if let Err(source) = writer.serialize(BalanceReport { customer_id, balance }) {
            errors.push(CsvReportError::Balance { customer_id, source });
        }
    }
    flush(&mut writer, &mut errors);
    drop(writer);

    let mut counts: Vec<(ItemId, u64)> = purchase_counts.iter().collect();
    counts.sort_unstable_by_key(|(item_id, _)| *item_id);

    let mut writer = Writer::from_writer(&mut out);
    if counts.is_empty() {
        write_header(&mut writer, PURCHASE_COUNT_HEADER, &mut errors);
    }
    for (item_id, count) in counts {
        if let Err(source) = writer.serialize(PurchaseCountReport { item_id, count }) {
            errors.push(CsvReportError::PurchaseCount { item_id, source });
        }
    }
    flush(&mut writer, &mut errors);

    errors
}

const BALANCE_HEADER: [&str; 2] = ["customer_id", "balance"];
const PURCHASE_COUNT_HEADER: [&str; 2] = ["item_id", "count"];

fn write_header<W: Write>(writer: &mut Writer<W>, header: [&str; 2], errors: &mut Vec<CsvReportError>) {
    if let Err(source) = writer.write_record(header) {
        errors.push(CsvReportError::Header { source });
    }
}

fn flush<W: Write>(writer: &mut Writer<W>, errors: &mut Vec<CsvReportError>) {
    if let Err(io_err) = writer.flush() {
        errors.push(CsvReportError::Io(io_err));
    }
}

#[derive(Serialize)]
struct BalanceReport {
    customer_id: CustomerId,
    balance: i64,
}

#[derive(Serialize)]
struct PurchaseCountReport {
    item_id: ItemId,
    count: u64,
}
