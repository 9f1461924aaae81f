//! Day log ingestion: `customer,points,items` CSV rows to [`LogEntry`]s.
//!
//! `customer` and `points` may be left empty. `items` holds space separated item ids; leaving it
//! empty yields an entry without item list, which the engine later files as malformed.
//! Rows that cannot be turned into an entry at all are returned as [`DayLogError`]s and skipped.

use std::path::Path;

use csv::Reader;
use csv::ReaderBuilder;
use csv::Trim;
use rewardpoints::item::Item;
use rewardpoints::item::ItemId;
use rewardpoints::log_entry::CustomerId;
use rewardpoints::log_entry::LogEntry;
use serde::Deserialize;

use crate::catalog::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum DayLogError {
    #[error("failed to deserialize day log row={row}, source_error={source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("invalid item id in day log row={row} raw_item_id={raw_item_id:?}")]
    InvalidItemId { row: usize, raw_item_id: String },
    #[error("unknown item in day log row={row} item_id={item_id}")]
    UnknownItem { row: usize, item_id: ItemId },
}

#[derive(Debug, Default)]
pub struct DayLog {
    pub entries: Vec<LogEntry>,
    pub errors: Vec<DayLogError>,
}

#[derive(Deserialize)]
struct DayLogRow {
    customer: Option<CustomerId>,
    points: Option<u64>,
    items: Option<String>,
}

/// Reads the whole day log at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened. Bad rows do not fail the read, they end up in
/// [`DayLog::errors`].
pub fn read_from_path(path: impl AsRef<Path>, catalog: &Catalog) -> Result<DayLog, csv::Error> {
    let reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    Ok(read(reader, catalog))
}

fn read<R: std::io::Read>(mut reader: Reader<R>, catalog: &Catalog) -> DayLog {
    let mut day_log = DayLog::default();

    for (index, row_res) in reader.deserialize::<DayLogRow>().enumerate() {
        let row = index + 1;
        let entry_res = row_res
            .map_err(|source| DayLogError::Csv { row, source })
            .and_then(|day_log_row| to_log_entry(row, day_log_row, catalog));
        match entry_res {
            Ok(entry) => day_log.entries.push(entry),
            Err(error) => day_log.errors.push(error),
        }
    }

    day_log
}

fn to_log_entry(row: usize, day_log_row: DayLogRow, catalog: &Catalog) -> Result<LogEntry, DayLogError> {
    let items = day_log_row
        .items
        .filter(|raw_items| !raw_items.trim().is_empty())
        .map(|raw_items| resolve_items(row, &raw_items, catalog))
        .transpose()?;

    Ok(LogEntry::new(day_log_row.customer, day_log_row.points, items))
}

fn resolve_items(row: usize, raw_items: &str, catalog: &Catalog) -> Result<Vec<Item>, DayLogError> {
    raw_items
        .split_whitespace()
        .map(|raw_item_id| {
            let item_id = raw_item_id
                .parse()
                .map(ItemId)
                .map_err(|_| DayLogError::InvalidItemId {
                    row,
                    raw_item_id: raw_item_id.to_owned(),
                })?;
            catalog
                .get(item_id)
                .ok_or(DayLogError::UnknownItem { row, item_id })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert2::let_assert;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::catalog;

    #[test]
    fn read_returns_entries_with_absent_fields() {
        let catalog = test_catalog();
        let day_log = read_day_log("1,100,1 1 2\n,,2\n3,,\n", &catalog);

        assert!(day_log.errors.is_empty(), "errors={:?}", day_log.errors);
        let banana = catalog.get(ItemId(1)).unwrap();
        let apple = catalog.get(ItemId(2)).unwrap();
        assert_eq!(
            day_log.entries,
            vec![
                LogEntry::new(Some(CustomerId(1)), Some(100), Some(vec![banana, banana, apple])),
                LogEntry::new(None, None, Some(vec![apple])),
                LogEntry::new(Some(CustomerId(3)), None, None),
            ]
        );
    }

    #[rstest]
    #[case("1,0,1 9", "unknown item in day log row=1 item_id=9")]
    #[case("1,0,1 x", "invalid item id in day log row=1 raw_item_id=\"x\"")]
    #[case("1,abc,1", "failed to deserialize day log row=1")]
    #[case("-1,0,1", "failed to deserialize day log row=1")]
    fn read_skips_rows_that_are_not_entries(#[case] csv_row: &str, #[case] expected_substr: &str) {
        let day_log = read_day_log(&format!("{csv_row}\n2,0,2"), &test_catalog());

        assert_eq!(day_log.entries.len(), 1);
        let_assert!([error] = day_log.errors.as_slice());
        assert!(
            error.to_string().contains(expected_substr),
            "error={error:?} does not contain expected={expected_substr}'",
        );
    }

    fn read_day_log(rows: &str, catalog: &Catalog) -> DayLog {
        let data = format!("customer,points,items\n{rows}");
        read(ReaderBuilder::new().trim(Trim::All).from_reader(data.as_bytes()), catalog)
    }

    fn test_catalog() -> Catalog {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.csv");
        catalog::read_from_path(path).unwrap()
    }
}
