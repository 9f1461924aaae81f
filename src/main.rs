use std::process::ExitCode;

use color_eyre::eyre::OptionExt as _;
use color_eyre::eyre::WrapErr as _;
use color_eyre::eyre::bail;
use rewardpoints::engine::RewardsEngine;

mod catalog;
mod csv_report;
mod day_log;

/// `rewardpoints <catalog.csv> <day_log.csv>...`
///
/// Day logs are processed in the given order against the same engine, so balances and purchase
/// counts accumulate across days. Exits with 1 if any row could not be ingested or reported.
fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let catalog_path = args.next().ok_or_eyre("no catalog CSV supplied")?;
    let day_log_paths: Vec<String> = args.collect();
    if day_log_paths.is_empty() {
        bail!("no day log CSV supplied");
    }

    let catalog = catalog::read_from_path(&catalog_path)
        .wrap_err_with(|| format!("failed to build catalog, path={catalog_path}"))?;

    let mut engine = RewardsEngine::new();
    let mut ingestion_errors = 0;

    for day_log_path in &day_log_paths {
        let day_log = day_log::read_from_path(day_log_path, &catalog)
            .wrap_err_with(|| format!("failed to read day log, path={day_log_path}"))?;

        for error in &day_log.errors {
            log::error!("failed to ingest log entry, path={day_log_path} error={error}");
        }
        ingestion_errors += day_log.errors.len();

        let summary = engine
            .process_log(day_log.entries)
            .wrap_err_with(|| format!("failed to process day log, path={day_log_path}"))?;
        log::info!("processed day log, path={day_log_path} {summary}");
    }

    for entry in engine.get_errors() {
        log::warn!("entry in error log, entry={entry:?}");
    }

    let report_errors = csv_report::write_to_stdout(engine.ledger(), engine.purchase_counts());
    for error in &report_errors {
        log::error!("failed to report, error={error}");
    }

    if ingestion_errors > 0 || !report_errors.is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
