use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_guests;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the full waitlist snapshot to `file` in the chosen format.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let guests = load_all_guests(pool)?;

        if guests.is_empty() {
            warning("Nothing to export: the waitlist is empty.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                write_csv(path, &guests)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(path, &guests)?;
                notify_export_success("JSON", path);
            }
        }

        if let Err(e) = audit(&pool.conn, "export", file, "Waitlist exported") {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(())
    }
}
