use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_guest;
use crate::errors::AppResult;
use crate::models::guest::Guest;
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate raw input and append a guest to the waitlist.
    ///
    /// Returns `Ok(None)` when the input was rejected (empty name or empty
    /// party size): nothing is written and the command still exits cleanly.
    /// A party size that is not a positive number is replaced with the
    /// configured default and the entry is inserted anyway.
    pub fn apply(
        pool: &mut DbPool,
        name: &str,
        party_size_raw: &str,
        notes: &str,
        cfg: &Config,
    ) -> AppResult<Option<Guest>> {
        let name = name.trim();
        let size_raw = party_size_raw.trim();

        // Empty name or empty size field aborts the add without failing.
        if name.is_empty() || size_raw.is_empty() {
            warning("Guest name and party size are required; nothing added.");
            let _ = audit(
                &pool.conn,
                "add_rejected",
                name,
                "empty name or party size",
            );
            return Ok(None);
        }

        let party_size = match size_raw.parse::<i64>() {
            Ok(n) if n > 0 => n,
            _ => {
                warning(format!(
                    "Party size '{}' is not a positive number, using default {}.",
                    size_raw, cfg.default_party_size
                ));
                let _ = audit(
                    &pool.conn,
                    "add_defaulted",
                    name,
                    &format!(
                        "party size '{}' replaced with {}",
                        size_raw, cfg.default_party_size
                    ),
                );
                cfg.default_party_size
            }
        };

        let guest = Guest::new(name, party_size, notes);
        let id = insert_guest(&pool.conn, &guest)?;

        if let Err(e) = audit(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("{} (party of {})", name, party_size),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        success(format!(
            "Added {} (party of {}) to the waitlist.",
            name, party_size
        ));

        Ok(Some(Guest { id, ..guest }))
    }
}
