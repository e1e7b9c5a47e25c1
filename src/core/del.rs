use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all_guests, delete_guest};
use crate::errors::AppResult;

/// High-level business logic for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one guest by id, or the whole waitlist when `id` is `None`.
    /// Returns the number of removed rows; a missing id is not an error.
    pub fn apply(pool: &mut DbPool, id: Option<i64>) -> AppResult<usize> {
        let removed = match id {
            Some(id) => delete_guest(pool, id)?,
            None => delete_all_guests(pool)?,
        };

        if removed > 0 {
            let target = match id {
                Some(id) => id.to_string(),
                None => "all".to_string(),
            };
            let _ = audit(
                &pool.conn,
                "del",
                &target,
                &format!("{} guest(s) removed", removed),
            );
        }

        Ok(removed)
    }
}
