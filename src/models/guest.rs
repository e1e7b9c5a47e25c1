use chrono::{DateTime, Local};
use serde::Serialize;

/// One waitlist entry as stored in the `guests` table.
///
/// Rows are append-only: a guest is inserted once and never updated in
/// place. `id` is assigned by SQLite and stays stable; `created_at` is
/// assigned at creation time and carries the arrival order.
#[derive(Debug, Clone, Serialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,       // ⇔ guests.guest_name (TEXT, non-empty)
    pub party_size: i64,    // ⇔ guests.party_size (INT, > 0)
    pub notes: String,      // ⇔ guests.notes (TEXT, default '')
    pub created_at: String, // ⇔ guests.created_at (TEXT, RFC 3339)
}

impl Guest {
    /// Build a not-yet-persisted guest. `id` stays 0 until the row is
    /// inserted; `created_at` is stamped here so the arrival order is
    /// fixed the moment the add is accepted.
    pub fn new(name: &str, party_size: i64, notes: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            party_size,
            notes: notes.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn arrival(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }

    /// Minutes spent on the list so far, `None` if the stored timestamp
    /// cannot be parsed.
    pub fn waiting_minutes(&self) -> Option<i64> {
        self.arrival()
            .map(|t| Local::now().signed_duration_since(t).num_minutes())
    }
}
