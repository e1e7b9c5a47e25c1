//! Snapshot-backed waitlist display.

use crate::models::guest::Guest;
use crate::utils::format::human_wait;
use crate::utils::table::{Column, Table};

/// Holds the currently displayed snapshot of the waitlist.
///
/// The snapshot is always replaced wholesale: after a mutation the caller
/// re-queries the store and calls [`WaitlistView::refresh`], it never
/// patches single rows. The view keeps no state beyond the rows it shows.
pub struct WaitlistView {
    rows: Vec<Guest>,
}

impl WaitlistView {
    /// Bind an initial snapshot, rows displayed in snapshot order.
    pub fn bind(snapshot: Vec<Guest>) -> Self {
        Self { rows: snapshot }
    }

    /// Replace the displayed rows with a fresh snapshot.
    pub fn refresh(&mut self, snapshot: Vec<Guest>) {
        self.rows = snapshot;
    }

    pub fn guests(&self) -> &[Guest] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of covers (sum of party sizes) on the list.
    pub fn covers(&self) -> i64 {
        self.rows.iter().map(|g| g.party_size).sum()
    }

    pub fn render(&self, show_notes: bool) -> String {
        if self.rows.is_empty() {
            return "The waitlist is empty.".to_string();
        }

        let mut columns = vec![
            Column::new("#"),
            Column::new("Id"),
            Column::new("Guest"),
            Column::new("Party"),
            Column::new("Waiting"),
        ];
        if show_notes {
            columns.push(Column::new("Notes"));
        }

        let mut table = Table::new(columns);

        for (pos, g) in self.rows.iter().enumerate() {
            let mut row = vec![
                (pos + 1).to_string(),
                g.id.to_string(),
                g.name.clone(),
                g.party_size.to_string(),
                g.waiting_minutes()
                    .map(human_wait)
                    .unwrap_or_else(|| "-".to_string()),
            ];
            if show_notes {
                row.push(g.notes.clone());
            }
            table.add_row(row);
        }

        let mut out = table.render();
        out.push_str(&format!(
            "\n{} parties, {} covers waiting",
            self.len(),
            self.covers()
        ));
        out
    }
}
