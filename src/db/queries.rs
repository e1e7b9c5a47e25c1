use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::guest::Guest;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Guest> {
    Ok(Guest {
        id: row.get("id")?,
        name: row.get("guest_name")?,
        party_size: row.get("party_size")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

/// Full ordered snapshot of the waitlist, oldest arrival first.
///
/// `id` breaks ties at clock resolution so the order always matches the
/// insertion order. No pagination, no filtering.
pub fn load_all_guests(pool: &mut DbPool) -> AppResult<Vec<Guest>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, guest_name, party_size, notes, created_at
         FROM guests
         ORDER BY created_at ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Append one guest row; returns the id assigned by SQLite.
pub fn insert_guest(conn: &Connection, guest: &Guest) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO guests (guest_name, party_size, notes, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![guest.name, guest.party_size, guest.notes, guest.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_guest(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let removed = pool.conn.execute("DELETE FROM guests WHERE id = ?", [id])?;
    Ok(removed)
}

pub fn delete_all_guests(pool: &mut DbPool) -> AppResult<usize> {
    let removed = pool.conn.execute("DELETE FROM guests", [])?;
    Ok(removed)
}
