use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `guests` table exists.
fn guests_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='guests'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `guests` table has a `notes` column.
fn guests_have_notes_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('guests')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "notes" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `guests` table with the current schema.
fn create_guests_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS guests (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            guest_name  TEXT NOT NULL,
            party_size  INTEGER NOT NULL DEFAULT 1,
            notes       TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_guests_created_at ON guests(created_at);
        "#,
    )?;
    Ok(())
}

/// Add the `notes` column to databases created before it existed.
fn migrate_add_notes_column(conn: &Connection) -> Result<()> {
    let version = "20250612_0001_add_guest_notes";

    // Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE guests ADD COLUMN notes TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    // Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added notes column to guests')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'notes' to guests table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !guests_table_exists(conn)? {
        create_guests_table(conn)?;
        success("Created guests table.");
        return Ok(());
    }

    if !guests_have_notes_column(conn)? {
        migrate_add_notes_column(conn)?;
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_guests_created_at ON guests(created_at);")?;

    Ok(())
}
