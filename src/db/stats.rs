use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) WAITING PARTIES AND COVERS
    //
    let parties: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM guests", [], |row| row.get(0))?;
    let covers: i64 = pool.conn.query_row(
        "SELECT COALESCE(SUM(party_size), 0) FROM guests",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Waiting parties:{} {}{}{}",
        CYAN, RESET, GREEN, parties, RESET
    );
    println!(
        "{}• Waiting covers:{} {}{}{}",
        CYAN, RESET, GREEN, covers, RESET
    );

    //
    // 3) ARRIVAL RANGE
    //
    let first_arrival: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM guests ORDER BY created_at ASC, id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_arrival: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM guests ORDER BY created_at DESC, id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_arrival.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_arrival.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Arrivals:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    //
    // 4) AVERAGE PARTY SIZE
    //
    if parties > 0 {
        let avg = covers as f64 / parties as f64;
        println!("{}• Average party size:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
