use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "add_rejected" | "add_defaulted" => Colour::Yellow,
        "del" => Colour::Red,
        "backup" | "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::Cyan,
        _ => Colour::White,
    }
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}

/// High-level business logic for the `log` command.
pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, operation, target, _)| op_target(operation, target).len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let label = op_target(&operation, &target);
            let colored = color_for_operation(&operation).paint(label).to_string();

            // padding computed on the visible width, not the ANSI bytes
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            let date = chrono::DateTime::parse_from_rfc3339(&date)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or(date);

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
