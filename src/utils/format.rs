//! Formatting helpers for CLI output.

/// Render a waiting time in minutes as a compact human string.
pub fn human_wait(mins: i64) -> String {
    let m = mins.max(0);
    if m < 60 {
        format!("{}m", m)
    } else {
        format!("{}h {:02}m", m / 60, m % 60)
    }
}
