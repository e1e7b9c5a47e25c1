use crate::models::guest::Guest;
use std::path::Path;

/// Write the waitlist snapshot as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, guests: &[Guest]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(guests).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
