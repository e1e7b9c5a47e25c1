use crate::models::guest::Guest;
use csv::Writer;
use std::path::Path;

/// Write the waitlist snapshot as CSV, one guest per record.
pub(crate) fn write_csv(path: &Path, guests: &[Guest]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "guest_name", "party_size", "notes", "created_at"])?;

    for g in guests {
        wtr.write_record(&[
            g.id.to_string(),
            g.name.clone(),
            g.party_size.to_string(),
            g.notes.clone(),
            g.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
