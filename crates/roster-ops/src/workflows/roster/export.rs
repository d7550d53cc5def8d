use std::io::Write;
use std::path::Path;

use super::domain::EligibleCollaborator;
use super::report::RosterMemberView;

const HEADER: [&str; 8] = [
    "id",
    "name",
    "role",
    "team",
    "status",
    "hire_date",
    "oab_number",
    "oab_uf",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the eligible roster as CSV, one row per collaborator, in audit order.
pub fn write_roster_csv<W: Write>(
    writer: W,
    eligible: &[EligibleCollaborator],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for entry in eligible {
        let view = RosterMemberView::from_eligible(entry);
        csv_writer.write_record([
            view.id.as_str(),
            view.name.as_str(),
            view.role.as_str(),
            view.team.as_str(),
            view.status.as_str(),
            view.hire_date.as_str(),
            view.oab_number.as_deref().unwrap_or_default(),
            view.oab_uf.as_deref().unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Convenience wrapper writing the export to a file path.
pub fn export_roster_to_path<P: AsRef<Path>>(
    path: P,
    eligible: &[EligibleCollaborator],
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_roster_csv(file, eligible)
}
