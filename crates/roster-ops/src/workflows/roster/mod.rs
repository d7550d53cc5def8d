//! Roster audit pipeline: select currently-active legal staff from the
//! collaborator table, resolving role and team foreign keys to names, and
//! report staged counters plus hire-date diagnostics.
//!
//! The pipeline itself is pure and synchronous; only the store client at the
//! fetch boundary is async. Each run builds fresh reference maps and walks
//! the collaborator list once, in input order.

pub mod audit;
pub mod dates;
pub mod domain;
pub mod dues;
pub mod export;
mod normalizer;
mod reference;
pub mod report;
pub mod router;
pub mod screening;
pub mod supabase;

pub use audit::{RosterAudit, RosterAuditOutcome, StageCounters};
pub use dates::{parse_hire_date, HireDateError, HireDateParts, ParseFailure};
pub use domain::{
    CollaboratorRecord, EligibleCollaborator, RoleRecord, RosterSnapshot, TeamRecord,
};
pub use dues::{project_annuities, project_due_date, DuesProjection};
pub use export::{export_roster_to_path, write_roster_csv, ExportError};
pub use reference::ReferenceMap;
pub use report::{RosterAuditSummary, RosterMemberView};
pub use router::roster_router;
pub use screening::{ScreeningConfig, ScreeningEngine};
pub use supabase::{SourceError, StoreClient};

#[cfg(test)]
mod tests {
    use super::normalizer;

    #[test]
    fn normalize_folds_case_and_diacritics() {
        assert_eq!(normalizer::normalize_for_tests(Some("Jurídico")), "juridico");
        assert_eq!(
            normalizer::normalize_for_tests(Some("  Advogado Sênior ")),
            "advogado senior"
        );
        assert_eq!(normalizer::normalize_for_tests(Some("SÓCIA")), "socia");
    }

    #[test]
    fn normalize_coerces_absence_to_empty() {
        assert_eq!(normalizer::normalize_for_tests(None), "");
        assert_eq!(normalizer::normalize_for_tests(Some("")), "");
        assert_eq!(normalizer::normalize_for_tests(Some("   ")), "");
    }

    #[test]
    fn normalize_leaves_plain_text_untouched() {
        assert_eq!(normalizer::normalize_for_tests(Some("ativo")), "ativo");
    }
}
