use serde::Serialize;

use super::audit::{RosterAuditOutcome, StageCounters};
use super::dates::ParseFailure;
use super::domain::EligibleCollaborator;
use super::reference::scalar_key;

/// Flattened view of one eligible collaborator for API payloads and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterMemberView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub team: String,
    pub status: String,
    pub hire_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oab_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oab_uf: Option<String>,
}

impl RosterMemberView {
    pub(crate) fn from_eligible(entry: &EligibleCollaborator) -> Self {
        Self {
            id: scalar_key(&entry.record.id).unwrap_or_default(),
            name: entry.record.name.clone(),
            role: entry.role_name.clone(),
            team: entry.team_name.clone(),
            status: entry.record.status.clone().unwrap_or_default(),
            hire_date: entry.record.hire_date.clone().unwrap_or_default(),
            oab_number: entry.record.oab_number.clone(),
            oab_uf: entry.record.oab_uf.clone(),
        }
    }
}

/// Serialized shape of one audit pass: staged counters, the eligible roster
/// in input order, and hire-date diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterAuditSummary {
    pub counters: StageCounters,
    pub members: Vec<RosterMemberView>,
    pub parse_failures: Vec<ParseFailure>,
}

impl RosterAuditOutcome {
    pub fn summary(&self) -> RosterAuditSummary {
        RosterAuditSummary {
            counters: self.counters,
            members: self
                .eligible
                .iter()
                .map(RosterMemberView::from_eligible)
                .collect(),
            parse_failures: self.parse_failures.clone(),
        }
    }
}
