use serde::Serialize;

use super::dates::{parse_hire_date, ParseFailure};
use super::domain::{EligibleCollaborator, RosterSnapshot};
use super::normalizer::normalize;
use super::reference::ReferenceMap;
use super::screening::{ScreeningConfig, ScreeningEngine};

/// Ordered counters describing how many records survived each stage.
///
/// Each stage narrows the previous one, so the counters are monotonically
/// non-increasing left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounters {
    pub total: usize,
    pub with_hire_date: usize,
    pub active: usize,
    pub legal_staff: usize,
}

/// Everything one audit pass produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterAuditOutcome {
    pub counters: StageCounters,
    /// Eligible collaborators in input order.
    pub eligible: Vec<EligibleCollaborator>,
    /// Hire-date diagnostics for eligible records; collected, never fatal.
    pub parse_failures: Vec<ParseFailure>,
}

/// Stateless audit pipeline over an in-memory roster snapshot.
///
/// Reference maps are rebuilt from the snapshot on every run and the pass
/// holds no other state, so running twice over the same snapshot yields
/// identical outcomes.
pub struct RosterAudit {
    engine: ScreeningEngine,
}

impl RosterAudit {
    pub fn new(config: ScreeningConfig) -> Self {
        Self {
            engine: ScreeningEngine::new(config),
        }
    }

    pub fn config(&self) -> &ScreeningConfig {
        self.engine.config()
    }

    pub fn run(&self, snapshot: &RosterSnapshot) -> RosterAuditOutcome {
        let roles = ReferenceMap::new(
            snapshot
                .roles
                .iter()
                .map(|role| (role.id.clone(), role.name.clone())),
        );
        let teams = ReferenceMap::new(
            snapshot
                .teams
                .iter()
                .map(|team| (team.id.clone(), team.name.clone())),
        );

        let mut counters = StageCounters {
            total: snapshot.collaborators.len(),
            ..StageCounters::default()
        };
        let mut eligible = Vec::new();
        let mut parse_failures = Vec::new();

        for record in &snapshot.collaborators {
            let raw_hire_date = match record.hire_date.as_deref() {
                Some(raw) if !raw.is_empty() => raw,
                _ => continue,
            };
            counters.with_hire_date += 1;

            if !self.engine.is_active(&normalize(record.status.as_deref())) {
                continue;
            }
            counters.active += 1;

            let role_name = roles.resolve(record.role.as_ref());
            let team_name = teams.resolve(record.team.as_ref());
            if !self.engine.is_legal_staff(
                &normalize(Some(role_name.as_str())),
                &normalize(Some(team_name.as_str())),
            ) {
                continue;
            }
            counters.legal_staff += 1;

            // Selection is done; date validation only reports from here on.
            let hire_date_parts = match parse_hire_date(raw_hire_date) {
                Ok(parts) => Some(parts),
                Err(error) => {
                    parse_failures.push(ParseFailure {
                        name: record.name.clone(),
                        raw: raw_hire_date.to_string(),
                        reason: error.to_string(),
                    });
                    None
                }
            };

            eligible.push(EligibleCollaborator {
                record: record.clone(),
                role_name,
                team_name,
                hire_date_parts,
            });
        }

        RosterAuditOutcome {
            counters,
            eligible,
            parse_failures,
        }
    }
}
