use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use roster_ops::workflows::roster::{
    CollaboratorRecord, RoleRecord, RosterSnapshot, TeamRecord,
};
use serde_json::json;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Read a snapshot previously saved as JSON ({collaborators, roles, teams}).
pub(crate) fn load_snapshot_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<RosterSnapshot, std::io::Error> {
    let file = std::fs::File::open(path)?;
    serde_json::from_reader(file).map_err(std::io::Error::from)
}

/// Small fixture roster so the audit command works without store access.
pub(crate) fn sample_snapshot() -> RosterSnapshot {
    let collaborator = |value: serde_json::Value| -> CollaboratorRecord {
        serde_json::from_value(value).expect("sample collaborator row is well formed")
    };

    RosterSnapshot {
        collaborators: vec![
            collaborator(json!({
                "id": 1,
                "name": "Ana Ribeiro",
                "status": "Ativo",
                "role": 1,
                "equipe": 5,
                "hire_date": "2020-01-10",
                "oab_number": "123456",
                "oab_uf": "SP"
            })),
            collaborator(json!({
                "id": 2,
                "name": "Bruno Costa",
                "status": "Inativo",
                "role": 1,
                "equipe": 5,
                "hire_date": "2018-06-15"
            })),
            collaborator(json!({
                "id": 3,
                "name": "Carla Mendes",
                "status": "Ativa",
                "role": 3,
                "equipe": 9,
                "hire_date": "15/03/2023"
            })),
            collaborator(json!({
                "id": 4,
                "name": "Davi Rocha",
                "status": "Ativo",
                "role": 3,
                "equipe": 5,
                "hire_date": "2021-09-01"
            })),
            collaborator(json!({
                "id": 5,
                "name": "Elisa Prado",
                "status": "Ativo",
                "role": 2,
                "equipe": 5,
                "hire_date": "sem registro"
            })),
        ],
        roles: vec![
            reference_role(1, "Advogada"),
            reference_role(2, "Estagiário de Direito"),
            reference_role(3, "Analista Financeiro"),
        ],
        teams: vec![reference_team(5, "Comercial"), reference_team(9, "Jurídico")],
    }
}

fn reference_role(id: i64, name: &str) -> RoleRecord {
    RoleRecord {
        id: json!(id),
        name: name.to_string(),
    }
}

fn reference_team(id: i64, name: &str) -> TeamRecord {
    TeamRecord {
        id: json!(id),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_ops::workflows::roster::{RosterAudit, ScreeningConfig};

    #[test]
    fn sample_snapshot_exercises_every_stage() {
        let snapshot = sample_snapshot();
        let outcome = RosterAudit::new(ScreeningConfig::default()).run(&snapshot);

        assert_eq!(outcome.counters.total, 5);
        // Bruno is inactive, Davi is finance on a commercial team.
        assert_eq!(outcome.counters.legal_staff, 3);
        // Elisa's free-text hire date surfaces as a diagnostic.
        assert_eq!(outcome.parse_failures.len(), 1);
        assert_eq!(outcome.parse_failures[0].name, "Elisa Prado");
    }
}
