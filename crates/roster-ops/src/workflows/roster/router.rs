use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use super::audit::RosterAudit;
use super::domain::RosterSnapshot;
use super::screening::ScreeningConfig;

/// Router builder exposing the roster audit over HTTP.
///
/// The endpoint is stateless: callers post the three tables inline and get
/// the audit summary back, so the same handler serves live data relayed by a
/// job runner and fixtures posted by tests.
pub fn roster_router() -> Router {
    Router::new().route("/api/v1/roster/audit", post(audit_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuditRequest {
    #[serde(flatten)]
    pub(crate) snapshot: RosterSnapshot,
    /// Optional vocabulary override; defaults to the standard screen.
    #[serde(default)]
    pub(crate) screening: Option<ScreeningConfig>,
}

pub(crate) async fn audit_handler(axum::Json(request): axum::Json<AuditRequest>) -> Response {
    let audit = RosterAudit::new(request.screening.unwrap_or_default());
    let outcome = audit.run(&request.snapshot);
    (StatusCode::OK, axum::Json(outcome.summary())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::roster::domain::{CollaboratorRecord, RoleRecord, TeamRecord};
    use serde_json::json;

    fn request() -> AuditRequest {
        AuditRequest {
            snapshot: RosterSnapshot {
                collaborators: vec![CollaboratorRecord {
                    id: json!(1),
                    name: "Ana".to_string(),
                    role: Some(json!(1)),
                    status: Some("Ativo".to_string()),
                    hire_date: Some("2020-01-10".to_string()),
                    team: Some(json!(5)),
                    oab_number: None,
                    oab_uf: None,
                }],
                roles: vec![RoleRecord {
                    id: json!(1),
                    name: "Advogada".to_string(),
                }],
                teams: vec![TeamRecord {
                    id: json!(5),
                    name: "Comercial".to_string(),
                }],
            },
            screening: None,
        }
    }

    #[test]
    fn audit_request_accepts_flattened_tables() {
        let payload = json!({
            "collaborators": [
                { "id": 1, "name": "Ana", "status": "Ativo", "hire_date": "2020-01-10", "role": 1, "equipe": 5 }
            ],
            "roles": [ { "id": 1, "name": "Advogada" } ],
            "teams": [ { "id": 5, "name": "Comercial" } ]
        });
        let request: AuditRequest = serde_json::from_value(payload).expect("deserializes");
        assert_eq!(request.snapshot.collaborators.len(), 1);
        assert!(request.screening.is_none());
    }

    #[tokio::test]
    async fn audit_handler_returns_summary() {
        let response = audit_handler(axum::Json(request())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
