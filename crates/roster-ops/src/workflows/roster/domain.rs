use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dates::HireDateParts;

/// Raw collaborator row as returned by the roster store.
///
/// The store is loosely typed: ids arrive as numbers or strings, the role and
/// team columns hold either a foreign key or a free-text label, and most text
/// columns can be null. Only `id` and `name` are required; a row missing
/// either is a malformed payload and fails at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorRecord {
    pub id: Value,
    pub name: String,
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hire_date: Option<String>,
    /// Team foreign key; the store column kept its original name.
    #[serde(default, rename = "equipe")]
    pub team: Option<Value>,
    #[serde(default)]
    pub oab_number: Option<String>,
    #[serde(default)]
    pub oab_uf: Option<String>,
}

/// Reference row for the roles table, fetched once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: Value,
    pub name: String,
}

/// Reference row for the teams table, fetched once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: Value,
    pub name: String,
}

/// The three tables one audit pass consumes, all fetched up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub collaborators: Vec<CollaboratorRecord>,
    #[serde(default)]
    pub roles: Vec<RoleRecord>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
}

/// Collaborator admitted by the roster screen, with references resolved.
///
/// `hire_date_parts` is `None` when the hire date did not decompose; the
/// record stays eligible and the failure is reported separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibleCollaborator {
    pub record: CollaboratorRecord,
    pub role_name: String,
    pub team_name: String,
    pub hire_date_parts: Option<HireDateParts>,
}
