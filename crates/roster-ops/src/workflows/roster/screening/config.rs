use serde::{Deserialize, Serialize};

/// Keyword vocabulary driving the active-legal-staff screen.
///
/// The matching is substring-based over normalized text, so every entry here
/// must already be lower-case and diacritic-free. Kept as data rather than
/// inlined literals so a localized deployment can swap the vocabulary without
/// touching the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Substring a normalized status must contain to count as active.
    pub active_marker: String,
    /// Negated forms that veto the active marker ("inativo" contains "ativ").
    pub inactive_markers: Vec<String>,
    /// Role-name substrings identifying legal practice staff.
    pub role_keywords: Vec<String>,
    /// Team-name substrings identifying the legal department.
    pub team_keywords: Vec<String>,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            active_marker: "ativ".to_string(),
            inactive_markers: vec!["inativ".to_string()],
            role_keywords: [
                "advogad",
                "socio",
                "socia",
                "estagiario",
                "estagiaria",
                "juridico",
                "legal",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            team_keywords: vec!["juridico".to_string()],
        }
    }
}
