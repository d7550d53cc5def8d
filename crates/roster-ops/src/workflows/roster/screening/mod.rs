mod config;

pub use config::ScreeningConfig;

/// Stateless screen applying the keyword vocabulary to normalized fields.
///
/// The two stages are deliberately separate methods: the audit counts how many
/// records survive each one, and the status gate must short-circuit before the
/// role/team gate is ever consulted.
pub struct ScreeningEngine {
    config: ScreeningConfig,
}

impl ScreeningEngine {
    pub fn new(config: ScreeningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Stage A: the normalized status must read as active. The negated forms
    /// are checked first because they contain the active marker.
    pub fn is_active(&self, normalized_status: &str) -> bool {
        if normalized_status.is_empty() {
            return false;
        }
        if self
            .config
            .inactive_markers
            .iter()
            .any(|marker| normalized_status.contains(marker.as_str()))
        {
            return false;
        }

        normalized_status.contains(self.config.active_marker.as_str())
    }

    /// Stage B: legal staff by role text, or independently by a
    /// legal-department team. An empty resolved name matches nothing.
    pub fn is_legal_staff(&self, normalized_role: &str, normalized_team: &str) -> bool {
        let role_hit = !normalized_role.is_empty()
            && self
                .config
                .role_keywords
                .iter()
                .any(|keyword| normalized_role.contains(keyword.as_str()));
        let team_hit = !normalized_team.is_empty()
            && self
                .config
                .team_keywords
                .iter()
                .any(|keyword| normalized_team.contains(keyword.as_str()));

        role_hit || team_hit
    }
}
