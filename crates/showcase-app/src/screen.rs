use serde::Serialize;

/// The mutually exclusive screens of the client. Exactly one is active.
///
/// Transitions happen only on explicit user navigation or on completion of
/// an auth operation (login/signup success lands on `Dashboard`, logout on
/// `Landing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Landing,
    Login,
    Dashboard,
    Upload,
    Videos,
    Rankings,
    Profile,
    VideoExpanded,
}

impl Screen {
    /// Screens that require an active session. Entering one without a
    /// session shows the access-restricted placeholder instead.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Screen::Dashboard | Screen::Upload | Screen::Profile | Screen::VideoExpanded
        )
    }

    /// Whether entering this screen loads the public video list.
    pub fn loads_public_videos(&self) -> bool {
        matches!(self, Screen::Videos | Screen::Dashboard)
    }

    /// Whether entering this screen loads the rankings for the selected city.
    pub fn loads_rankings(&self) -> bool {
        matches!(self, Screen::Rankings | Screen::Dashboard)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Rising Stars Showcase",
            Screen::Login => "Iniciar Sesión",
            Screen::Dashboard => "Panel",
            Screen::Upload => "Subir Video",
            Screen::Videos => "Videos de Competencia",
            Screen::Rankings => "Rankings",
            Screen::Profile => "Perfil",
            Screen::VideoExpanded => "Video",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_screens() {
        assert!(Screen::Dashboard.requires_session());
        assert!(Screen::Upload.requires_session());
        assert!(Screen::Profile.requires_session());
        assert!(Screen::VideoExpanded.requires_session());

        assert!(!Screen::Landing.requires_session());
        assert!(!Screen::Login.requires_session());
        assert!(!Screen::Videos.requires_session());
        assert!(!Screen::Rankings.requires_session());
    }

    #[test]
    fn entry_fetch_sets() {
        assert!(Screen::Dashboard.loads_public_videos());
        assert!(Screen::Dashboard.loads_rankings());
        assert!(Screen::Videos.loads_public_videos());
        assert!(!Screen::Videos.loads_rankings());
        assert!(Screen::Rankings.loads_rankings());
        assert!(!Screen::Rankings.loads_public_videos());
        assert!(!Screen::Landing.loads_public_videos());
    }
}
