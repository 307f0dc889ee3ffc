//! Game configuration

/// How the target equation is picked from the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Uniformly at random
    #[default]
    Random,
    /// Always the first corpus entry
    First,
}

/// Settings for a [`super::GameSession`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub selection: Selection,
    /// Seed for random selection; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Show the target equation up front (for testing)
    pub show_target: bool,
    /// Show the reason an invalid guess was rejected
    pub show_errors: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            selection: Selection::Random,
            seed: None,
            show_target: false,
            show_errors: true,
        }
    }
}

impl GameConfig {
    /// Deterministic configuration: always play the first corpus entry
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            selection: Selection::First,
            ..Self::default()
        }
    }
}
