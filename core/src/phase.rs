use core::fmt;
use serde::{Deserialize, Serialize};

/// Phases of a session, in the order a round walks through them.
///
/// Valid transitions:
/// - Launched -> ArgumentsReady
/// - ArgumentsReady -> LayoutReady
/// - ArgumentsReady -> Launched (rejected arguments)
/// - LayoutReady -> GameReady (first click)
/// - GameReady -> GameSuccess
/// - GameReady -> GameFail
/// - GameReady, GameSuccess, GameFail -> LayoutReady (restart)
/// - any phase but Launched -> ArgumentsReady (new arguments)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Initial phase, nothing configured yet
    #[default]
    Launched,
    /// Board parameters accepted, grid not allocated
    ArgumentsReady,
    /// Grid allocated, waiting for the first click to place mines
    LayoutReady,
    /// Mines placed, game in progress
    GameReady,
    /// Game ended and player won
    GameSuccess,
    /// Game ended and player lost
    GameFail,
}

impl GamePhase {
    pub const fn name(self) -> &'static str {
        use GamePhase::*;
        match self {
            Launched => "Launched",
            ArgumentsReady => "ArgumentsReady",
            LayoutReady => "LayoutReady",
            GameReady => "GameReady",
            GameSuccess => "GameSuccess",
            GameFail => "GameFail",
        }
    }

    /// Whether the board grid exists and can be shown
    pub const fn has_layout(self) -> bool {
        use GamePhase::*;
        match self {
            Launched => false,
            ArgumentsReady => false,
            LayoutReady => true,
            GameReady => true,
            GameSuccess => true,
            GameFail => true,
        }
    }

    /// Whether mines have been placed this round
    pub const fn has_content(self) -> bool {
        matches!(self, Self::GameReady | Self::GameSuccess | Self::GameFail)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameSuccess | Self::GameFail)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_precedes_content() {
        use GamePhase::*;
        for phase in [Launched, ArgumentsReady, LayoutReady, GameReady, GameSuccess, GameFail] {
            if phase.has_content() {
                assert!(phase.has_layout(), "{phase} has content without layout");
            }
            if phase.is_finished() {
                assert!(phase.has_content(), "{phase} finished without content");
            }
        }
    }

    #[test]
    fn default_is_launched() {
        assert_eq!(GamePhase::default(), GamePhase::Launched);
        assert_eq!(GamePhase::default().to_string(), "Launched");
    }
}
