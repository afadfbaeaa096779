//! Game configuration types.
//!
//! A [`GameConfig`] carries everything needed to start a game: the board
//! extents and starting layout, who plays each side, and the limits of the
//! run. The command line maps its flags onto one of these.

use crate::agent::ai::Difficulty;
use crate::game_repr::{Color, DEFAULT_COLS, DEFAULT_ROWS, STARTING_LAYOUT};

/// Default cap on the number of plies before a game is called a draw
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player typing moves on the console
    Human,
    /// Uniformly random legal moves, reproducible with a seed
    Random { seed: Option<u64> },
    /// AI player with specified difficulty
    AI { difficulty: Difficulty },
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// Starting position in the compact row layout
    pub layout: String,
    /// Configuration for the White player
    pub white_player: PlayerConfig,
    /// Configuration for the Black player
    pub black_player: PlayerConfig,
    /// `None` plays until mate or stalemate
    pub max_plies: Option<u32>,
    /// Search threads for AI players, `None` searches on the game thread
    pub threads: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pvai(Color::White, Difficulty::default())
    }
}

impl GameConfig {
    fn with_players(white_player: PlayerConfig, black_player: PlayerConfig) -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            layout: STARTING_LAYOUT.to_string(),
            white_player,
            black_player,
            max_plies: Some(DEFAULT_MAX_PLIES),
            threads: None,
        }
    }

    /// Create a PvP game configuration.
    pub fn pvp() -> Self {
        Self::with_players(PlayerConfig::Human, PlayerConfig::Human)
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `user_color` - The color the human player will play as
    /// * `ai_difficulty` - The difficulty level for the AI opponent
    pub fn pvai(user_color: Color, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::AI {
            difficulty: ai_difficulty,
        };
        match user_color {
            Color::White => Self::with_players(PlayerConfig::Human, ai),
            Color::Black => Self::with_players(ai, PlayerConfig::Human),
        }
    }

    /// Create an AIvAI game configuration.
    pub fn aivai(white_difficulty: Difficulty, black_difficulty: Difficulty) -> Self {
        Self::with_players(
            PlayerConfig::AI {
                difficulty: white_difficulty,
            },
            PlayerConfig::AI {
                difficulty: black_difficulty,
            },
        )
    }

    /// Replaces the board extents and starting layout.
    pub fn with_layout(mut self, rows: u8, cols: u8, layout: impl Into<String>) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.layout = layout.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (5, 4));
        assert_eq!(config.layout, STARTING_LAYOUT);
        assert_eq!(config.max_plies, Some(DEFAULT_MAX_PLIES));
        assert_eq!(config.threads, None);
        assert_eq!(config.white_player, PlayerConfig::Human);
    }

    #[test]
    fn test_pvp_config() {
        let config = GameConfig::pvp();
        assert_eq!(config.white_player, PlayerConfig::Human);
        assert_eq!(config.black_player, PlayerConfig::Human);
    }

    #[test]
    fn test_pvai_config_black() {
        let config = GameConfig::pvai(Color::Black, Difficulty::Easy);
        assert_eq!(
            config.white_player,
            PlayerConfig::AI {
                difficulty: Difficulty::Easy
            }
        );
        assert_eq!(config.black_player, PlayerConfig::Human);
    }

    #[test]
    fn test_aivai_config() {
        let config = GameConfig::aivai(Difficulty::Medium, Difficulty::Expert);
        assert_eq!(
            config.black_player,
            PlayerConfig::AI {
                difficulty: Difficulty::Expert
            }
        );
    }

    #[test]
    fn test_with_layout() {
        let config = GameConfig::pvp().with_layout(6, 6, "6/6/6/6/6/k4K");
        assert_eq!((config.rows, config.cols), (6, 6));
        assert_eq!(config.layout, "6/6/6/6/6/k4K");
    }
}
