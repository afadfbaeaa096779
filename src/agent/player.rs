//! Player trait and associated types for game agents.
//!
//! A player is anything that can pick a move for one side: a person at the
//! console, the minimax engine, or a random mover used for testing. The
//! [`Game`](crate::orchestrator::Game) loop asks the player whose turn it is
//! and validates the answer against the legal move list before applying it.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Each
//! implementation needs different setup (an input stream, a search depth, a
//! seed), so the trait does not define a constructor.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. A human player waits for a line of input and an
//! AI player runs its search to completion; the loop simply waits for the
//! answer.

use crate::error::Result;
use crate::game_repr::{Board, Color, Move};

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated or resigned
    WhiteWins,
    /// White was checkmated or resigned
    BlackWins,
    /// The side to move has no legal moves and is not in check
    Stalemate,
    /// The ply limit was reached
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Stalemate | GameResult::Draw => None,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `get_move()` must be implemented. The notification hooks default to
/// doing nothing.
pub trait Player {
    /// Request the next move for `color` in the position on `board`.
    ///
    /// # Return Value
    ///
    /// - `Ok(Some(mv))`: the chosen move; a promotion move carries its choice
    /// - `Ok(None)`: the player resigns or has nothing to offer (end of input)
    /// - `Err(_)`: the board is in a corrupted state or input failed
    fn get_move(&mut self, board: &Board, color: Color) -> Result<Option<Move>>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Display name used in logs
    fn name(&self) -> &str {
        "Player"
    }
}
