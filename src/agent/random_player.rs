//! Player that picks a uniformly random legal move.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::player::Player;
use crate::error::Result;
use crate::game_repr::{Board, Color, Move};

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }

    /// Same seed, same sequence of moves
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: format!("Random ({seed})"),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board, color: Color) -> Result<Option<Move>> {
        let moves = board.legal_moves_for(color)?;
        let choice = moves.choose(&mut self.rng).copied();
        debug!("[{}] picked {:?} out of {} moves", self.name, choice, moves.len());
        Ok(choice)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_player_picks_legal_moves() {
        let board = Board::starting_position().unwrap();
        let legal = board.legal_moves_for(Color::White).unwrap();
        let mut player = RandomPlayer::with_seed(7);

        for _ in 0..20 {
            let mv = player.get_move(&board, Color::White).unwrap().unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::starting_position().unwrap();
        let mut a = RandomPlayer::with_seed(42);
        let mut b = RandomPlayer::with_seed(42);

        for _ in 0..10 {
            assert_eq!(
                a.get_move(&board, Color::Black).unwrap(),
                b.get_move(&board, Color::Black).unwrap()
            );
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::from_layout(5, 4, "k3/4/1Q2/4/3K").unwrap();
        let mut player = RandomPlayer::with_seed(1);
        assert_eq!(player.get_move(&board, Color::Black).unwrap(), None);
    }
}
