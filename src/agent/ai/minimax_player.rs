//! MinimaxPlayer - AI player backed by the exhaustive minimax search
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 1, takes the best immediate outcome
//! - **Medium**: Depth 2, sees the opponent's reply
//! - **Hard**: Depth 3
//! - **Expert**: Depth 4
//!
//! Without pruning the tree grows with the full branching factor, so depths
//! stay small; the 5x4 board keeps branching around a dozen moves.
//!
//! # Examples
//!
//! ```ignore
//! use minichess::agent::ai::{MinimaxPlayer, Difficulty};
//!
//! let ai = MinimaxPlayer::with_difficulty(Difficulty::Medium);
//! let parallel = MinimaxPlayer::with_difficulty(Difficulty::Expert).with_threads(Some(4))?;
//! ```

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::evaluation::{Evaluator, MaterialEvaluator};
use super::search::{search, search_parallel, SearchResult};
use crate::agent::player::Player;
use crate::error::Result;
use crate::game_repr::{Board, Color, Move};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Get the maximum search depth for this difficulty level, in plies
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Where the root moves of a search run
enum Parallelism {
    /// On the calling thread
    Sequential,
    /// On rayon's global pool
    GlobalPool,
    /// On a pool owned by the player, built once
    Pool(ThreadPool),
}

/// AI Player that runs minimax to a fixed depth
///
/// Deterministic: the same position and depth always yield the same move.
/// The search runs on a clone of the game board, so the game state is never
/// touched by the player.
pub struct MinimaxPlayer<E = MaterialEvaluator> {
    depth: u8,
    evaluator: E,
    parallelism: Parallelism,
    name: String,
    last_search: Option<SearchResult>,
}

impl MinimaxPlayer<MaterialEvaluator> {
    /// Create a new MinimaxPlayer with the default evaluator and an auto-generated name
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty.max_depth(), MaterialEvaluator, name)
    }
}

impl<E: Evaluator + Sync> MinimaxPlayer<E> {
    pub fn new(depth: u8, evaluator: E, name: impl Into<String>) -> Self {
        Self {
            depth: depth.max(1),
            evaluator,
            parallelism: Parallelism::Sequential,
            name: name.into(),
            last_search: None,
        }
    }

    /// `None` searches on the calling thread. `Some(0)` splits the root over
    /// rayon's global pool; `Some(n)` builds a pool of `n` threads for this
    /// player's lifetime.
    pub fn with_threads(mut self, threads: Option<usize>) -> Result<Self> {
        self.parallelism = match threads {
            None => Parallelism::Sequential,
            Some(0) => Parallelism::GlobalPool,
            Some(n) => Parallelism::Pool(ThreadPoolBuilder::new().num_threads(n).build()?),
        };
        Ok(self)
    }

    /// Search threads in use, 1 for a sequential player
    pub fn threads(&self) -> usize {
        match &self.parallelism {
            Parallelism::Sequential => 1,
            Parallelism::GlobalPool => rayon::current_num_threads(),
            Parallelism::Pool(pool) => pool.current_num_threads(),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Statistics of the most recent search
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl<E: Evaluator + Sync> Player for MinimaxPlayer<E> {
    fn get_move(&mut self, board: &Board, color: Color) -> Result<Option<Move>> {
        let (depth, evaluator) = (self.depth, &self.evaluator);
        let result = match &self.parallelism {
            Parallelism::Sequential => search(&mut board.clone(), color, depth, evaluator)?,
            Parallelism::GlobalPool => search_parallel(board, color, depth, evaluator)?,
            Parallelism::Pool(pool) => pool.install(|| search_parallel(board, color, depth, evaluator))?,
        };

        debug!(
            "[{}] depth {}, {} nodes, score {}",
            self.name, result.depth, result.nodes_searched, result.score
        );

        let best_move = result.best_move;
        self.last_search = Some(result);
        Ok(best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
