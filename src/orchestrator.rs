//! Turn management for one game.
//!
//! [`Game`] owns the board and the two players. Each [`Game::step`] asks the
//! player to move for a move, checks it against the legal move list, applies
//! it and hands the turn over. The game ends on checkmate, stalemate, a
//! resignation (a player returning no move) or the ply limit.
//!
//! ```text
//! [Check End] -> [Request Move] -> [Validate] -> [Execute Move] -> [Switch Turn] -> [Check End] ...
//! ```

use std::fmt;

use log::info;

use crate::agent::player::{GameResult, Player};
use crate::agent::{HumanPlayer, MinimaxPlayer, RandomPlayer};
use crate::config::{GameConfig, PlayerConfig};
use crate::error::{Error, Result};
use crate::game_repr::{Board, Color, Move, Square};

/// A move as it was played, with the cell the piece left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub color: Color,
    pub from: Square,
    pub mv: Move,
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.mv.to)?;
        if let Some(choice) = self.mv.promotion {
            write!(f, "={}", choice.symbol().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

pub struct Game {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    turn: Color,
    ply: u32,
    max_plies: Option<u32>,
    history: Vec<PlayedMove>,
    result: Option<GameResult>,
}

/// Builds the player described by `config`.
///
/// Fails only when an AI player's thread pool cannot be built.
pub fn create_player(config: PlayerConfig, color: Color, threads: Option<usize>) -> Result<Box<dyn Player>> {
    let player: Box<dyn Player> = match config {
        PlayerConfig::Human => Box::new(HumanPlayer::stdio(format!("{color:?}"))),
        PlayerConfig::Random { seed: Some(seed) } => Box::new(RandomPlayer::with_seed(seed)),
        PlayerConfig::Random { seed: None } => Box::new(RandomPlayer::new()),
        PlayerConfig::AI { difficulty } => {
            Box::new(MinimaxPlayer::with_difficulty(difficulty).with_threads(threads)?)
        }
    };
    Ok(player)
}

impl Game {
    /// White moves first.
    pub fn new(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            board,
            white,
            black,
            turn: Color::White,
            ply: 0,
            max_plies: None,
            history: Vec::new(),
            result: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let board = Board::from_layout(config.rows, config.cols, &config.layout)?;
        let white = create_player(config.white_player, Color::White, config.threads)?;
        let black = create_player(config.black_player, Color::Black, config.threads)?;
        info!(
            "new game {}x{} '{}': {} vs {}",
            config.rows,
            config.cols,
            config.layout,
            white.name(),
            black.name()
        );
        Ok(Self::new(board, white, black).with_max_plies(config.max_plies))
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Hands the first move to `color` instead of White.
    pub fn with_turn(mut self, color: Color) -> Self {
        self.turn = color;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Final result once the game has ended
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Result of the current position, if it ends the game.
    pub fn status(&self) -> Result<Option<GameResult>> {
        if let Some(result) = self.result {
            return Ok(Some(result));
        }
        if self.board.is_checkmate(self.turn)? {
            return Ok(Some(GameResult::from_winner(self.turn.opposite())));
        }
        if self.board.is_stalemate(self.turn)? {
            return Ok(Some(GameResult::Stalemate));
        }
        if self.max_plies.is_some_and(|max| self.ply >= max) {
            return Ok(Some(GameResult::Draw));
        }
        Ok(None)
    }

    /// Applies `mv` for the side to move after checking it is legal.
    pub fn execute_move(&mut self, mv: Move) -> Result<()> {
        let legal = self.board.legal_moves_for(self.turn)?;
        if !legal.contains(&mv) {
            return Err(Error::IllegalMove(mv));
        }

        let played = PlayedMove {
            color: self.turn,
            from: self.board.square_of(mv.piece)?,
            mv,
        };
        self.board.make_move(mv)?;
        self.history.push(played);
        self.ply += 1;
        info!("ply {}: {:?} plays {played}", self.ply, self.turn);

        self.turn = self.turn.opposite();
        Ok(())
    }

    fn finish(&mut self, result: GameResult) -> GameResult {
        info!("game over after {} plies: {result:?}", self.ply);
        self.result = Some(result);
        self.white.game_ended(result);
        self.black.game_ended(result);
        result
    }

    /// Plays one ply. Returns the result when the game is over.
    pub fn step(&mut self) -> Result<Option<GameResult>> {
        if let Some(result) = self.result {
            return Ok(Some(result));
        }
        if let Some(result) = self.status()? {
            return Ok(Some(self.finish(result)));
        }

        let turn = self.turn;
        let player = match turn {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let Some(mv) = player.get_move(&self.board, turn)? else {
            info!("{turn:?} resigns");
            return Ok(Some(self.finish(GameResult::from_winner(turn.opposite()))));
        };

        self.execute_move(mv)?;
        match turn {
            Color::White => self.black.opponent_moved(mv),
            Color::Black => self.white.opponent_moved(mv),
        }
        Ok(None)
    }

    /// Plays until the game ends.
    pub fn play(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }
}
