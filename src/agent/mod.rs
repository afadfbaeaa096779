pub mod ai;
pub mod human_player;
pub mod player;
pub mod random_player;

pub use ai::{Difficulty, MinimaxPlayer};
pub use human_player::HumanPlayer;
pub use player::{GameResult, Player};
pub use random_player::RandomPlayer;
