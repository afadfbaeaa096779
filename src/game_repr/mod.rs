mod analysis;
mod board;
mod layout;
mod legal;
mod moves;
mod piece;
mod piece_moves;
mod square;

#[cfg(test)]
mod tests;

pub use analysis::*;
pub use board::*;
pub use layout::*;
pub use legal::*;
pub use moves::*;
pub use piece::*;
pub use square::*;
