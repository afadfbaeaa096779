use crate::game_repr::{Board, Color, Square, Squares, ALL_DIRECTIONS};

impl Board {
    /// Adjacent cells that are on the board and not friendly. Safety is
    /// checked separately by [`Self::safe_king_moves`].
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> Squares {
        let mut moves = Squares::new();
        self.step_moves_into(from, color, &ALL_DIRECTIONS, &mut moves);
        moves
    }

    pub(crate) fn king_attacks(&self, from: Square) -> Squares {
        let mut attacks = Squares::new();
        self.step_attacks_into(from, &ALL_DIRECTIONS, &mut attacks);
        attacks
    }

    /// King destinations not attacked by the opponent. The king's own cell is
    /// treated as empty so it cannot retreat along the ray of a checking slider.
    pub(crate) fn safe_king_moves(&self, from: Square, color: Color) -> Squares {
        let mut moves = self.king_moves(from, color);
        moves.retain(|target| !self.attacked_ignoring(*target, color.opposite(), Some(from)));
        moves
    }
}
