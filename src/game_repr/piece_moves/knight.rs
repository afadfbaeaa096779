use crate::game_repr::{Board, Color, Square, Squares, KNIGHT_OFFSETS};

impl Board {
    /// Knight jumps onto empty or enemy cells
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> Squares {
        let mut moves = Squares::new();
        self.step_moves_into(from, color, &KNIGHT_OFFSETS, &mut moves);
        moves
    }

    pub(crate) fn knight_attacks(&self, from: Square) -> Squares {
        let mut attacks = Squares::new();
        self.step_attacks_into(from, &KNIGHT_OFFSETS, &mut attacks);
        attacks
    }
}
