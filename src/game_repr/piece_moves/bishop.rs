use crate::game_repr::{Board, Color, Square, Squares, DIAGONAL};

impl Board {
    pub(crate) fn bishop_moves(&self, from: Square, color: Color) -> Squares {
        let mut moves = Squares::new();
        self.slide_moves_into(from, color, &DIAGONAL, &mut moves);
        moves
    }

    pub(crate) fn bishop_attacks(&self, from: Square) -> Squares {
        let mut attacks = Squares::new();
        self.slide_attacks_into(from, &DIAGONAL, &mut attacks);
        attacks
    }
}
