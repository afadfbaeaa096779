use crate::game_repr::{Board, Color, Square, Squares, ORTHOGONAL};

impl Board {
    pub(crate) fn rook_moves(&self, from: Square, color: Color) -> Squares {
        let mut moves = Squares::new();
        self.slide_moves_into(from, color, &ORTHOGONAL, &mut moves);
        moves
    }

    pub(crate) fn rook_attacks(&self, from: Square) -> Squares {
        let mut attacks = Squares::new();
        self.slide_attacks_into(from, &ORTHOGONAL, &mut attacks);
        attacks
    }
}
