use crate::game_repr::{Board, Color, Square, Squares, ALL_DIRECTIONS};

impl Board {
    // rook + bishop rays
    pub(crate) fn queen_moves(&self, from: Square, color: Color) -> Squares {
        let mut moves = Squares::new();
        self.slide_moves_into(from, color, &ALL_DIRECTIONS, &mut moves);
        moves
    }

    pub(crate) fn queen_attacks(&self, from: Square) -> Squares {
        let mut attacks = Squares::new();
        self.slide_attacks_into(from, &ALL_DIRECTIONS, &mut attacks);
        attacks
    }
}
