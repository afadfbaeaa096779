use crate::game_repr::{Board, Color, Square, Squares};

impl Board {
    /// One step forward onto an empty cell, or a diagonal-forward capture.
    /// No double step and no en passant on this board.
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> Squares {
        let forward = color.forward();
        let mut moves = Squares::new();

        let ahead = from.offset((forward, 0));
        if self.is_valid_position(ahead) && self.occupant(ahead).is_none() {
            moves.push(ahead);
        }

        for side in [-1, 1] {
            let target = from.offset((forward, side));
            if let Some((_, p)) = self.occupant(target) {
                if p.color != color {
                    moves.push(target);
                }
            }
        }

        moves
    }

    pub(crate) fn pawn_attacks(&self, from: Square, color: Color) -> Squares {
        let forward = color.forward();
        let mut attacks = Squares::new();
        self.step_attacks_into(from, &[(forward, -1), (forward, 1)], &mut attacks);
        attacks
    }

    /// Row a pawn of `color` promotes on
    pub fn promotion_row(&self, color: Color) -> i8 {
        match color {
            Color::White => 0,
            Color::Black => self.rows() as i8 - 1,
        }
    }
}
