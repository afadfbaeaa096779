//! Compact row-encoded layouts: rows split by `/`, a digit run is that many
//! empty cells, a letter is one piece (uppercase White, lowercase Black).

use std::fmt;

use super::*;
use crate::error::{Error, Result};

pub const DEFAULT_ROWS: u8 = 5;
pub const DEFAULT_COLS: u8 = 4;
pub const STARTING_LAYOUT: &str = "knbr/p3/4/3P/RBNK";

impl Board {
    /// Builds a board from a layout string, placing pieces row by row.
    pub fn from_layout(rows: u8, cols: u8, layout: &str) -> Result<Board> {
        if !(1..=64).contains(&rows) || !(1..=64).contains(&cols) {
            return Err(Error::BoardSize { rows, cols });
        }
        let mut board = Board::new(rows, cols);
        let lines: Vec<&str> = layout.trim().split('/').collect();
        if lines.len() != rows as usize {
            return Err(Error::LayoutRows {
                expected: rows as usize,
                found: lines.len(),
            });
        }

        for (row, line) in lines.iter().enumerate() {
            let mut col = 0usize;
            let mut empty_run = 0usize;
            for c in line.chars() {
                if let Some(digit) = c.to_digit(10) {
                    empty_run = empty_run * 10 + digit as usize;
                    continue;
                }
                col += std::mem::take(&mut empty_run);
                let piece = Piece::from_char(c).ok_or(Error::LayoutChar(c))?;
                if col >= cols as usize {
                    return Err(Error::LayoutWidth {
                        row,
                        expected: cols as usize,
                        found: col + 1,
                    });
                }
                board.put(piece, Square::new(row as i8, col as i8))?;
                col += 1;
            }
            col += empty_run;
            if col != cols as usize {
                return Err(Error::LayoutWidth {
                    row,
                    expected: cols as usize,
                    found: col,
                });
            }
        }

        Ok(board)
    }

    /// The 5x4 opening position
    pub fn starting_position() -> Result<Board> {
        Self::from_layout(DEFAULT_ROWS, DEFAULT_COLS, STARTING_LAYOUT)
    }

    /// Converts the board to its layout string
    pub fn to_layout(&self) -> String {
        let mut layout = String::new();
        for row in 0..self.rows() as i8 {
            if row > 0 {
                layout.push('/');
            }
            let mut empty_count = 0;
            for col in 0..self.cols() as i8 {
                match self.occupant(Square::new(row, col)) {
                    None => empty_count += 1,
                    Some((_, piece)) => {
                        if empty_count > 0 {
                            layout.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        layout.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                layout.push_str(&empty_count.to_string());
            }
        }
        layout
    }
}

/// One line per row, `|K|.|.|r|`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() as i8 {
            write!(f, "|")?;
            for col in 0..self.cols() as i8 {
                let c = self
                    .occupant(Square::new(row, col))
                    .map_or('.', |(_, piece)| piece.to_char());
                write!(f, "{c}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
