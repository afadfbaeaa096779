//! Cell coordinates, direction tables and the ray line helpers.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// A cell as `(row, col)`. Row 0 is Black's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

pub type Offset = (i8, i8);

/// Square lists returned by move generation (a queen on 5x4 reaches at most 13 cells)
pub type Squares = SmallVec<[Square; 16]>;

pub const ORTHOGONAL: [Offset; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub const DIAGONAL: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn offset(self, (dr, dc): Offset) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a ray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Axis {
    pub fn of((dr, dc): Offset) -> Self {
        if dc == 0 {
            Axis::Vertical
        } else if dr == 0 {
            Axis::Horizontal
        } else {
            Axis::Diagonal
        }
    }
}

/// Cells strictly between two points sharing a row, column or diagonal.
///
/// Fails with [`Error::Misaligned`] for any other pair, including a point
/// paired with itself, so the walk can never run past `to`.
pub fn line_between(from: Square, to: Square) -> Result<Squares> {
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    let aligned = (dr != 0 || dc != 0) && (dr == 0 || dc == 0 || dr.abs() == dc.abs());
    if !aligned {
        return Err(Error::Misaligned { from, to });
    }

    let step = (dr.signum(), dc.signum());
    let mut cells = Squares::new();
    let mut cursor = from.offset(step);
    while cursor != to {
        cells.push(cursor);
        cursor = cursor.offset(step);
    }
    Ok(cells)
}

/// Cells a blocking or capturing move must land on to answer a line check.
pub fn check_line(king: Square, attacker: Square) -> Result<Squares> {
    let mut line = line_between(king, attacker)?;
    line.push(attacker);
    Ok(line)
}

/// Cells a pinned piece may occupy without exposing its king.
pub fn pin_line(pinned: Square, attacker: Square) -> Result<Squares> {
    let mut line = line_between(pinned, attacker)?;
    line.push(attacker);
    Ok(line)
}
