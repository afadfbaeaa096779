use std::fmt;

use super::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Enumeration order used by the registry and by move generation
    pub const ALL: [Type; 6] = [
        Type::King,
        Type::Queen,
        Type::Rook,
        Type::Bishop,
        Type::Knight,
        Type::Pawn,
    ];

    /// Kinds a pawn may become on the far rank
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    fn index(self) -> usize {
        match self {
            Type::King => 0,
            Type::Queen => 1,
            Type::Rook => 2,
            Type::Bishop => 3,
            Type::Knight => 4,
            Type::Pawn => 5,
        }
    }

    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// True for the sliders whose movement covers rays of this axis.
    pub fn slides_along(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal | Axis::Vertical => matches!(self, Type::Rook | Type::Queen),
            Axis::Diagonal => matches!(self, Type::Bishop | Type::Queen),
        }
    }

    /// Lowercase layout letter
    pub fn symbol(self) -> char {
        match self {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        }
    }

    pub fn from_symbol(c: char) -> Option<Type> {
        match c.to_ascii_lowercase() {
            'k' => Some(Type::King),
            'q' => Some(Type::Queen),
            'r' => Some(Type::Rook),
            'b' => Some(Type::Bishop),
            'n' => Some(Type::Knight),
            'p' => Some(Type::Pawn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn step. White starts on the last row and walks up.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }
}

/// Color and kind of a piece. Doubles as the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    /// Number of distinct (color, kind) keys
    pub const COUNT: usize = 12;

    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Uppercase is White, lowercase is Black.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = Type::from_symbol(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = self.piece_type.symbol();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    pub(crate) fn index(&self) -> usize {
        self.color.index() * Type::ALL.len() + self.piece_type.index()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Identity of one piece object owned by a [`Board`](super::Board).
///
/// Two ids are equal exactly when they name the same object; a captured
/// piece keeps its id while it is off the board so undo can put the very
/// same object back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
