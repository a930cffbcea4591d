use std::fmt;

/// Board edge length. The canonical ruleset is fixed at 8x8.
pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on the bottom three ranks and moves first.
    X,
    /// Starts on the top three ranks.
    O,
}
impl Side {
    pub const ALL: [Side; 2] = [Side::X, Side::O];

    pub fn other(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
    pub fn letter(self) -> char {
        match self {
            Side::X => 'x',
            Side::O => 'o',
        }
    }
    /// Row delta of a pawn step toward the opponent.
    pub fn forward(self) -> i8 {
        match self {
            Side::X => -1,
            Side::O => 1,
        }
    }
    /// The rank farthest from this side's starting ranks.
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::X => 0,
            Side::O => (BOARD_SIZE - 1) as u8,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter().to_ascii_uppercase())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn pawn(side: Side) -> Self {
        Self {
            side,
            kind: PieceKind::Pawn,
        }
    }
    pub const fn king(side: Side) -> Self {
        Self {
            side,
            kind: PieceKind::King,
        }
    }
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }
}

/// One square's occupant. `None` is an empty square, which is never a king.
pub type Cell = Option<Piece>;

/// Printable identity of a cell: `_` when empty, lowercase side letter for a
/// pawn, uppercase for a king.
pub fn cell_glyph(cell: Cell) -> char {
    match cell {
        None => '_',
        Some(pc) if pc.is_king() => pc.side.letter().to_ascii_uppercase(),
        Some(pc) => pc.side.letter(),
    }
}

/// Inverse of [`cell_glyph`]. Accepts `.` as an alternative empty glyph.
pub fn cell_from_glyph(ch: char) -> Option<Cell> {
    match ch {
        '_' | '.' => Some(None),
        'x' => Some(Some(Piece::pawn(Side::X))),
        'o' => Some(Some(Piece::pawn(Side::O))),
        'X' => Some(Some(Piece::king(Side::X))),
        'O' => Some(Some(Piece::king(Side::O))),
        _ => None,
    }
}

/// A board coordinate. Row 0 is the topmost rank, column 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Bounds-checked construction from signed coordinates.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Playable squares are the ones where row and column parities differ.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + drow, self.col as i8 + dcol)
    }

    /// Row distance if `other` lies on one of this square's diagonals.
    pub fn diagonal_distance(self, other: Square) -> Option<u8> {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == dc && dr > 0).then_some(dr)
    }

    /// Squares strictly between `self` and `other`, walking from `self`.
    /// Empty when the two do not share a diagonal.
    pub fn path_to(self, other: Square) -> Vec<Square> {
        let Some(dist) = self.diagonal_distance(other) else {
            return Vec::new();
        };
        let dr = if other.row > self.row { 1 } else { -1 };
        let dc = if other.col > self.col { 1 } else { -1 };
        (1..dist as i8)
            .filter_map(|step| self.offset(dr * step, dc * step))
            .collect()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::square_to_coord(*self))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

// Helpers
pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}
