use crate::error::CheckersError;
use crate::types::*;

/// Number of ranks each side fills at the start of a game.
const START_RANKS: usize = 3;

/// A complete game snapshot: the grid, the side to move and, while a capture
/// chain is in progress, the square of the piece that must keep jumping.
///
/// Every move produces a fresh `Board`; a snapshot handed to a caller is never
/// modified behind its back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    turn: Side,
    pending_chain: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position with `x` to move.
    pub fn new() -> Self {
        let mut b = Self::empty(Side::X);
        b.populate();
        b
    }

    pub fn empty(turn: Side) -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            turn,
            pending_chain: None,
        }
    }

    /// Fill the dark squares of the back three ranks on each side: `o` at the
    /// top, `x` at the bottom.
    pub fn populate(&mut self) {
        for row in 0..BOARD_SIZE {
            let side = if row < START_RANKS {
                Side::O
            } else if row >= BOARD_SIZE - START_RANKS {
                Side::X
            } else {
                continue;
            };
            for col in 0..BOARD_SIZE {
                let s = Square::new(row as u8, col as u8);
                if s.is_dark() {
                    self.set_piece(s, Some(Piece::pawn(side)));
                }
            }
        }
    }

    /// Build a position from a diagram of `BOARD_SIZE` rows, top rank first,
    /// using cell glyphs (`_` or `.` empty, `x`/`o` pawns, `X`/`O` kings).
    /// Whitespace and `|` separators inside a row are ignored.
    pub fn from_diagram(diagram: &str, turn: Side) -> Result<Self, CheckersError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(CheckersError::InvalidDiagram(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty(turn);
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '|')
                .collect();
            if glyphs.len() != BOARD_SIZE {
                return Err(CheckersError::InvalidDiagram(format!(
                    "row {row}: expected {BOARD_SIZE} cells, found {}",
                    glyphs.len()
                )));
            }
            for (col, ch) in glyphs.into_iter().enumerate() {
                let cell = cell_from_glyph(ch).ok_or_else(|| {
                    CheckersError::InvalidDiagram(format!("row {row}: unknown glyph {ch:?}"))
                })?;
                let s = Square::new(row as u8, col as u8);
                if cell.is_some() && !s.is_dark() {
                    return Err(CheckersError::InvalidDiagram(format!(
                        "piece on light square {s}"
                    )));
                }
                board.set_piece(s, cell);
            }
        }
        Ok(board)
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn pending_chain(&self) -> Option<Square> {
        self.pending_chain
    }

    /// Hand the move to the other side. Any pending chain ends with it.
    pub fn flip_turn(&mut self) {
        self.turn = self.turn.other();
        self.pending_chain = None;
    }

    /// Same position with a capture chain pending on `s`.
    pub fn with_pending_chain(mut self, s: Square) -> Result<Self, CheckersError> {
        self.pending_chain = Some(s);
        self.check_invariants()?;
        Ok(self)
    }

    pub(crate) fn set_pending_chain(&mut self, s: Option<Square>) {
        self.pending_chain = s;
    }

    /// Verify that a pending chain references a piece of the side to move and
    /// that no piece sits on a light square.
    pub fn check_invariants(&self) -> Result<(), CheckersError> {
        if let Some(s) = self.pending_chain {
            match self.piece_at(s) {
                Some(pc) if pc.side == self.turn => {}
                other => {
                    return Err(CheckersError::InvalidTurnState(format!(
                        "chain pending on {s} holds {other:?}, but {} is to move",
                        self.turn
                    )));
                }
            }
        }
        for (s, _) in self.occupied() {
            if !s.is_dark() {
                return Err(CheckersError::InvalidTurnState(format!(
                    "piece on light square {s}"
                )));
            }
        }
        Ok(())
    }

    pub fn piece_at(&self, s: Square) -> Cell {
        if !s.in_bounds() {
            return None;
        }
        self.grid[s.row as usize][s.col as usize]
    }

    pub fn set_piece(&mut self, s: Square, cell: Cell) {
        self.grid[s.row as usize][s.col as usize] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.grid.iter()
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|pc| (Square::new(row as u8, col as u8), pc))
            })
        })
    }

    /// Squares holding `side`'s pieces, row-major.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, pc)| pc.side == side)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }
}
