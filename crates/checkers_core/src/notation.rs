//! Algebraic coordinates and text rendering.
//!
//! A square is written as a file letter and a rank digit in either order
//! (`g3` or `3g`). Rank `N` is row `BOARD_SIZE - N`, file `a` is column 0.

use std::fmt;

use crate::{board::Board, error::CheckersError, types::*};

/// Algebraic name of `s`, or `?row,col` when it lies off the board.
pub fn square_to_coord(s: Square) -> String {
    if !s.in_bounds() {
        return format!("?{},{}", s.row, s.col);
    }
    let f = (b'a' + s.col) as char;
    let r = BOARD_SIZE - s.row as usize;
    format!("{f}{r}")
}

pub fn parse_square(token: &str) -> Result<Square, CheckersError> {
    let invalid = || CheckersError::InvalidCoordinate(token.to_string());
    let b = token.as_bytes();
    if b.len() != 2 {
        return Err(invalid());
    }
    let (file, rank) = match (b[0], b[1]) {
        (f, r) if f.is_ascii_lowercase() && r.is_ascii_digit() => (f, r),
        (r, f) if f.is_ascii_lowercase() && r.is_ascii_digit() => (f, r),
        _ => return Err(invalid()),
    };
    let col = file - b'a';
    let rank = (rank - b'0') as usize;
    if col as usize >= BOARD_SIZE || !(1..=BOARD_SIZE).contains(&rank) {
        return Err(invalid());
    }
    Ok(Square::new((BOARD_SIZE - rank) as u8, col))
}

/// Parse player input such as `3g 4h`, `g3-h4` or `3g4h`: the first two and
/// last two characters name the origin and destination, anything in between
/// is ignored.
pub fn parse_move_input(input: &str) -> Result<Move, CheckersError> {
    let chars: Vec<char> = input.trim().chars().collect();
    if chars.len() < 4 {
        return Err(CheckersError::InvalidCoordinate(input.trim().to_string()));
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    Ok(Move::new(parse_square(&head)?, parse_square(&tail)?))
}

pub fn move_to_string(mv: Move) -> String {
    format!("{}{}", square_to_coord(mv.from), square_to_coord(mv.to))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for &cell in cells {
                write!(f, "|{}", cell_glyph(cell))?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE as u8 {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
