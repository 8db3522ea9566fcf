use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::types::*;

/// Fixed 8x8 grid of optional pieces. Pure data: no legality knowledge.
///
/// `Board` is `Copy`, so a scratch board for a trial move is a plain copy
/// and never aliases the canonical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        for col in 0..8 {
            b.set(
                Square::new(Color::White.pawn_start_row(), col),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
            b.set(
                Square::new(Color::Black.pawn_start_row(), col),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            for color in Color::ALL {
                b.set(
                    Square::new(color.back_rank(), col as i8),
                    Some(Piece::new(color, kind)),
                );
            }
        }
        b
    }

    /// Parses the piece placement field of a FEN string. The first rank
    /// listed is row 0. Anything after the first whitespace is ignored.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        let placement = text.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(PlacementError::ZeroEmptyRun { rank: row });
                    }
                    col += d as usize;
                } else {
                    let pc = Piece::from_char(ch).ok_or(PlacementError::UnknownPiece(ch))?;
                    if col >= 8 {
                        return Err(PlacementError::RankTooLong { rank: row });
                    }
                    board.squares[row][col] = Some(pc);
                    col += 1;
                }
                if col > 8 {
                    return Err(PlacementError::RankTooLong { rank: row });
                }
            }
            if col != 8 {
                return Err(PlacementError::RankTooShort { rank: row });
            }
        }
        Ok(board)
    }

    /// Renders the placement field, the inverse of `from_placement`.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, rank) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut run = 0u8;
            for cell in rank {
                match cell {
                    Some(pc) => {
                        if run > 0 {
                            out.push((b'0' + run) as char);
                            run = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push((b'0' + run) as char);
            }
        }
        out
    }

    /// Off-board squares read as empty.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if sq.in_bounds() {
            self.squares[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Writes to an off-board square are ignored.
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        if sq.in_bounds() {
            self.squares[sq.row as usize][sq.col as usize] = pc;
        }
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in rank {
                let ch = cell.map(Piece::to_char).unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
