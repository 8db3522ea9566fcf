//! Coordinate notation for squares (`e2`) and moves (`e2e4`, `e7e8q`).

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::types::*;

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let file = (b'a' + self.col as u8) as char;
            let rank = (b'8' - self.row as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(NotationError::InvalidSquare(s.to_string()));
        }
        let file = b[0].to_ascii_lowercase();
        let rank = b[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(NotationError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new((b'8' - rank) as i8, (file - b'a') as i8))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(NotationError::InvalidMove(s.to_string()));
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        // King and pawn letters parse; the validator rejects them as promotions.
        let promotion = match s[4..].chars().next() {
            Some(ch) => Some(PieceKind::from_letter(ch).ok_or(NotationError::InvalidPromotion(ch))?),
            None => None,
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
