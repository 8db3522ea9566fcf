//! Chess rules engine.
//!
//! Holds a board, validates proposed moves against the movement rules of
//! each piece, enforces turn order, castling and promotion, and tracks check
//! and checkmate for both kings. [`GameState`] is the entry point; the free
//! functions underneath it are pure queries over a [`Board`].

pub mod attacks;
pub mod board;
pub mod castling;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod movegen;
pub mod notation;
pub mod path;
pub mod status;
pub mod types;
pub mod validate;

pub use attacks::*;
pub use board::*;
pub use castling::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use status::*;
pub use types::*;
pub use validate::*;
