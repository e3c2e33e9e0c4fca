//! Core engine types: pieces, outcomes, RNG, configuration, errors.
//!
//! These are the building blocks the geometry, board, rules, and
//! controller layers share. Nothing here depends on board or turn state.

pub mod config;
pub mod error;
pub mod outcome;
pub mod piece;
pub mod rng;

pub use config::GameConfig;
pub use error::EngineError;
pub use outcome::Outcome;
pub use piece::{Piece, PieceId, PieceKind, Side};
pub use rng::GameRng;
