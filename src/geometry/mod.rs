//! Lattice geometry: coordinates, parity, bounds, board enumeration.
//!
//! The board is a triangle of `R` rows of triangular cells addressed by
//! `(row, index)` pairs. Row 0 is the wide base; each row above it spans a
//! narrower index range. A cell's parity ("color") decides which of its two
//! possible orientations it has, and therefore which neighbor sits on its
//! vertical edge.
//!
//! This module contains no game state. Everything here is a pure function
//! of a coordinate and the configured row count.

pub mod coord;
pub mod lattice;

pub use coord::Coord;
pub use lattice::{Lattice, SpaceColor};
