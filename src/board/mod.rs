//! Board state: piece arena, occupancy map, deadwood pool.

pub mod state;

pub use state::BoardState;
