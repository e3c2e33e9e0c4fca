//! Game configuration.
//!
//! Board shape, starting layout, and turn pacing are injected as an
//! immutable [`GameConfig`] at construction, never read from statics.
//! The standard configuration reproduces the reference game: a 7-row
//! board with two Blockers on the base corners, two Antlers, and the Eye
//! near the apex.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::piece::PieceKind;
use crate::geometry::{Coord, Lattice};

/// Immutable session configuration.
///
/// ```
/// use trigon::GameConfig;
///
/// let config = GameConfig::standard();
/// assert_eq!(config.rows, 7);
/// assert_eq!(config.layout.len(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board row count.
    pub rows: i32,
    /// Starting pieces, in turn order.
    pub layout: Vec<(Coord, PieceKind)>,
    /// How long the host should wait before delivering `ElapseCpuDelay`
    /// for a scripted turn. The engine never sleeps on this itself.
    pub cpu_turn_delay: Duration,
}

impl GameConfig {
    /// The reference configuration.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rows: 7,
            layout: vec![
                (Coord::new(0, 0), PieceKind::Blocker),
                (Coord::new(0, 12), PieceKind::Blocker),
                (Coord::new(2, 4), PieceKind::Antler),
                (Coord::new(2, 10), PieceKind::Antler),
                (Coord::new(6, 7), PieceKind::Eye),
            ],
            cpu_turn_delay: Duration::from_secs(1),
        }
    }

    /// Check the configuration describes a playable board.
    ///
    /// Rejects a degenerate row count, layout coordinates off the board,
    /// overlapping pieces, and any Eye count other than one.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows < 2 {
            return Err(EngineError::LayoutRows(self.rows));
        }
        let lattice = Lattice::new(self.rows);

        let mut seen = Vec::with_capacity(self.layout.len());
        for &(pos, _) in &self.layout {
            if !lattice.in_bounds(pos) {
                return Err(EngineError::LayoutOutOfBounds(pos));
            }
            if seen.contains(&pos) {
                return Err(EngineError::LayoutOverlap(pos));
            }
            seen.push(pos);
        }

        let eyes = self
            .layout
            .iter()
            .filter(|(_, kind)| *kind == PieceKind::Eye)
            .count();
        if eyes != 1 {
            return Err(EngineError::LayoutEyeCount(eyes));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_valid() {
        assert!(GameConfig::standard().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_rows() {
        let mut config = GameConfig::standard();
        config.rows = 1;
        assert_eq!(config.validate(), Err(EngineError::LayoutRows(1)));
    }

    #[test]
    fn test_rejects_out_of_bounds_layout() {
        let mut config = GameConfig::standard();
        config.layout.push((Coord::new(0, 13), PieceKind::Antler));
        assert_eq!(
            config.validate(),
            Err(EngineError::LayoutOutOfBounds(Coord::new(0, 13)))
        );
    }

    #[test]
    fn test_rejects_overlap() {
        let mut config = GameConfig::standard();
        config.layout.push((Coord::new(2, 4), PieceKind::Blocker));
        assert_eq!(
            config.validate(),
            Err(EngineError::LayoutOverlap(Coord::new(2, 4)))
        );
    }

    #[test]
    fn test_rejects_wrong_eye_count() {
        let mut config = GameConfig::standard();
        config.layout.push((Coord::new(4, 7), PieceKind::Eye));
        assert_eq!(config.validate(), Err(EngineError::LayoutEyeCount(2)));

        let mut config = GameConfig::standard();
        config.layout.retain(|(_, kind)| *kind != PieceKind::Eye);
        assert_eq!(config.validate(), Err(EngineError::LayoutEyeCount(0)));
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = GameConfig::standard();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
