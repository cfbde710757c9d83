//! Simulation parameters, validation, and error types.

use std::error::Error;
use std::fmt;

use wrapbot_core::Point;
use wrapbot_space::SpaceError;

use crate::robot::DEFAULT_TENTACLES;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a [`State`](crate::State).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `fuel_duration` is zero, so Accelerate would be a no-op.
    ZeroFuelDuration,
    /// `drill_duration` is zero, so Drill would be a no-op.
    ZeroDrillDuration,
    /// The default tentacle list is empty.
    NoTentacles,
    /// A tentacle offset sits on the robot's own cell.
    TentacleAtOrigin,
    /// No starting position was supplied.
    NoRobots,
    /// A starting position is outside the map or on a wall.
    RobotOutsideMap {
        /// The offending start.
        position: Point,
    },
    /// The map polygons could not be rasterized.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFuelDuration => write!(f, "fuel_duration must be at least 1"),
            Self::ZeroDrillDuration => write!(f, "drill_duration must be at least 1"),
            Self::NoTentacles => write!(f, "robots need at least one tentacle"),
            Self::TentacleAtOrigin => write!(f, "tentacle offset (0,0) overlaps the body"),
            Self::NoRobots => write!(f, "at least one starting position is required"),
            Self::RobotOutsideMap { position } => {
                write!(f, "start {position} is not a free cell of the map")
            }
            Self::Space(e) => write!(f, "map error: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Tunable simulation parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Turns of fast wheels granted by one Accelerate. Default: 50.
    pub fuel_duration: u32,
    /// Turns of drilling granted by one Drill. Default: 30.
    pub drill_duration: u32,
    /// Local-frame tentacle offsets every robot starts with, including
    /// clones. Default: `(1,0)`, `(1,1)`, `(1,-1)`.
    pub tentacles: Vec<Point>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fuel_duration: 50,
            drill_duration: 30,
            tentacles: DEFAULT_TENTACLES.to_vec(),
        }
    }
}

impl SimConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fuel_duration == 0 {
            return Err(ConfigError::ZeroFuelDuration);
        }
        if self.drill_duration == 0 {
            return Err(ConfigError::ZeroDrillDuration);
        }
        if self.tentacles.is_empty() {
            return Err(ConfigError::NoTentacles);
        }
        if self.tentacles.contains(&Point::ZERO) {
            return Err(ConfigError::TentacleAtOrigin);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.tentacles.len(), 3);
    }

    #[test]
    fn zero_durations_rejected() {
        let cfg = SimConfig {
            fuel_duration: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroFuelDuration));

        let cfg = SimConfig {
            drill_duration: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDrillDuration));
    }

    #[test]
    fn tentacle_list_checked() {
        let cfg = SimConfig {
            tentacles: Vec::new(),
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoTentacles));

        let cfg = SimConfig {
            tentacles: vec![Point::new(1, 0), Point::ZERO],
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::TentacleAtOrigin));
    }

    #[test]
    fn space_error_is_source() {
        let err = ConfigError::from(SpaceError::EmptyGrid);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("map error"));
    }
}
