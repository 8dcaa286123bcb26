//! Simulation settings
//!
//! Every field defaults to a compile-time constant from [`crate::consts`];
//! nothing is loaded from disk or storage.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physical parameters of a single rod
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RodSettings {
    pub length: f64,
    pub mass: f64,
}

impl Default for RodSettings {
    fn default() -> Self {
        Self {
            length: ROD_LENGTH,
            mass: BOB_MASS,
        }
    }
}

/// Tunables for a [`crate::sim::Simulation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Gravitational constant
    pub gravity: f64,
    /// Rod hanging from the fixed anchor
    pub primary: RodSettings,
    /// Rod hanging from the primary bob
    pub secondary: RodSettings,
    /// Starting angle for both rods (radians from vertical)
    pub initial_angle: f64,
    /// Speed multiplier applied after each integration (1.0 = none)
    pub damping: f64,
    /// Minimum elapsed time between steps (ms)
    pub tick_interval_ms: f64,
    /// Keep at most this many trace points (None = unbounded)
    #[serde(default)]
    pub trace_limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            primary: RodSettings::default(),
            secondary: RodSettings::default(),
            initial_angle: INITIAL_ANGLE,
            damping: DAMPING,
            tick_interval_ms: TICK_INTERVAL_MS,
            trace_limit: None,
        }
    }
}

impl Settings {
    /// Default settings with a per-tick damping factor
    pub fn with_damping(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.gravity, 1.0);
        assert_eq!(settings.primary.length, 200.0);
        assert_eq!(settings.secondary.mass, 0.05);
        assert_eq!(settings.initial_angle, std::f64::consts::FRAC_PI_2);
        assert_eq!(settings.damping, 1.0);
        assert_eq!(settings.tick_interval_ms, 16.0);
        assert!(settings.trace_limit.is_none());
    }

    #[test]
    fn test_with_damping() {
        let settings = Settings::with_damping(0.999);
        assert_eq!(settings.damping, 0.999);
        assert_eq!(settings.gravity, GRAVITY);
    }

    #[test]
    fn test_trace_limit_defaults_when_missing() {
        let json = r#"{
            "gravity": 1.0,
            "primary": { "length": 200.0, "mass": 0.05 },
            "secondary": { "length": 200.0, "mass": 0.05 },
            "initial_angle": 1.5707963267948966,
            "damping": 1.0,
            "tick_interval_ms": 16.0
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
