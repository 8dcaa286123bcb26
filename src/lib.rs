//! Double Pendulum - A real-time chaotic pendulum animation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (equations of motion, fixed-rate ticks)
//! - `renderer`: Drawing surface trait and the WebGPU pipeline behind it
//! - `settings`: Tunable simulation parameters
//! - `error`: Render setup failures

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{RenderError, Result};
pub use settings::Settings;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Gravitational constant (per-tick units, not m/s²)
    pub const GRAVITY: f64 = 1.0;
    /// Rod length in pixels (both rods)
    pub const ROD_LENGTH: f64 = 200.0;
    /// Bob mass (both rods)
    pub const BOB_MASS: f64 = 0.05;
    /// Starting angle from vertical (90 degrees)
    pub const INITIAL_ANGLE: f64 = std::f64::consts::FRAC_PI_2;
    /// Per-tick speed multiplier (1.0 = no damping)
    pub const DAMPING: f64 = 1.0;

    /// Minimum wall-clock time between simulation steps (ms)
    pub const TICK_INTERVAL_MS: f64 = 16.0;
    /// Nominal steps per second, used to scale the readout
    pub const TICKS_PER_SECOND: f64 = 60.0;

    /// Primary pivot height as a fraction of the client area height
    pub const PIVOT_HEIGHT_FRACTION: f64 = 2.0 / 5.0;

    /// Rendering sizes (pixels)
    pub const BOB_RADIUS: f32 = 15.0;
    pub const ROD_WIDTH: f32 = 1.0;
    pub const TRACE_WIDTH: f32 = 3.0;
}

/// Wrap an angle back inside (-2π, 2π)
///
/// Values already inside the interval are returned unchanged, so this is a
/// range guard rather than a normalization to [-π, π). Infinite input
/// becomes NaN.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    angle % std::f64::consts::TAU
}

/// Offset of a rod's free end from its pivot (screen coords, y down)
#[inline]
pub fn rod_offset(length: f64, angle: f64) -> DVec2 {
    DVec2::new(length * angle.sin(), length * angle.cos())
}

/// Anchor point of the primary pivot for a client area of the given size
#[inline]
pub fn pivot_anchor(width: f64, height: f64) -> DVec2 {
    DVec2::new(width / 2.0, height * consts::PIVOT_HEIGHT_FRACTION)
}
