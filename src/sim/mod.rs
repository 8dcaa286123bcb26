//! Deterministic simulation module
//!
//! The pendulum core lives here. This module must stay pure:
//! - Fixed nominal timestep only (wall-clock time gates, never scales, a step)
//! - No rendering or platform dependencies
//! - All state owned by a `Simulation` value, no globals

pub mod physics;
pub mod state;
pub mod tick;

pub use physics::{compute_accelerations, integrate, resolve};
pub use state::{Rod, Simulation, Trace};
pub use tick::TickScheduler;
