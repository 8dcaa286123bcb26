//! Fixed-rate simulation tick
//!
//! Wall-clock time only decides *whether* a step runs; every step advances
//! the pendulum by the same nominal timestep. A slow host skips steps rather
//! than catching up, so the animation keeps real-time pace at the cost of
//! physical accuracy.

use serde::{Deserialize, Serialize};

use super::physics::{compute_accelerations, integrate};
use super::state::Simulation;

/// Gate that turns wall-clock samples into simulation steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickScheduler {
    /// Minimum elapsed time between steps
    pub interval_ms: f64,
    /// Timestamp of the last step (or of construction)
    pub last_tick_ms: f64,
}

impl TickScheduler {
    pub fn new(interval_ms: f64, now_ms: f64) -> Self {
        Self {
            interval_ms,
            last_tick_ms: now_ms,
        }
    }

    /// Returns true (and restamps) when at least one interval has elapsed
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_tick_ms >= self.interval_ms {
            self.last_tick_ms = now_ms;
            true
        } else {
            false
        }
    }
}

impl Simulation {
    /// Advance both rods by one explicit Euler step
    ///
    /// Both accelerations come from the pre-step state; both rods are then
    /// integrated, and only after that are the positions resolved.
    pub fn step(&mut self) {
        let (acc1, acc2) = compute_accelerations(&self.primary, &self.secondary, self.gravity);
        self.primary.angular_acceleration = acc1;
        self.secondary.angular_acceleration = acc2;

        integrate(&mut self.primary, self.damping);
        integrate(&mut self.secondary, self.damping);

        self.resolve_positions();
        self.steps += 1;
    }

    /// Run one step if the scheduler allows it, recording the outer bob
    ///
    /// Returns whether a step ran.
    pub fn on_tick(&mut self, now_ms: f64) -> bool {
        if !self.scheduler.poll(now_ms) {
            return false;
        }
        self.step();
        self.trace.push(self.outer_bob());

        log::debug!(
            "Step {}: a1={:.4} a2={:.4} s1={:.5} s2={:.5}",
            self.steps,
            self.primary.angle,
            self.secondary.angle,
            self.primary.angular_speed,
            self.secondary.angular_speed
        );
        true
    }
}
