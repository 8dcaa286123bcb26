//! Pendulum state and core simulation types
//!
//! All mutable simulation state is owned by a [`Simulation`] value; the
//! platform layer holds one and feeds it ticks and resizes.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::physics::resolve;
use super::tick::TickScheduler;
use crate::pivot_anchor;
use crate::settings::{RodSettings, Settings};

/// One rigid rod with a point mass at its free end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rod {
    /// End the rod rotates about
    pub pivot: DVec2,
    /// Free end, derived from pivot/length/angle by [`resolve`]
    pub bob: DVec2,
    /// Radians from vertical; `bob = pivot + length * (sin, cos)`
    pub angle: f64,
    /// Radians per tick
    pub angular_speed: f64,
    /// Radians per tick², from the last acceleration pass
    pub angular_acceleration: f64,
    pub length: f64,
    pub mass: f64,
}

impl Rod {
    /// A rod at rest at `angle`, pivoting about the origin
    pub fn new(settings: RodSettings, angle: f64) -> Self {
        let mut rod = Self {
            pivot: DVec2::ZERO,
            bob: DVec2::ZERO,
            angle,
            angular_speed: 0.0,
            angular_acceleration: 0.0,
            length: settings.length,
            mass: settings.mass,
        };
        resolve(&mut rod);
        rod
    }
}

/// Past positions of the outer bob, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    points: VecDeque<DVec2>,
    limit: Option<usize>,
}

impl Trace {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            points: VecDeque::new(),
            limit,
        }
    }

    /// Append a point, dropping the oldest ones past the limit
    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        if let Some(limit) = self.limit {
            while self.points.len() > limit {
                self.points.pop_front();
            }
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &VecDeque<DVec2> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, in the order they were recorded
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(&from, &to)| (from, to))
    }
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Rod hanging from the fixed anchor
    pub primary: Rod,
    /// Rod hanging from the primary bob
    pub secondary: Rod,
    /// Outer bob path since the last resize
    pub trace: Trace,
    /// Decides when a wall-clock tick becomes a simulation step
    pub scheduler: TickScheduler,
    pub gravity: f64,
    pub damping: f64,
    /// Steps taken so far
    pub steps: u64,
}

impl Simulation {
    /// Build both rods at rest and anchor them in a client area of the given size
    pub fn new(settings: &Settings, width: f64, height: f64, now_ms: f64) -> Self {
        let mut sim = Self {
            primary: Rod::new(settings.primary, settings.initial_angle),
            secondary: Rod::new(settings.secondary, settings.initial_angle),
            trace: Trace::new(settings.trace_limit),
            scheduler: TickScheduler::new(settings.tick_interval_ms, now_ms),
            gravity: settings.gravity,
            damping: settings.damping,
            steps: 0,
        };
        sim.primary.pivot = pivot_anchor(width, height);
        sim.resolve_positions();
        sim
    }

    /// Recompute both bobs, hanging the secondary rod from the primary bob
    pub fn resolve_positions(&mut self) {
        resolve(&mut self.primary);
        self.secondary.pivot = self.primary.bob;
        resolve(&mut self.secondary);
    }

    /// Re-anchor the primary pivot for a new client area and drop the trace
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.primary.pivot = pivot_anchor(width, height);
        self.trace.clear();
        self.resolve_positions();
        log::debug!(
            "Resized to {}x{}, pivot at ({:.1}, {:.1})",
            width,
            height,
            self.primary.pivot.x,
            self.primary.pivot.y
        );
    }

    /// Position of the outer bob
    pub fn outer_bob(&self) -> DVec2 {
        self.secondary.bob
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_new_simulation_at_rest() {
        let sim = Simulation::new(&Settings::default(), 800.0, 600.0, 0.0);
        assert_eq!(sim.primary.angle, FRAC_PI_2);
        assert_eq!(sim.secondary.angle, FRAC_PI_2);
        assert_eq!(sim.primary.angular_speed, 0.0);
        assert_eq!(sim.secondary.angular_speed, 0.0);
        assert_eq!(sim.primary.pivot, DVec2::new(400.0, 240.0));
        assert!(sim.trace.is_empty());
        assert_eq!(sim.steps, 0);
    }

    #[test]
    fn test_new_simulation_positions_resolved() {
        let sim = Simulation::new(&Settings::default(), 800.0, 600.0, 0.0);
        // Both rods start horizontal, pointing right
        assert!((sim.primary.bob.x - 600.0).abs() < 1e-9);
        assert!((sim.primary.bob.y - 240.0).abs() < 1e-9);
        assert_eq!(sim.secondary.pivot, sim.primary.bob);
        assert!((sim.outer_bob().x - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_reanchors_and_clears_trace() {
        let mut sim = Simulation::new(&Settings::default(), 800.0, 600.0, 0.0);
        sim.trace.push(DVec2::new(1.0, 2.0));
        sim.trace.push(DVec2::new(3.0, 4.0));

        sim.on_resize(1000.0, 500.0);
        assert_eq!(sim.primary.pivot, DVec2::new(500.0, 200.0));
        assert!(sim.trace.is_empty());
        assert_eq!(sim.secondary.pivot, sim.primary.bob);
    }

    #[test]
    fn test_resize_keeps_angles() {
        let mut sim = Simulation::new(&Settings::default(), 800.0, 600.0, 0.0);
        sim.primary.angle = 0.3;
        sim.primary.angular_speed = 0.01;
        sim.on_resize(640.0, 480.0);
        assert_eq!(sim.primary.angle, 0.3);
        assert_eq!(sim.primary.angular_speed, 0.01);
    }

    #[test]
    fn test_trace_unbounded_by_default() {
        let mut trace = Trace::default();
        for i in 0..10_000 {
            trace.push(DVec2::splat(i as f64));
        }
        assert_eq!(trace.len(), 10_000);
        assert_eq!(trace.points()[0], DVec2::ZERO);
    }

    #[test]
    fn test_trace_limit_drops_oldest() {
        let mut trace = Trace::new(Some(3));
        for i in 0..5 {
            trace.push(DVec2::splat(i as f64));
        }
        assert_eq!(
            trace.points(),
            &[DVec2::splat(2.0), DVec2::splat(3.0), DVec2::splat(4.0)]
        );
    }

    #[test]
    fn test_trace_limit_holds_over_long_run() {
        let mut trace = Trace::new(Some(100));
        for i in 0..100_000 {
            trace.push(DVec2::splat(i as f64));
        }
        assert_eq!(trace.len(), 100);
        assert_eq!(trace.points()[0], DVec2::splat(99_900.0));
        assert_eq!(trace.points()[99], DVec2::splat(99_999.0));
        assert_eq!(trace.segments().count(), 99);
    }

    #[test]
    fn test_trace_limit_zero_keeps_nothing() {
        let mut trace = Trace::new(Some(0));
        trace.push(DVec2::ONE);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_trace_segments() {
        let mut trace = Trace::default();
        assert_eq!(trace.segments().count(), 0);
        trace.push(DVec2::new(0.0, 0.0));
        assert_eq!(trace.segments().count(), 0);
        trace.push(DVec2::new(1.0, 0.0));
        trace.push(DVec2::new(1.0, 1.0));
        let segments: Vec<_> = trace.segments().collect();
        assert_eq!(
            segments,
            vec![
                (DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)),
                (DVec2::new(1.0, 0.0), DVec2::new(1.0, 1.0)),
            ]
        );
    }
}
