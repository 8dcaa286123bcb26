//! On-screen parameter readout
//!
//! Angles are shown in whole degrees; speed and acceleration are converted
//! from per-tick to per-second units assuming the nominal tick rate. All
//! values truncate toward zero.

use serde::Serialize;
use std::f64::consts::PI;

use super::Rect;
use crate::consts::TICKS_PER_SECOND;
use crate::sim::{Rod, Simulation};

/// Width of a readout line rect
const LINE_WIDTH: f32 = 300.0;
/// Height of a readout line rect
const LINE_HEIGHT: f32 = 10.0;
/// Vertical distance between readout lines
const LINE_SPACING: f32 = 14.0;
/// Vertical distance between the two rod blocks
const BLOCK_SPACING: f32 = 70.0;

/// Displayed state of one rod
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub label: &'static str,
    /// Degrees from vertical
    pub angle_deg: i32,
    /// Degrees per second
    pub speed_deg: i32,
    /// Per-tick acceleration scaled like the speed
    pub acceleration_deg: i32,
}

impl Readout {
    pub fn from_rod(label: &'static str, rod: &Rod) -> Self {
        let per_second = |v: f64| (v * 180.0 * TICKS_PER_SECOND / PI) as i32;
        Self {
            label,
            angle_deg: (rod.angle * 180.0 / PI) as i32,
            speed_deg: per_second(rod.angular_speed),
            acceleration_deg: per_second(rod.angular_acceleration),
        }
    }

    /// Heading followed by the angle, speed and acceleration lines
    pub fn lines(&self) -> [String; 4] {
        [
            format!("{}:", self.label),
            format!("θ:   {}", self.angle_deg),
            format!("θ`:  {}", self.speed_deg),
            format!("θ``: {}", self.acceleration_deg),
        ]
    }
}

/// Readouts for the primary and secondary rod, in that order
pub fn readouts(sim: &Simulation) -> [Readout; 2] {
    [
        Readout::from_rod("first", &sim.primary),
        Readout::from_rod("second", &sim.secondary),
    ]
}

/// Text lines with their rects, top-left aligned
pub fn layout(readouts: &[Readout]) -> Vec<(String, Rect)> {
    let mut placed = Vec::with_capacity(readouts.len() * 4);
    for (block, readout) in readouts.iter().enumerate() {
        let block_top = block as f32 * BLOCK_SPACING;
        for (line, text) in readout.lines().into_iter().enumerate() {
            let top = block_top + line as f32 * LINE_SPACING;
            placed.push((text, Rect::new(0.0, top, LINE_WIDTH, top + LINE_HEIGHT)));
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RodSettings;

    #[test]
    fn test_readout_at_rest() {
        let rod = Rod::new(RodSettings::default(), std::f64::consts::FRAC_PI_2);
        let readout = Readout::from_rod("first", &rod);
        assert_eq!(readout.angle_deg, 90);
        assert_eq!(readout.speed_deg, 0);
        assert_eq!(readout.acceleration_deg, 0);
    }

    #[test]
    fn test_readout_truncates_toward_zero() {
        let mut rod = Rod::new(RodSettings::default(), -0.5);
        rod.angular_acceleration = -0.005;
        rod.angular_speed = 0.001;
        let readout = Readout::from_rod("second", &rod);
        // -28.6°, 3.44°/s, -17.19
        assert_eq!(readout.angle_deg, -28);
        assert_eq!(readout.speed_deg, 3);
        assert_eq!(readout.acceleration_deg, -17);
    }

    #[test]
    fn test_readout_nan_shows_zero() {
        let mut rod = Rod::new(RodSettings::default(), 0.0);
        rod.angle = f64::NAN;
        assert_eq!(Readout::from_rod("first", &rod).angle_deg, 0);
    }

    #[test]
    fn test_lines() {
        let readout = Readout {
            label: "first",
            angle_deg: 45,
            speed_deg: -12,
            acceleration_deg: 3,
        };
        assert_eq!(
            readout.lines(),
            [
                "first:".to_string(),
                "θ:   45".to_string(),
                "θ`:  -12".to_string(),
                "θ``: 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_layout_offsets() {
        let sim = Simulation::new(&crate::Settings::default(), 800.0, 600.0, 0.0);
        let placed = layout(&readouts(&sim));
        let tops: Vec<f32> = placed.iter().map(|(_, r)| r.top).collect();
        assert_eq!(
            tops,
            vec![0.0, 14.0, 28.0, 42.0, 70.0, 84.0, 98.0, 112.0]
        );
        assert!(placed.iter().all(|(_, r)| r.width() == 300.0 && r.height() == 10.0));
        assert_eq!(placed[4].0, "second:");
    }

    #[test]
    fn test_readout_serializes() {
        let readout = Readout {
            label: "first",
            angle_deg: 90,
            speed_deg: 0,
            acceleration_deg: -17,
        };
        let json = serde_json::to_string(&readout).unwrap();
        assert_eq!(
            json,
            r#"{"label":"first","angle_deg":90,"speed_deg":0,"acceleration_deg":-17}"#
        );
    }
}
