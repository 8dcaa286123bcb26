//! Rendering module
//!
//! The simulation only ever talks to a [`Canvas`]: lines, filled circles and
//! text. [`FrameBuilder`] tessellates those into vertices for the WebGPU
//! pipeline in [`pipeline`]; text is handed back to the platform layer.

pub mod frame;
pub mod hud;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{FrameBuilder, TextLabel};
pub use hud::Readout;
pub use pipeline::RenderState;

use glam::Vec2;

use crate::consts::{BOB_RADIUS, ROD_WIDTH, TRACE_WIDTH};
use crate::sim::{Rod, Simulation};

/// Axis-aligned rectangle in pixels (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A 2D drawing surface in pixel coordinates (y down)
pub trait Canvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32);
    fn draw_text(&mut self, text: &str, rect: Rect);
}

/// Draw rods, bobs, the outer bob's trace and the parameter readout
pub fn draw_scene(sim: &Simulation, canvas: &mut impl Canvas) {
    draw_rod(&sim.primary, canvas);
    draw_rod(&sim.secondary, canvas);

    canvas.draw_filled_circle(sim.primary.bob.as_vec2(), BOB_RADIUS);
    canvas.draw_filled_circle(sim.secondary.bob.as_vec2(), BOB_RADIUS);

    for (from, to) in sim.trace.segments() {
        canvas.draw_line(from.as_vec2(), to.as_vec2(), TRACE_WIDTH);
    }

    for (text, rect) in hud::layout(&hud::readouts(sim)) {
        canvas.draw_text(&text, rect);
    }
}

fn draw_rod(rod: &Rod, canvas: &mut impl Canvas) {
    canvas.draw_line(rod.pivot.as_vec2(), rod.bob.as_vec2(), ROD_WIDTH);
}
