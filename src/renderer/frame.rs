//! Per-frame geometry collection
//!
//! [`FrameBuilder`] is the [`Canvas`] the GPU path draws into. Lines and
//! circles become triangles; text cannot be drawn by the pipeline, so it is
//! kept as labels for the platform layer to lay out.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use super::{Canvas, Rect, shapes};

/// Triangles per bob
const CIRCLE_SEGMENTS: u32 = 32;

/// Text placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub rect: Rect,
}

impl TextLabel {
    /// CSS placement of the label's box, in CSS pixels
    pub fn position_style(&self) -> String {
        let Rect { left, top, .. } = self.rect;
        format!(
            "left:{left}px;top:{top}px;width:{}px;height:{}px",
            self.rect.width(),
            self.rect.height()
        )
    }
}

/// Geometry and text for one frame
#[derive(Debug, Default)]
pub struct FrameBuilder {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything drawn so far, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }
}

impl Canvas for FrameBuilder {
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32) {
        self.vertices
            .extend(shapes::line(from, to, width, colors::LINE));
    }

    fn draw_filled_circle(&mut self, center: Vec2, radius: f32) {
        self.vertices
            .extend(shapes::circle(center, radius, colors::BOB, CIRCLE_SEGMENTS));
    }

    fn draw_text(&mut self, text: &str, rect: Rect) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            rect,
        });
    }
}
