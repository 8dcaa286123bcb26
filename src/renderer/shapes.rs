//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a straight line of the given width (two triangles)
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO || !dir.is_finite() {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    if !center.is_finite() {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_line_quad_width() {
        let vertices = line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 4.0, WHITE);
        assert_eq!(vertices.len(), 6);
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 2.0).abs() < 1e-6));
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        assert!(xs.contains(&0.0) && xs.contains(&10.0));
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line(p, p, 1.0, WHITE).is_empty());
        assert!(line(p, Vec2::NAN, 1.0, WHITE).is_empty());
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(100.0, 50.0);
        let vertices = circle(center, 15.0, WHITE, 16);
        assert_eq!(vertices.len(), 48);
        for tri in vertices.chunks(3) {
            assert_eq!(tri[0].position, [100.0, 50.0]);
            let edge = Vec2::from(tri[1].position);
            assert!((edge.distance(center) - 15.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_circle_at_nan_is_empty() {
        assert!(circle(Vec2::NAN, 15.0, WHITE, 16).is_empty());
    }
}
