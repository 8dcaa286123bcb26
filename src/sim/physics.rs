//! Double pendulum equations of motion
//!
//! Closed-form accelerations from the Lagrangian of two point masses on rigid
//! massless rods (no small-angle approximation), advanced with one explicit
//! Euler step per tick. Time is measured in ticks, so speeds are radians per
//! tick and no `dt` factor appears.
//!
//! Explicit Euler does not conserve energy; long runs drift. Nothing here
//! guards the denominator either, so a degenerate configuration yields
//! inf/NaN that flows through to the positions.

use super::state::Rod;
use crate::{rod_offset, wrap_angle};

/// Angular accelerations of both rods for their current angles and speeds
///
/// Reads only the pre-step state of both rods, so the result is the same
/// regardless of which rod is integrated first.
pub fn compute_accelerations(primary: &Rod, secondary: &Rod, g: f64) -> (f64, f64) {
    let (a1, a2) = (primary.angle, secondary.angle);
    let (s1, s2) = (primary.angular_speed, secondary.angular_speed);
    let (l1, l2) = (primary.length, secondary.length);
    let (m1, m2) = (primary.mass, secondary.mass);

    let delta = a1 - a2;
    let den = 2.0 * m1 + m2 - m2 * (2.0 * a1 - 2.0 * a2).cos();

    let acc1 = (-g * (2.0 * m1 + m2) * a1.sin()
        - m2 * g * (a1 - 2.0 * a2).sin()
        - 2.0 * delta.sin() * m2 * (s2 * s2 * l2 + s1 * s1 * l1 * delta.cos()))
        / (l1 * den);

    let acc2 = (2.0
        * delta.sin()
        * (s1 * s1 * l1 * (m1 + m2) + g * (m1 + m2) * a1.cos() + s2 * s2 * l2 * m2 * delta.cos()))
        / (l2 * den);

    (acc1, acc2)
}

/// Advance a rod's speed and angle by one tick using its stored acceleration
pub fn integrate(rod: &mut Rod, damping: f64) {
    rod.angular_speed += rod.angular_acceleration;
    rod.angular_speed *= damping;
    rod.angle = wrap_angle(rod.angle + rod.angular_speed);
}

/// Recompute the bob position from pivot, length and angle
#[inline]
pub fn resolve(rod: &mut Rod) {
    rod.bob = rod.pivot + rod_offset(rod.length, rod.angle);
}
