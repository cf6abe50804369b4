//! Small 2D geometry helpers used by collision resolution and turning.

use glam::Vec2;

#[inline]
pub fn discs_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let rr = ra + rb;
    a.distance_squared(b) < rr * rr
}

/// Push `mobile` directly away from `fixed` until the discs just touch.
/// Returns true if a push happened. Coincident centers push along +X.
pub fn push_disc_out_of_disc(mobile: &mut Vec2, rm: f32, fixed: Vec2, rf: f32) -> bool {
    let delta = *mobile - fixed;
    let dist_sq = delta.length_squared();
    let rr = rm + rf;
    if dist_sq >= rr * rr {
        return false;
    }
    let dist = dist_sq.sqrt();
    let dir = if dist > 1e-4 { delta / dist } else { Vec2::X };
    *mobile = fixed + dir * rr;
    true
}

/// Split the overlap evenly between two mobile discs. Returns true if the
/// discs were overlapping.
pub fn push_discs_out_of_each_other(a: &mut Vec2, ra: f32, b: &mut Vec2, rb: f32) -> bool {
    let delta = *b - *a;
    let dist_sq = delta.length_squared();
    let rr = ra + rb;
    if dist_sq >= rr * rr {
        return false;
    }
    let dist = dist_sq.sqrt();
    let dir = if dist > 1e-4 { delta / dist } else { Vec2::X };
    let half = (rr - dist) * 0.5;
    *a -= dir * half;
    *b += dir * half;
    true
}

/// Push a disc out of an axis-aligned box through the face nearest its
/// center. Centers inside the box exit through the cheapest face.
pub fn push_disc_out_of_aabb(center: &mut Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    let nearest = center.clamp(min, max);
    if nearest != *center {
        let delta = *center - nearest;
        let dist_sq = delta.length_squared();
        if dist_sq >= radius * radius {
            return false;
        }
        let dist = dist_sq.sqrt();
        let dir = if dist > 1e-4 { delta / dist } else { Vec2::X };
        *center = nearest + dir * radius;
        return true;
    }
    // Center inside the box: pick the face with the shallowest penetration.
    let left = center.x - min.x;
    let right = max.x - center.x;
    let down = center.y - min.y;
    let up = max.y - center.y;
    let smallest = left.min(right).min(down).min(up);
    if smallest == left {
        center.x = min.x - radius;
    } else if smallest == right {
        center.x = max.x + radius;
    } else if smallest == down {
        center.y = min.y - radius;
    } else {
        center.y = max.y + radius;
    }
    true
}

/// Shortest signed angular distance from `from` to `to`, in degrees,
/// wrapped to `[-180, 180]`.
#[inline]
pub fn angle_delta_degrees(from: f32, to: f32) -> f32 {
    let mut d = (to - from) % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d < -180.0 {
        d += 360.0;
    }
    d
}

/// Step `current` toward `goal` by at most `max_step` degrees along the
/// shorter arc. All angles in degrees.
pub fn turn_toward_degrees(current: f32, goal: f32, max_step: f32) -> f32 {
    let d = angle_delta_degrees(current, goal);
    if d.abs() <= max_step {
        goal
    } else {
        current + max_step.copysign(d)
    }
}
