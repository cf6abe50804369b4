//! Ray casts against the tile grid and actor cylinders.
//!
//! Wall casts walk tile boundaries with an amortized DDA on the XY plane,
//! carrying the full 3D position so a wall face only registers when the
//! impact height lands strictly inside the wall band `(0, 1)`. Floor and
//! ceiling are separate infinite-plane casts clipped to the map volume, and
//! actors are capped vertical cylinders. Callers merge per-source results
//! by taking the nearest hit.
//!
//! Directions are assumed normalized; distances are then world units.

use glam::{Vec2, Vec3};

use crate::grid::TileGrid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub dist: f32,
    pub pos: Vec3,
    pub normal: Vec3,
}

impl RayHit {
    /// Zero-length hit for rays that start inside a solid.
    fn immediate(start: Vec3, dir: Vec3) -> Self {
        Self {
            dist: 0.0,
            pos: start,
            normal: -dir,
        }
    }
}

/// Cast against solid tiles, stepping tile boundaries on the XY plane.
/// A ray that starts inside a solid tile at wall height reports an
/// immediate hit. Vertical rays never hit walls.
pub fn raycast_grid_xy(grid: &TileGrid, start: Vec3, dir: Vec3, max_dist: f32) -> Option<RayHit> {
    let mut coords = grid.coords_for(start.truncate());
    if grid.is_solid(coords) && start.z > 0.0 && start.z < 1.0 {
        return Some(RayHit::immediate(start, dir));
    }

    let step_x: i32 = if dir.x > 0.0 { 1 } else { -1 };
    let step_y: i32 = if dir.y > 0.0 { 1 } else { -1 };
    let t_delta_x = if dir.x != 0.0 { 1.0 / dir.x.abs() } else { f32::INFINITY };
    let t_delta_y = if dir.y != 0.0 { 1.0 / dir.y.abs() } else { f32::INFINITY };
    let mut t_max_x = if dir.x != 0.0 {
        let boundary = if dir.x > 0.0 { coords.x + 1 } else { coords.x } as f32;
        (boundary - start.x) / dir.x
    } else {
        f32::INFINITY
    };
    let mut t_max_y = if dir.y != 0.0 {
        let boundary = if dir.y > 0.0 { coords.y + 1 } else { coords.y } as f32;
        (boundary - start.y) / dir.y
    } else {
        f32::INFINITY
    };

    loop {
        let (t, crossed_x) = if t_max_x < t_max_y {
            (t_max_x, true)
        } else {
            (t_max_y, false)
        };
        if !t.is_finite() || t > max_dist {
            return None;
        }
        if crossed_x {
            coords.x += step_x;
            t_max_x += t_delta_x;
        } else {
            coords.y += step_y;
            t_max_y += t_delta_y;
        }
        if grid.is_solid(coords) {
            let pos = start + dir * t;
            if pos.z > 0.0 && pos.z < 1.0 {
                let normal = if crossed_x {
                    Vec3::new(-step_x as f32, 0.0, 0.0)
                } else {
                    Vec3::new(0.0, -step_y as f32, 0.0)
                };
                return Some(RayHit { dist: t, pos, normal });
            }
        }
    }
}

/// Cast against the floor (z=0) and ceiling (z=1) planes, clipped to the
/// map footprint. Rays with no vertical component never hit either.
pub fn raycast_planes_z(grid: &TileGrid, start: Vec3, dir: Vec3, max_dist: f32) -> Option<RayHit> {
    if dir.z == 0.0 {
        return None;
    }
    let (plane, normal) = if dir.z < 0.0 {
        (0.0, Vec3::Z)
    } else {
        (1.0, Vec3::NEG_Z)
    };
    let t = (plane - start.z) / dir.z;
    if t < 0.0 || t > max_dist {
        return None;
    }
    let pos = start + dir * t;
    if !grid.position_in_bounds(pos, 1e-3) {
        return None;
    }
    Some(RayHit { dist: t, pos, normal })
}

/// Cast against a capped vertical cylinder with its base at `base`.
/// A ray that starts inside reports an immediate hit.
pub fn ray_vs_cylinder(
    start: Vec3,
    dir: Vec3,
    max_dist: f32,
    base: Vec3,
    radius: f32,
    height: f32,
) -> Option<RayHit> {
    let top = base.z + height;
    let o = start.truncate() - base.truncate();
    if o.length_squared() <= radius * radius && start.z >= base.z && start.z <= top {
        return Some(RayHit::immediate(start, dir));
    }

    // Parameter interval where the ray is inside the z slab.
    let (tz_enter, tz_exit) = if dir.z != 0.0 {
        let t0 = (base.z - start.z) / dir.z;
        let t1 = (top - start.z) / dir.z;
        (t0.min(t1), t0.max(t1))
    } else {
        if start.z < base.z || start.z > top {
            return None;
        }
        (f32::NEG_INFINITY, f32::INFINITY)
    };

    // Parameter interval where the ray is inside the infinite XY circle.
    let d = dir.truncate();
    let a = d.length_squared();
    let (txy_enter, txy_exit) = if a > 1e-8 {
        let b = o.dot(d);
        let c = o.length_squared() - radius * radius;
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let s = disc.sqrt();
        ((-b - s) / a, (-b + s) / a)
    } else {
        if o.length_squared() > radius * radius {
            return None;
        }
        (f32::NEG_INFINITY, f32::INFINITY)
    };

    let enter = tz_enter.max(txy_enter);
    let exit = tz_exit.min(txy_exit);
    if enter > exit || exit < 0.0 || enter < 0.0 || enter > max_dist {
        return None;
    }

    let pos = start + dir * enter;
    let normal = if tz_enter > txy_enter {
        // Entered through a cap.
        if dir.z > 0.0 { Vec3::NEG_Z } else { Vec3::Z }
    } else {
        let radial = pos.truncate() - base.truncate();
        let n = if radial.length_squared() > 1e-8 {
            radial.normalize()
        } else {
            Vec2::X
        };
        n.extend(0.0)
    };
    Some(RayHit { dist: enter, pos, normal })
}
