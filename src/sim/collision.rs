//! Swept axis-decoupled collision resolution
//!
//! Given a desired per-tick displacement for a body, find how far it can
//! actually travel before touching a solid tile, and report which axes were
//! blocked so gravity/friction/knockback logic can react.
//!
//! The resolver never steps the box through the grid: it binary-searches the
//! start..target segment for the furthest collision-free point, so the
//! iteration count stays a small constant no matter how large the velocity
//! is. That is what prevents fast bodies (launches, projectiles) from
//! tunneling through thin walls.
//!
//! When only one axis is blocked, the remaining displacement is re-resolved
//! with that axis zeroed so the body keeps sliding along the free axis. The
//! refinement recurses, capped at [`MAX_SLIDE_DEPTH`]: a naive uncapped
//! version recursed forever on some multi-tile corner geometry, and it is
//! still unclear exactly which configurations trigger it. Past the cap the
//! resolver accepts the best mask found so far instead of refining further.

use glam::Vec2;

use super::rect::BodyRect;
use crate::consts::{AXIS_PROBE, CONTACT_TOLERANCE, MAX_SLIDE_DEPTH};
use crate::world::TileWorld;

/// Outcome of resolving one displacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Furthest reachable position along the displacement
    pub pos: Vec2,
    /// Per-axis motion mask: 1.0 free, 0.0 blocked. Callers multiply the
    /// body's velocity by this component-wise.
    pub mask: Vec2,
}

/// Does the box overlap a wall at any of its four corners?
#[inline]
pub fn hits_wall(world: &TileWorld, rect: &BodyRect) -> bool {
    rect.corners().iter().any(|&p| world.is_wall(p))
}

/// Resolve a displacement of `rect` by `velocity` against the tile grid.
///
/// A box already embedded in a wall is not pushed out; the resolver only
/// guarantees that no new penetration is introduced from a clean start.
pub fn resolve(world: &TileWorld, rect: &BodyRect, velocity: Vec2) -> Sweep {
    resolve_depth(world, rect, velocity, MAX_SLIDE_DEPTH)
}

fn resolve_depth(world: &TileWorld, rect: &BodyRect, velocity: Vec2, depth: u32) -> Sweep {
    if velocity == Vec2::ZERO {
        return Sweep {
            pos: rect.pos,
            mask: Vec2::ONE,
        };
    }

    let target = rect.offset(velocity);
    if !hits_wall(world, &target) {
        return Sweep {
            pos: target.pos,
            mask: Vec2::ONE,
        };
    }

    // Furthest collision-free point on the start..target segment. The free
    // endpoint is always kept, so the result can touch a tile boundary but
    // never cross it.
    let mut free = rect.pos;
    let mut solid = target.pos;
    while free.distance_squared(solid) > CONTACT_TOLERANCE * CONTACT_TOLERANCE {
        let mid = (free + solid) * 0.5;
        if hits_wall(world, &rect.at(mid)) {
            solid = mid;
        } else {
            free = mid;
        }
    }
    let stopped = rect.at(free);

    // Attribute the stop to an axis: nudge one unit along the sign of the
    // remaining velocity on each axis independently and re-test.
    let blocked_x = velocity.x != 0.0
        && hits_wall(
            world,
            &stopped.offset(Vec2::new(velocity.x.signum() * AXIS_PROBE, 0.0)),
        );
    let blocked_y = velocity.y != 0.0
        && hits_wall(
            world,
            &stopped.offset(Vec2::new(0.0, velocity.y.signum() * AXIS_PROBE)),
        );
    let mut mask = Vec2::new(
        if blocked_x { 0.0 } else { 1.0 },
        if blocked_y { 0.0 } else { 1.0 },
    );

    // One axis blocked: slide the untraveled remainder along the free axis.
    // The inner result decides whether the free axis ultimately blocks too.
    if blocked_x != blocked_y && depth > 0 {
        let remaining = (target.pos - free) * mask;
        let inner = resolve_depth(world, &stopped, remaining, depth - 1);
        if blocked_x {
            mask.y = inner.mask.y;
        } else {
            mask.x = inner.mask.x;
        }
        return Sweep {
            pos: inner.pos,
            mask,
        };
    }

    Sweep { pos: free, mask }
}
