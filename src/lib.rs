//! Tile Hollow - tile-grid movement and collision for a 2D platformer
//!
//! Core modules:
//! - `world`: tile grid with point-in-wall queries and a grid raycast
//! - `sim`: per-tick body movement, swept collision resolution, hazard overlap
//! - `tuning`: data-driven physics balance
//!
//! The simulation is single-threaded and fixed-step: one logical tick per
//! frame, velocities expressed in world units per tick. Rendering, input,
//! level generation and AI live outside this crate and consume the engine's
//! outputs (positions, velocities, grounded/blocked signals, hit events).

pub mod sim;
pub mod tuning;
pub mod world;

pub use sim::{
    BodyRect, CollisionBody, Hazard, HazardHit, HazardKind, HazardSet, HazardSpawn, PhysicsBody,
    Sweep, resolve,
};
pub use tuning::Tuning;
pub use world::{Tile, TileWorld};

use glam::IVec2;

/// Engine configuration constants
pub mod consts {
    /// Fixed simulation rate; velocities are world units per tick
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Size of one grid tile in world units
    pub const TILE_SIZE: i32 = 50;

    /// The collision binary search stops once the free and solid endpoints
    /// are within this distance of each other
    pub const CONTACT_TOLERANCE: f32 = 0.5;
    /// Offset of the single-axis probes that attribute a stop to an axis
    pub const AXIS_PROBE: f32 = 1.0;
    /// Recursion cap for the slide refinement. Past this depth the resolver
    /// keeps the best mask found so far; see `sim::collision`.
    pub const MAX_SLIDE_DEPTH: u32 = 3;

    /// Baseline downward acceleration per tick for physics bodies
    pub const DEFAULT_GRAVITY: f32 = 1.0;
    /// Baseline ground deceleration per tick for physics bodies
    pub const DEFAULT_FRICTION: f32 = 1.0;

    /// Hazard (projectile) defaults
    pub const HAZARD_SIZE: i32 = 8;
    pub const HAZARD_SPEED: f32 = 10.0;
    pub const HAZARD_DAMAGE: i32 = 10;
}

/// Convert a world point to the grid cell containing it.
///
/// Floor (not truncation) semantics, so cell indices stay monotonic across
/// the origin: x = -1 maps to cell -1, not cell 0.
#[inline]
pub fn to_grid(p: IVec2) -> IVec2 {
    IVec2::new(
        p.x.div_euclid(consts::TILE_SIZE),
        p.y.div_euclid(consts::TILE_SIZE),
    )
}

/// Convert a grid cell to the world position of its bottom-left corner
#[inline]
pub fn from_grid(cell: IVec2) -> IVec2 {
    cell * consts::TILE_SIZE
}

/// Snap a world point to the bottom-left corner of its tile
#[inline]
pub fn snap_to_grid(p: IVec2) -> IVec2 {
    from_grid(to_grid(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_grid_floors_negatives() {
        assert_eq!(to_grid(IVec2::new(0, 0)), IVec2::new(0, 0));
        assert_eq!(to_grid(IVec2::new(49, 49)), IVec2::new(0, 0));
        assert_eq!(to_grid(IVec2::new(50, 99)), IVec2::new(1, 1));
        assert_eq!(to_grid(IVec2::new(-1, -50)), IVec2::new(-1, -1));
        assert_eq!(to_grid(IVec2::new(-51, -100)), IVec2::new(-2, -2));
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(IVec2::new(73, 120)), IVec2::new(50, 100));
        assert_eq!(snap_to_grid(IVec2::new(-20, 0)), IVec2::new(-50, 0));
    }

    #[test]
    fn test_grid_round_trip() {
        let cell = IVec2::new(3, -2);
        assert_eq!(to_grid(from_grid(cell)), cell);
    }
}
