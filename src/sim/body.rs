//! Movable collision body
//!
//! A `CollisionBody` owns position, velocity, size and collision flags for
//! one entity. Each tick its `update` resolves the desired displacement
//! against the tile grid, zeroes blocked velocity components, and fires
//! registered handlers: `on_collision` when an axis was blocked, then
//! `on_hazard_hit` for every foreign hazard box overlapping the final
//! bounds. Handlers run in registration order, which collaborators rely on
//! for side-effect sequencing (despawn before loot spawn and the like).

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use glam::{IVec2, Vec2};

use super::collision::{self, Sweep};
use super::hazard::{HazardHit, HazardSet};
use super::rect::BodyRect;
use crate::world::TileWorld;

/// Unique identity of a body, used for hazard owner exclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(u32);

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

impl BodyId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One movable axis-aligned box in the world
pub struct CollisionBody {
    rect: BodyRect,
    /// Desired displacement in world units per tick
    pub velocity: Vec2,
    /// Skip wall resolution entirely (ghosts, particles)
    pub disable_collisions: bool,
    /// Skip the hazard-overlap scan (hazards themselves, collectibles)
    pub disable_hazard_box: bool,
    id: BodyId,
    collision_handlers: Vec<Box<dyn FnMut(IVec2)>>,
    hazard_handlers: Vec<Box<dyn FnMut(&HazardHit)>>,
}

impl CollisionBody {
    /// Create a body with the given initial bounds and zero velocity
    pub fn new(bounds: BodyRect) -> Self {
        Self {
            rect: bounds,
            velocity: Vec2::ZERO,
            disable_collisions: false,
            disable_hazard_box: false,
            id: BodyId::next(),
            collision_handlers: Vec::new(),
            hazard_handlers: Vec::new(),
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Current bounds (sub-pixel position, integer size)
    pub fn bounds(&self) -> &BodyRect {
        &self.rect
    }

    /// Integer position (floored bottom-left corner)
    pub fn position(&self) -> IVec2 {
        self.rect.point()
    }

    /// Teleport the body. No correction happens if the target is inside a
    /// wall; placement code is responsible for clean positions.
    pub fn set_position(&mut self, p: IVec2) {
        self.rect.pos = p.as_vec2();
    }

    pub fn size(&self) -> IVec2 {
        self.rect.size
    }

    pub fn center(&self) -> IVec2 {
        self.rect.center()
    }

    /// Register a handler fired when a tick blocked at least one axis.
    /// Receives the resolved, corrected position.
    pub fn on_collision(&mut self, handler: impl FnMut(IVec2) + 'static) {
        self.collision_handlers.push(Box::new(handler));
    }

    /// Register a handler fired when a foreign hazard box overlaps this body
    pub fn on_hazard_hit(&mut self, handler: impl FnMut(&HazardHit) + 'static) {
        self.hazard_handlers.push(Box::new(handler));
    }

    pub(crate) fn emit_collision(&mut self) {
        let pos = self.position();
        for handler in &mut self.collision_handlers {
            handler(pos);
        }
    }

    /// Advance against walls only; returns the applied sweep.
    /// Fires `on_collision` if an axis was blocked.
    pub(crate) fn move_and_collide(&mut self, world: &TileWorld) -> Sweep {
        let sweep = if self.disable_collisions {
            Sweep {
                pos: self.rect.pos + self.velocity,
                mask: Vec2::ONE,
            }
        } else {
            collision::resolve(world, &self.rect, self.velocity)
        };

        self.rect.pos = sweep.pos;
        self.velocity *= sweep.mask;
        if sweep.mask.x == 0.0 || sweep.mask.y == 0.0 {
            self.emit_collision();
        }
        sweep
    }

    /// Advance the body by one tick: wall resolution first, then the
    /// hazard-overlap scan over a stable snapshot of the active set.
    pub fn update(&mut self, world: &TileWorld, hazards: &mut HazardSet) {
        self.move_and_collide(world);

        if self.disable_collisions || self.disable_hazard_box {
            return;
        }
        // Snapshot: hit handlers may despawn hazards mid-scan without
        // skipping or double-processing entries.
        for hit in hazards.snapshot() {
            if hit.owner == self.id || !hit.bounds.intersects(&self.rect) {
                continue;
            }
            log::trace!("body {:?} hit by hazard {:?}", self.id, hit.id);
            for handler in &mut self.hazard_handlers {
                handler(&hit);
            }
            hazards.notify_collision(hit.id);
        }
    }
}

impl fmt::Debug for CollisionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionBody")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("velocity", &self.velocity)
            .field("disable_collisions", &self.disable_collisions)
            .field("disable_hazard_box", &self.disable_hazard_box)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn floor_world() -> TileWorld {
        let mut rows = vec!["##########".to_string()];
        for _ in 0..10 {
            rows.insert(0, "..........".to_string());
        }
        TileWorld::from_ascii(&rows.join("\n"))
    }

    fn body_at(x: f32, y: f32) -> CollisionBody {
        CollisionBody::new(BodyRect::new(Vec2::new(x, y), IVec2::new(36, 36)))
    }

    #[test]
    fn test_update_applies_velocity() {
        let world = floor_world();
        let mut hazards = HazardSet::new();
        let mut body = body_at(100.0, 300.0);
        body.velocity = Vec2::new(5.0, -8.0);
        body.update(&world, &mut hazards);
        assert_eq!(body.position(), IVec2::new(105, 292));
        assert_eq!(body.velocity, Vec2::new(5.0, -8.0));
    }

    #[test]
    fn test_blocked_axis_zeroes_velocity_and_fires_handler() {
        let world = floor_world();
        let mut hazards = HazardSet::new();
        let mut body = body_at(100.0, 400.0);
        body.velocity = Vec2::new(0.0, -1000.0);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        body.on_collision(move |pos| sink.borrow_mut().push(pos));

        body.update(&world, &mut hazards);
        assert_eq!(body.position().y, 50);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(seen.borrow().as_slice(), &[IVec2::new(100, 50)]);

        // settled body: no further collision events
        body.update(&world, &mut hazards);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let world = floor_world();
        let mut hazards = HazardSet::new();
        let mut body = body_at(100.0, 60.0);
        body.velocity = Vec2::new(0.0, -100.0);

        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let sink = order.clone();
            body.on_collision(move |_| sink.borrow_mut().push(tag));
        }
        body.update(&world, &mut hazards);
        assert_eq!(order.borrow().as_slice(), &["first", "second", "third"]);
    }

    #[test]
    fn test_disabled_collisions_move_through_walls() {
        let world = floor_world();
        let mut hazards = HazardSet::new();
        let mut body = body_at(100.0, 300.0);
        body.disable_collisions = true;
        body.velocity = Vec2::new(0.0, -400.0);

        body.update(&world, &mut hazards);
        // straight through the floor, velocity intact, no event
        assert_eq!(body.position(), IVec2::new(100, -100));
        assert_eq!(body.velocity, Vec2::new(0.0, -400.0));
    }

    #[test]
    fn test_external_position_mutation_between_ticks() {
        let world = floor_world();
        let mut hazards = HazardSet::new();
        let mut body = body_at(100.0, 300.0);
        body.set_position(IVec2::new(200, 120));
        body.update(&world, &mut hazards);
        assert_eq!(body.position(), IVec2::new(200, 120));
    }
}
