//! Hazard (projectile) overlay
//!
//! Hazards are small fast bodies that damage whatever they overlap. They
//! move through the same wall resolver as every other body, but the overlap
//! test against other bodies is a plain discrete AABB check each tick, not a
//! swept one. A hazard despawns on its first collision with anything, wall
//! or body, and never hits the body that spawned it.

use glam::{IVec2, Vec2};

use super::body::{BodyId, CollisionBody};
use super::rect::BodyRect;
use crate::consts::{HAZARD_DAMAGE, HAZARD_SIZE, HAZARD_SPEED};
use crate::world::TileWorld;

/// What kind of hazard was spawned; carried through to hit handlers so
/// they can pick damage reactions per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HazardKind {
    #[default]
    Bullet,
    Fireball,
}

/// Spawn request for one hazard. `owner` never gets hit by it.
#[derive(Debug, Clone, Copy)]
pub struct HazardSpawn {
    pub owner: BodyId,
    /// World point the hazard is centered on
    pub origin: IVec2,
    /// Flight direction; normalized at spawn
    pub direction: Vec2,
    pub kind: HazardKind,
    pub damage: i32,
    pub speed: f32,
    pub size: i32,
}

impl HazardSpawn {
    pub fn new(owner: BodyId, origin: IVec2, direction: Vec2) -> Self {
        Self {
            owner,
            origin,
            direction,
            kind: HazardKind::default(),
            damage: HAZARD_DAMAGE,
            speed: HAZARD_SPEED,
            size: HAZARD_SIZE,
        }
    }

    pub fn kind(mut self, kind: HazardKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }
}

/// One live hazard
#[derive(Debug)]
pub struct Hazard {
    pub body: CollisionBody,
    pub owner: BodyId,
    pub kind: HazardKind,
    pub damage: i32,
    spent: bool,
}

/// Snapshot of one live hazard, handed to overlap scans and hit handlers
#[derive(Debug, Clone, Copy)]
pub struct HazardHit {
    pub id: BodyId,
    pub owner: BodyId,
    pub kind: HazardKind,
    pub damage: i32,
    pub bounds: BodyRect,
}

/// All live hazards in the world
#[derive(Debug, Default)]
pub struct HazardSet {
    hazards: Vec<Hazard>,
}

impl HazardSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a hazard centered on the request's origin; returns its body id
    pub fn spawn(&mut self, spawn: HazardSpawn) -> BodyId {
        let size = IVec2::splat(spawn.size);
        let pos = spawn.origin - size / 2;
        let mut body = CollisionBody::new(BodyRect::new(pos.as_vec2(), size));
        body.velocity = spawn.direction.normalize_or_zero() * spawn.speed;
        // hazards do not scan for other hazards
        body.disable_hazard_box = true;
        let id = body.id();
        log::debug!("spawned {:?} hazard {:?} at {}", spawn.kind, id, pos);

        self.hazards.push(Hazard {
            body,
            owner: spawn.owner,
            kind: spawn.kind,
            damage: spawn.damage,
            spent: false,
        });
        id
    }

    /// Advance every hazard one tick. A hazard that hits a wall is despawned
    /// after its collision handlers ran.
    pub fn update(&mut self, world: &TileWorld) {
        for hazard in &mut self.hazards {
            let sweep = hazard.body.move_and_collide(world);
            if sweep.mask != Vec2::ONE {
                log::debug!("hazard {:?} hit a wall", hazard.body.id());
                hazard.spent = true;
            }
        }
        self.hazards.retain(|h| !h.spent);
    }

    /// Stable copy of the active set for overlap scans
    pub(crate) fn snapshot(&self) -> Vec<HazardHit> {
        self.hazards
            .iter()
            .filter(|h| !h.spent)
            .map(|h| HazardHit {
                id: h.body.id(),
                owner: h.owner,
                kind: h.kind,
                damage: h.damage,
                bounds: *h.body.bounds(),
            })
            .collect()
    }

    /// A body was hit by this hazard: fire the hazard's own collision
    /// handlers, then despawn it.
    pub(crate) fn notify_collision(&mut self, id: BodyId) {
        if let Some(hazard) = self.hazards.iter_mut().find(|h| h.body.id() == id) {
            hazard.body.emit_collision();
            hazard.spent = true;
        }
        self.hazards.retain(|h| !h.spent);
    }

    /// Remove a hazard without firing anything
    pub fn despawn(&mut self, id: BodyId) {
        self.hazards.retain(|h| h.body.id() != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards.iter()
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }
}
