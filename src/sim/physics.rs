//! Gravity, friction and knockback on top of a collision body
//!
//! The per-tick order matters and mirrors how entities feel to play:
//! ground check first, then friction (grounded) or gravity (airborne), then
//! the lock check, then movement. Friction decelerates toward zero and
//! clamps instead of oscillating around it. `launch` applies a knockback
//! impulse and locks the body; the lock clears on the first tick the body
//! starts with exactly zero velocity, which external controllers use to know
//! when they may steer again.

use glam::Vec2;

use super::body::CollisionBody;
use super::hazard::HazardSet;
use crate::consts::{DEFAULT_FRICTION, DEFAULT_GRAVITY};
use crate::world::TileWorld;

/// A collision body with platformer forces applied each tick
#[derive(Debug)]
pub struct PhysicsBody {
    pub body: CollisionBody,
    /// Downward acceleration per tick while airborne
    pub gravity: f32,
    /// Horizontal deceleration per tick while grounded
    pub friction: f32,
    on_ground: bool,
    locked: bool,
}

impl PhysicsBody {
    pub fn new(body: CollisionBody) -> Self {
        Self {
            body,
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            on_ground: false,
            locked: false,
        }
    }

    /// Was the body standing on a wall at the start of its last tick?
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Is the body still flying from a `launch`?
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Knock the body back: overwrite its velocity and lock it until the
    /// velocity has fully decayed.
    pub fn launch(&mut self, velocity: Vec2) {
        log::debug!("body {:?} launched with {}", self.body.id(), velocity);
        self.body.velocity = velocity;
        self.locked = true;
    }

    /// Advance one tick: forces, lock bookkeeping, then movement
    pub fn update(&mut self, world: &TileWorld, hazards: &mut HazardSet) {
        if !self.body.disable_collisions {
            self.on_ground = world.is_on_ground(self.body.bounds());
            let v = &mut self.body.velocity;
            if self.on_ground {
                if v.x != 0.0 {
                    v.x -= v.x.signum() * self.friction;
                    if v.x.abs() < self.friction {
                        v.x = 0.0;
                    }
                }
            } else {
                v.y -= self.gravity;
            }
        }

        if self.locked && self.body.velocity == Vec2::ZERO {
            self.locked = false;
        }

        self.body.update(world, hazards);
    }
}
