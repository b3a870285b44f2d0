//! Data-driven physics balance
//!
//! All the feel numbers in one serde struct so designers can tweak them from
//! a JSON file without touching code. Every field has a default, so a tuning
//! file only needs to list the values it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FRICTION, DEFAULT_GRAVITY, HAZARD_DAMAGE, HAZARD_SIZE, HAZARD_SPEED,
};
use crate::sim::PhysicsBody;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick while airborne
    pub gravity: f32,
    /// Horizontal deceleration per tick while grounded
    pub friction: f32,
    pub hazard_speed: f32,
    pub hazard_damage: i32,
    pub hazard_size: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            hazard_speed: HAZARD_SPEED,
            hazard_damage: HAZARD_DAMAGE,
            hazard_size: HAZARD_SIZE,
        }
    }
}

impl Tuning {
    /// Parse a tuning file; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply the force parameters to a physics body
    pub fn apply(&self, body: &mut PhysicsBody) {
        body.gravity = self.gravity;
        body.friction = self.friction;
    }
}
