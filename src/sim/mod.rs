//! Deterministic simulation module
//!
//! All movement and collision logic lives here. This module must stay pure
//! and deterministic:
//! - Fixed timestep only, one logical tick per call
//! - Stable handler and iteration order (registration/spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod hazard;
pub mod physics;
pub mod rect;

pub use body::{BodyId, CollisionBody};
pub use collision::{Sweep, hits_wall, resolve};
pub use hazard::{Hazard, HazardHit, HazardKind, HazardSet, HazardSpawn};
pub use physics::PhysicsBody;
pub use rect::BodyRect;
