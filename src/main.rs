//! Tile Hollow demo entry point
//!
//! Runs a short headless simulation: a body is knocked back across a small
//! level while a hazard flies at it, with positions and events logged.

use glam::{IVec2, Vec2};

use tile_hollow::sim::{BodyId, CollisionBody};
use tile_hollow::{BodyRect, HazardSpawn, HazardSet, PhysicsBody, TileWorld, Tuning};

fn main() {
    env_logger::init();
    log::info!("Tile Hollow demo starting...");

    let world = TileWorld::from_ascii(
        "\
....................
....................
....................
..........#.........
..........#.........
####################",
    );

    let tuning = Tuning::default();
    let mut hazards = HazardSet::new();

    let mut player = PhysicsBody::new(CollisionBody::new(BodyRect::new(
        Vec2::new(100.0, 50.0),
        IVec2::new(36, 36),
    )));
    tuning.apply(&mut player);
    player.body.on_collision(|pos| log::info!("player blocked at {pos}"));
    player
        .body
        .on_hazard_hit(|hit| log::info!("player took {} damage from {:?}", hit.damage, hit.kind));

    // a hazard fired at the player from off to the right
    let shooter = BodyId::next();
    hazards.spawn(
        HazardSpawn::new(shooter, IVec2::new(400, 70), Vec2::NEG_X)
            .speed(tuning.hazard_speed)
            .damage(tuning.hazard_damage),
    );

    player.launch(Vec2::new(8.0, 12.0));
    log::info!("player launched");

    let mut tick = 0u32;
    while (player.locked() || !hazards.is_empty()) && tick < 300 {
        hazards.update(&world);
        player.update(&world, &mut hazards);
        tick += 1;
        log::debug!(
            "tick {tick}: player at {}, velocity {}, {} hazards live",
            player.body.position(),
            player.body.velocity,
            hazards.len()
        );
    }

    log::info!(
        "settled after {tick} ticks at {} (on_ground: {})",
        player.body.position(),
        player.on_ground()
    );
}
