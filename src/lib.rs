pub mod components;
pub mod config;
pub mod controller;
pub mod court;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use court::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use surface::*;

use hecs::World;
use systems::*;

/// Run one deterministic simulation tick
///
/// Order matters: queued paddle commands land first, then the ball moves,
/// then bounces and scoring are settled against the new position. Once the
/// match is finished this is a no-op.
pub fn step(
    world: &mut World,
    config: &Config,
    queue: &mut InputQueue,
    score: &mut Score,
    events: &mut Events,
    phase: &mut MatchPhase,
) {
    if !phase.is_playing() {
        return;
    }

    events.clear();

    apply_commands(world, queue, config);
    advance_ball(world);
    resolve_collisions(world, config, events);
    check_scoring(world, config, score, events, phase);
}

/// Helper to create a paddle entity
pub fn spawn_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn spawn_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config),))
}
