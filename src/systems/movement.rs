use crate::components::Ball;
use hecs::World;

/// Advance the ball one tick along its velocity
pub fn advance_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}
