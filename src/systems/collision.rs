use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;
use glam::Vec2;
use hecs::World;

/// Whether the ball has crossed the top or bottom wall
///
/// Strict comparison: a ball sitting exactly on the boundary is still in.
pub fn wall_collision(pos: Vec2, config: &Config) -> bool {
    pos.y > config.wall_boundary || pos.y < -config.wall_boundary
}

/// Whether the ball overlaps either paddle's collision band
///
/// Axis-aligned box test: the X band just inside each paddle face, and a
/// half-height window around that paddle's center. Cheaper and better at
/// paddle edges than a radial distance check.
pub fn paddle_collision(pos: Vec2, right_y: f32, left_y: f32, config: &Config) -> bool {
    let in_right_band = pos.x > config.paddle_reach && pos.x < config.paddle_x;
    if in_right_band && (pos.y - right_y).abs() < config.paddle_half_height {
        return true;
    }

    let in_left_band = pos.x < -config.paddle_reach && pos.x > -config.paddle_x;
    in_left_band && (pos.y - left_y).abs() < config.paddle_half_height
}

/// Apply wall and paddle bounces for this tick
pub fn resolve_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut right_y = 0.0;
    let mut left_y = 0.0;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left_y = paddle.y,
            Side::Right => right_y = paddle.y,
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if wall_collision(ball.pos, config) {
            ball.bounce_y();
            events.ball_hit_wall = true;
            log::debug!("wall bounce at y={:.1}", ball.pos.y);
        }
        // Wall and paddle contacts are settled independently; a corner
        // tick may legitimately flip both axes.
        if paddle_collision(ball.pos, right_y, left_y, config) {
            ball.bounce_x(config);
            events.ball_hit_paddle = true;
            log::debug!(
                "paddle bounce at x={:.1}, tick delay now {:.3}s",
                ball.pos.x,
                ball.tick_delay
            );
        }
    }
}
