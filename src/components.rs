use crate::config::Config;
use glam::Vec2;
use std::fmt;

/// Which half of the court a paddle (and its player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT PLAYER"),
            Side::Right => write!(f, "RIGHT PLAYER"),
        }
    }
}

/// Paddle component - a player's paddle
///
/// X is fixed per side (see `Config::paddle_x`); only Y moves.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Move one step up; no-op if the step would leave the travel range
    pub fn move_up(&mut self, config: &Config) {
        let new_y = self.y + config.paddle_speed;
        if new_y <= config.paddle_travel {
            self.y = new_y;
        }
    }

    /// Move one step down; no-op if the step would leave the travel range
    pub fn move_down(&mut self, config: &Config) {
        let new_y = self.y - config.paddle_speed;
        if new_y >= -config.paddle_travel {
            self.y = new_y;
        }
    }
}

/// Ball component
///
/// Velocity is axis-aligned with constant per-axis magnitude; bounces only
/// flip signs. `tick_delay` is the pacing interval between simulation
/// ticks, so a smaller value reads as a faster ball.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tick_delay: f32,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::splat(config.ball_step),
            tick_delay: config.initial_tick_delay,
        }
    }

    /// One tick of travel; bounds are the collision system's concern
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Wall bounce: vertical direction flips, pace unchanged
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Paddle bounce: horizontal direction flips and the pacing delay
    /// tightens, floored so a long rally cannot drive it to zero
    pub fn bounce_x(&mut self, config: &Config) {
        self.vel.x = -self.vel.x;
        self.tick_delay = (self.tick_delay * config.speedup_factor).max(config.min_tick_delay);
    }

    /// Serve: recenter, restore base pace, reverse direction toward the
    /// side that just conceded
    pub fn serve(&mut self, config: &Config) {
        self.pos = Vec2::ZERO;
        self.tick_delay = config.initial_tick_delay;
        if config.serve_speedup {
            // Reuses the paddle bounce, so the serve carries one speed bump.
            self.bounce_x(config);
        } else {
            self.vel.x = -self.vel.x;
        }
    }
}
