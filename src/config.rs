use crate::components::Side;
use crate::params::Params;

/// Match configuration
///
/// Built once at setup and passed by reference into the systems and the
/// controller, so alternate court sizes and pacing values stay testable.
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub wall_boundary: f32,
    pub out_boundary: f32,
    pub paddle_x: f32,
    pub paddle_reach: f32,
    pub paddle_half_height: f32,
    pub paddle_travel: f32,
    pub paddle_speed: f32,
    pub ball_step: f32,
    pub initial_tick_delay: f32,
    pub speedup_factor: f32,
    pub min_tick_delay: f32,
    pub divider_dash: f32,
    pub divider_gap: f32,
    pub win_score: u32,
    /// Whether a serve keeps the speed bump from the direction-reversing
    /// bounce, or starts each rally at base pace.
    pub serve_speedup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            wall_boundary: Params::WALL_BOUNDARY,
            out_boundary: Params::OUT_BOUNDARY,
            paddle_x: Params::PADDLE_X,
            paddle_reach: Params::PADDLE_REACH,
            paddle_half_height: Params::PADDLE_HALF_HEIGHT,
            paddle_travel: Params::PADDLE_TRAVEL,
            paddle_speed: Params::PADDLE_SPEED,
            ball_step: Params::BALL_STEP,
            initial_tick_delay: Params::INITIAL_TICK_DELAY,
            speedup_factor: Params::SPEEDUP_FACTOR,
            min_tick_delay: Params::MIN_TICK_DELAY,
            divider_dash: Params::DIVIDER_DASH,
            divider_gap: Params::DIVIDER_GAP,
            win_score: Params::WIN_SCORE,
            serve_speedup: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed X position for a paddle center
    pub fn paddle_x_for(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.paddle_x,
            Side::Right => self.paddle_x,
        }
    }

    /// Whether a paddle center may sit at this Y
    pub fn paddle_y_in_bounds(&self, y: f32) -> bool {
        (-self.paddle_travel..=self.paddle_travel).contains(&y)
    }
}
