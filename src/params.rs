/// Match tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (origin at center, +y up)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    pub const WALL_BOUNDARY: f32 = 280.0; // |y| beyond this reflects the ball
    pub const OUT_BOUNDARY: f32 = 380.0; // |x| beyond this scores a point

    // Paddle
    pub const PADDLE_X: f32 = 350.0;
    pub const PADDLE_REACH: f32 = 320.0; // inner edge of the collision band
    pub const PADDLE_HALF_HEIGHT: f32 = 50.0;
    pub const PADDLE_TRAVEL: f32 = 250.0; // |y| limit for paddle centers
    pub const PADDLE_SPEED: f32 = 20.0; // units per input command

    // Ball
    pub const BALL_STEP: f32 = 10.0; // per-axis distance per tick
    pub const INITIAL_TICK_DELAY: f32 = 0.1; // seconds between ticks
    pub const SPEEDUP_FACTOR: f32 = 0.9; // tick delay multiplier per paddle hit
    pub const MIN_TICK_DELAY: f32 = 0.01; // floor on the pacing delay

    // Text layout
    pub const SCORE_OFFSET_X: f32 = 100.0; // numerals sit at +/- this, mirrored
    pub const SCORE_Y: f32 = 200.0;

    // Divider
    pub const DIVIDER_DASH: f32 = 20.0;
    pub const DIVIDER_GAP: f32 = 40.0;

    // Score
    pub const WIN_SCORE: u32 = 5; // first to 5 wins
}
