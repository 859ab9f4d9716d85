use crate::components::Side;

/// Match score
///
/// Counters only move up, one point at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award_left(&mut self) {
        self.left += 1;
    }

    pub fn award_right(&mut self) {
        self.right += 1;
    }

    /// The winning side, if either score has reached the threshold
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        // Points land one at a time and the check runs after every point,
        // so both sides cannot reach the threshold together.
        debug_assert!(
            self.left < win_score || self.right < win_score,
            "scores {}:{} cannot both reach the threshold",
            self.left,
            self.right
        );
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// What happened during the current tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub left_scored: bool,
    pub right_scored: bool,
    pub match_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Direction of a single paddle step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
}

/// One queued paddle step, produced by the host's key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleCommand {
    pub side: Side,
    pub dir: Dir,
}

impl PaddleCommand {
    pub fn new(side: Side, dir: Dir) -> Self {
        Self { side, dir }
    }
}

/// Pending paddle commands, drained once per tick
///
/// The host's input bindings push; the loop is the only consumer, which
/// keeps paddle state single-writer-per-tick even if the host event system
/// runs elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    commands: Vec<PaddleCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PaddleCommand) {
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> Vec<PaddleCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
