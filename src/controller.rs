use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::court::CourtDivider;
use crate::fsm::MatchPhase;
use crate::params::Params;
use crate::resources::{Events, InputQueue, PaddleCommand, Score};
use crate::surface::{DisplaySurface, TextRegion, TextStyle};
use crate::{spawn_ball, spawn_paddle, step};
use glam::Vec2;
use hecs::World;
use std::time::Duration;

/// Owns the match: world, resources, and the tick cycle
///
/// A host builds one controller, wires its key bindings to
/// [`MatchController::push_command`], and either calls [`MatchController::run`]
/// with a blocking surface or paces [`MatchController::tick`] itself.
pub struct MatchController {
    world: World,
    config: Config,
    divider: CourtDivider,
    queue: InputQueue,
    score: Score,
    events: Events,
    phase: MatchPhase,
    ball: hecs::Entity,
}

impl MatchController {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Left, 0.0);
        spawn_paddle(&mut world, Side::Right, 0.0);
        let ball = spawn_ball(&mut world, &config);
        let divider = CourtDivider::new(&config);

        Self {
            world,
            config,
            divider,
            queue: InputQueue::new(),
            score: Score::new(),
            events: Events::new(),
            phase: MatchPhase::new(),
            ball,
        }
    }

    /// Draw the static court furniture and the opening 0:0
    pub fn setup(&mut self, surface: &mut dyn DisplaySurface) {
        for segment in self.divider.segments() {
            surface.draw_segment(*segment);
        }
        self.draw_scores(surface);
    }

    /// Queue one paddle step for the next tick
    pub fn push_command(&mut self, command: PaddleCommand) {
        self.queue.push(command);
    }

    /// One full tick: render, simulate, settle displays
    ///
    /// Returns the pacing delay to sleep before the next tick. After the
    /// match finishes the simulation is frozen and the delay is zero.
    pub fn tick(&mut self, surface: &mut dyn DisplaySurface) -> Duration {
        if self.phase.is_finished() {
            return Duration::ZERO;
        }

        surface.render_frame();

        step(
            &mut self.world,
            &self.config,
            &mut self.queue,
            &mut self.score,
            &mut self.events,
            &mut self.phase,
        );

        if self.events.left_scored || self.events.right_scored {
            self.draw_scores(surface);
        }
        if self.events.match_over {
            self.draw_winner_banner(surface);
            return Duration::ZERO;
        }

        Duration::from_secs_f32(self.tick_delay())
    }

    /// Drive the match to completion, then block for dismissal
    ///
    /// The sleep between ticks is the ball's pacing delay, so rallies
    /// visibly accelerate as it shrinks.
    pub fn run(&mut self, surface: &mut dyn DisplaySurface) {
        self.setup(surface);
        while self.phase.is_playing() {
            let delay = self.tick(surface);
            if self.phase.is_playing() {
                std::thread::sleep(delay);
            }
        }
        surface.await_dismissal();
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.winner(self.config.win_score)
    }

    pub fn events(&self) -> Events {
        self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the ball, for hosts rendering the frame
    pub fn ball(&self) -> Ball {
        *self.world.get::<&Ball>(self.ball).unwrap()
    }

    /// Current pacing delay in seconds
    pub fn tick_delay(&self) -> f32 {
        self.ball().tick_delay
    }

    /// Y position of a paddle center, for hosts rendering the frame
    pub fn paddle_y(&self, side: Side) -> f32 {
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            if paddle.side == side {
                return paddle.y;
            }
        }
        0.0
    }

    fn draw_scores(&self, surface: &mut dyn DisplaySurface) {
        surface.clear_text(TextRegion::Scores);
        surface.draw_text(
            Vec2::new(-Params::SCORE_OFFSET_X, Params::SCORE_Y),
            &self.score.left.to_string(),
            TextStyle::Score,
        );
        surface.draw_text(
            Vec2::new(Params::SCORE_OFFSET_X, Params::SCORE_Y),
            &self.score.right.to_string(),
            TextStyle::Score,
        );
    }

    fn draw_winner_banner(&self, surface: &mut dyn DisplaySurface) {
        if let Some(side) = self.winner() {
            surface.draw_text(
                Vec2::ZERO,
                &format!("{side} WINS!\nClick to exit"),
                TextStyle::Banner,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    #[test]
    fn test_setup_draws_divider_and_opening_scores() {
        let mut controller = MatchController::new(Config::new());
        let mut surface = HeadlessSurface::new();

        controller.setup(&mut surface);

        assert_eq!(surface.segments.len(), 10, "Dashed divider is drawn once");
        assert_eq!(surface.texts.len(), 2, "Both numerals start at zero");
        assert_eq!(surface.texts[0].1, "0");
        assert_eq!(surface.texts[1].1, "0");
    }

    #[test]
    fn test_tick_renders_and_advances() {
        let mut controller = MatchController::new(Config::new());
        let mut surface = HeadlessSurface::new();

        let delay = controller.tick(&mut surface);

        assert_eq!(surface.frames, 1);
        assert_eq!(controller.ball().pos, Vec2::new(10.0, 10.0));
        assert_eq!(delay, Duration::from_secs_f32(0.1));
    }

    #[test]
    fn test_input_reaches_the_paddle_next_tick() {
        let mut controller = MatchController::new(Config::new());
        let mut surface = HeadlessSurface::new();
        controller.push_command(PaddleCommand::new(Side::Right, crate::resources::Dir::Up));

        controller.tick(&mut surface);

        assert_eq!(controller.paddle_y(Side::Right), 20.0);
        assert_eq!(controller.paddle_y(Side::Left), 0.0);
    }

    #[test]
    fn test_finished_match_freezes_the_simulation() {
        let mut controller = MatchController::new(Config::new());
        let mut surface = HeadlessSurface::new();
        controller.phase.finish();
        let pos_before = controller.ball().pos;

        let delay = controller.tick(&mut surface);

        assert_eq!(surface.frames, 0, "No rendering after the match ends");
        assert_eq!(controller.ball().pos, pos_before);
        assert_eq!(delay, Duration::ZERO);
    }
}
