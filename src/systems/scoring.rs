use crate::components::Ball;
use crate::config::Config;
use crate::fsm::MatchPhase;
use crate::resources::{Events, Score};
use hecs::World;

/// Check for a missed return and settle the point
///
/// A ball past the right out line was missed by the right paddle, so the
/// left side scores, and mirrored for the left line. The ball is served
/// toward the conceding side and the win threshold is checked immediately,
/// finishing the match on the spot when reached.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    phase: &mut MatchPhase,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x > config.out_boundary {
            ball.serve(config);
            score.award_left();
            events.left_scored = true;
            log::info!("left scores, {}:{}", score.left, score.right);
        } else if ball.pos.x < -config.out_boundary {
            ball.serve(config);
            score.award_right();
            events.right_scored = true;
            log::info!("right scores, {}:{}", score.left, score.right);
        } else {
            continue;
        }

        if let Some(side) = score.winner(config.win_score) {
            phase.finish();
            events.match_over = true;
            log::info!("match over, {side} wins {}:{}", score.left, score.right);
        }
    }
}
