use glam::Vec2;
use hecs::World;
use pong_core::*;

fn setup() -> (World, Config, InputQueue, Score, Events, MatchPhase) {
    let config = Config::new();
    let mut world = World::new();
    spawn_paddle(&mut world, Side::Left, 0.0);
    spawn_paddle(&mut world, Side::Right, 0.0);
    spawn_ball(&mut world, &config);
    (
        world,
        config,
        InputQueue::new(),
        Score::new(),
        Events::new(),
        MatchPhase::new(),
    )
}

fn ball_of(world: &World) -> Ball {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball)
        .unwrap()
}

fn place_ball(world: &mut World, pos: Vec2, vel: Vec2) {
    for (_e, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

#[test]
fn test_collision_free_ticks_integrate_exactly() {
    let (mut world, config, mut queue, mut score, mut events, mut phase) = setup();
    let start = ball_of(&world).pos;
    let vel = ball_of(&world).vel;

    for _ in 0..12 {
        step(
            &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
        );
    }

    let expected = start + vel * 12.0;
    assert!(
        (ball_of(&world).pos - expected).length() < 1e-4,
        "Twelve quiet ticks integrate to start + 12 * vel"
    );
    assert_eq!(score.left + score.right, 0);
}

#[test]
fn test_ball_reflects_off_the_top_wall() {
    let (mut world, config, mut queue, mut score, mut events, mut phase) = setup();
    place_ball(&mut world, Vec2::new(0.0, 275.0), Vec2::new(10.0, 10.0));

    step(
        &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
    );

    let ball = ball_of(&world);
    assert_eq!(ball.pos.y, 285.0, "The crossing tick still lands outside");
    assert_eq!(ball.vel.y, -10.0, "It comes back down on the next tick");
    assert!(events.ball_hit_wall);
    assert!(
        (ball.tick_delay - config.initial_tick_delay).abs() < 1e-6,
        "Wall bounces never change pacing"
    );
}

#[test]
fn test_rally_speeds_up_with_each_return() {
    let (mut world, config, mut queue, mut score, mut events, mut phase) = setup();

    // Three returns: alternate sides, parking the ball one tick short of
    // each paddle band with the matching direction of travel.
    place_ball(&mut world, Vec2::new(320.0, 0.0), Vec2::new(10.0, 0.0));
    step(
        &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
    );
    assert!(events.ball_hit_paddle);

    place_ball(&mut world, Vec2::new(-320.0, 0.0), Vec2::new(-10.0, 0.0));
    step(
        &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
    );
    assert!(events.ball_hit_paddle);

    place_ball(&mut world, Vec2::new(320.0, 0.0), Vec2::new(10.0, 0.0));
    step(
        &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
    );
    assert!(events.ball_hit_paddle);

    let expected = config.initial_tick_delay * config.speedup_factor.powi(3);
    assert!(
        (ball_of(&world).tick_delay - expected).abs() < 1e-6,
        "Three returns compound the pacing factor three times"
    );
}

#[test]
fn test_missed_return_scores_and_serves() {
    let (mut world, config, mut queue, mut score, mut events, mut phase) = setup();
    place_ball(&mut world, Vec2::new(375.0, 0.0), Vec2::new(10.0, 10.0));

    step(
        &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
    );

    assert_eq!(score.left, 1, "Right side missed, left side scores");
    assert_eq!(score.right, 0);
    assert!(events.left_scored);
    assert!(phase.is_playing(), "Threshold not reached, play continues");

    let ball = ball_of(&world);
    assert_eq!(ball.pos, Vec2::ZERO);
    assert_eq!(ball.vel.x, -10.0, "Serve heads toward the scorer's side");
}

#[test]
fn test_paddle_never_escapes_its_travel_range() {
    let (mut world, config, mut queue, mut score, mut events, mut phase) = setup();

    for _ in 0..40 {
        queue.push(PaddleCommand::new(Side::Left, Dir::Up));
        queue.push(PaddleCommand::new(Side::Right, Dir::Down));
        step(
            &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
        );
    }

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        assert!(
            paddle.y.abs() <= config.paddle_travel,
            "{:?} paddle drifted to {}",
            paddle.side,
            paddle.y
        );
    }
}

#[test]
fn test_fifth_point_ends_the_match_and_freezes_the_ball() {
    let (mut world, config, mut queue, mut score, mut events, mut phase) = setup();

    for point in 1..=config.win_score {
        place_ball(&mut world, Vec2::new(390.0, 0.0), Vec2::new(10.0, 10.0));
        step(
            &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
        );
        assert_eq!(score.left, point);
    }

    assert!(phase.is_finished());
    assert!(events.match_over);
    assert_eq!(score.winner(config.win_score), Some(Side::Left));

    // Further steps are no-ops: the ball stays served at center.
    let frozen = ball_of(&world).pos;
    for _ in 0..10 {
        step(
            &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
        );
    }
    assert_eq!(ball_of(&world).pos, frozen, "No movement after the match ends");
    assert_eq!(score.left, config.win_score, "No further scoring either");
}

#[test]
fn test_full_match_through_the_controller() {
    let mut controller = MatchController::new(Config::new());
    let mut surface = HeadlessSurface::new();
    controller.setup(&mut surface);

    // Nobody touches the paddles: each serve flips the ball's direction,
    // so points alternate sides until one reaches the threshold.
    let mut ticks: u32 = 0;
    while controller.phase().is_playing() {
        controller.tick(&mut surface);
        ticks += 1;
        assert!(ticks < 10_000, "Match must terminate");
    }

    let score = controller.score();
    let winner = controller.winner().expect("finished match has a winner");
    assert_eq!(score.left.max(score.right), controller.config().win_score);
    assert!(
        score.left != score.right,
        "Winner is decided the instant the threshold is hit"
    );
    assert_eq!(surface.frames, ticks, "One render per tick");
    let banner = surface
        .texts
        .iter()
        .find(|(_pos, text, style)| *style == TextStyle::Banner && text.contains("WINS"))
        .expect("winner banner drawn");
    assert!(banner.1.starts_with(&winner.to_string()));
}

#[test]
fn test_serve_pace_variants() {
    // Default variant: the serve's direction flip reuses the paddle
    // bounce, so every rally after the first starts slightly fast.
    let (mut world, config, mut queue, mut score, mut events, mut phase) = setup();
    place_ball(&mut world, Vec2::new(390.0, 0.0), Vec2::new(10.0, 0.0));
    step(
        &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
    );
    let expected = config.initial_tick_delay * config.speedup_factor;
    assert!((ball_of(&world).tick_delay - expected).abs() < 1e-6);

    // Alternate variant: serves restore base pace exactly.
    let config = Config {
        serve_speedup: false,
        ..Config::new()
    };
    let (mut world, _, mut queue, mut score, mut events, mut phase) = setup();
    place_ball(&mut world, Vec2::new(390.0, 0.0), Vec2::new(10.0, 0.0));
    step(
        &mut world, &config, &mut queue, &mut score, &mut events, &mut phase,
    );
    assert_eq!(ball_of(&world).tick_delay, config.initial_tick_delay);
}
