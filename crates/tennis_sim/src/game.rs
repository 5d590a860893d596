//! The orchestrator: owns every entity and advances them one fixed tick at a
//! time in the order input → AI → ball → collisions → scoring → effects.

use glam::Vec2;
use tracing::{debug, info};

use crate::{Ball, EffectsManager, GameConfig, GameRng, Paddle, Side, track_ball};

/// Level-triggered directional keys sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    /// The side that won a point.
    pub point: Option<Side>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Play continues until [`Game::stop`]; there is no terminal score.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    player: Paddle,
    opponent: Paddle,
    ball: Ball,
    score: Score,
    effects: EffectsManager,
    state: RunState,
    ticks: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::from_config(&config);
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        info!(seed = rng.seed(), "new game");
        let player = Paddle::new(Side::Player, &config);
        let opponent = Paddle::new(Side::Opponent, &config);
        let ball = Ball::new(&config, &mut rng);
        let effects = EffectsManager::new(&config, &mut rng);
        Self {
            config,
            rng,
            player,
            opponent,
            ball,
            score: Score::default(),
            effects,
            state: RunState::Running,
            ticks: 0,
        }
    }

    pub fn tick(&mut self, input: PlayerInput) -> TickEvents {
        self.ticks += 1;

        if input.up {
            self.player.move_up();
        }
        if input.down {
            self.player.move_down();
        }

        let command = track_ball(&self.opponent, &self.ball, self.config.ai_dead_zone);
        self.opponent.apply(command);

        let wall_bounce = self.ball.advance();
        if wall_bounce {
            debug!(x = self.ball.position.x, y = self.ball.position.y, "wall bounce");
        }

        let paddle_hit = self.resolve_paddle_hits();
        let point = self.resolve_scoring();
        self.effects.update(self.ball.center());

        TickEvents {
            wall_bounce,
            paddle_hit,
            point,
        }
    }

    /// Reverse the ball off whichever paddle it overlaps and push it flush
    /// against that paddle's face.
    fn resolve_paddle_hits(&mut self) -> Option<Side> {
        let mut hit = None;

        let player_box = self.player.bounding_box();
        if self.ball.bounding_box().intersects(&player_box) {
            self.ball.reverse_horizontal();
            self.ball.position.x = player_box.right();
            let contact = Vec2::new(player_box.right(), self.ball.center().y);
            self.effects.spawn_burst(contact, &mut self.rng);
            debug!(y = contact.y, "player paddle hit");
            hit = Some(self.player.side());
        }

        let opponent_box = self.opponent.bounding_box();
        if self.ball.bounding_box().intersects(&opponent_box) {
            self.ball.reverse_horizontal();
            self.ball.position.x = opponent_box.left() - self.ball.size();
            let contact = Vec2::new(opponent_box.left(), self.ball.center().y);
            self.effects.spawn_burst(contact, &mut self.rng);
            debug!(y = contact.y, "opponent paddle hit");
            hit = Some(self.opponent.side());
        }

        hit
    }

    fn resolve_scoring(&mut self) -> Option<Side> {
        let x = self.ball.position.x;
        let scorer = if x < 0.0 {
            Side::Opponent
        } else if x > self.config.screen_width {
            Side::Player
        } else {
            return None;
        };

        self.score.award(scorer);
        self.ball.reset(&mut self.rng);
        info!(
            ?scorer,
            player = self.score.player,
            opponent = self.score.opponent,
            "point scored"
        );
        Some(scorer)
    }

    /// Request shutdown. The frame in flight still completes; the platform
    /// checks [`Game::is_running`] at the top of the next one.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            info!(ticks = self.ticks, "stop requested");
        }
        self.state = RunState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn opponent(&self) -> &Paddle {
        &self.opponent
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct access for scripted serves and replays.
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn effects(&self) -> &EffectsManager {
        &self.effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::with_rng(GameConfig::default(), GameRng::new(1234))
    }

    const IDLE: PlayerInput = PlayerInput {
        up: false,
        down: false,
    };

    #[test]
    fn starts_at_nil_nil_with_centered_ball() {
        let g = game();
        assert_eq!(g.score(), Score::default());
        assert_eq!(g.ball().position, Vec2::new(400.0, 300.0));
        assert_eq!(g.ball().velocity.abs(), Vec2::new(7.0, 7.0));
        assert!(g.is_running());
    }

    #[test]
    fn player_input_moves_left_paddle() {
        let mut g = game();
        g.tick(PlayerInput {
            up: true,
            down: false,
        });
        assert_eq!(g.player().y(), 250.0);
        g.tick(PlayerInput {
            up: false,
            down: true,
        });
        assert_eq!(g.player().y(), 255.0);
    }

    #[test]
    fn both_keys_cancel_out() {
        let mut g = game();
        g.tick(PlayerInput {
            up: true,
            down: true,
        });
        assert_eq!(g.player().y(), 255.0);
    }

    #[test]
    fn player_paddle_hit_reflects_and_sparks() {
        let mut g = game();
        g.ball.position = Vec2::new(48.0, 290.0);
        g.ball.velocity = Vec2::new(-7.0, 7.0);

        let events = g.tick(IDLE);

        assert_eq!(events.paddle_hit, Some(Side::Player));
        assert_eq!(g.ball().velocity, Vec2::new(7.0, 7.0));
        assert_eq!(g.ball().position.x, g.player().bounding_box().right());
        assert!(!g.ball().bounding_box().intersects(&g.player().bounding_box()));
        assert_eq!(g.effects().particles().len(), 10);
    }

    #[test]
    fn opponent_paddle_hit_leaves_ball_flush_on_left_face() {
        let mut g = game();
        g.ball.position = Vec2::new(735.0, 290.0);
        g.ball.velocity = Vec2::new(7.0, -7.0);

        let events = g.tick(IDLE);

        assert_eq!(events.paddle_hit, Some(Side::Opponent));
        assert_eq!(g.ball().velocity, Vec2::new(-7.0, -7.0));
        let paddle = g.opponent().bounding_box();
        assert_eq!(g.ball().bounding_box().right(), paddle.left());
        assert!(!g.ball().bounding_box().intersects(&paddle));
    }

    #[test]
    fn leaving_left_edge_scores_for_opponent() {
        let mut g = game();
        g.ball.position = Vec2::new(3.0, 50.0);
        g.ball.velocity = Vec2::new(-7.0, 7.0);

        let events = g.tick(IDLE);

        assert_eq!(events.point, Some(Side::Opponent));
        assert_eq!(g.score(), Score { player: 0, opponent: 1 });
        assert_eq!(g.ball().position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn leaving_right_edge_scores_for_player() {
        let mut g = game();
        g.ball.position = Vec2::new(797.0, 550.0);
        g.ball.velocity = Vec2::new(7.0, -7.0);

        let events = g.tick(IDLE);

        assert_eq!(events.point, Some(Side::Player));
        assert_eq!(g.score(), Score { player: 1, opponent: 0 });
        assert_eq!(g.ball().velocity.abs(), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn trail_records_post_reset_center() {
        let mut g = game();
        g.ball.position = Vec2::new(3.0, 50.0);
        g.ball.velocity = Vec2::new(-7.0, 7.0);
        g.tick(IDLE);
        assert_eq!(g.effects().trail().iter().last(), Some(&Vec2::new(407.5, 307.5)));
    }

    #[test]
    fn opponent_tracks_ball() {
        let mut g = game();
        g.ball.position = Vec2::new(400.0, 500.0);
        g.ball.velocity = Vec2::new(7.0, 7.0);
        g.tick(IDLE);
        assert_eq!(g.opponent().y(), 260.0);
    }

    #[test]
    fn configured_seed_is_reported() {
        let config = GameConfig {
            seed: Some(4242),
            ..GameConfig::default()
        };
        assert_eq!(Game::new(config).seed(), 4242);
    }

    #[test]
    fn stop_is_sticky() {
        let mut g = game();
        g.stop();
        assert_eq!(g.run_state(), RunState::Stopped);
        g.tick(IDLE);
        assert!(!g.is_running());
        assert_eq!(g.ticks(), 1);
    }

    #[test]
    fn score_never_decreases() {
        let mut g = game();
        let mut last = g.score();
        for _ in 0..5_000 {
            g.tick(IDLE);
            let now = g.score();
            assert!(now.player >= last.player && now.opponent >= last.opponent);
            assert!(now.player + now.opponent <= last.player + last.opponent + 1);
            last = now;
        }
    }
}
