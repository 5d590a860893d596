use glam::Vec2;

use crate::{GameConfig, GameRng, Rect};

/// The square ball. `position` is its top-left corner.
///
/// The ball may sit past a screen edge for one tick: past the top or bottom
/// that is a bounce overshoot, past the left or right it means a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    size: f32,
    serve_speed: Vec2,
    home: Vec2,
    floor: f32,
}

impl Ball {
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut ball = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: config.ball_size,
            serve_speed: Vec2::new(config.ball_speed_x, config.ball_speed_y),
            home: config.screen_center(),
            floor: config.screen_height - config.ball_size,
        };
        ball.reset(rng);
        ball
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.size / 2.0)
    }

    /// Integrate one tick. Returns `true` when the ball bounced off the top or
    /// bottom wall.
    pub fn advance(&mut self) -> bool {
        self.position += self.velocity;

        let bounced = self.position.y <= 0.0 || self.position.y >= self.floor;
        if bounced {
            self.velocity.y = -self.velocity.y;
        }
        bounced
    }

    pub fn reverse_horizontal(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    /// Recenter and serve in one of the four diagonal directions.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.position = self.home;
        self.velocity = Vec2::new(
            self.serve_speed.x * rng.sign(),
            self.serve_speed.y * rng.sign(),
        );
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball() -> Ball {
        Ball::new(&GameConfig::default(), &mut GameRng::new(5))
    }

    #[test]
    fn new_ball_is_served_from_center() {
        let b = ball();
        assert_eq!(b.position, Vec2::new(400.0, 300.0));
        assert_eq!(b.velocity.abs(), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn reset_eventually_serves_every_direction() {
        let mut b = ball();
        let mut rng = GameRng::new(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            b.reset(&mut rng);
            assert_eq!(b.position, Vec2::new(400.0, 300.0));
            assert_eq!(b.velocity.abs(), Vec2::new(7.0, 7.0));
            seen.insert((b.velocity.x > 0.0, b.velocity.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn open_field_move_keeps_velocity() {
        let mut b = ball();
        b.velocity = Vec2::new(7.0, -7.0);
        assert!(!b.advance());
        assert_eq!(b.position, Vec2::new(407.0, 293.0));
        assert_eq!(b.velocity, Vec2::new(7.0, -7.0));
    }

    #[test]
    fn top_wall_flips_vertical_only() {
        let mut b = ball();
        b.position = Vec2::new(100.0, 4.0);
        b.velocity = Vec2::new(-7.0, -7.0);
        assert!(b.advance());
        assert_eq!(b.position.y, -3.0);
        assert_eq!(b.velocity, Vec2::new(-7.0, 7.0));
    }

    #[test]
    fn bottom_wall_flips_at_floor() {
        let mut b = ball();
        b.position = Vec2::new(100.0, 578.0);
        b.velocity = Vec2::new(7.0, 7.0);
        assert!(b.advance());
        assert_eq!(b.velocity, Vec2::new(7.0, -7.0));
    }

    #[test]
    fn reverse_horizontal_keeps_vertical() {
        let mut b = ball();
        b.velocity = Vec2::new(7.0, -7.0);
        b.reverse_horizontal();
        assert_eq!(b.velocity, Vec2::new(-7.0, -7.0));
    }

    #[test]
    fn center_is_half_size_in() {
        let b = ball();
        assert_eq!(b.center(), Vec2::new(407.5, 307.5));
        assert_eq!(b.bounding_box(), Rect::new(400.0, 300.0, 15.0, 15.0));
    }

    proptest! {
        #[test]
        fn wall_bounce_iff_outside_band(y in -20.0f32..620.0, vy in prop::sample::select(vec![-7.0f32, 7.0])) {
            let mut b = ball();
            b.position = Vec2::new(200.0, y);
            b.velocity = Vec2::new(7.0, vy);
            let bounced = b.advance();
            let after = b.position.y;
            prop_assert_eq!(bounced, after <= 0.0 || after >= 585.0);
            prop_assert_eq!(b.velocity.y, if bounced { -vy } else { vy });
            prop_assert_eq!(b.velocity.x, 7.0);
        }
    }
}
