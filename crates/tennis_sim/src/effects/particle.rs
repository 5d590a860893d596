use glam::Vec2;

use crate::GameRng;

/// Short-lived spark thrown off by a paddle hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    lifetime: f32,
    max_lifetime: f32,
    size: f32,
    damping: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, lifetime: f32, size: f32, damping: f32) -> Self {
        Self {
            position,
            velocity,
            lifetime,
            max_lifetime: lifetime,
            size,
            damping,
        }
    }

    pub fn spark(origin: Vec2, damping: f32, rng: &mut GameRng) -> Self {
        let velocity = Vec2::new(rng.uniform(-2.0, 2.0), rng.uniform(-2.0, 2.0));
        let lifetime = rng.uniform(30.0, 60.0);
        let size = rng.uniform(1.0, 3.0);
        Self::new(origin, velocity, lifetime, size, damping)
    }

    pub fn update(&mut self) {
        self.position += self.velocity;
        self.lifetime -= 1.0;
        self.velocity *= self.damping;
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Remaining share of the lifetime, 1.0 when fresh.
    pub fn fade(&self) -> f32 {
        (self.lifetime / self.max_lifetime).max(0.0)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn max_lifetime(&self) -> f32 {
        self.max_lifetime
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_spark_has_full_lifetime() {
        let mut rng = GameRng::new(8);
        for _ in 0..50 {
            let p = Particle::spark(Vec2::new(45.0, 300.0), 0.99, &mut rng);
            assert_eq!(p.lifetime(), p.max_lifetime());
            assert_eq!(p.fade(), 1.0);
            assert!((30.0..60.0).contains(&p.lifetime()));
            assert!((1.0..3.0).contains(&p.size()));
            assert!(p.velocity().x.abs() <= 2.0 && p.velocity().y.abs() <= 2.0);
        }
    }

    #[test]
    fn update_moves_then_damps() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(2.0, -1.0), 30.0, 2.0, 0.5);
        p.update();
        assert_eq!(p.position(), Vec2::new(2.0, -1.0));
        assert_eq!(p.velocity(), Vec2::new(1.0, -0.5));
        assert_eq!(p.lifetime(), 29.0);
        assert_eq!(p.max_lifetime(), 30.0);
    }

    #[test]
    fn dies_when_lifetime_runs_out() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 2.0, 1.0, 0.99);
        p.update();
        assert!(p.is_alive());
        p.update();
        assert!(!p.is_alive());
        assert_eq!(p.fade(), 0.0);
    }
}
