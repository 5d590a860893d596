//! Decorative effects: star field, collision particles and the ball trail.
//!
//! None of this feeds back into the simulation; it only exists to be drawn.

mod particle;
mod star;
mod trail;

pub use particle::Particle;
pub use star::{MAX_BRIGHTNESS, MIN_BRIGHTNESS, Star};
pub use trail::TrailBuffer;

use glam::Vec2;

use crate::{GameConfig, GameRng};

#[derive(Debug, Clone)]
pub struct EffectsManager {
    stars: Vec<Star>,
    particles: Vec<Particle>,
    trail: TrailBuffer,
    burst_size: usize,
    damping: f32,
}

impl EffectsManager {
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Self {
        let stars = (0..config.star_count)
            .map(|_| Star::random(config, rng))
            .collect();
        Self {
            stars,
            particles: Vec::new(),
            trail: TrailBuffer::new(config.trail_length),
            burst_size: config.particle_burst,
            damping: config.particle_damping,
        }
    }

    pub fn spawn_burst(&mut self, origin: Vec2, rng: &mut GameRng) {
        let damping = self.damping;
        self.particles
            .extend((0..self.burst_size).map(|_| Particle::spark(origin, damping, rng)));
    }

    /// Advance one tick and record the ball's center in the trail.
    pub fn update(&mut self, ball_center: Vec2) {
        for star in &mut self.stars {
            star.update();
        }

        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);

        self.trail.push(ball_center);
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> (EffectsManager, GameRng) {
        let mut rng = GameRng::new(4);
        let effects = EffectsManager::new(&GameConfig::default(), &mut rng);
        (effects, rng)
    }

    #[test]
    fn star_field_is_fixed_size() {
        let (mut effects, _) = manager();
        assert_eq!(effects.stars().len(), 100);
        for _ in 0..50 {
            effects.update(Vec2::ZERO);
        }
        assert_eq!(effects.stars().len(), 100);
    }

    #[test]
    fn burst_spawns_configured_count() {
        let (mut effects, mut rng) = manager();
        effects.spawn_burst(Vec2::new(45.0, 307.5), &mut rng);
        effects.spawn_burst(Vec2::new(755.0, 100.0), &mut rng);
        assert_eq!(effects.particles().len(), 20);
        assert!(effects.particles().iter().all(|p| p.lifetime() == p.max_lifetime()));
    }

    #[test]
    fn dead_particles_are_purged_in_the_same_pass() {
        let (mut effects, mut rng) = manager();
        effects.spawn_burst(Vec2::ZERO, &mut rng);
        // Lifetimes are below 60, so every spark is gone after 60 passes.
        for _ in 0..60 {
            effects.update(Vec2::ZERO);
            assert!(effects.particles().iter().all(Particle::is_alive));
        }
        assert!(effects.particles().is_empty());
    }

    #[test]
    fn update_pushes_ball_center_to_trail() {
        let (mut effects, _) = manager();
        for i in 0..12 {
            effects.update(Vec2::new(i as f32, 1.0));
        }
        assert_eq!(effects.trail().len(), 10);
        assert_eq!(effects.trail().iter().last(), Some(&Vec2::new(11.0, 1.0)));
        assert_eq!(effects.trail().iter().next(), Some(&Vec2::new(2.0, 1.0)));
    }
}
