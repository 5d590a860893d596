use glam::Vec2;

use crate::{GameConfig, GameRng};

pub const MIN_BRIGHTNESS: f32 = 0.3;
pub const MAX_BRIGHTNESS: f32 = 1.0;

/// Background point whose brightness ping-pongs between the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    position: Vec2,
    brightness: f32,
    twinkle_rate: f32,
    size: f32,
}

impl Star {
    pub fn new(position: Vec2, brightness: f32, twinkle_rate: f32, size: f32) -> Self {
        Self {
            position,
            brightness,
            twinkle_rate,
            size,
        }
    }

    pub fn random(config: &GameConfig, rng: &mut GameRng) -> Self {
        let x = rng.whole(0, config.screen_width as u32) as f32;
        let y = rng.whole(0, config.screen_height as u32) as f32;
        Self::new(
            Vec2::new(x, y),
            rng.uniform(MIN_BRIGHTNESS, MAX_BRIGHTNESS),
            rng.uniform(0.02, 0.08),
            rng.whole(1, 2) as f32,
        )
    }

    /// The rate flips once brightness has left the band, so a star can
    /// overshoot a bound by one step.
    pub fn update(&mut self) {
        self.brightness += self.twinkle_rate;
        if self.brightness > MAX_BRIGHTNESS || self.brightness < MIN_BRIGHTNESS {
            self.twinkle_rate = -self.twinkle_rate;
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn twinkle_rate(&self) -> f32 {
        self.twinkle_rate
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}
