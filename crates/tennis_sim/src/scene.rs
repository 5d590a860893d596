//! Per-frame draw list.
//!
//! [`Scene::compose`] flattens the game state into shapes in screen space,
//! back to front. The platform binding only has to draw them in order.
//! Glow is approximated with dimmer, larger opaque copies drawn beneath each
//! solid shape rather than with alpha blending.

use std::time::Duration;

use glam::Vec2;

use crate::{Ball, Game, GameConfig, Paddle, Particle, Rect, Score, Star, TrailBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor` (clamped to `[0, 1]`), truncating.
    pub fn scale(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let channel = |c: u8| (f32::from(c) * factor) as u8;
        Self::rgb(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Integer-divide every channel.
    pub fn dim(self, divisor: u8) -> Self {
        let divisor = divisor.max(1);
        Self::rgb(self.r / divisor, self.g / divisor, self.b / divisor)
    }
}

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const NEON_BLUE: Color = Color::rgb(0, 191, 255);
    pub const NEON_PINK: Color = Color::rgb(255, 20, 147);
    pub const DEEP_SPACE: Color = Color::rgb(5, 5, 25);
    pub const STAR: Color = Color::rgb(200, 200, 255);
}

use palette::*;

const GRADIENT_BAND: f32 = 4.0;
const GRADIENT_BLUE_LIFT: f32 = 20.0;
const TRAIL_MAX_RADIUS: f32 = 3.0;
const DASH_SPACING: f32 = 20.0;
const DASH_WIDTH: f32 = 4.0;
const DASH_HEIGHT: f32 = 10.0;
const DASH_PEAK: f32 = 0.7;
const PADDLE_GLOW_LAYERS: u8 = 3;
const BALL_GLOW_LAYERS: u8 = 5;
const SCORE_FONT_SIZE: f32 = 74.0;
const SCORE_TOP: f32 = 50.0;
const HUD_FONT_SIZE: f32 = 36.0;
const HUD_TEXT: &str = "W/S or UP/DOWN to move";

/// Draw order, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Stars,
    Trail,
    Particles,
    CenterLine,
    Paddles,
    Ball,
    Score,
    Instructions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    /// `origin` is the top-left corner of the text block.
    Text { content: String, origin: Vec2, size: f32, color: Color },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub layer: Layer,
    pub shape: Shape,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// `elapsed` drives the center line's shimmer.
    pub fn compose(game: &Game, elapsed: Duration) -> Self {
        let config = game.config();
        let mut scene = Self::default();

        scene.background(config);
        scene.stars(game.effects().stars());
        scene.trail(game.effects().trail());
        scene.particles(game.effects().particles());
        scene.center_line(config, elapsed);
        scene.paddle(game.player());
        scene.paddle(game.opponent());
        scene.ball(game.ball());
        scene.score(game.score(), config);
        scene.instructions(config);

        scene
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push(&mut self, layer: Layer, shape: Shape) {
        self.commands.push(DrawCommand { layer, shape });
    }

    fn rect(&mut self, layer: Layer, rect: Rect, color: Color) {
        self.push(layer, Shape::Rect { rect, color });
    }

    fn circle(&mut self, layer: Layer, center: Vec2, radius: f32, color: Color) {
        self.push(layer, Shape::Circle { center, radius, color });
    }

    fn text(&mut self, layer: Layer, content: String, origin: Vec2, size: f32, color: Color) {
        self.push(layer, Shape::Text { content, origin, size, color });
    }

    /// Deep space fading toward a slightly bluer floor.
    fn background(&mut self, config: &GameConfig) {
        let mut y = 0.0;
        while y < config.screen_height {
            let f = y / config.screen_height;
            let color = Color::rgb(
                (f32::from(DEEP_SPACE.r) * (1.0 - f)) as u8,
                (f32::from(DEEP_SPACE.g) * (1.0 - f)) as u8,
                (f32::from(DEEP_SPACE.b) + GRADIENT_BLUE_LIFT * f) as u8,
            );
            let height = GRADIENT_BAND.min(config.screen_height - y);
            self.rect(
                Layer::Background,
                Rect::new(0.0, y, config.screen_width, height),
                color,
            );
            y += GRADIENT_BAND;
        }
    }

    fn stars(&mut self, stars: &[Star]) {
        for star in stars {
            let lift = ((255.0 * star.brightness()).max(0.0) as u32) / 4;
            let color = Color::rgb(
                (u32::from(STAR.r) + lift).min(255) as u8,
                (u32::from(STAR.g) + lift).min(255) as u8,
                STAR.b,
            );
            self.circle(Layer::Stars, star.position(), star.size(), color);
        }
    }

    /// Oldest points are the smallest and dimmest.
    fn trail(&mut self, trail: &TrailBuffer) {
        let len = trail.len() as f32;
        for (i, point) in trail.iter().enumerate() {
            let alpha = i as f32 / len;
            let radius = (TRAIL_MAX_RADIUS * alpha).floor();
            if radius > 0.0 {
                self.circle(Layer::Trail, *point, radius, NEON_PINK.scale(alpha));
            }
        }
    }

    fn particles(&mut self, particles: &[Particle]) {
        for particle in particles {
            let alpha = particle.fade();
            let radius = (particle.size() * alpha).floor();
            if radius > 0.0 {
                self.circle(Layer::Particles, particle.position(), radius, CYAN.scale(alpha));
            }
        }
    }

    fn center_line(&mut self, config: &GameConfig, elapsed: Duration) {
        let millis = elapsed.as_secs_f32() * 1000.0;
        let x = config.screen_width / 2.0 - DASH_WIDTH / 2.0;
        let mut y = 0.0;
        while y < config.screen_height {
            let wave = ((millis * 0.005 + y * 0.1).sin() + 1.0) / 2.0;
            let intensity = (255.0 * wave * DASH_PEAK) as u8;
            self.rect(
                Layer::CenterLine,
                Rect::new(x, y, DASH_WIDTH, DASH_HEIGHT),
                Color::rgb(0, intensity, intensity),
            );
            y += DASH_SPACING;
        }
    }

    fn paddle(&mut self, paddle: &Paddle) {
        let body = paddle.bounding_box();
        for i in (0..PADDLE_GLOW_LAYERS).rev() {
            self.rect(Layer::Paddles, body.inflate(f32::from(i)), NEON_BLUE.dim(i + 2));
        }
        self.rect(Layer::Paddles, body, CYAN);
    }

    fn ball(&mut self, ball: &Ball) {
        let center = ball.center();
        let radius = ball.size() / 2.0;
        for i in (0..BALL_GLOW_LAYERS).rev() {
            self.circle(Layer::Ball, center, radius + f32::from(i), NEON_PINK.dim(i + 1));
        }
        self.circle(Layer::Ball, center, radius, WHITE);
    }

    fn score(&mut self, score: Score, config: &GameConfig) {
        let w = config.screen_width;
        self.text(
            Layer::Score,
            score.player.to_string(),
            Vec2::new(w / 4.0, SCORE_TOP),
            SCORE_FONT_SIZE,
            CYAN,
        );
        self.text(
            Layer::Score,
            score.opponent.to_string(),
            Vec2::new(3.0 * w / 4.0, SCORE_TOP),
            SCORE_FONT_SIZE,
            NEON_PINK,
        );
    }

    fn instructions(&mut self, config: &GameConfig) {
        self.text(
            Layer::Instructions,
            HUD_TEXT.to_string(),
            Vec2::new(config.screen_width / 2.0 - 150.0, config.screen_height - 30.0),
            HUD_FONT_SIZE,
            CYAN,
        );
    }
}
