//! Startup configuration for a game session.
//!
//! Every component receives the same immutable [`GameConfig`] at
//! construction. Defaults reproduce the classic constants; a TOML document may
//! override any subset of fields.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Classic constants
// ---------------------------------------------------------------------------

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const PADDLE_WIDTH: f32 = 15.0;
pub const PADDLE_HEIGHT: f32 = 90.0;
pub const PADDLE_SPEED: f32 = 5.0;
pub const PADDLE_MARGIN: f32 = 30.0;
pub const BALL_SIZE: f32 = 15.0;
pub const BALL_SPEED_X: f32 = 7.0;
pub const BALL_SPEED_Y: f32 = 7.0;
pub const TICK_RATE: u32 = 60;
pub const PARTICLE_BURST: usize = 10;
pub const PARTICLE_DAMPING: f32 = 0.99;
pub const STAR_COUNT: usize = 100;
pub const TRAIL_LENGTH: usize = 10;
pub const AI_DEAD_ZONE: f32 = 10.0;

// ---------------------------------------------------------------------------
// Config struct
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance moved per tick while a direction is held.
    pub paddle_speed: f32,
    /// Gap between a paddle and its side of the screen.
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    /// Fixed simulation ticks per second.
    pub tick_rate: u32,
    /// Particles spawned per paddle hit.
    pub particle_burst: usize,
    /// Per-tick velocity multiplier applied to particles.
    pub particle_damping: f32,
    pub star_count: usize,
    pub trail_length: usize,
    /// Tolerance within which the scripted opponent holds still.
    pub ai_dead_zone: f32,
    /// Fixed RNG seed. Drawn at random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            ball_size: BALL_SIZE,
            ball_speed_x: BALL_SPEED_X,
            ball_speed_y: BALL_SPEED_Y,
            tick_rate: TICK_RATE,
            particle_burst: PARTICLE_BURST,
            particle_damping: PARTICLE_DAMPING,
            star_count: STAR_COUNT,
            trail_length: TRAIL_LENGTH,
            ai_dead_zone: AI_DEAD_ZONE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_margin", self.paddle_margin),
            ("ball_size", self.ball_size),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
            ("particle_damping", self.particle_damping),
            ("ai_dead_zone", self.ai_dead_zone),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be a finite number"));
            }
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::invalid(field, "must be greater than zero"));
            }
        }
        if self.paddle_margin < 0.0 {
            return Err(ConfigError::invalid("paddle_margin", "must not be negative"));
        }
        if self.ai_dead_zone < 0.0 {
            return Err(ConfigError::invalid("ai_dead_zone", "must not be negative"));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be greater than zero"));
        }
        if self.paddle_height > self.screen_height {
            return Err(ConfigError::invalid("paddle_height", "must fit on screen"));
        }
        if self.paddle_margin + self.paddle_width > self.screen_width / 2.0 {
            return Err(ConfigError::invalid("paddle_margin", "paddles must stay on their own half"));
        }
        if self.ball_size > self.screen_height || self.ball_size > self.screen_width {
            return Err(ConfigError::invalid("ball_size", "must fit on screen"));
        }
        if !(self.particle_damping > 0.0 && self.particle_damping <= 1.0) {
            return Err(ConfigError::invalid("particle_damping", "must be in (0, 1]"));
        }
        if self.trail_length == 0 {
            return Err(ConfigError::invalid("trail_length", "must be at least 1"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate))
    }

    /// Where a freshly reset ball is placed (its top-left corner).
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    pub fn paddle_start_y(&self) -> f32 {
        (self.screen_height - self.paddle_height) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}
