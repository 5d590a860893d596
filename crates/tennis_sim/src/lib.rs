//! Simulation core for Cosmic Tennis, a single-player Pong variant played
//! against a scripted opponent over a twinkling star field.
//!
//! The crate has no engine dependency. A platform binding samples the
//! keyboard into a [`PlayerInput`], calls [`Game::tick`] at the configured
//! fixed rate, and realises the [`Scene`] composed from the game state on
//! whatever drawing surface it owns.

pub mod ai;
pub mod ball;
pub mod config;
pub mod effects;
pub mod game;
pub mod geometry;
pub mod paddle;
pub mod rng;
pub mod scene;

pub use ai::track_ball;
pub use ball::Ball;
pub use config::{ConfigError, GameConfig};
pub use effects::{EffectsManager, Particle, Star, TrailBuffer};
pub use game::{Game, PlayerInput, RunState, Score, TickEvents};
pub use geometry::Rect;
pub use paddle::{Paddle, PaddleCommand, Side};
pub use rng::GameRng;
pub use scene::{Color, DrawCommand, Layer, Scene, Shape};
