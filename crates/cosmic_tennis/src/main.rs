//! Cosmic Tennis: single-player Pong against a scripted opponent, played
//! over a twinkling star field.
//!
//! Usage: `cargo run -p cosmic_tennis`
//!
//! W/S or Up/Down move the left paddle. Escape or closing the window quits.
//! Startup configuration is read from the first TOML file found at
//! `$COSMIC_TENNIS_CONFIG`, `./cosmic_tennis.toml` or
//! `<config dir>/cosmic_tennis/config.toml`; defaults apply otherwise.

mod canvas;
mod settings;
mod telemetry;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use tennis_sim::{Game, GameConfig, PlayerInput, TickEvents};

use canvas::CanvasPlugin;

fn main() {
    let _log_guard = telemetry::init();
    let config = settings::load();
    let game = Game::new(config);
    info!(
        seed = game.seed(),
        "starting; set `seed = {}` in the config file to replay this session",
        game.seed()
    );
    let tick_interval = game.config().tick_interval();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(primary_window(game.config())),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .insert_resource(Time::<Fixed>::from_duration(tick_interval))
        .insert_resource(ActiveGame(game))
        .add_plugins(CosmicTennisPlugin)
        .run();
}

fn primary_window(config: &GameConfig) -> Window {
    Window {
        title: "Cosmic Tennis".into(),
        resolution: (config.screen_width as u32, config.screen_height as u32).into(),
        resizable: false,
        ..default()
    }
}

// ---------------------------------------------------------------------------
// Top-level plugin
// ---------------------------------------------------------------------------

struct CosmicTennisPlugin;

impl Plugin for CosmicTennisPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(FixedUpdate, (TennisSet::Input, TennisSet::Simulate).chain())
            .add_plugins((TennisInputPlugin, TennisGamePlugin, CanvasPlugin));
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum TennisSet {
    Input,
    Simulate,
}

/// The one session, owned by the app and mutated only by the fixed step.
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveGame(pub Game);

// ---------------------------------------------------------------------------
// Input plugin: keyboard -> paddle intent, Escape -> stop
// ---------------------------------------------------------------------------

struct TennisInputPlugin;

impl Plugin for TennisInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PaddleInput>()
            .add_systems(FixedUpdate, read_paddle_input.in_set(TennisSet::Input))
            .add_systems(Update, request_quit);
    }
}

#[derive(Resource, Default)]
struct PaddleInput(PlayerInput);

/// Level-triggered: holding a key keeps the paddle moving every tick.
fn read_paddle_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PaddleInput>) {
    input.0 = PlayerInput {
        up: keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
    };
}

fn request_quit(keyboard: Res<ButtonInput<KeyCode>>, mut game: ResMut<ActiveGame>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        game.stop();
    }
}

// ---------------------------------------------------------------------------
// Game plugin: fixed-rate simulation and the running flag
// ---------------------------------------------------------------------------

struct TennisGamePlugin;

impl Plugin for TennisGamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(First, exit_when_stopped)
            .add_systems(FixedUpdate, advance_game.in_set(TennisSet::Simulate));
    }
}

/// Checked once at the top of every frame, so a quit request lets the frame
/// that raised it finish drawing.
fn exit_when_stopped(game: Res<ActiveGame>, mut exit: MessageWriter<AppExit>) {
    if !game.is_running() {
        exit.write(AppExit::Success);
    }
}

fn advance_game(input: Res<PaddleInput>, mut game: ResMut<ActiveGame>) {
    let events = game.tick(input.0);
    if events != TickEvents::default() {
        trace!(?events, tick = game.ticks(), "tick");
    }
}
