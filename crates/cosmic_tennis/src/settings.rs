//! Locates and loads the startup configuration.

use std::path::PathBuf;

use bevy::log::{info, warn};
use tennis_sim::GameConfig;

/// Explicit path override.
const CONFIG_ENV: &str = "COSMIC_TENNIS_CONFIG";
const LOCAL_FILE: &str = "cosmic_tennis.toml";
const APP_DIR: &str = "cosmic_tennis";
const USER_FILE: &str = "config.toml";

/// Never fails: a missing file means defaults, a broken one is reported and
/// then ignored.
pub fn load() -> GameConfig {
    let Some(path) = locate() else {
        info!("no config file found, using defaults");
        return GameConfig::default();
    };

    match GameConfig::load(&path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), "{err}; using defaults");
            GameConfig::default()
        }
    }
}

fn locate() -> Option<PathBuf> {
    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    if explicit.is_some() {
        // A named file that is missing should surface as an error, not be skipped.
        return explicit;
    }
    candidates(dirs::config_dir())
        .into_iter()
        .find(|path| path.is_file())
}

fn candidates(config_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_FILE)];
    if let Some(dir) = config_dir {
        paths.push(dir.join(APP_DIR).join(USER_FILE));
    }
    paths
}
