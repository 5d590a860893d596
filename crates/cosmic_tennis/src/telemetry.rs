use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;

/// Overrides the default `info` level, e.g. `COSMIC_TENNIS_LOG=debug`.
const LEVEL_ENV: &str = "COSMIC_TENNIS_LOG";

/// Install the global subscriber. Bevy's own `LogPlugin` is disabled so this
/// one receives engine and game events alike. Keep the guard alive until
/// exit or buffered lines are lost.
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level_from(std::env::var(LEVEL_ENV).ok().as_deref()))
        .with_target(false)
        .init();
    guard
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::INFO)
}
