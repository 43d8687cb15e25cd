use tracing::level_filters::LevelFilter;

/// How the process wide tracing subscriber gets set up.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directives understood by [`tracing_subscriber::EnvFilter`], e.g.
    /// `warn,receiver=info`.
    pub env_filter: String,
    /// Events at or above this level are written to stderr instead of stdout.
    pub stderr_threshold: Option<LevelFilter>,
    /// Emit one JSON object per event instead of human readable lines.
    pub use_json_format: bool,
}

impl Config {
    pub fn new(
        env_filter: &str,
        stderr_threshold: Option<LevelFilter>,
        use_json_format: bool,
    ) -> Self {
        Self {
            env_filter: env_filter.to_owned(),
            stderr_threshold,
            use_json_format,
        }
    }
}
