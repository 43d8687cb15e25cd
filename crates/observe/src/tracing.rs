use {
    crate::Config,
    std::{io, sync::Once},
    tracing::{Level, Metadata, level_filters::LevelFilter},
    tracing_subscriber::{
        EnvFilter,
        fmt::{self, time::UtcTime, writer::MakeWriterExt},
        prelude::*,
    },
};

/// Initializes the global tracing subscriber and the panic hook. Can be
/// called multiple times in the same process, only the first call has an
/// effect. Useful for tests that spin up several servers.
pub fn initialize_reentrant(config: &Config) {
    // The subscriber is a process wide global so a second initialization
    // would fail.
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        set_tracing_subscriber(config);
        crate::panic_hook::install();
    });
}

fn set_tracing_subscriber(config: &Config) {
    let env_filter = EnvFilter::new(&config.env_filter);
    let threshold = config.stderr_threshold.unwrap_or(LevelFilter::OFF);
    let writer = io::stderr
        .with_filter(move |meta: &Metadata<'_>| is_at_least(meta.level(), threshold))
        .or_else(io::stdout);

    if config.use_json_format {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(writer)
                    .with_filter(env_filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(atty::is(atty::Stream::Stdout))
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(writer)
                    .with_filter(env_filter),
            )
            .init();
    }

    tracing::info!(filter = %config.env_filter, "started program");
}

/// `LevelFilter` orders `OFF` lowest and `TRACE` highest, so an event passes
/// the threshold when its level is at least as severe.
fn is_at_least(level: &Level, threshold: LevelFilter) -> bool {
    threshold != LevelFilter::OFF && *level <= threshold
}
