//! CLI arguments for the `receiver` binary.

use {crate::api::REQUEST_BODY_LIMIT, clap::Parser, std::net::SocketAddr};

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The address to bind the HTTP server to.
    #[clap(long, env = "RECEIVER_ADDR", default_value = "0.0.0.0:5000")]
    pub addr: SocketAddr,

    /// Log filter to use.
    #[clap(
        long,
        env = "RECEIVER_LOG",
        default_value = "warn,receiver=info,observe=info"
    )]
    pub log: String,

    /// Whether to emit logs as JSON.
    #[clap(long, env = "RECEIVER_USE_JSON_LOGS", default_value = "false")]
    pub use_json_logs: bool,

    /// Maximum accepted size of a request body in bytes. Larger requests are
    /// rejected before they reach the handler.
    #[clap(long, env = "RECEIVER_BODY_LIMIT", default_value_t = REQUEST_BODY_LIMIT)]
    pub body_limit: usize,
}
