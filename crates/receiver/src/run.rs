use {
    crate::{api::Api, infra::cli},
    clap::Parser,
    std::net::SocketAddr,
    tokio::sync::oneshot,
};

/// Entry point of the `receiver` binary. Exits the process with a non-zero
/// status if the server cannot be started or fails while serving.
pub async fn start(args: impl IntoIterator<Item = String>) {
    if let Err(err) = run(args, None).await {
        tracing::error!(?err, "notification receiver stopped");
        std::process::exit(1);
    }
}

/// Runs the receiver until a shutdown signal arrives.
///
/// If `bind` is given, the address the server ended up listening on is sent
/// through it. This allows binding to port 0 and finding out the real port.
pub async fn run(
    args: impl IntoIterator<Item = String>,
    bind: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let args = cli::Args::parse_from(args);
    let obs_config = observe::Config::new(
        args.log.as_str(),
        Some(tracing::level_filters::LevelFilter::ERROR),
        args.use_json_logs,
    );
    observe::tracing::initialize_reentrant(&obs_config);
    tracing::info!("running notification receiver with {args:#?}");

    Api {
        addr: args.addr,
        body_limit: args.body_limit,
    }
    .serve(bind, shutdown_signal())
    .await?;

    tracing::info!("notification receiver shut down");
    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Kubernetes sends SIGTERM whereas locally SIGINT (ctrl-c) is most common.
    let sigterm = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(?err, "failed to install SIGTERM handler");
                futures::future::pending::<()>().await;
            }
        }
    };
    let sigint = ctrl_c();
    futures::pin_mut!(sigterm);
    futures::pin_mut!(sigint);
    futures::future::select(sigterm, sigint).await;
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    ctrl_c().await;
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "failed to install ctrl-c handler");
        futures::future::pending::<()>().await;
    }
}
