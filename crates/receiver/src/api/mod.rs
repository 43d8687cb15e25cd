use {
    std::{future::Future, net::SocketAddr},
    tokio::sync::oneshot,
};

mod error;
mod routes;

/// Requests with bodies larger than this are rejected unless configured
/// otherwise.
pub const REQUEST_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Everything the HTTP server needs. Built once at startup and consumed by
/// [`Api::serve`].
#[derive(Clone, Debug)]
pub struct Api {
    pub addr: SocketAddr,
    pub body_limit: usize,
}

impl Api {
    pub async fn serve(
        self,
        bind: Option<oneshot::Sender<SocketAddr>>,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), hyper::Error> {
        let app = router(self.body_limit);

        let server = axum::Server::try_bind(&self.addr)?.serve(app.into_make_service());
        let addr = server.local_addr();
        tracing::info!(%addr, "serving notification receiver");
        if let Some(bind) = bind {
            let _ = bind.send(addr);
        }

        server.with_graceful_shutdown(shutdown).await
    }
}

fn router(body_limit: usize) -> axum::Router {
    axum::Router::new()
        .route("/notify", axum::routing::post(routes::notify))
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::limit::RequestBodyLimitLayer::new(body_limit))
                .layer(tower_http::trace::TraceLayer::new_for_http()),
        )
        // axum's default body limit needs to be disabled to not have the
        // default limit on top of our custom limit.
        .layer(axum::extract::DefaultBodyLimit::disable())
}
