//! End-to-end tests against a receiver listening on a local port.

use {
    reqwest::{Method, StatusCode, Url, header},
    serde_json::Value,
    std::net::SocketAddr,
    tokio::sync::oneshot,
};


/// A receiver running in the background of the current test runtime.
pub struct Receiver {
    url: Url,
    client: reqwest::Client,
}

impl Receiver {
    pub async fn new() -> Self {
        Self::with_args(Vec::new()).await
    }

    /// Starts a receiver with additional CLI arguments on a random port.
    pub async fn with_args(extra: Vec<String>) -> Self {
        let (bind, bind_receiver) = oneshot::channel::<SocketAddr>();
        let args = ["/test/receiver/path", "--addr=127.0.0.1:0", "--log=debug"]
            .into_iter()
            .map(str::to_owned)
            .chain(extra)
            .collect::<Vec<_>>();
        tokio::spawn(async move {
            crate::run(args, Some(bind)).await.unwrap();
        });
        let addr = bind_receiver.await.unwrap();
        Self {
            url: format!("http://{addr}").parse().unwrap(),
            client: reqwest::Client::new(),
        }
    }

    /// Posts a JSON notification and returns the status and decoded body.
    pub async fn notify(&self, notification: Value) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "notify",
            Some("application/json"),
            notification.to_string(),
        )
        .await
    }

    /// Sends an arbitrary request. The response body is decoded as JSON when
    /// possible and returned as a JSON string otherwise.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: impl Into<reqwest::Body>,
    ) -> (StatusCode, Value) {
        let mut request = self
            .client
            .request(method, self.url.join(path).unwrap())
            .body(body);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let response = request.send().await.unwrap();
        let status = response.status();
        let text = response.text().await.unwrap();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        (status, body)
    }
}
