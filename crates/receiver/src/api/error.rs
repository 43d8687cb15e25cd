use {axum::extract::rejection::JsonRejection, hyper::StatusCode, serde::Serialize};

/// Body of every non-2xx response produced by the receiver itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub kind: &'static str,
    pub description: &'static str,
}

/// Reasons a notification request is turned away.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("expected a request with `Content-Type: application/json`")]
    UnsupportedMediaType,
    #[error("request body is empty or not valid JSON: {0}")]
    InvalidJson(String),
    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,
    #[error("failed to read request body: {0}")]
    UnreadableBody(String),
}

impl NotifyError {
    fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedMediaType => "UnsupportedMediaType",
            Self::InvalidJson(_) => "InvalidJson",
            Self::PayloadTooLarge => "PayloadTooLarge",
            Self::UnreadableBody(_) => "UnreadableBody",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedMediaType => "Expected request with `Content-Type: application/json`",
            Self::InvalidJson(_) => "The request body is empty or not valid JSON",
            Self::PayloadTooLarge => "The request body is too large",
            Self::UnreadableBody(_) => "The request body could not be read",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InvalidJson(_) | Self::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl From<JsonRejection> for NotifyError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::UnsupportedMediaType,
            // Any JSON value is a valid notification, so a data error can only
            // come from an extractor change. Treat it like a syntax error.
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                Self::InvalidJson(rejection.body_text())
            }
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => Self::PayloadTooLarge,
            other => Self::UnreadableBody(other.body_text()),
        }
    }
}

impl From<NotifyError> for (StatusCode, axum::Json<Error>) {
    fn from(error: NotifyError) -> Self {
        tracing::warn!(%error, "rejected notification");
        (
            error.status(),
            axum::Json(Error {
                kind: error.kind(),
                description: error.description(),
            }),
        )
    }
}
