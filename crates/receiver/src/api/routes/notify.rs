use {
    crate::api::error::{self, NotifyError},
    axum::{Json, extract::rejection::JsonRejection, http::StatusCode},
    receiver_dto::{Acknowledgement, Notification},
    tracing::Instrument,
};

/// Logs the posted notification and acknowledges it. The payload is not
/// inspected beyond being valid JSON and is dropped afterwards.
pub async fn notify(
    notification: Result<Json<Notification>, JsonRejection>,
) -> Result<(StatusCode, Json<Acknowledgement>), (StatusCode, Json<error::Error>)> {
    let handle_request = async {
        let Json(notification) = notification.map_err(NotifyError::from)?;
        tracing::info!(
            payload = %notification,
            kind = notification.kind(),
            "received notification"
        );
        Ok::<_, (StatusCode, Json<error::Error>)>((
            StatusCode::OK,
            Json(Acknowledgement::received()),
        ))
    };

    handle_request
        .instrument(tracing::info_span!("/notify"))
        .await
}
