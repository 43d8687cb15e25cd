use {crate::tests::Receiver, reqwest::StatusCode, serde_json::json};

#[tokio::test]
async fn acknowledges_object() {
    let receiver = Receiver::new().await;

    let (status, body) = receiver.notify(json!({ "event": "ping" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "received" }));
}

#[tokio::test]
async fn acknowledges_empty_array() {
    let receiver = Receiver::new().await;

    let (status, body) = receiver.notify(json!([])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "received" }));
}

#[tokio::test]
async fn acknowledgement_does_not_depend_on_payload() {
    let receiver = Receiver::new().await;
    let large = (0..1_000)
        .map(|i| json!({ "id": i, "tags": ["a", "b"], "nested": { "ok": true } }))
        .collect::<Vec<_>>();

    for notification in [
        json!(null),
        json!(true),
        json!(42),
        json!(-1.5),
        json!("just a string"),
        json!({}),
        json!({ "event": "order", "data": { "uid": "0x01", "amounts": [1, 2, 3] } }),
        json!(large),
    ] {
        let (status, body) = receiver.notify(notification.clone()).await;
        assert_eq!(status, StatusCode::OK, "{notification}");
        assert_eq!(body, json!({ "status": "received" }), "{notification}");
    }
}

#[tokio::test]
async fn accepts_content_type_with_charset() {
    let receiver = Receiver::new().await;

    let (status, body) = receiver
        .send(
            reqwest::Method::POST,
            "notify",
            Some("application/json; charset=utf-8"),
            r#"{"event":"ping"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "received" }));
}
