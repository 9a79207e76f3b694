use std::sync::Arc;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use waitlist::{
    store::{MemoryStore, StoreResult, SubscriberStore},
    web::types::SubscribeResponse,
};

use crate::helpers::TestApp;

/// Loads fine, fails every save.
struct BrokenDiskStore;

impl SubscriberStore for BrokenDiskStore {
    fn load(&self) -> Vec<String> {
        Vec::new()
    }

    fn save(&self, _subscribers: &[String]) -> StoreResult<()> {
        Err(std::io::Error::other("no space left on device").into())
    }
}

#[tokio::test]
async fn subscribe_returns_201_and_stores_normalized_email() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_subscriptions(&json!({ "email": "A@Example.com " }))
        .await?;

    assert_eq!(
        res.status(),
        StatusCode::CREATED,
        "Wrong response StatusCode: {}",
        res.status()
    );
    let body: SubscribeResponse = res.json().await?;
    assert_eq!(
        body,
        SubscribeResponse {
            message: "Successfully subscribed".to_string(),
            total_subscribers: 1,
        }
    );
    assert_eq!(app.store.load(), vec!["a@example.com".to_string()]);

    Ok(())
}

#[tokio::test]
async fn subscribe_response_uses_camel_case_fields() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_subscriptions(&json!({ "email": "ursula@example.com" }))
        .await?;
    let body: Value = res.json().await?;

    assert_eq!(
        body,
        json!({ "message": "Successfully subscribed", "totalSubscribers": 1 })
    );

    Ok(())
}

#[tokio::test]
async fn subscribe_increments_the_count_by_one_per_new_email() -> Result<()> {
    let app = TestApp::spawn().await?;

    for (i, email) in ["one@example.com", "two@example.com", "three@example.org"]
        .iter()
        .enumerate()
    {
        let res = app.post_subscriptions(&json!({ "email": email })).await?;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: SubscribeResponse = res.json().await?;
        assert_eq!(body.total_subscribers, i + 1);
    }

    assert_eq!(
        app.store.load(),
        vec![
            "one@example.com".to_string(),
            "two@example.com".to_string(),
            "three@example.org".to_string(),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn subscribe_returns_409_for_already_subscribed_email() -> Result<()> {
    let store = Arc::new(MemoryStore::with_subscribers(vec![
        "a@example.com".to_string()
    ]));
    let app = TestApp::spawn_with_store(store).await?;

    for email in ["a@example.com", "A@EXAMPLE.COM", "  a@Example.com\t"] {
        let res = app.post_subscriptions(&json!({ "email": email })).await?;

        assert_eq!(
            res.status(),
            StatusCode::CONFLICT,
            "Expected a conflict for: {email:?}"
        );
        let body: Value = res.json().await?;
        assert_eq!(body, json!({ "error": "Email already subscribed" }));
    }

    assert_eq!(app.store.load().len(), 1);

    Ok(())
}

#[tokio::test]
async fn subscribe_returns_400_when_email_is_missing() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!({}), "Empty json"),
        (json!({ "name": "Ursula" }), "Missing email"),
        (json!({ "email": null }), "Null email"),
        (json!({ "email": "" }), "Empty email"),
        (json!({ "email": 42 }), "Number email"),
        (json!({ "email": ["a@example.com"] }), "Array email"),
    ];

    for (body, description) in cases {
        let res = app.post_subscriptions(&body).await?;

        assert_eq!(
            400,
            res.status().as_u16(),
            "The API did not return a 400 BAD REQUEST when the payload was {description}."
        );
        let body: Value = res.json().await?;
        assert_eq!(body, json!({ "error": "Email is required" }), "{description}");
    }

    assert!(app.store.load().is_empty());

    Ok(())
}

#[tokio::test]
async fn subscribe_returns_400_when_email_is_malformed() -> Result<()> {
    let app = TestApp::spawn().await?;

    for email in [
        "not-an-email",
        "ursuladomain.com",
        "ursula@domain",
        "@domain.com",
        "ursula le@domain.com",
        "   ",
    ] {
        let res = app.post_subscriptions(&json!({ "email": email })).await?;

        assert_eq!(
            400,
            res.status().as_u16(),
            "The API did not return a 400 BAD REQUEST for: {email:?}."
        );
        let body: Value = res.json().await?;
        assert_eq!(body, json!({ "error": "Invalid email format" }));
    }

    assert!(app.store.load().is_empty());

    Ok(())
}

#[tokio::test]
async fn subscribe_returns_400_for_a_body_that_is_not_json() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(format!("http://{}/api/subscribe", app.addr))
        .header("content-type", "application/json")
        .body("{ \"email\": ")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "error": "Invalid request body" }));

    Ok(())
}

#[tokio::test]
async fn subscribe_returns_500_when_the_store_fails_to_save() -> Result<()> {
    let app = TestApp::spawn_with_store(Arc::new(BrokenDiskStore)).await?;

    let res = app
        .post_subscriptions(&json!({ "email": "ursula@example.com" }))
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = res.json().await?;
    // no internal details leak to the client
    assert_eq!(body, json!({ "error": "Internal server error" }));

    Ok(())
}

#[tokio::test]
async fn subscribe_returns_400_for_json_that_is_not_an_object() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!(["x@example.com"]), "Array body"),
        (json!("x@example.com"), "String body"),
        (json!(null), "Null body"),
    ];

    for (body, description) in cases {
        let res = app.post_subscriptions(&body).await?;

        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "The API did not return a 400 BAD REQUEST when the payload was {description}."
        );
        let body: Value = res.json().await?;
        assert_eq!(body, json!({ "error": "Invalid request body" }), "{description}");
    }

    assert!(app.store.load().is_empty());

    Ok(())
}
