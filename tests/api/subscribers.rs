use std::sync::Arc;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use waitlist::{store::MemoryStore, web::types::SubscribersPreview};

use crate::helpers::TestApp;

fn numbered_subscribers(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("user{i}@example.com")).collect()
}

#[tokio::test]
async fn subscribers_of_an_empty_store() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get_subscriptions().await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "totalSubscribers": 0, "subscribers": [] }));

    Ok(())
}

#[tokio::test]
async fn subscribers_returns_total_and_first_ten() -> Result<()> {
    let all = numbered_subscribers(15);
    let app = TestApp::spawn_with_store(Arc::new(MemoryStore::with_subscribers(all.clone()))).await?;

    let res = app.get_subscriptions().await?;

    assert_eq!(res.status(), StatusCode::OK);
    let preview: SubscribersPreview = res.json().await?;
    assert_eq!(preview.total_subscribers, 15);
    assert_eq!(preview.subscribers, &all[..10]);

    Ok(())
}

#[tokio::test]
async fn subscribers_is_idempotent_without_writes() -> Result<()> {
    let app = TestApp::spawn_with_store(Arc::new(MemoryStore::with_subscribers(
        numbered_subscribers(3),
    )))
    .await?;

    let first: Value = app.get_subscriptions().await?.json().await?;
    let second: Value = app.get_subscriptions().await?.json().await?;

    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn subscribers_reflects_new_subscriptions() -> Result<()> {
    let app = TestApp::spawn().await?;

    app.post_subscriptions(&json!({ "email": "First@Example.com" }))
        .await?;
    app.post_subscriptions(&json!({ "email": "second@example.com" }))
        .await?;

    let preview: SubscribersPreview = app.get_subscriptions().await?.json().await?;

    assert_eq!(
        preview,
        SubscribersPreview {
            total_subscribers: 2,
            subscribers: vec![
                "first@example.com".to_string(),
                "second@example.com".to_string()
            ],
        }
    );

    Ok(())
}
