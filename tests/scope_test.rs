//! Integration tests for task-scoped configuration propagation.

use std::sync::Arc;

use configloader::model::{AppConfig, Config};
use configloader::scope;

fn named_config(name: &str) -> Arc<Config> {
    Arc::new(Config {
        application: AppConfig {
            name: name.to_string(),
            ..Default::default()
        },
        ..Default::default()
    })
}

#[tokio::test]
async fn test_scope_round_trip() {
    let config = named_config("scoped");

    let seen = scope::scope(Arc::clone(&config), async {
        scope::current().expect("config should be attached")
    })
    .await;

    assert!(Arc::ptr_eq(&seen, &config));
    assert_eq!(seen.application.name, "scoped");
}

#[tokio::test]
async fn test_current_is_none_outside_scope() {
    assert!(scope::current().is_none());
}

#[tokio::test]
async fn test_nested_scope_shadows_outer() {
    let outer = named_config("outer");
    let inner = named_config("inner");

    scope::scope(Arc::clone(&outer), async {
        assert_eq!(scope::current().expect("outer").application.name, "outer");

        scope::scope(Arc::clone(&inner), async {
            assert_eq!(scope::current().expect("inner").application.name, "inner");
        })
        .await;

        // Outer scope is restored once the nested scope ends.
        assert_eq!(scope::current().expect("outer").application.name, "outer");
    })
    .await;
}

#[test]
fn test_sync_scope_round_trip() {
    let config = named_config("sync");

    let seen = scope::sync_scope(Arc::clone(&config), || {
        scope::current().expect("config should be attached")
    });

    assert!(Arc::ptr_eq(&seen, &config));
    assert!(scope::current().is_none());
}

#[tokio::test]
async fn test_scope_survives_await_points() {
    let config = named_config("async");

    scope::scope(config, async {
        tokio::task::yield_now().await;
        assert_eq!(scope::current().expect("config").application.name, "async");
    })
    .await;
}
