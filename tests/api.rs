//! End-to-end tests for the REST surface.

#![allow(clippy::panic)]

mod common;

use serde_json::Value;

#[tokio::test]
async fn root_serves_greeting() {
    let addr = common::spawn_gateway().await;

    let Ok(resp) = reqwest::get(format!("http://{addr}/")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 200);

    let Ok(text) = resp.text().await else {
        panic!("body read failed");
    };
    assert!(text.contains("Merhaba Backend"));
}

#[tokio::test]
async fn health_reports_healthy() {
    let addr = common::spawn_gateway().await;

    let Ok(resp) = reqwest::get(format!("http://{addr}/health")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 200);

    let Ok(body) = resp.json::<Value>().await else {
        panic!("body is not JSON");
    };
    assert_eq!(
        body.get("status").and_then(|v| v.as_str()),
        Some("healthy")
    );
}

#[tokio::test]
async fn demo_token_grants_access_to_rider_routes() {
    let addr = common::spawn_gateway().await;
    let client = reqwest::Client::new();

    let Ok(resp) = client
        .post(format!("http://{addr}/api/auth/demo-token"))
        .send()
        .await
    else {
        panic!("token request failed");
    };
    assert_eq!(resp.status().as_u16(), 200);

    let Ok(body) = resp.json::<Value>().await else {
        panic!("token body is not JSON");
    };
    let Some(token) = body.get("token").and_then(|v| v.as_str()) else {
        panic!("no token in response");
    };

    let Ok(profile) = client
        .get(format!("http://{addr}/api/rider/profil"))
        .bearer_auth(token)
        .send()
        .await
    else {
        panic!("profile request failed");
    };
    assert_eq!(profile.status().as_u16(), 200);

    let Ok(profile_body) = profile.json::<Value>().await else {
        panic!("profile body is not JSON");
    };
    assert_eq!(
        profile_body.get("rol").and_then(|v| v.as_str()),
        Some("user")
    );
}

#[tokio::test]
async fn rider_routes_reject_missing_token() {
    let addr = common::spawn_gateway().await;

    let Ok(resp) = reqwest::get(format!("http://{addr}/api/rider/profil")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 401);

    let Ok(body) = resp.json::<Value>().await else {
        panic!("body is not JSON");
    };
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some("Yetkisiz")
    );
}

#[tokio::test]
async fn rider_routes_reject_garbage_token() {
    let addr = common::spawn_gateway().await;
    let client = reqwest::Client::new();

    let Ok(resp) = client
        .get(format!("http://{addr}/api/rider/siparisler"))
        .bearer_auth("cok.gecersiz.token")
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn menu_listing_without_database_is_a_clean_error() {
    let addr = common::spawn_gateway().await;

    let Ok(resp) = reqwest::get(format!("http://{addr}/yemekler")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 500);

    let Ok(body) = resp.json::<Value>().await else {
        panic!("body is not JSON");
    };
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some("Hata oluştu")
    );
    assert!(body.get("error").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn unknown_status_filter_is_rejected_before_persistence() {
    let addr = common::spawn_gateway().await;

    let Ok(resp) = reqwest::get(format!("http://{addr}/api/siparis?durum=kargoda")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 400);

    let Ok(body) = resp.json::<Value>().await else {
        panic!("body is not JSON");
    };
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some("Geçersiz istek")
    );
}
