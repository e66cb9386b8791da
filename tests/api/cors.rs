use crate::helpers::{spawn_app, ALLOWED_ORIGIN};

async fn preflight(address: &str, origin: &str) -> reqwest::Response {
    reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/api/v1/contact-us", address),
        )
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn preflight_requests_from_an_allowed_origin_are_accepted() {
    let app = spawn_app().await;

    let response = preflight(&app.address, ALLOWED_ORIGIN).await;

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("Access-Control-Allow-Origin")
            .unwrap(),
        ALLOWED_ORIGIN
    );
    let allowed_methods = response
        .headers()
        .get("Access-Control-Allow-Methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allowed_methods.contains("POST"));
}

#[tokio::test]
async fn preflight_requests_from_other_origins_are_not_granted_access() {
    let app = spawn_app().await;

    let response = preflight(&app.address, "https://evil.example.com").await;

    assert!(response
        .headers()
        .get("Access-Control-Allow-Origin")
        .is_none());
}

#[tokio::test]
async fn plain_options_requests_are_answered_with_200() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/api/v1/contact-us", &app.address),
        )
        .header("Origin", ALLOWED_ORIGIN)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
}
