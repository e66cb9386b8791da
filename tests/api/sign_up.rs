use crate::helpers::{created_ticket, graphql_error, spawn_app, GraphQlOperation};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

fn signup_request() -> serde_json::Value {
    serde_json::json!({
        "first_name": "Alan",
        "last_name": "Turing",
        "phone": "555-0199",
        "email": "alan@example.com",
        "street_address": "2 Bletchley Rd",
        "service": "Fiber 1G",
        "message": "When can you install?"
    })
}

#[tokio::test]
async fn sign_up_routes_to_sales_without_an_autoreply() {
    let app = spawn_app().await;

    Mock::given(GraphQlOperation("createPublicTicket"))
        .respond_with(created_ticket(900))
        .expect(1)
        .mount(&app.ticket_server)
        .await;
    Mock::given(GraphQlOperation("resendAutoreply"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ticket_server)
        .await;

    let response = app.post_form("sign-up", &signup_request()).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "success": true,
            "message": "Signup request submitted successfully",
            "ticket_id": 900
        })
    );

    let input = &app.graphql_inputs("createPublicTicket").await[0];
    assert_eq!(input["subject"], "Signup Form: Fiber 1G");
    assert_eq!(input["priority"], "HIGH");
    assert_eq!(input["ticket_group_id"], 2);
    assert_eq!(input["inbound_mailbox_id"], 1);
}

#[tokio::test]
async fn sign_up_returns_400_without_a_service() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ticket_server)
        .await;

    let mut body = signup_request();
    body["service"] = serde_json::json!("");

    let response = app.post_form("sign-up", &body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Missing required fields: service");
}

#[tokio::test]
async fn sign_up_returns_500_on_graphql_errors() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(graphql_error("ticket_group_id does not exist"))
        .expect(1)
        .mount(&app.ticket_server)
        .await;

    let response = app.post_form("sign-up", &signup_request()).await;

    assert_eq!(response.status().as_u16(), 500);
}
