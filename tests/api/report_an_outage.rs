use crate::helpers::{autoreply_sent, created_ticket, spawn_app, GraphQlOperation};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

fn outage_report() -> serde_json::Value {
    serde_json::json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "phone": "555-0100",
        "email": "grace@example.com",
        "street_address": "1 Main St",
        "city": "Arlington",
        "state": "VA",
        "reason": "No internet",
        "message": "Everything has been down since 6am"
    })
}

#[tokio::test]
async fn report_an_outage_opens_a_high_priority_ticket() {
    let app = spawn_app().await;

    Mock::given(GraphQlOperation("createPublicTicket"))
        .respond_with(created_ticket(501))
        .expect(1)
        .mount(&app.ticket_server)
        .await;
    Mock::given(GraphQlOperation("resendAutoreply"))
        .respond_with(autoreply_sent())
        .expect(1)
        .mount(&app.ticket_server)
        .await;

    let response = app.post_form("report-an-outage", &outage_report()).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Outage report submitted successfully");
    assert_eq!(body["ticket_id"], 501);

    let input = &app.graphql_inputs("createPublicTicket").await[0];
    assert_eq!(input["subject"], "Outage Form: No internet");
    assert_eq!(input["priority"], "HIGH");
    assert_eq!(input["ticket_group_id"], 3);
    assert_eq!(input["inbound_mailbox_id"], 1);

    let description = input["description"].as_str().unwrap();
    for (_, value) in outage_report().as_object().unwrap() {
        assert!(description.contains(value.as_str().unwrap()));
    }
}

#[tokio::test]
async fn report_an_outage_returns_400_without_a_reason() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ticket_server)
        .await;

    let mut body = outage_report();
    body.as_object_mut().unwrap().remove("reason");

    let response = app.post_form("report-an-outage", &body).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn report_an_outage_returns_500_when_the_ticket_api_is_unreachable() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(created_ticket(1).set_delay(std::time::Duration::from_secs(30)))
        .mount(&app.ticket_server)
        .await;

    let response = app.post_form("report-an-outage", &outage_report()).await;

    assert_eq!(response.status().as_u16(), 500);
}
