use std::net::TcpListener;
use ticket_proxy::configuration::get_configuration;
use ticket_proxy::startup::run;
use ticket_proxy::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(
        "ticket_proxy".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_configuration()
        .expect("Failed to read configuration");
    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    let ticket_client = config
        .ticket_client
        .client()
        .expect("Failed to build the ticketing API client");

    tracing::info!(%address, "Starting proxy service");
    run(listener, ticket_client, config.cors)?.await
}
