use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{NewTicket, TicketPriority};

const CREATE_PUBLIC_TICKET: &str = r#"
mutation CreatePublicTicket($input: CreatePublicTicketMutationInput!) {
    createPublicTicket(input: $input) {
        id
        subject
        status
        created_at
    }
}
"#;

const RESEND_AUTOREPLY: &str = r#"
mutation ResendAutoreply($input: ResendAutoreplyMutationInput!) {
    resendAutoreply(input: $input) {
        success
        message
    }
}
"#;

/// Client for the ticketing system's GraphQL API.
pub struct TicketClient {
    http_client: reqwest::Client,
    base_url: String,
    api_token: Secret<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum TicketClientError {
    #[error("Failed to reach the ticketing API")]
    Transport(#[from] reqwest::Error),
    #[error("The ticketing API returned status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("GraphQL error: {0}")]
    GraphQl(String),
    #[error("Invalid response from the ticketing API: {0}")]
    InvalidPayload(String),
    #[error("Failed to resend autoreply: {0}")]
    AutoreplyRejected(String),
}

impl TicketClient {
    pub fn new(
        base_url: String,
        api_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            api_token,
        })
    }

    /// Open a ticket and return the id assigned upstream.
    #[tracing::instrument(
        name = "Creating a ticket",
        skip(self, ticket),
        fields(
            subject = %ticket.subject,
            priority = ?ticket.priority,
            ticket_group_id = ticket.ticket_group_id,
            ticket_id = tracing::field::Empty
        )
    )]
    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<u64, TicketClientError> {
        let variables = Variables {
            input: CreatePublicTicketInput {
                subject: &ticket.subject,
                description: &ticket.description,
                status: "OPEN",
                priority: ticket.priority,
                inbound_mailbox_id: ticket.inbound_mailbox_id,
                ticket_group_id: ticket.ticket_group_id,
                ticket_recipients: [TicketRecipientInput {
                    email_address: &ticket.recipient.email,
                    name: &ticket.recipient.name,
                }],
            },
        };

        let data: CreatePublicTicketData = self.execute(CREATE_PUBLIC_TICKET, &variables).await?;
        let created = data.create_public_ticket;
        tracing::Span::current().record("ticket_id", &tracing::field::display(created.id));
        tracing::info!(
            status = ?created.status,
            created_at = ?created.created_at,
            "Ticket created"
        );
        Ok(created.id)
    }

    /// Ask the ticketing system to send its acknowledgment email again.
    #[tracing::instrument(name = "Resending the ticket autoreply", skip(self, to_email_address))]
    pub async fn resend_autoreply(
        &self,
        ticket_id: u64,
        to_email_address: &str,
    ) -> Result<(), TicketClientError> {
        let variables = Variables {
            input: ResendAutoreplyInput {
                ticket_id,
                to_email_address,
            },
        };

        let data: ResendAutoreplyData = self.execute(RESEND_AUTOREPLY, &variables).await?;
        let outcome = data.resend_autoreply;
        if outcome.success {
            Ok(())
        } else {
            Err(TicketClientError::AutoreplyRejected(
                outcome.message.unwrap_or_default(),
            ))
        }
    }

    async fn execute<V, T>(&self, query: &str, variables: &V) -> Result<T, TicketClientError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request_body = GraphQlRequest { query, variables };
        let response = self
            .http_client
            .post(&self.base_url)
            .bearer_auth(self.api_token.expose_secret())
            .header(ACCEPT, "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TicketClientError::UnexpectedStatus { status, body });
        }

        let payload: GraphQlResponse = serde_json::from_str(&body)
            .map_err(|e| TicketClientError::InvalidPayload(e.to_string()))?;
        if let Some(error) = payload.errors.unwrap_or_default().into_iter().next() {
            return Err(TicketClientError::GraphQl(error.message));
        }

        let data = payload
            .data
            .ok_or_else(|| TicketClientError::InvalidPayload("the response carries no data".into()))?;
        serde_json::from_value(data).map_err(|e| TicketClientError::InvalidPayload(e.to_string()))
    }
}

#[derive(serde::Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

#[derive(serde::Serialize)]
struct Variables<I> {
    input: I,
}

#[derive(serde::Serialize)]
struct CreatePublicTicketInput<'a> {
    subject: &'a str,
    description: &'a str,
    status: &'a str,
    priority: TicketPriority,
    inbound_mailbox_id: u32,
    ticket_group_id: u32,
    ticket_recipients: [TicketRecipientInput<'a>; 1],
}

#[derive(serde::Serialize)]
struct TicketRecipientInput<'a> {
    email_address: &'a str,
    name: &'a str,
}

#[derive(serde::Serialize)]
struct ResendAutoreplyInput<'a> {
    ticket_id: u64,
    to_email_address: &'a str,
}

// `data` is decoded only once `errors` has been checked, since a failed
// mutation may come back with a partial or null payload.
#[derive(serde::Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(serde::Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(serde::Deserialize)]
struct CreatePublicTicketData {
    #[serde(rename = "createPublicTicket")]
    create_public_ticket: CreatedTicket,
}

#[derive(serde::Deserialize)]
struct CreatedTicket {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: u64,
    status: Option<String>,
    created_at: Option<String>,
}

#[derive(serde::Deserialize)]
struct ResendAutoreplyData {
    #[serde(rename = "resendAutoreply")]
    resend_autoreply: AutoreplyOutcome,
}

#[derive(serde::Deserialize)]
struct AutoreplyOutcome {
    success: bool,
    message: Option<String>,
}
