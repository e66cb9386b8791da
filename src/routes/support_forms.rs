use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use std::fmt::Formatter;

use crate::domain::SupportForm;
use crate::ticket_client::TicketClient;

/// JSON envelope returned by every form route.
#[derive(serde::Serialize, Debug)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<u64>,
}

impl SubmissionResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ticket_id: None,
        }
    }
}

#[derive(thiserror::Error)]
pub enum SubmitFormError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to create ticket")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmitFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitFormError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitFormError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmitFormError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SubmissionResponse::failure(self.to_string()))
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[tracing::instrument(
    name = "Submitting a support form",
    skip(form, ticket_client),
    fields(
        form_kind = F::KIND,
        submitter_email = %form.email(),
        ticket_id = tracing::field::Empty
    )
)]
pub async fn submit_form<F: SupportForm>(
    form: web::Json<F>,
    ticket_client: web::Data<TicketClient>,
) -> Result<HttpResponse, SubmitFormError> {
    let ticket = form.to_ticket().map_err(SubmitFormError::ValidationError)?;

    let ticket_id = ticket_client
        .create_ticket(&ticket)
        .await
        .with_context(|| format!("Failed to create a ticket from a {} form", F::KIND))?;
    tracing::Span::current().record("ticket_id", &tracing::field::display(ticket_id));

    if F::SENDS_AUTOREPLY {
        if let Err(e) = ticket_client
            .resend_autoreply(ticket_id, &ticket.recipient.email)
            .await
        {
            tracing::warn!(
                error.message = %e,
                error.cause_chain = ?e,
                "Failed to send the autoreply for ticket {}",
                ticket_id
            );
        }
    }

    Ok(HttpResponse::Created().json(SubmissionResponse {
        success: true,
        message: F::SUCCESS_MESSAGE.into(),
        ticket_id: Some(ticket_id),
    }))
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(SubmissionResponse::failure("Method not allowed"))
}
