use serde::de::DeserializeOwned;

use crate::domain::{NewTicket, TicketPriority, TicketRecipient};

/// Where a form's tickets land upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRouting {
    pub priority: TicketPriority,
    pub ticket_group_id: u32,
    pub inbound_mailbox_id: u32,
}

/// A website form that is turned into a support ticket.
pub trait SupportForm: DeserializeOwned + 'static {
    /// Short name used in logs.
    const KIND: &'static str;
    const ROUTING: TicketRouting;
    const SUCCESS_MESSAGE: &'static str;
    const SENDS_AUTOREPLY: bool = true;

    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn email(&self) -> &str;

    /// `(field name, value)` for every field that must be filled in.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;
    fn subject(&self) -> String;
    fn description(&self) -> String;

    fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = self
            .required_fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Missing required fields: {}", missing.join(", ")))
        }
    }

    fn recipient(&self) -> TicketRecipient {
        TicketRecipient {
            email: self.email().to_string(),
            name: format!("{} {}", self.first_name(), self.last_name()),
        }
    }

    fn to_ticket(&self) -> Result<NewTicket, String> {
        self.validate()?;
        Ok(NewTicket {
            subject: self.subject(),
            description: self.description(),
            priority: Self::ROUTING.priority,
            ticket_group_id: Self::ROUTING.ticket_group_id,
            inbound_mailbox_id: Self::ROUTING.inbound_mailbox_id,
            recipient: self.recipient(),
        })
    }
}

/// Render the HTML ticket body: one labelled line per field, message last.
///
/// Values are inserted as submitted.
pub(crate) fn render_description(fields: &[(&str, &str)], message: &str) -> String {
    let lines: String = fields
        .iter()
        .map(|(label, value)| format!("\t<strong>{}:</strong> {}<br>\n", label, value))
        .collect();

    format!(
        "\n<p>\n{lines}\t<strong>Message:</strong><br>\n\t{message}\n</p>\n",
        lines = lines,
        message = message
    )
}
