use crate::domain::support_form::render_description;
use crate::domain::{SupportForm, TicketPriority, TicketRouting};

/// A prospective customer asking for service. Routed to sales.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub street_address: String,
    pub service: String,
    pub message: String,
}

impl SupportForm for SignupRequest {
    const KIND: &'static str = "signup";
    const ROUTING: TicketRouting = TicketRouting {
        priority: TicketPriority::High,
        ticket_group_id: 2,
        inbound_mailbox_id: 1,
    };
    const SUCCESS_MESSAGE: &'static str = "Signup request submitted successfully";
    const SENDS_AUTOREPLY: bool = false;

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("service", self.service.as_str()),
            ("message", self.message.as_str()),
        ]
    }

    fn subject(&self) -> String {
        format!("Signup Form: {}", self.service)
    }

    fn description(&self) -> String {
        render_description(
            &[
                ("First Name", self.first_name.as_str()),
                ("Last Name", self.last_name.as_str()),
                ("Phone", self.phone.as_str()),
                ("Email", self.email.as_str()),
                ("Street Address", self.street_address.as_str()),
                ("Service", self.service.as_str()),
            ],
            &self.message,
        )
    }
}
