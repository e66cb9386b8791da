use crate::domain::support_form::render_description;
use crate::domain::{SupportForm, TicketPriority, TicketRouting};

/// A "contact us" submission.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub reason: String,
    pub message: String,
}

impl SupportForm for ContactForm {
    const KIND: &'static str = "contact";
    const ROUTING: TicketRouting = TicketRouting {
        priority: TicketPriority::Medium,
        ticket_group_id: 3,
        inbound_mailbox_id: 1,
    };
    const SUCCESS_MESSAGE: &'static str = "Contact form submitted successfully";

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
            ("reason", self.reason.as_str()),
            ("message", self.message.as_str()),
        ]
    }

    fn subject(&self) -> String {
        format!("Contact Form: {}", self.reason)
    }

    fn description(&self) -> String {
        render_description(
            &[
                ("First Name", self.first_name.as_str()),
                ("Last Name", self.last_name.as_str()),
                ("Phone", self.phone.as_str()),
                ("Email", self.email.as_str()),
                ("Street Address", self.street_address.as_str()),
                ("City", self.city.as_str()),
                ("State", self.state.as_str()),
                ("Reason", self.reason.as_str()),
            ],
            &self.message,
        )
    }
}
