mod contact_form;
mod new_ticket;
mod outage_report;
mod signup_request;
mod support_form;
mod voip_support;

pub use contact_form::ContactForm;
pub use new_ticket::{NewTicket, TicketPriority, TicketRecipient};
pub use outage_report::OutageReport;
pub use signup_request::SignupRequest;
pub use support_form::{SupportForm, TicketRouting};
pub use voip_support::VoipSupport;
