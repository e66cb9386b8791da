/// Ticket priorities accepted by the ticketing API.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketPriority {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecipient {
    pub email: String,
    pub name: String,
}

/// A ticket ready to be sent upstream, rendered from a validated form.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
    pub priority: TicketPriority,
    pub ticket_group_id: u32,
    pub inbound_mailbox_id: u32,
    pub recipient: TicketRecipient,
}
