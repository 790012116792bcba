use crate::entity::{Collection, Record};
use crate::filter::Searchable;
use crate::ids;
use serde::{Deserialize, Serialize};

pub const TICKET_PRIORITIES: &[&str] = &["low", "medium", "high"];
pub const TICKET_STATUSES: &[&str] = &["open", "in_progress", "resolved"];

/// Customer support ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: String,
    pub ticket_number: String,
    pub subject: String,
    pub status: String,
    pub priority: String,
    pub customer_name: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SupportTicket {
    /// New open ticket. Ids follow the list length, so pass the current
    /// number of tickets.
    pub fn new(
        existing_len: usize,
        subject: impl Into<String>,
        priority: impl Into<String>,
        customer_name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        SupportTicket {
            id: ids::sequence_id(existing_len),
            ticket_number: ids::reference_number("TICKET"),
            subject: subject.into(),
            status: "open".to_string(),
            priority: priority.into(),
            customer_name: customer_name.into(),
            created_at: ids::today(),
            description,
        }
    }

    /// Open and in-progress tickets can be resolved.
    pub fn is_resolvable(&self) -> bool {
        self.status == "open" || self.status == "in_progress"
    }

    pub fn resolve(&mut self) {
        self.status = "resolved".to_string();
    }
}

impl Record for SupportTicket {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection for SupportTicket {
    const NAME: &'static str = "support";
}

impl Searchable for SupportTicket {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.ticket_number.as_str(),
            self.subject.as_str(),
            self.customer_name.as_str(),
        ]
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticket_is_open() {
        let ticket = SupportTicket::new(0, "Refund", "high", "Frank", None);
        assert_eq!(ticket.id, "1");
        assert!(ticket.ticket_number.starts_with("TICKET-"));
        assert!(ticket.is_resolvable());
    }

    #[test]
    fn test_description_optional() {
        let json = r#"{"id":"1","ticketNumber":"T-1","subject":"S","status":"open","priority":"low","customerName":"G","createdAt":"2024-01-01"}"#;
        let ticket: SupportTicket = serde_json::from_str(json).expect("valid ticket");
        assert_eq!(ticket.description, None);
        assert_eq!(serde_json::to_string(&ticket).expect("serialize"), json);
    }

    #[test]
    fn test_resolve() {
        let mut ticket = SupportTicket::new(1, "Login", "low", "Hal", Some("cannot log in".to_string()));
        ticket.resolve();
        assert!(!ticket.is_resolvable());
    }
}
