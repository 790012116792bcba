use crate::entity::{Collection, Record};
use crate::filter::Searchable;
use crate::ids;
use serde::{Deserialize, Serialize};

pub const PAYMENT_METHODS: &[&str] = &["Credit Card", "PayPal", "Bank Transfer", "Cash"];
pub const PAYMENT_STATUSES: &[&str] = &["completed", "pending", "failed", "refunded"];

/// Recorded payment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub transaction_id: String,
    pub amount: f64,
    pub status: String,
    pub method: String,
    pub customer_name: String,
    pub created_at: String,
}

impl Payment {
    /// New completed payment. Ids follow the list length, so pass the
    /// current number of payments.
    pub fn new(
        existing_len: usize,
        amount: f64,
        method: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Self {
        Payment {
            id: ids::sequence_id(existing_len),
            transaction_id: ids::reference_number("TXN"),
            amount,
            status: "completed".to_string(),
            method: method.into(),
            customer_name: customer_name.into(),
            created_at: ids::today(),
        }
    }

    /// Only completed payments can be refunded.
    pub fn is_refundable(&self) -> bool {
        self.status == "completed"
    }

    pub fn refund(&mut self) {
        self.status = "refunded".to_string();
    }
}

impl Record for Payment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection for Payment {
    const NAME: &'static str = "payments";
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.transaction_id.as_str(), self.customer_name.as_str()]
    }

    fn status(&self) -> &str {
        &self.status
    }
}
