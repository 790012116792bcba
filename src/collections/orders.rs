use crate::entity::{Collection, Record};
use crate::filter::Searchable;
use crate::ids;
use serde::{Deserialize, Serialize};

pub const ORDER_STATUSES: &[&str] = &["pending", "processing", "shipped", "delivered", "cancelled"];

/// Customer order. `items` is the number of line items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: f64,
    pub status: String,
    pub items: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl Order {
    /// New order with a generated id, created and updated today.
    pub fn new(
        order_number: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        total: f64,
        items: u32,
        status: impl Into<String>,
    ) -> Self {
        let today = ids::today();
        Order {
            id: ids::prefixed_id("order"),
            order_number: order_number.into(),
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            total,
            status: status.into(),
            items,
            created_at: today.clone(),
            updated_at: today,
        }
    }

    /// Set `updated_at` to today.
    pub fn touch(&mut self) {
        self.updated_at = ids::today();
    }

    /// Change the status and touch the record.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.touch();
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection for Order {
    const NAME: &'static str = "orders";
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.customer_name.as_str(),
            self.customer_email.as_str(),
        ]
    }

    fn status(&self) -> &str {
        &self.status
    }
}
