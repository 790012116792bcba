//! Typed records for the back-office collections.
//!
//! Each record type fixes its collection key and seed location through
//! [`Collection`](crate::entity::Collection):
//!
//! | Type | Key | Seed |
//! |------|-----|------|
//! | [`User`] | `users` | `/data/users.json` |
//! | [`Product`] | `products` | `/data/products.json` |
//! | [`Order`] | `orders` | `/data/orders.json` |
//! | [`Payment`] | `payments` | `/data/payments.json` |
//! | [`SupportTicket`] | `support` | `/data/support.json` |
//! | [`CmsPage`] | `cms` | `/data/cms.json` |
//!
//! Status, role, category and method values are plain strings. The constant
//! slices next to each type list the values the screens offer; records are
//! not checked against them.

mod cms;
mod orders;
mod payments;
mod products;
mod support;
mod users;

pub use cms::{CmsPage, CMS_STATUSES};
pub use orders::{Order, ORDER_STATUSES};
pub use payments::{Payment, PAYMENT_METHODS, PAYMENT_STATUSES};
pub use products::{Product, StockLevel, PRODUCT_STATUSES};
pub use support::{SupportTicket, TICKET_PRIORITIES, TICKET_STATUSES};
pub use users::{User, USER_ROLES, USER_STATUSES};

/// Every built-in collection name.
pub const COLLECTION_NAMES: [&str; 6] = ["users", "products", "orders", "payments", "support", "cms"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Collection;

    #[test]
    fn test_collection_names_match_types() {
        let names = [
            User::NAME,
            Product::NAME,
            Order::NAME,
            Payment::NAME,
            SupportTicket::NAME,
            CmsPage::NAME,
        ];
        assert_eq!(names, COLLECTION_NAMES);
    }

    #[test]
    fn test_collection_keys_unique() {
        let mut names = COLLECTION_NAMES.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), COLLECTION_NAMES.len());
    }

    #[test]
    fn test_seed_locations() {
        assert_eq!(SupportTicket::seed_location().as_str(), "/data/support.json");
        assert_eq!(CmsPage::seed_location().as_str(), "/data/cms.json");
    }
}
