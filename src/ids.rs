//! Identifier helpers for callers creating records.
//!
//! The list cache never allocates ids. These are the three styles the
//! back-office screens use when they create a record:
//!
//! | Style | Example | Used by |
//! |-------|---------|---------|
//! | prefixed | `order_1718000000000_k3j9x0a2b` | users, products, orders |
//! | sequence | `4` (list length + 1) | payments, tickets, CMS pages |
//! | reference | `TXN-1718000000000-417` | payment transaction ids, ticket numbers |
//!
//! Sequence ids are only unique while records are never deleted; callers that
//! delete should prefer prefixed ids.

use chrono::{NaiveDate, Utc};
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 9;

/// `<prefix>_<unix millis>_<9 random base36 chars>`.
pub fn prefixed_id(prefix: &str) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..RANDOM_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), suffix)
}

/// Next id in a count-based sequence: `existing_len + 1`.
pub fn sequence_id(existing_len: usize) -> String {
    (existing_len + 1).to_string()
}

/// `<PREFIX>-<unix millis>-<0..=999>`.
pub fn reference_number(prefix: &str) -> String {
    let random = rand::rng().random_range(0..1000u32);
    format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), random)
}

/// Today's UTC date as `YYYY-MM-DD`, the format of every date field.
pub fn today() -> String {
    format_date(Utc::now().date_naive())
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
