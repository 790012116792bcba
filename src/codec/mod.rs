//! JSON list codec for stored values and seed payloads.
//!
//! Every stored value is a plain JSON array of records, UTF-8 encoded:
//!
//! ```text
//! [{"id":"1","name":"A"},{"id":"2","name":"B"}]
//! ```
//!
//! There is no envelope or version header, so a stored value can be read and
//! written by any other client of the same store.
//!
//! Two decoders exist because stored values and seed payloads differ at the
//! edges:
//!
//! - **Stored value:** must be a JSON array. Anything else is undecodable and
//!   the load falls through to the seed.
//! - **Seed payload:** an empty body or JSON `null` means "no records"; any
//!   other non-array shape is malformed.
//!
//! # Example
//!
//! ```rust
//! use offline_lists::codec::{decode_list, encode_list};
//! use offline_lists::Record;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Tag {
//!     id: String,
//! }
//!
//! impl Record for Tag {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! # fn main() -> offline_lists::Result<()> {
//! let tags = vec![Tag { id: "1".to_string() }];
//! let bytes = encode_list(&tags)?;
//! assert_eq!(bytes, br#"[{"id":"1"}]"#);
//!
//! let decoded: Vec<Tag> = decode_list(&bytes)?;
//! assert_eq!(decoded, tags);
//! # Ok(())
//! # }
//! ```

use crate::entity::Record;
use crate::error::{Error, Result};
use serde::Serialize;

/// Stored text for an empty collection.
pub const EMPTY_LIST: &[u8] = b"[]";

/// Serialize a list for storage.
///
/// # Errors
///
/// Returns `Error::SerializationError` if a record cannot be represented as
/// JSON (e.g. a map with non-string keys).
pub fn encode_list<T: Serialize>(list: &[T]) -> Result<Vec<u8>> {
    serde_json::to_vec(list).map_err(|e| {
        error!("List serialization failed: {}", e);
        Error::SerializationError(e.to_string())
    })
}

/// Decode a stored value into a typed list.
///
/// Every record is run through [`Record::validate`].
///
/// # Errors
///
/// - `Error::DeserializationError`: not JSON, not an array, or a record has
///   the wrong shape
/// - `Error::ValidationError`: a record failed validation
pub fn decode_list<T: Record>(bytes: &[u8]) -> Result<Vec<T>> {
    let list: Vec<T> = serde_json::from_slice(bytes)
        .map_err(|e| Error::DeserializationError(e.to_string()))?;
    validate_all(&list)?;
    Ok(list)
}

/// Decode a seed payload into a typed list.
///
/// An empty (or whitespace-only) body and JSON `null` both yield an empty
/// list.
///
/// # Errors
///
/// Same as [`decode_list`] for any other payload.
pub fn decode_seed<T: Record>(bytes: &[u8]) -> Result<Vec<T>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let list: Option<Vec<T>> = serde_json::from_slice(bytes)
        .map_err(|e| Error::DeserializationError(format!("malformed seed payload: {}", e)))?;
    let list = list.unwrap_or_default();
    validate_all(&list)?;
    Ok(list)
}

fn validate_all<T: Record>(list: &[T]) -> Result<()> {
    for record in list {
        record.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
    struct TestRecord {
        id: String,
        name: String,
    }

    impl Record for TestRecord {
        fn id(&self) -> &str {
            &self.id
        }

        fn validate(&self) -> Result<()> {
            if self.name == "invalid" {
                return Err(Error::ValidationError("name is invalid".to_string()));
            }
            Ok(())
        }
    }

    fn record(id: &str, name: &str) -> TestRecord {
        TestRecord {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_roundtrip() {
        let list = vec![record("1", "A"), record("2", "B")];

        let bytes = encode_list(&list).unwrap();
        let decoded: Vec<TestRecord> = decode_list(&bytes).unwrap();

        assert_eq!(list, decoded);
    }

    #[test]
    fn test_encode_empty_list() {
        let list: Vec<TestRecord> = Vec::new();
        assert_eq!(encode_list(&list).unwrap(), EMPTY_LIST);
    }

    #[test]
    fn test_stored_value_preserves_order() {
        let list = vec![record("3", "C"), record("1", "A"), record("2", "B")];
        let decoded: Vec<TestRecord> = decode_list(&encode_list(&list).unwrap()).unwrap();
        let ids: Vec<&str> = decoded.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_stored_corrupt_text_rejected() {
        let result: Result<Vec<TestRecord>> = decode_list(b"[{\"id\":\"1\",");
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }

    #[test]
    fn test_stored_non_array_rejected() {
        let result: Result<Vec<TestRecord>> = decode_list(b"{\"id\":\"1\",\"name\":\"A\"}");
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }

    #[test]
    fn test_stored_null_rejected() {
        let result: Result<Vec<TestRecord>> = decode_list(b"null");
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }

    #[test]
    fn test_stored_wrong_shape_rejected() {
        let result: Result<Vec<TestRecord>> = decode_list(b"[{\"id\":1}]");
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }

    #[test]
    fn test_stored_invalid_record_rejected() {
        let bytes = encode_list(&[record("1", "invalid")]).unwrap();
        let result: Result<Vec<TestRecord>> = decode_list(&bytes);
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn test_seed_empty_body_is_empty_list() {
        let list: Vec<TestRecord> = decode_seed(b"").unwrap();
        assert!(list.is_empty());

        let list: Vec<TestRecord> = decode_seed(b"  \n").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_seed_null_is_empty_list() {
        let list: Vec<TestRecord> = decode_seed(b"null").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_seed_array() {
        let list: Vec<TestRecord> = decode_seed(b"[{\"id\":\"x\",\"name\":\"X\"}]").unwrap();
        assert_eq!(list, vec![record("x", "X")]);
    }

    #[test]
    fn test_seed_object_rejected() {
        let result: Result<Vec<TestRecord>> = decode_seed(b"{\"items\":[]}");
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let list: Vec<TestRecord> =
            decode_list(b"[{\"id\":\"1\",\"name\":\"A\",\"extra\":true}]").unwrap();
        assert_eq!(list, vec![record("1", "A")]);
    }
}
