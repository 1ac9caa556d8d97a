//! Record model representing one address entry parsed from a memo document.

use serde::{Deserialize, Serialize};

/// An address record parsed out of a memo document.
///
/// Records are derived fresh from raw text on every engine invocation and
/// never mutated; updating a note means re-deriving records from the updated
/// text. A block with an address but no note lines never becomes a record —
/// an address with no annotation is not search-worthy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// First non-blank line of the block. Always non-empty.
    pub address: String,

    /// Remaining lines of the block, newline-joined. May be empty.
    pub notes: String,

    /// Lowercase romanized initials of the logographic subset of `address`.
    /// Empty when the address has no logographic characters or no
    /// romanization backend is configured.
    pub initials_index: String,

    /// Name of the document this record came from. Attached by the caller
    /// (the engine facade), not by segmentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<String>,
}

impl Record {
    /// Create a record with no source tag.
    pub fn new(address: String, notes: String, initials_index: String) -> Self {
        Self {
            address,
            notes,
            initials_index,
            source_tag: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_has_no_source_tag() {
        let record = Record::new(
            "北京市朝阳区幸福路1号".to_string(),
            "张三 收件人".to_string(),
            "bjscyqxfl".to_string(),
        );
        assert_eq!(record.address, "北京市朝阳区幸福路1号");
        assert_eq!(record.source_tag, None);
    }

    #[test]
    fn test_record_serialization_skips_missing_source_tag() {
        let record = Record::new("地址".to_string(), "note".to_string(), "dz".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("source_tag"));

        let mut tagged = record;
        tagged.source_tag = Some("memo1".to_string());
        let json = serde_json::to_string(&tagged).unwrap();
        assert!(json.contains("\"source_tag\":\"memo1\""));
    }

    #[test]
    fn test_record_deserialization_defaults_source_tag() {
        let json = r#"{"address":"地址","notes":"n","initials_index":"dz"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.source_tag, None);
    }
}
