//! Capture record data structure.

use serde_json::{Map, Value};

/// Sentinel written wherever a serialized field has no value.
const ABSENT: &str = "-";

/// Suffix appended to the backend's storage container base names.
const ARC_SUFFIX: &str = ".arc.gz";

/// Serialized field names, in CDX line order.
pub const FIELD_NAMES: [&str; 9] = [
    "urlkey",
    "timestamp",
    "original",
    "mime",
    "status",
    "digest",
    "length",
    "offset",
    "filename",
];

/// One observed snapshot of a URL at a point in time.
///
/// Absence is modeled as `None`; the `-` sentinel exists only in the
/// serialized forms ([`cdx_line`](Self::cdx_line) and
/// [`to_json`](Self::to_json)). `status` and `length` have no fields at
/// all: the backend never reports an HTTP status, and its length field
/// is unreliable, so both always serialize as the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRecord {
    /// Canonical urlkey, shared by every record of one lookup
    pub urlkey: String,

    /// Capture time, exactly 14 digits (`YYYYMMDDhhmmss`)
    pub timestamp: String,

    /// URL as the caller requested it, not as the backend echoed it
    pub original: String,

    /// Mime primary type, when reported
    pub mime_primary: Option<String>,

    /// Mime subtype, when reported
    pub mime_sub: Option<String>,

    /// Content digest, when reported
    pub digest: Option<String>,

    /// Offset into the storage container, when reported
    pub offset: Option<String>,

    /// Storage container base name, without the archival suffix
    pub filename: Option<String>,
}

impl CaptureRecord {
    /// Serialized value of one named field, `None` for unknown names.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "urlkey" => Some(self.urlkey.clone()),
            "timestamp" => Some(self.timestamp.clone()),
            "original" => Some(self.original.clone()),
            "mime" => Some(format!(
                "{}/{}",
                present(&self.mime_primary),
                present(&self.mime_sub)
            )),
            "status" | "length" => Some(ABSENT.to_string()),
            "digest" => Some(present(&self.digest).to_string()),
            "offset" => Some(present(&self.offset).to_string()),
            "filename" => Some(
                self.filename
                    .as_ref()
                    .map_or_else(|| ABSENT.to_string(), |name| format!("{name}{ARC_SUFFIX}")),
            ),
            _ => None,
        }
    }

    /// Canonical CDX text line: all fields joined by a single space.
    pub fn cdx_line(&self) -> String {
        FIELD_NAMES
            .iter()
            .filter_map(|name| self.field(name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// JSON object restricted to `fields`, or all fields when empty.
    ///
    /// Unknown field names are skipped rather than rejected.
    pub fn to_json(&self, fields: &[String]) -> Value {
        let mut object = Map::new();
        if fields.is_empty() {
            for name in FIELD_NAMES {
                if let Some(value) = self.field(name) {
                    object.insert(name.to_string(), Value::String(value));
                }
            }
        } else {
            for name in fields {
                if let Some(value) = self.field(name) {
                    object.insert(name.clone(), Value::String(value));
                }
            }
        }
        Value::Object(object)
    }
}

fn present(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(ABSENT)
}
