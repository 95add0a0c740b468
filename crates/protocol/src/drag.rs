//! The transfer payload attached to a card drag gesture.
//!
//! When a card is picked up, the source column serializes a small JSON
//! payload identifying the task, its origin bucket, and its display name.
//! The destination column parses it on drop. Payloads can be corrupted by
//! sources the board does not control, so parsing is deliberately tolerant:
//! malformed input yields `None`, never an error.

use serde::{Deserialize, Serialize};

use crate::board::Bucket;
use crate::task::TaskId;

/// The data attached to a drag gesture.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{Bucket, DragPayload};
///
/// let payload = DragPayload {
///     id: "ca36".to_string(),
///     from_status: Bucket::Pending,
///     task_name: "Design Homepage Mockup".to_string(),
/// };
///
/// let parsed = DragPayload::parse(&payload.to_json()).unwrap();
/// assert_eq!(parsed, payload);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    /// Identifier of the dragged task.
    pub id: TaskId,
    /// The bucket the drag started from.
    pub from_status: Bucket,
    /// Display name of the task, for drag affordance text.
    pub task_name: String,
}

impl DragPayload {
    /// Serializes the payload to its JSON wire form.
    pub fn to_json(&self) -> String {
        // Serializing this struct cannot fail; an empty string is returned
        // in the impossible case, which receivers simply ignore.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parses a transfer payload, tolerating malformed input.
    ///
    /// Returns `None` for anything that is not a well-formed payload. No
    /// error is surfaced: a corrupted drag is treated as if no drag
    /// happened.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::DragPayload;
    ///
    /// assert!(DragPayload::parse("not json").is_none());
    /// assert!(DragPayload::parse("{}").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips() {
        let payload = DragPayload {
            id: "42".to_string(),
            from_status: Bucket::InProgress,
            task_name: "Fix Login Bug".to_string(),
        };

        let json = payload.to_json();
        assert_eq!(DragPayload::parse(&json), Some(payload));
    }

    #[test]
    fn payload_uses_camel_case_fields() {
        let payload = DragPayload {
            id: "1".to_string(),
            from_status: Bucket::Pending,
            task_name: "T".to_string(),
        };

        let json = payload.to_json();
        assert!(json.contains(r#""fromStatus":"pending""#));
        assert!(json.contains(r#""taskName":"T""#));
    }

    #[test]
    fn malformed_payloads_parse_to_none() {
        for raw in ["", "not json", "42", "[]", "{}", r#"{"id":"1"}"#] {
            assert_eq!(DragPayload::parse(raw), None, "input: {raw:?}");
        }
    }

    #[test]
    fn unknown_bucket_in_payload_is_rejected() {
        let raw = r#"{"id":"1","fromStatus":"resurrected","taskName":"T"}"#;
        assert_eq!(DragPayload::parse(raw), None);
    }
}
