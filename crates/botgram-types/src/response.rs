//! Extra information attached to API error responses.

use serde::{Deserialize, Serialize};

/// Conditions under which a request can be repeated, attached to some
/// error envelopes. Passed through to the caller untouched; the client
/// itself applies no retry policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this
    /// identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before the request can be repeated, after
    /// exceeding flood control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}
