//! Project submissions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::AttrValue;

/// A new project to add to the showcase.
///
/// All fields are trimmed on construction; nothing else is validated
/// client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub repo_url: String,
    pub title: String,
    pub submitter: String,
    pub description: String,
}

impl Submission {
    pub fn new(
        repo_url: impl AsRef<str>,
        title: impl AsRef<str>,
        submitter: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Self {
        Self {
            repo_url: repo_url.as_ref().trim().to_string(),
            title: title.as_ref().trim().to_string(),
            submitter: submitter.as_ref().trim().to_string(),
            description: description.as_ref().trim().to_string(),
        }
    }
}

/// What the server reported back about an accepted submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Identifier assigned by the server.
    pub id: Option<String>,
    /// Creation time in unix seconds.
    pub created_at: Option<i64>,
}

impl SubmitReceipt {
    /// Read a receipt from a create response body, ignoring anything missing.
    pub fn from_body(body: &Value) -> Self {
        let id = body
            .get("id")
            .filter(|v| !v.is_null())
            .map(|v| AttrValue::decode(v).to_text())
            .filter(|id| !id.is_empty());

        let created_at = body
            .get("createdAt")
            .map(|v| AttrValue::decode(v).to_number())
            .filter(|n| n.is_finite() && *n != 0.0)
            .map(|n| n.trunc() as i64);

        Self { id, created_at }
    }
}
