//! Canonical display records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{AttrValue, RawRecord};

/// Aliases for each canonical field, highest priority first.
const REPO_URL_KEYS: &[&str] = &["repo_url", "url", "link"];
const TITLE_KEYS: &[&str] = &["title", "project_title", "repo"];
const SUBMITTER_KEYS: &[&str] = &["submitter", "author", "owner"];
const DESCRIPTION_KEYS: &[&str] = &["description", "details"];
const CREATED_AT_KEYS: &[&str] = &["createdAt", "created_at", "ts", "timestamp"];

const OWNER_KEY: &str = "owner";
const REPO_KEY: &str = "repo";

/// Link target used when a record carries no URL.
pub const INERT_LINK: &str = "#";

/// Title used when a record carries none.
pub const UNTITLED: &str = "(untitled)";

/// A project record in the fixed shape the rendering layer consumes.
///
/// Every field is always populated; `repo_url` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub repo_url: String,
    pub title: String,
    pub submitter: String,
    pub description: String,
    /// Creation time in unix seconds, 0 when unknown.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// `owner/repo`, set only when both unwrapped values are truthy.
    #[serde(skip)]
    pub owner_repo: Option<String>,
}

impl DisplayRecord {
    /// Normalize a raw record. Never fails.
    ///
    /// Each canonical field takes the first truthy value among its aliases.
    /// Empty strings, `0` and `false` count as missing and fall through to
    /// the next alias, so a genuine creation time of `0` is reported as
    /// unknown.
    pub fn from_raw(raw: &RawRecord) -> Self {
        let fields: HashMap<&str, AttrValue> = raw
            .iter()
            .map(|(key, value)| (key.as_str(), AttrValue::decode(value)))
            .collect();

        let text = |keys: &[&str], default: &str| {
            first_truthy(&fields, keys).map_or_else(|| default.to_string(), AttrValue::to_text)
        };

        let created_at = first_truthy(&fields, CREATED_AT_KEYS)
            .map(AttrValue::to_number)
            .filter(|n| n.is_finite())
            .map_or(0, |n| n.trunc() as i64);

        Self {
            repo_url: text(REPO_URL_KEYS, INERT_LINK),
            title: text(TITLE_KEYS, UNTITLED),
            submitter: text(SUBMITTER_KEYS, ""),
            description: text(DESCRIPTION_KEYS, ""),
            created_at,
            owner: present(&fields, OWNER_KEY),
            repo: present(&fields, REPO_KEY),
            owner_repo: owner_repo(&fields),
        }
    }

    /// Returns true when the record links somewhere real.
    pub fn has_link(&self) -> bool {
        self.repo_url != INERT_LINK
    }
}

impl From<&RawRecord> for DisplayRecord {
    fn from(raw: &RawRecord) -> Self {
        Self::from_raw(raw)
    }
}

/// Returns the first truthy value among `keys`, in order.
pub fn first_truthy<'a>(
    fields: &'a HashMap<&str, AttrValue>,
    keys: &[&'a str],
) -> Option<&'a AttrValue> {
    keys.iter()
        .filter_map(|key| fields.get(key))
        .find(|value| value.is_truthy())
}

/// The unwrapped field as text, absent only when missing or null.
fn present(fields: &HashMap<&str, AttrValue>, key: &str) -> Option<String> {
    match fields.get(key)? {
        AttrValue::Raw(serde_json::Value::Null) => None,
        value => Some(value.to_text()),
    }
}

fn owner_repo(fields: &HashMap<&str, AttrValue>) -> Option<String> {
    let owner = fields.get(OWNER_KEY).filter(|v| v.is_truthy())?;
    let repo = fields.get(REPO_KEY).filter(|v| v.is_truthy())?;
    Some(format!("{}/{}", owner.to_text(), repo.to_text()))
}
