//! Pages of the project collection.

use serde_json::Value;

use crate::record::{AttrValue, DisplayRecord, RawRecord, is_truthy};
use crate::response::first_present;
use crate::types::Cursor;

/// Keys that may hold the item collection, highest priority first.
const ITEM_KEYS: &[&str] = &["items", "projects", "data", "Items"];

/// Keys that may hold the continuation cursor, highest priority first.
const CURSOR_KEYS: &[&str] = &["next_cursor", "nextCursor", "cursor"];

/// One page of the project collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// The records in this page, as sent.
    pub items: Vec<RawRecord>,

    /// Cursor for the next page, if more records exist.
    pub cursor: Option<Cursor>,
}

impl Page {
    /// Interpret a list response body.
    ///
    /// Items come from the first present key among `items`, `projects`,
    /// `data` and `Items`, or from the body itself when it is an array.
    /// The cursor comes from `next_cursor`, `nextCursor` or `cursor`. A
    /// body matching none of these is an empty, final page.
    pub fn from_body(body: &Value) -> Self {
        let items = match (first_present(body, ITEM_KEYS), body) {
            (Some(Value::Array(items)), _) | (None, Value::Array(items)) => items
                .iter()
                .cloned()
                .map(RawRecord::from_value)
                .collect(),
            _ => Vec::new(),
        };

        let cursor = first_present(body, CURSOR_KEYS)
            .filter(|value| is_truthy(value))
            .and_then(|value| Cursor::new(AttrValue::Raw(value.clone()).to_text()));

        Self { items, cursor }
    }

    /// Returns true when the server reported more pages.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Normalize every record in the page.
    pub fn normalized(&self) -> Vec<DisplayRecord> {
        self.items.iter().map(RawRecord::normalize).collect()
    }
}
