//! Project records and their normalization.
//!
//! Records arrive as [`RawRecord`]s with no fixed schema. Each field value
//! is decoded into an [`AttrValue`] (unwrapping typed envelopes), then
//! [`RawRecord::normalize`] resolves aliases into a [`DisplayRecord`].

mod attr;
mod display;
mod raw;

pub use attr::{AttrValue, is_truthy};
pub use display::{DisplayRecord, first_truthy};
pub use raw::RawRecord;
