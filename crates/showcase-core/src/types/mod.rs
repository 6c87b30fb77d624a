//! Core showcase types.
//!
//! These types enforce their invariants at construction time.

mod api_url;
mod cursor;

pub use api_url::ApiUrl;
pub use cursor::Cursor;
