//! showcase-core - Core types and paging for the project showcase client.
//!
//! The showcase API returns loosely shaped project records: fields may be
//! wrapped in typed attribute envelopes (`{"S": ...}`, `{"N": ...}`,
//! `{"BOOL": ...}`) and the same concept may appear under several names.
//! This crate turns those records into a fixed [`DisplayRecord`] and keeps
//! track of the continuation cursor while paging through the collection.
//!
//! # Example
//!
//! ```
//! use showcase_core::Page;
//! use serde_json::json;
//!
//! let page = Page::from_body(&json!({
//!     "items": [{ "url": {"S": "https://github.com/a/b"}, "title": "b" }],
//!     "next_cursor": "abc"
//! }));
//!
//! assert!(page.has_more());
//! let record = page.items[0].normalize();
//! assert_eq!(record.repo_url, "https://github.com/a/b");
//! ```

pub mod error;
pub mod feed;
pub mod format;
pub mod page;
pub mod record;
pub mod response;
pub mod stream;
pub mod submission;
pub mod traits;
pub mod types;

pub use error::{Error, FetchError, InvalidInputError};
pub use feed::{Batch, Feed, Submitted};
pub use page::Page;
pub use record::{AttrValue, DisplayRecord, RawRecord};
pub use stream::{pages, pages_from};
pub use submission::{SubmitReceipt, Submission};
pub use traits::ProjectsApi;
pub use types::{ApiUrl, Cursor};

/// Base URL of the production showcase API.
pub const DEFAULT_API_BASE: &str = "https://o4hzlr5rqd.execute-api.us-east-2.amazonaws.com/prod";

/// Number of records requested per page.
pub const PAGE_SIZE: u32 = 12;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
