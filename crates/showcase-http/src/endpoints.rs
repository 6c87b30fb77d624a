//! Endpoint definitions and request types.

use serde::Serialize;

/// Path of the project collection, relative to the API base.
pub const PROJECTS: &str = "projects";

/// Query parameters for listing projects.
///
/// `cursor` is left out entirely for the first page.
#[derive(Debug, Serialize)]
pub(crate) struct ListProjectsQuery<'a> {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}
