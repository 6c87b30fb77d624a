//! showcase-http - HTTP-backed projects API.

mod api;
mod client;
mod endpoints;

pub use api::HttpProjectsApi;
pub use endpoints::PROJECTS;
