//! Core traits for talking to the showcase API.

mod api;

pub use api::ProjectsApi;
