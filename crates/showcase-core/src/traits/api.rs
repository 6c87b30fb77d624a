//! Projects API trait.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::page::Page;
use crate::submission::{SubmitReceipt, Submission};
use crate::types::Cursor;

/// A backend serving the project collection.
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// Fetch one page of projects.
    ///
    /// `None` requests the first page; otherwise the page following
    /// `cursor`.
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<Page, FetchError>;

    /// Submit a new project.
    async fn submit(&self, submission: &Submission) -> Result<SubmitReceipt, FetchError>;
}

#[async_trait]
impl<T: ProjectsApi + ?Sized> ProjectsApi for &T {
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<Page, FetchError> {
        (**self).fetch_page(cursor).await
    }

    async fn submit(&self, submission: &Submission) -> Result<SubmitReceipt, FetchError> {
        (**self).submit(submission).await
    }
}
