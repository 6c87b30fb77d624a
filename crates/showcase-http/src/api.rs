//! HTTP-backed projects API.

use async_trait::async_trait;
use tracing::{debug, instrument};

use showcase_core::{
    ApiUrl, Cursor, FetchError, PAGE_SIZE, Page, ProjectsApi, SubmitReceipt, Submission,
};

use crate::client::{HttpClient, status_code, status_text};
use crate::endpoints::{ListProjectsQuery, PROJECTS};

/// The showcase API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProjectsApi {
    client: HttpClient,
}

impl HttpProjectsApi {
    /// Create an API client for the given deployment.
    pub fn new(api: ApiUrl) -> Self {
        Self {
            client: HttpClient::new(api),
        }
    }

    /// Returns the API base URL.
    pub fn url(&self) -> &ApiUrl {
        self.client.api()
    }
}

impl Default for HttpProjectsApi {
    fn default() -> Self {
        Self::new(ApiUrl::default())
    }
}

#[async_trait]
impl ProjectsApi for HttpProjectsApi {
    #[instrument(skip(self), fields(api = %self.url()))]
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<Page, FetchError> {
        let query = ListProjectsQuery {
            limit: PAGE_SIZE,
            cursor: cursor.map(Cursor::as_str),
        };

        let body = self.client.get(PROJECTS, &query).await?.into_body(status_text)?;
        let page = Page::from_body(&body);

        debug!(items = page.items.len(), has_more = page.has_more(), "Listed projects");
        Ok(page)
    }

    #[instrument(skip(self, submission), fields(api = %self.url()))]
    async fn submit(&self, submission: &Submission) -> Result<SubmitReceipt, FetchError> {
        debug!(repo_url = %submission.repo_url, "Submitting project");

        let body = self
            .client
            .post(PROJECTS, submission)
            .await?
            .into_body(status_code)?;

        Ok(SubmitReceipt::from_body(&body))
    }
}
