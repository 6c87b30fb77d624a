//! Stateful paging over the project collection.
//!
//! A [`Feed`] remembers where the last page ended and refuses to start a
//! second load while one is still in flight, so a continuation cursor is
//! never used twice or overwritten out of order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, instrument};

use crate::error::FetchError;
use crate::page::Page;
use crate::record::DisplayRecord;
use crate::submission::{SubmitReceipt, Submission};
use crate::traits::ProjectsApi;
use crate::types::Cursor;

/// Records produced by one successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Normalized records, in server order.
    pub records: Vec<DisplayRecord>,
    /// True when these records extend the previous ones rather than
    /// replacing them.
    pub append: bool,
    /// True when another page can be loaded.
    pub has_more: bool,
}

/// Outcome of a submission made through a [`Feed`].
#[derive(Debug)]
pub struct Submitted {
    /// What the server reported about the new project.
    pub receipt: SubmitReceipt,
    /// The reload that follows an accepted submission.
    pub refreshed: Result<Option<Batch>, FetchError>,
}

/// A paging client over a [`ProjectsApi`].
///
/// Holds the continuation cursor and a loading flag. Methods take `&self`
/// so a feed can be shared between tasks; overlapping loads are skipped
/// rather than queued.
#[derive(Debug)]
pub struct Feed<A> {
    api: A,
    cursor: Mutex<Option<Cursor>>,
    loading: AtomicBool,
}

impl<A: ProjectsApi> Feed<A> {
    /// Create a feed that has not loaded anything yet.
    pub fn new(api: A) -> Self {
        Self {
            api,
            cursor: Mutex::new(None),
            loading: AtomicBool::new(false),
        }
    }

    /// Returns the underlying API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the cursor the next [`load_more`](Self::load_more) will use.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns true when another page can be loaded.
    pub fn has_more(&self) -> bool {
        self.cursor().is_some()
    }

    /// Returns true while a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Reload from the first page.
    ///
    /// Returns `Ok(None)` without sending anything if another load is in
    /// flight. The cursor is cleared before the request, so a failed
    /// refresh leaves nothing further to load.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Option<Batch>, FetchError> {
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            debug!("Refresh skipped, a load is already in flight");
            return Ok(None);
        };

        self.set_cursor(None);
        let page = self.api.fetch_page(None).await?;

        Ok(Some(self.accept(page, false)))
    }

    /// Load the page after the current cursor.
    ///
    /// Returns `Ok(None)` without sending anything if there is no cursor or
    /// another load is in flight. A failed load keeps the cursor so it can
    /// be retried.
    #[instrument(skip(self))]
    pub async fn load_more(&self) -> Result<Option<Batch>, FetchError> {
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            debug!("Load more skipped, a load is already in flight");
            return Ok(None);
        };

        let Some(cursor) = self.cursor() else {
            debug!("Load more skipped, no further pages");
            return Ok(None);
        };

        let page = self.api.fetch_page(Some(&cursor)).await?;

        Ok(Some(self.accept(page, true)))
    }

    /// Submit a project, then reload from the first page.
    ///
    /// Submitting is not gated by the loading flag; the reload that follows
    /// is, and is skipped if a load is already running.
    #[instrument(skip(self, submission), fields(repo_url = %submission.repo_url))]
    pub async fn submit(&self, submission: &Submission) -> Result<Submitted, FetchError> {
        let receipt = self.api.submit(submission).await?;
        info!(id = ?receipt.id, "Submission accepted");

        let refreshed = self.refresh().await;
        Ok(Submitted { receipt, refreshed })
    }

    fn accept(&self, page: Page, append: bool) -> Batch {
        debug!(
            items = page.items.len(),
            has_more = page.has_more(),
            append,
            "Page loaded"
        );

        let records = page.normalized();
        let has_more = page.has_more();
        self.set_cursor(page.cursor);

        Batch {
            records,
            append,
            has_more,
        }
    }

    fn set_cursor(&self, cursor: Option<Cursor>) {
        *self.cursor.lock().unwrap_or_else(PoisonError::into_inner) = cursor;
    }
}

/// Holds the loading flag for the lifetime of one request.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
