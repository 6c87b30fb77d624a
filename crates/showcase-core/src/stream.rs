//! Walking the whole collection as a stream of pages.

use async_stream::try_stream;
use futures_core::Stream;
use tracing::warn;

use crate::error::FetchError;
use crate::page::Page;
use crate::traits::ProjectsApi;
use crate::types::Cursor;

/// Stream every page of the collection, starting from the first.
pub fn pages<A>(api: &A) -> impl Stream<Item = Result<Page, FetchError>> + '_
where
    A: ProjectsApi + ?Sized,
{
    pages_from(api, None)
}

/// Stream pages starting after `start` (or from the first page).
///
/// The stream ends after the first page without a cursor, after the
/// first error, or if the server hands back the cursor it was just given.
pub fn pages_from<A>(
    api: &A,
    start: Option<Cursor>,
) -> impl Stream<Item = Result<Page, FetchError>> + '_
where
    A: ProjectsApi + ?Sized,
{
    try_stream! {
        let mut cursor = start;
        loop {
            let page = api.fetch_page(cursor.as_ref()).await?;
            let next = page.cursor.clone();
            yield page;

            match next {
                Some(next) if Some(&next) == cursor.as_ref() => {
                    warn!(cursor = %next, "Server repeated its cursor, stopping");
                    break;
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
    }
}
