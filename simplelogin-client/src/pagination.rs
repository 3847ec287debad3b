//! Page-by-page aggregation for list endpoints.
//!
//! Pages are zero-indexed `page_id`s. Aggregation stops at the first empty
//! page; any failing page aborts the whole call and the items gathered so far
//! are dropped, so a returned list is always complete.

use std::future::Future;

use crate::error::Result;

/// Fetch pages `0, 1, 2, ...` until one comes back empty, concatenating items
/// in page order.
///
/// There is no duplicate detection: termination is left to the server.
pub async fn collect_all_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut items = Vec::new();
    let mut page_id = 0u32;

    loop {
        let page = fetch_page(page_id).await?;
        if page.is_empty() {
            break;
        }
        log::debug!("Page {page_id}: {} items", page.len());
        items.extend(page);
        page_id += 1;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn concatenates_until_empty_page() {
        let requested = RefCell::new(Vec::new());
        let items = collect_all_pages(|page| {
            requested.borrow_mut().push(page);
            async move {
                Ok(match page {
                    0 => vec!["a", "b"],
                    1 => vec!["c", "d"],
                    _ => vec![],
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a", "b", "c", "d"]);
        assert_eq!(*requested.borrow(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn first_page_empty() {
        let items: Vec<u32> = collect_all_pages(|_| async { Ok(vec![]) }).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn failing_page_discards_partial_results() {
        let result: Result<Vec<u32>> = collect_all_pages(|page| async move {
            if page == 0 {
                Ok(vec![1, 2])
            } else {
                Err(Error::Api {
                    status_code: 500,
                    message: None,
                    body: "boom".into(),
                })
            }
        })
        .await;

        assert!(matches!(result, Err(Error::Api { status_code: 500, .. })));
    }
}
