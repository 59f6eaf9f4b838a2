use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;
use tracing::{debug, warn};

/// Result of a best effort batch. `failures` keeps the index of the request
/// that failed so callers can tell which input it was.
#[derive(Debug)]
pub struct BatchOutcome<T, E> {
    pub items: Vec<T>,
    pub failures: Vec<(usize, E)>,
}

impl<T, E> BatchOutcome<T, E> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every future concurrently and keep what succeeded, in input order.
/// `Ok(None)` (i.g., a 404) is neither an item nor a failure.
pub async fn fetch_all_best_effort<T, E, F>(
    label: &str,
    futures: impl IntoIterator<Item = F>,
) -> BatchOutcome<T, E>
where
    F: Future<Output = Result<Option<T>, E>>,
    E: Display,
{
    let results = join_all(futures).await;

    let mut items = Vec::with_capacity(results.len());
    let mut failures = Vec::new();

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(e) => {
                warn!("{} batch: request #{} failed: {}", label, index, e);
                failures.push((index, e));
            }
        }
    }

    debug!(
        "{} batch completed: {} found, {} failed",
        label,
        items.len(),
        failures.len()
    );

    BatchOutcome { items, failures }
}
