//! Batch Tools

mod tests;

use futures_util::stream::{self, StreamExt};

/// Run async operations with bounded concurrency, returning results in
/// input order. A `concurrency` of zero is treated as one.
pub async fn batch<T, F, Fut, R>(items: Vec<T>, concurrency: usize, operation: F) -> Vec<R>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = R> + Send + 'static,
    R: Send + 'static,
{
    stream::iter(items)
        .map(operation)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
