#[cfg(test)]
mod tests {
    use crate::tools::batch::batch;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_batch_keeps_input_order() {
        // Later items finish first; results must still follow the input.
        let results = batch(vec![30u64, 20, 10], 3, |n| async move {
            tokio::time::sleep(Duration::from_millis(n)).await;
            n
        })
        .await;
        assert_eq!(results, vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn test_batch_empty() {
        let items: Vec<i32> = vec![];
        let results = batch(items, 5, |n| async move { n }).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_batch_zero_concurrency_still_runs() {
        let results = batch(vec![1, 2], 0, |n| async move { n * 2 }).await;
        assert_eq!(results, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_batch_concurrency_limit() {
        let current = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let (cur, top) = (Arc::clone(&current), Arc::clone(&peak));
        let results = batch((0..8).collect::<Vec<_>>(), 2, move |_n| {
            let (cur, top) = (Arc::clone(&cur), Arc::clone(&top));
            async move {
                let now = cur.fetch_add(1, Ordering::SeqCst) + 1;
                top.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                cur.fetch_sub(1, Ordering::SeqCst);
                "done"
            }
        })
        .await;

        assert_eq!(results.len(), 8);
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }
}
