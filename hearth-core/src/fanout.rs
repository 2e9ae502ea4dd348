use futures_util::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;

use crate::CoreResult;

/// Run `f` over `items`, keeping at most `concurrency` calls in flight.
///
/// Results come back in input order. With `concurrency <= 1` the calls are
/// strictly sequential and the first error stops the remaining ones.
pub async fn fan_out<T, R, F, Fut>(items: Vec<T>, concurrency: usize, f: F) -> CoreResult<Vec<R>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = CoreResult<R>>,
{
    if concurrency <= 1 {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(f(item).await?);
        }
        return Ok(out);
    }

    stream::iter(items)
        .map(f)
        .buffered(concurrency)
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_parallel_keeps_input_order() {
        let items = vec![30u64, 5, 20, 1];
        let out = fan_out(items, 4, |delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(delay * 10)
        })
        .await
        .unwrap();
        assert_eq!(out, vec![300, 50, 200, 10]);
    }

    #[tokio::test]
    async fn test_sequential_stops_at_first_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let result: CoreResult<Vec<i32>> = fan_out(vec![1, 2, 3], 1, move |n| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                if n == 2 {
                    Err(CoreError::NotFound(format!("item {}", n)))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_bounded_in_flight() {
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let (a, p) = (active.clone(), peak.clone());
        let out = fan_out((0..10).collect::<Vec<i32>>(), 3, move |n| {
            let (a, p) = (a.clone(), p.clone());
            async move {
                let now = a.fetch_add(1, Ordering::SeqCst) + 1;
                p.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                a.fetch_sub(1, Ordering::SeqCst);
                Ok(n)
            }
        })
        .await
        .unwrap();

        assert_eq!(out, (0..10).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }
}
