use std::time::Instant;

use tracing::debug;

use crate::errors::InkcheckError;

/// Run CPU-bound comparison work on the blocking pool. Matching-block
/// search is quadratic in the worst case and must not stall async workers.
pub async fn run_blocking<F, T>(task: &'static str, f: F) -> Result<T, InkcheckError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let start = Instant::now();
    let out = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| InkcheckError::Internal(format!("{} task failed: {}", task, e)))?;
    debug!(task, elapsed_ms = start.elapsed().as_millis() as u64, "Blocking task finished");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_result_is_returned() {
        let total = run_blocking("sum", || (1..=10).sum::<u32>()).await.unwrap();
        assert_eq!(total, 55);
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let err = run_blocking("boom", || -> u32 { panic!("boom") }).await.unwrap_err();
        assert!(matches!(err, InkcheckError::Internal(_)));
    }
}
