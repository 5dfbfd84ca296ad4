//! Best-effort reads that degrade to a fallback value.

use std::future::Future;

/// Awaits `operation`, substituting `fallback()` on error.
///
/// `on_failure` sees the error before it is discarded; callers use it to log
/// with their own context. The error never reaches the caller.
pub async fn resilient<T, E, Fut, F, L>(operation: Fut, fallback: F, on_failure: L) -> T
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> T,
    L: FnOnce(&E),
{
    match operation.await {
        Ok(value) => value,
        Err(error) => {
            on_failure(&error);
            fallback()
        }
    }
}
