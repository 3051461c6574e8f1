use std::future::Future;

use crate::Optional;

/// Return the present value, or await the future produced by `supplier`.
///
/// If the value is present this completes on the first poll and `supplier`
/// is never called. Otherwise `supplier` is called once and awaited.
pub async fn or_else_get_async<T, F, Fut>(optional: Optional<T>, supplier: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match optional.into_option() {
        Some(value) => value,
        None => supplier().await,
    }
}

/// Like [`or_else_get_async`] for suppliers that can fail.
/// A failed supplier is returned to the caller; there is no retry.
pub async fn try_or_else_get_async<T, E, F, Fut>(optional: Optional<T>, supplier: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match optional.into_option() {
        Some(value) => Ok(value),
        None => supplier().await,
    }
}
