use std::error::Error;
use std::fmt::{self, Debug};
use std::future::Future;

use super::{Cell, OptionalRef};
use crate::{LogReport, Optional, Report};

/// Owns a [`Cell`] and exposes it as an [`Optional`].
///
/// The cell is available through [`cell`](Self::cell) and
/// [`cell_mut`](Self::cell_mut) for direct mutation. Writing to the cell that
/// way skips the `Optional` view entirely.
///
/// Failures passed to [`set_async`](Self::set_async) go to the reporter `R`
/// and leave the container empty.
pub struct ReactiveOptional<C, R = LogReport> {
    cell: C,
    reporter: R,
}

impl<C: Cell> ReactiveOptional<C, LogReport> {
    pub fn new(initial: Option<C::Item>) -> Self {
        Self::with_reporter(initial, LogReport)
    }

    pub fn empty() -> Self {
        Self::new(None)
    }
}

impl<C: Cell, R: Report> ReactiveOptional<C, R> {
    pub fn with_reporter(initial: Option<C::Item>, reporter: R) -> Self {
        Self {
            cell: C::new(initial),
            reporter,
        }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn cell_mut(&mut self) -> &mut C {
        &mut self.cell
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Read / write view over the owned cell.
    pub fn view(&mut self) -> OptionalRef<'_, C> {
        OptionalRef::new(&mut self.cell)
    }

    pub fn get(&self) -> Optional<&C::Item> {
        Optional::of(self.cell.get())
    }

    pub fn set(&mut self, value: Optional<C::Item>) {
        self.cell.set(value.into_option());
    }

    /// Wait for `pending` and store the outcome.
    ///
    /// * `Ok(Some(value))` stores the value.
    /// * `Ok(None)` empties the cell.
    /// * `Err(error)` reports the error and empties the cell.
    ///
    /// Any error that converts into a boxed error is accepted, which covers
    /// `anyhow::Error`, `Box<dyn Error + Send + Sync>` and plain strings as
    /// well as every `Error + Send + Sync` type.
    /// The error is never returned to the caller.
    /// The container is borrowed for the whole wait, so two loads can not
    /// overlap on the same container. Dropping the future before it completes
    /// leaves the cell as it was.
    pub async fn set_async<F, E>(&mut self, pending: F)
    where
        F: Future<Output = Result<Option<C::Item>, E>>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let value = match pending.await {
            Ok(value) => value,
            Err(error) => {
                let error: Box<dyn Error + Send + Sync> = error.into();
                self.reporter.report(&*error);
                None
            }
        };

        self.cell.set(value);
    }

    /// Give up the container and keep the cell.
    pub fn into_inner(self) -> C {
        self.cell
    }
}

impl<C, R> Debug for ReactiveOptional<C, R>
where
    C: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveOptional").field("cell", &self.cell).finish()
    }
}
