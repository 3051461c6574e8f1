use std::error::Error;

/// Receives failures that are swallowed by [`ReactiveOptional::set_async`](crate::ReactiveOptional::set_async).
pub trait Report {
    fn report(&self, error: &dyn Error);
}

/// Writes failures to the `log` facade at error level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogReport;

impl Report for LogReport {
    fn report(&self, error: &dyn Error) {
        log::error!("failed to load optional value: {error}");
    }
}

impl<F> Report for F
where
    F: Fn(&dyn Error),
{
    fn report(&self, error: &dyn Error) {
        self(error)
    }
}
