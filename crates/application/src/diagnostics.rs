use tracing::warn;

/// Command result paired with the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome<T> {
    /// Records to render.
    pub records: T,
    /// Non-fatal diagnostics, in the order they were raised.
    pub warnings: Vec<String>,
}

impl<T> CommandOutcome<T> {
    /// Wraps records without warnings.
    #[must_use]
    pub fn new(records: T) -> Self {
        Self {
            records,
            warnings: Vec::new(),
        }
    }

    /// Records a warning and mirrors it to the log.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.warnings.push(message);
    }
}
