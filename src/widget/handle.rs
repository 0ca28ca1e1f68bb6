//! Handle to a running refresh task.

use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};

/// Owner of a spawned widget refresh task.
///
/// Call [`cancel`](Self::cancel) for an orderly stop. Dropping the handle
/// without cancelling aborts the task.
#[derive(Debug)]
pub struct WidgetHandle {
    id: u32,
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl WidgetHandle {
    pub(super) const fn new(id: u32, cancel: oneshot::Sender<()>, task: JoinHandle<()>) -> Self {
        Self {
            id,
            cancel: Some(cancel),
            task: Some(task),
        }
    }

    /// Returns the id of the widget driven by this task.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns true if the task has already stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stops the refresh task and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns the [`JoinError`] if the task panicked.
    pub async fn cancel(mut self) -> Result<(), JoinError> {
        if let Some(cancel) = self.cancel.take() {
            // The task may already be gone; nothing to signal then.
            let _ = cancel.send(());
        }

        match self.task.take() {
            Some(task) => task.await,
            None => Ok(()),
        }
    }
}

impl Drop for WidgetHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
