//! Widgets: a selector bound to a display sink.
//!
//! This module provides:
//! - [`WidgetFactory`]: creates widgets and owns the instance counter
//! - [`Widget`]: refreshes once, or runs as a periodic task
//! - [`SelectionStream`]: the interval-driven stream behind the task
//! - [`WidgetHandle`]: owner of a running task, used to cancel it

mod handle;
mod stream;

#[cfg(test)]
mod widget_tests;

pub use handle::WidgetHandle;
pub use stream::SelectionStream;

use std::time::Duration;

use tokio::sync::oneshot;
use tokio_stream::StreamExt;

use crate::display::{DisplaySink, DisplayText};
use crate::network::AddressFetcher;
use crate::selector::{InterfaceAddressSelector, SelectionResult};

/// Creates widgets and numbers them.
///
/// Ids start at 1 and are unique per factory. The counter lives here rather
/// than in process-wide state, so independent hosts do not share numbering.
#[derive(Debug, Default)]
pub struct WidgetFactory {
    created: u32,
}

impl WidgetFactory {
    /// Creates a factory that has not created any widget yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { created: 0 }
    }

    /// Creates the next widget.
    pub fn create<F, S>(&mut self, fetcher: F, sink: S) -> Widget<F, S>
    where
        F: AddressFetcher,
        S: DisplaySink,
    {
        self.created += 1;
        let id = self.created;
        tracing::debug!("Created widget #{id}");

        Widget {
            id,
            selector: InterfaceAddressSelector::new(fetcher),
            sink,
        }
    }

    /// Returns how many widgets this factory has created.
    #[must_use]
    pub const fn instance_count(&self) -> u32 {
        self.created
    }
}

/// One selector plus the sink its results are rendered to.
pub struct Widget<F, S> {
    id: u32,
    selector: InterfaceAddressSelector<F>,
    sink: S,
}

impl<F, S> Widget<F, S>
where
    F: AddressFetcher,
    S: DisplaySink,
{
    /// Returns the id assigned by the factory.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Selects once and renders the result.
    ///
    /// A render failure is logged; the selection is still returned.
    pub fn refresh(&mut self) -> SelectionResult {
        let result = self.selector.select();
        render(self.id, &mut self.sink, &result);
        result
    }

    /// Moves the widget onto a tokio task that refreshes every `period`.
    ///
    /// The first refresh happens immediately. With `changes_only`, a result
    /// equal to the last rendered one is not rendered again.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use = "dropping the handle aborts the refresh task"]
    pub fn spawn(self, period: Duration, changes_only: bool) -> WidgetHandle
    where
        F: Unpin + 'static,
        S: 'static,
    {
        let Self {
            id,
            selector,
            mut sink,
        } = self;

        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let mut stream = SelectionStream::new(selector, period, changes_only);

        tracing::debug!(
            "Widget #{id} refreshing every {}s (changes only: {changes_only})",
            period.as_secs_f64()
        );

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;

                    _ = &mut cancel_rx => break,

                    next = stream.next() => {
                        let Some(result) = next else { break };
                        render(id, &mut sink, &result);
                    }
                }
            }

            tracing::debug!("Widget #{id} refresh task stopped");
        });

        WidgetHandle::new(id, cancel_tx, task)
    }
}

impl<F, S> std::fmt::Debug for Widget<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Forwards one result to the sink.
fn render<S: DisplaySink>(id: u32, sink: &mut S, result: &SelectionResult) {
    let display = DisplayText::from(result);
    if let Err(e) = sink.render(&display) {
        tracing::warn!("Widget #{id} failed to render display update: {e}");
    }
}
