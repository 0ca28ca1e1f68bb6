//! Periodic selection stream.
//!
//! This module provides [`SelectionStream`], a stream that runs the selector
//! once per interval tick and yields each result.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval};
use tokio_stream::Stream;

use crate::network::AddressFetcher;
use crate::selector::{InterfaceAddressSelector, SelectionResult};

/// A stream of selection results produced on a fixed interval.
///
/// The first tick completes immediately, so the first result is available
/// without waiting a full period. The stream never terminates on its own.
///
/// With `changes_only`, a result equal to the previously emitted one is
/// swallowed and the stream waits for the next tick instead.
pub struct SelectionStream<F> {
    selector: InterfaceAddressSelector<F>,
    interval: Interval,
    changes_only: bool,
    /// Last emitted result, tracked only for `changes_only`
    last: Option<SelectionResult>,
}

impl<F> SelectionStream<F>
where
    F: AddressFetcher,
{
    /// Creates a stream ticking every `period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero (tokio's interval contract). Validated
    /// configuration never produces a zero period.
    #[must_use]
    pub fn new(selector: InterfaceAddressSelector<F>, period: Duration, changes_only: bool) -> Self {
        let mut interval = interval(period);
        // A slow host should not get a burst of catch-up refreshes.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            selector,
            interval,
            changes_only,
            last: None,
        }
    }

    /// Returns the configured period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Returns the last emitted result (only tracked with `changes_only`).
    #[must_use]
    pub const fn last(&self) -> Option<&SelectionResult> {
        self.last.as_ref()
    }

    /// Decides whether a fresh result should be emitted.
    fn accept(&mut self, result: &SelectionResult) -> bool {
        if !self.changes_only {
            return true;
        }

        if self.last.as_ref() == Some(result) {
            return false;
        }

        self.last = Some(result.clone());
        true
    }
}

impl<F> Stream for SelectionStream<F>
where
    F: AddressFetcher + Unpin,
{
    type Item = SelectionResult;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            // Poll the interval timer - registers waker for next tick when Pending
            if this.interval.poll_tick(cx).is_pending() {
                return Poll::Pending;
            }

            let result = this.selector.select();
            if this.accept(&result) {
                return Poll::Ready(Some(result));
            }
            // Unchanged - loop back to re-register waker via poll_tick
        }
    }
}
