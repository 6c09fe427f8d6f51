//! Live event subscription.

use super::journal::JournalEntry;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tracing::warn;

/// Stream of journal entries committed after the subscription was created.
///
/// A subscriber that falls more than the channel capacity behind skips the
/// missed entries; the journal still holds them.
pub struct EventStream {
    inner: BroadcastStream<JournalEntry>,
}

impl EventStream {
    pub(crate) fn new(receiver: broadcast::Receiver<JournalEntry>) -> Self {
        Self {
            inner: BroadcastStream::new(receiver),
        }
    }
}

impl Stream for EventStream {
    type Item = JournalEntry;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match self.inner.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(entry))) => return Poll::Ready(Some(entry)),
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(skipped)))) => {
                    warn!(skipped, "event subscriber lagged, entries dropped");
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
