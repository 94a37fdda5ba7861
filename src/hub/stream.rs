use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

use crate::hub::event::Event;
use crate::hub::topic::SubscriberId;

/// One live subscription: the id the hub knows it by, and the stream of
/// events delivered to it.
#[derive(Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub events: EventStream,
}

/// The receiving half of a subscriber channel.
///
/// Yields every event delivered to this subscriber and ends when the
/// subscription is torn down, whether because the client disconnected, the
/// subscription was explicitly unsubscribed, or the hub shut down. The
/// transport layer adapts it into one subscription frame per event.
#[derive(Debug)]
pub struct EventStream {
    rx: mpsc::Receiver<Event>,
}

impl EventStream {
    pub(crate) fn new(rx: mpsc::Receiver<Event>) -> Self {
        Self { rx }
    }

    /// Receives the next event, or `None` once the channel is closed and
    /// drained.
    pub async fn recv(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Stream for EventStream {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
