//! Announcement push stream.
//!
//! One credentialed GET per subscription; the backend writes repeated SSE
//! events whose `data` field is a JSON array of notifications. The
//! connection has no distinct "open" signal, so the state machine is made
//! explicit here: `Connecting` after the request is accepted, `Connected`
//! on the first successfully parsed batch, `Disconnected` on transport
//! error or end of stream. There is no auto-reconnect; a fresh
//! subscription is a new `subscribe` call. Dropping the value releases the
//! connection on every exit path.

use std::pin::Pin;

use eventsource_stream::{Event, EventStreamError, Eventsource};
use futures::{Stream, StreamExt};

use crate::api::client::ApiClient;
use crate::api::payload::ApiFailure;
use crate::errors::{AppError, AppResult};
use crate::models::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedConnection {
    Disconnected,
    Connecting,
    Connected,
}

type SseStream =
    Pin<Box<dyn Stream<Item = Result<Event, EventStreamError<reqwest::Error>>> + Send>>;

pub struct NotificationStream {
    inner: SseStream,
    state: FeedConnection,
}

impl NotificationStream {
    /// Open the push connection scoped to the authenticated user.
    pub async fn subscribe(client: &ApiClient) -> AppResult<Self> {
        let response = client
            .stream_request("notification/get-all-notification")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let failure: ApiFailure = serde_json::from_str(&text).unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message: failure.display_message(status.as_u16()),
                session: None,
            });
        }

        Ok(Self {
            inner: response.bytes_stream().eventsource().boxed(),
            state: FeedConnection::Connecting,
        })
    }

    pub fn state(&self) -> FeedConnection {
        self.state
    }

    /// Await the next announcement batch.
    ///
    /// A malformed event is logged and skipped without tearing down the
    /// stream. `None` means the connection dropped (or ended) and the feed
    /// is static until re-subscribed.
    pub async fn next_batch(&mut self) -> Option<Vec<Notification>> {
        loop {
            match self.inner.next().await {
                Some(Ok(event)) => {
                    match serde_json::from_str::<Vec<Notification>>(&event.data) {
                        Ok(batch) => {
                            self.state = FeedConnection::Connected;
                            return Some(batch);
                        }
                        Err(e) => {
                            tracing::warn!("skipping malformed announcement batch: {e}");
                        }
                    }
                }
                Some(Err(e)) => {
                    tracing::error!("announcement stream error: {e}");
                    self.state = FeedConnection::Disconnected;
                    return None;
                }
                None => {
                    self.state = FeedConnection::Disconnected;
                    return None;
                }
            }
        }
    }
}
