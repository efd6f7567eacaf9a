//! The add-to-cart confirmation notice and its timers.
//!
//! When the user adds an item, a transient notice is shown carrying the item's
//! name and price plus a running count of add events for the session. Two
//! independent timers follow each add:
//!
//! 1. After [`NoticeConfig::notice_duration`] the notice dismisses itself.
//! 2. After [`NoticeConfig::nav_delay`] navigation to the order screen is
//!    requested, carrying the item name.
//!
//! The notice is a tiny state machine {Idle, Visible}. A second add while the
//! notice is visible *restarts* the visible duration and replaces the displayed
//! content with the newest item, but never resets the add counter. The dismiss
//! deadline lives inside the actor's select loop, so restarting is just
//! replacing the deadline; navigation timers are fire-once spawned tasks and
//! are never cancelled — one navigation request per add.
//!
//! Timings are injected through [`NoticeConfig`] so tests can run on tokio's
//! paused clock instead of the wall clock.

use crate::navigation::{NavRequest, Navigator, Screen};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, info};

/// Timing configuration for the notice sequence.
#[derive(Debug, Clone, Copy)]
pub struct NoticeConfig {
    /// How long the notice stays visible after the most recent add.
    pub notice_duration: Duration,
    /// Delay between an add and the automatic navigation to the order screen.
    pub nav_delay: Duration,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            notice_duration: Duration::from_millis(2500),
            nav_delay: Duration::from_millis(800),
        }
    }
}

/// Visibility state of the confirmation notice.
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeState {
    Idle,
    Visible {
        item_name: String,
        unit_price: Decimal,
    },
}

/// A point-in-time view of the notice for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeSnapshot {
    pub state: NoticeState,
    /// Count of add-to-cart events this session. Never resets.
    pub add_count: u64,
}

/// Errors from the notice client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NoticeError {
    #[error("Notice actor closed")]
    Closed,
}

#[derive(Debug)]
enum NoticeRequest {
    ItemAdded {
        name: String,
        unit_price: Decimal,
    },
    Snapshot {
        respond_to: oneshot::Sender<NoticeSnapshot>,
    },
}

/// The actor owning the notice state machine.
///
/// Like the resource actors, it processes requests sequentially; the dismiss
/// deadline is part of its select loop rather than a detached timer, so the
/// most recent add always owns the visible duration.
pub struct NoticeActor {
    receiver: mpsc::Receiver<NoticeRequest>,
    config: NoticeConfig,
    navigator: Arc<dyn Navigator>,
    state: NoticeState,
    add_count: u64,
    dismiss_at: Option<Instant>,
}

impl NoticeActor {
    /// Runs the actor's event loop until the channel closes.
    pub async fn run(mut self) {
        info!("Notice actor started");

        loop {
            let deadline = self.dismiss_at;
            let dismiss = async move {
                match deadline {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(NoticeRequest::ItemAdded { name, unit_price }) => {
                        self.item_added(name, unit_price);
                    }
                    Some(NoticeRequest::Snapshot { respond_to }) => {
                        let _ = respond_to.send(NoticeSnapshot {
                            state: self.state.clone(),
                            add_count: self.add_count,
                        });
                    }
                    None => break,
                },
                _ = dismiss => {
                    debug!("Notice duration elapsed");
                    self.state = NoticeState::Idle;
                    self.dismiss_at = None;
                    info!("Notice dismissed");
                }
            }
        }

        info!(add_count = self.add_count, "Notice actor shutdown");
    }

    fn item_added(&mut self, name: String, unit_price: Decimal) {
        self.add_count += 1;
        info!(item = %name, add_count = self.add_count, "Added-to-cart notice shown");

        // Restart the visible duration; the counter is never reset.
        self.state = NoticeState::Visible {
            item_name: name.clone(),
            unit_price,
        };
        self.dismiss_at = Some(Instant::now() + self.config.notice_duration);

        // Independent fire-once navigation timer. Never cancelled: each add
        // produces exactly one navigation request.
        let navigator = self.navigator.clone();
        let nav_delay = self.config.nav_delay;
        tokio::spawn(async move {
            tokio::time::sleep(nav_delay).await;
            navigator.request(NavRequest::with_param(Screen::Order, name));
        });
    }
}

/// Client for the notice actor.
#[derive(Clone)]
pub struct NoticeClient {
    sender: mpsc::Sender<NoticeRequest>,
}

impl NoticeClient {
    /// Reports an add-to-cart event: shows (or restarts) the notice and
    /// schedules the timers.
    pub async fn item_added(
        &self,
        name: impl Into<String>,
        unit_price: Decimal,
    ) -> Result<(), NoticeError> {
        self.sender
            .send(NoticeRequest::ItemAdded {
                name: name.into(),
                unit_price,
            })
            .await
            .map_err(|_| NoticeError::Closed)
    }

    /// The current notice state and session add counter.
    pub async fn snapshot(&self) -> Result<NoticeSnapshot, NoticeError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NoticeRequest::Snapshot { respond_to })
            .await
            .map_err(|_| NoticeError::Closed)?;
        response.await.map_err(|_| NoticeError::Closed)
    }
}

/// Creates a new notice actor and its client.
pub fn new(config: NoticeConfig, navigator: Arc<dyn Navigator>) -> (NoticeActor, NoticeClient) {
    let (sender, receiver) = mpsc::channel(32);
    let actor = NoticeActor {
        receiver,
        config,
        navigator,
        state: NoticeState::Idle,
        add_count: 0,
        dismiss_at: None,
    };
    (actor, NoticeClient { sender })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use rust_decimal_macros::dec;

    fn spawn_notice(navigator: Arc<RecordingNavigator>) -> NoticeClient {
        let (actor, client) = new(NoticeConfig::default(), navigator);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test(start_paused = true)]
    async fn notice_shows_then_dismisses_itself() {
        let navigator = Arc::new(RecordingNavigator::new());
        let client = spawn_notice(navigator.clone());

        client.item_added("Artisan Latte", dec!(4.75)).await.unwrap();

        let snap = client.snapshot().await.unwrap();
        assert_eq!(snap.add_count, 1);
        assert_eq!(
            snap.state,
            NoticeState::Visible {
                item_name: "Artisan Latte".into(),
                unit_price: dec!(4.75),
            }
        );

        // Past the visible duration the notice is gone, counter unchanged.
        tokio::time::sleep(Duration::from_millis(2600)).await;
        let snap = client.snapshot().await.unwrap();
        assert_eq!(snap.state, NoticeState::Idle);
        assert_eq!(snap.add_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn second_add_restarts_duration_and_keeps_counter() {
        let navigator = Arc::new(RecordingNavigator::new());
        let client = spawn_notice(navigator.clone());

        client.item_added("Artisan Latte", dec!(4.75)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2000)).await;

        // Second add while still visible: content swaps to the newest item.
        client.item_added("Iced Mocha", dec!(5.75)).await.unwrap();
        let snap = client.snapshot().await.unwrap();
        assert_eq!(snap.add_count, 2);
        assert_eq!(
            snap.state,
            NoticeState::Visible {
                item_name: "Iced Mocha".into(),
                unit_price: dec!(5.75),
            }
        );

        // 2000ms later the first add's deadline has long passed, but the
        // restarted duration has not: still visible.
        tokio::time::sleep(Duration::from_millis(2000)).await;
        let snap = client.snapshot().await.unwrap();
        assert!(matches!(snap.state, NoticeState::Visible { .. }));

        // 600ms more crosses the restarted deadline.
        tokio::time::sleep(Duration::from_millis(600)).await;
        let snap = client.snapshot().await.unwrap();
        assert_eq!(snap.state, NoticeState::Idle);
        assert_eq!(snap.add_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn every_add_navigates_to_order_exactly_once() {
        let navigator = Arc::new(RecordingNavigator::new());
        let client = spawn_notice(navigator.clone());

        client.item_added("Artisan Latte", dec!(4.75)).await.unwrap();
        client.item_added("Iced Mocha", dec!(5.75)).await.unwrap();

        // Before the delay elapses nothing has navigated.
        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(navigator.requests().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let requests = navigator.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].screen, Screen::Order);
        assert_eq!(requests[0].param.as_deref(), Some("Artisan Latte"));
        assert_eq!(requests[1].param.as_deref(), Some("Iced Mocha"));

        // No further requests later: the timers are fire-once.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(navigator.requests().len(), 2);
    }
}
