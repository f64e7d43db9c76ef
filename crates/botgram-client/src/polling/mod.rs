//! Cursor-based long-polling update delivery loop.
//!
//! One tokio task per poller owns the cursor exclusively and feeds a
//! bounded channel. The loop never terminates on transport failure,
//! only on an explicit stop signal or when the receiver is dropped.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use botgram_types::{Update, UpdateKind};

use crate::client::Client;
use crate::error::Error;
use crate::methods::GetUpdatesRequest;

#[cfg(test)]
mod tests;

/// Where the poller fetches updates from. [`Client`] is the real
/// source; tests substitute a scripted one.
#[async_trait]
pub trait UpdateSource: Send + Sync + 'static {
    async fn fetch_updates(&self, request: GetUpdatesRequest) -> Result<Vec<Update>, Error>;
}

#[async_trait]
impl UpdateSource for Client {
    async fn fetch_updates(&self, request: GetUpdatesRequest) -> Result<Vec<Update>, Error> {
        self.get_updates(&request).await
    }
}

/// Poller settings.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Max updates per batch, 1-100; `None` uses the server default
    /// of 100.
    pub limit: Option<u8>,
    /// Long-poll hold time in seconds. The server keeps the request
    /// open this long when no updates are pending, which is what paces
    /// the loop.
    pub timeout_secs: u32,
    /// Server-side filter; empty subscribes to all update kinds.
    pub allowed_updates: Vec<UpdateKind>,
    /// Fixed delay before retrying after a failed fetch.
    pub retry_delay: Duration,
    /// Capacity of the delivery channel. The poll task awaits channel
    /// space when the consumer falls this far behind; updates are
    /// never silently dropped.
    pub queue_capacity: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            limit: None,
            timeout_secs: 30,
            allowed_updates: Vec::new(),
            retry_delay: Duration::from_secs(3),
            queue_capacity: 100,
        }
    }
}

/// Long-poll loop surfacing updates from an [`UpdateSource`] to a
/// channel, with at-least-once delivery and duplicate suppression.
pub struct UpdatePoller<S> {
    source: S,
    config: PollerConfig,
}

impl<S: UpdateSource> UpdatePoller<S> {
    pub fn new(source: S, config: PollerConfig) -> Self {
        Self { source, config }
    }

    /// Spawn the poll task. Returns the update stream and a handle
    /// that stops it.
    ///
    /// Fails fast on an invalid config (e.g. a batch limit outside
    /// 1..=100) instead of letting the retry loop swallow the error.
    pub fn start(self) -> Result<(mpsc::Receiver<Update>, PollerHandle), Error> {
        build_request(&self.config, 0).validate()?;

        let (tx, rx) = mpsc::channel(self.config.queue_capacity);
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(run_loop(self.source, self.config, tx, stop_rx));
        Ok((rx, PollerHandle { stop: stop_tx, task }))
    }
}

/// Handle to a running poll loop.
#[derive(Debug)]
pub struct PollerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal the loop to stop. Idempotent and non-blocking. An
    /// in-flight network call is not aborted; the loop observes the
    /// signal at the top of its next iteration, so results of that
    /// call may still be delivered once.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Wait until the poll task has exited and the stream is closed.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

fn build_request(config: &PollerConfig, cursor: i64) -> GetUpdatesRequest {
    GetUpdatesRequest {
        offset: Some(cursor),
        limit: config.limit,
        timeout: Some(config.timeout_secs),
        allowed_updates: if config.allowed_updates.is_empty() {
            None
        } else {
            Some(config.allowed_updates.clone())
        },
    }
}

async fn run_loop<S: UpdateSource>(
    source: S,
    config: PollerConfig,
    tx: mpsc::Sender<Update>,
    stop: watch::Receiver<bool>,
) {
    // Next offset to request. Owned by this task alone; never touched
    // from outside.
    let mut cursor: i64 = 0;

    info!("update poller started");

    loop {
        if *stop.borrow() {
            info!("update poller stopped");
            // Dropping tx closes the stream, exactly once.
            return;
        }

        match source.fetch_updates(build_request(&config, cursor)).await {
            Ok(updates) => {
                for update in updates {
                    // Duplicate suppression: anything below the cursor
                    // has already been delivered.
                    if update.update_id < cursor {
                        debug!(update_id = update.update_id, "dropping stale update");
                        continue;
                    }
                    // Next offset = highest update_id seen + 1.
                    cursor = cursor.max(update.update_id + 1);

                    if tx.send(update).await.is_err() {
                        info!("update receiver dropped, stopping poll");
                        return;
                    }
                }
            }
            Err(e) => {
                // Cursor unchanged: the next call repeats this offset.
                error!(
                    "getUpdates failed (retry in {:?}): {e}",
                    config.retry_delay
                );
                tokio::time::sleep(config.retry_delay).await;
            }
        }
    }
}
