//! Poll-loop tests against a scripted update source.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, Semaphore};
use tokio::time::timeout;

use botgram_types::Update;

use super::{PollerConfig, PollerHandle, UpdatePoller, UpdateSource};
use crate::error::Error;
use crate::methods::GetUpdatesRequest;

fn start_poller<S: UpdateSource>(
    source: S,
    config: PollerConfig,
) -> (mpsc::Receiver<Update>, PollerHandle) {
    UpdatePoller::new(source, config)
        .start()
        .expect("config is valid")
}

fn update(id: i64) -> Update {
    serde_json::from_value(serde_json::json!({ "update_id": id })).unwrap()
}

fn decode_error() -> Error {
    serde_json::from_str::<i64>("not json").unwrap_err().into()
}

/// Zero delays so failure paths run instantly under test.
fn test_config() -> PollerConfig {
    PollerConfig {
        timeout_secs: 0,
        retry_delay: Duration::ZERO,
        ..PollerConfig::default()
    }
}

/// Replays a fixed script of batches and records every request it
/// sees. Once the script runs dry it blocks forever, like a long poll
/// with no traffic. An optional gate makes each call wait for an
/// explicit permit from the test.
struct ScriptedSource {
    batches: Mutex<VecDeque<Result<Vec<Update>, Error>>>,
    requests: mpsc::UnboundedSender<GetUpdatesRequest>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedSource {
    fn new(
        batches: Vec<Result<Vec<Update>, Error>>,
    ) -> (Self, mpsc::UnboundedReceiver<GetUpdatesRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                batches: Mutex::new(batches.into()),
                requests: tx,
                gate: None,
            },
            rx,
        )
    }

    fn gated(
        batches: Vec<Result<Vec<Update>, Error>>,
        gate: Arc<Semaphore>,
    ) -> (Self, mpsc::UnboundedReceiver<GetUpdatesRequest>) {
        let (source, rx) = Self::new(batches);
        (
            Self {
                gate: Some(gate),
                ..source
            },
            rx,
        )
    }
}

#[async_trait]
impl UpdateSource for ScriptedSource {
    async fn fetch_updates(&self, request: GetUpdatesRequest) -> Result<Vec<Update>, Error> {
        self.requests.send(request).unwrap();
        if let Some(ref gate) = self.gate {
            gate.acquire().await.unwrap().forget();
        }
        let next = self.batches.lock().unwrap().pop_front();
        match next {
            Some(batch) => batch,
            None => std::future::pending().await,
        }
    }
}

async fn recv_ids(rx: &mut mpsc::Receiver<Update>, n: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for _ in 0..n {
        let update = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for update")
            .expect("stream closed early");
        ids.push(update.update_id);
    }
    ids
}

#[tokio::test]
async fn test_batch_advances_cursor_to_max_plus_one() {
    let (source, mut requests) = ScriptedSource::new(vec![Ok(vec![
        update(5),
        update(6),
        update(7),
    ])]);
    let config = PollerConfig {
        allowed_updates: vec![botgram_types::UpdateKind::Message],
        ..test_config()
    };
    let (mut rx, handle) = start_poller(source, config);

    assert_eq!(recv_ids(&mut rx, 3).await, vec![5, 6, 7]);

    let first = requests.recv().await.unwrap();
    assert_eq!(first.offset, Some(0));
    assert_eq!(first.timeout, Some(0));
    assert_eq!(
        first.allowed_updates.as_deref(),
        Some(&[botgram_types::UpdateKind::Message][..])
    );

    // The follow-up call must ask for max(update_id) + 1.
    let second = requests.recv().await.unwrap();
    assert_eq!(second.offset, Some(8));

    handle.stop();
}

#[tokio::test]
async fn test_stale_updates_dropped() {
    // Second batch replays 6 below the cursor; only 8 and 9 may reach
    // the consumer.
    let (source, mut requests) = ScriptedSource::new(vec![
        Ok(vec![update(5), update(6), update(7)]),
        Ok(vec![update(6), update(8), update(9)]),
    ]);
    let (mut rx, handle) = start_poller(source, test_config());

    assert_eq!(recv_ids(&mut rx, 5).await, vec![5, 6, 7, 8, 9]);

    assert_eq!(requests.recv().await.unwrap().offset, Some(0));
    assert_eq!(requests.recv().await.unwrap().offset, Some(8));
    assert_eq!(requests.recv().await.unwrap().offset, Some(10));

    handle.stop();
}

#[tokio::test]
async fn test_failure_keeps_cursor_and_stream_open() {
    let (source, mut requests) = ScriptedSource::new(vec![
        Ok(vec![update(3)]),
        Err(decode_error()),
        Ok(vec![update(4)]),
    ]);
    let (mut rx, handle) = start_poller(source, test_config());

    // The failure produces no emission and the stream stays open.
    assert_eq!(recv_ids(&mut rx, 2).await, vec![3, 4]);

    assert_eq!(requests.recv().await.unwrap().offset, Some(0));
    // Call that failed, and the retry with the same offset.
    assert_eq!(requests.recv().await.unwrap().offset, Some(4));
    assert_eq!(requests.recv().await.unwrap().offset, Some(4));
    assert_eq!(requests.recv().await.unwrap().offset, Some(5));

    handle.stop();
}

#[tokio::test]
async fn test_stop_during_inflight_call() {
    let gate = Arc::new(Semaphore::new(0));
    let (source, mut requests) =
        ScriptedSource::gated(vec![Ok(vec![update(5)])], Arc::clone(&gate));
    let (mut rx, handle) = start_poller(source, test_config());

    // First call is in flight, parked on the gate.
    let first = requests.recv().await.unwrap();
    assert_eq!(first.offset, Some(0));

    // Stop while the call is outstanding, then let it complete.
    handle.stop();
    gate.add_permits(1);

    // The in-flight batch is still delivered once, then the stream
    // closes without another call.
    assert_eq!(recv_ids(&mut rx, 1).await, vec![5]);
    assert!(timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for stream close")
        .is_none());

    handle.join().await;
    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn test_stop_is_idempotent() {
    let gate = Arc::new(Semaphore::new(0));
    let (source, mut requests) = ScriptedSource::gated(vec![Ok(vec![])], Arc::clone(&gate));
    let (mut rx, handle) = start_poller(source, test_config());

    let _ = requests.recv().await.unwrap();
    handle.stop();
    handle.stop();
    gate.add_permits(1);

    // Empty batch, then the stop signal: stream closes with nothing
    // emitted and no second call issued.
    assert!(timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for stream close")
        .is_none());
    handle.join().await;
    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn test_invalid_limit_fails_fast() {
    let (source, mut requests) = ScriptedSource::new(vec![]);
    let config = PollerConfig {
        limit: Some(0),
        ..test_config()
    };
    let err = UpdatePoller::new(source, config).start().unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
    // Nothing was spawned, so no call was ever issued.
    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn test_receiver_drop_stops_loop() {
    let (source, mut requests) = ScriptedSource::new(vec![Ok(vec![update(1)])]);
    let (rx, handle) = start_poller(source, test_config());

    let _ = requests.recv().await.unwrap();
    drop(rx);

    // The send into a closed channel makes the task exit on its own,
    // without a stop signal.
    timeout(Duration::from_secs(5), handle.join())
        .await
        .expect("poll task did not exit after receiver drop");
}
