use std::ops::Range;
use std::time::Duration;

use rand::{Rng, RngExt};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// Delivers a generated reply after a single-shot randomized delay, simulating
/// assistant thinking time. This is the only suspension point in the session
/// core; everything else is synchronous in-memory state.
pub struct ResponseScheduler {
    delay_ms: Range<u64>,
}

impl ResponseScheduler {
    pub fn new(delay_ms: Range<u64>) -> Self {
        Self { delay_ms }
    }

    /// Samples a delay uniformly from the configured half-open range. Kept
    /// separate from `schedule` so all randomness flows through the
    /// caller-injected RNG.
    pub fn draw_delay(&self, rng: &mut impl Rng) -> Duration {
        Duration::from_millis(rng.random_range(self.delay_ms.clone()))
    }

    /// Spawns the delayed production of one reply. The producer runs exactly
    /// once, after `delay`; the result is delivered through the returned
    /// handle. There is no cancellation: dropping the `PendingReply` orphans
    /// the reply and the task's send fails silently.
    pub fn schedule<F>(&self, delay: Duration, producer: F) -> PendingReply
    where
        F: FnOnce() -> String + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = producer();
            if tx.send(reply).is_err() {
                debug!("scheduled reply landed on a discarded session");
            }
        });
        PendingReply { rx, _handle: handle }
    }
}

impl Default for ResponseScheduler {
    fn default() -> Self {
        Self::new(1000..3000)
    }
}

/// Receiving side of one scheduled reply.
pub struct PendingReply {
    rx: oneshot::Receiver<String>,
    _handle: JoinHandle<()>,
}

impl PendingReply {
    /// Waits out the remaining delay and yields the produced reply. `None`
    /// only if the producing task was torn down, which does not happen under
    /// normal operation.
    pub async fn recv(self) -> Option<String> {
        self.rx.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn drawn_delays_stay_in_bounds() {
        let scheduler = ResponseScheduler::default();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10_000 {
            let delay = scheduler.draw_delay(&mut rng);
            assert!(delay >= Duration::from_millis(1000));
            assert!(delay < Duration::from_millis(3000));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reply_lands_after_the_delay() {
        let scheduler = ResponseScheduler::default();
        let started = tokio::time::Instant::now();
        let pending = scheduler.schedule(Duration::from_millis(1500), || "done".to_string());
        let reply = pending.recv().await;
        assert_eq!(reply.as_deref(), Some("done"));
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_pending_reply_is_orphaned_quietly() {
        let scheduler = ResponseScheduler::default();
        let pending = scheduler.schedule(Duration::from_millis(1200), || "orphan".to_string());
        drop(pending);
        // Let the detached task run past its delay and hit the closed channel.
        tokio::time::sleep(Duration::from_millis(2000)).await;
    }
}
