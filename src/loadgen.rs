//! Synthetic CPU load generation.
//!
//! One busy-spinning worker per logical processor, coordinated through a
//! single-use cancellation token. Workers run on the blocking pool so the
//! spin loops cannot starve the async scheduler.

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Wall-clock window every load run saturates the cores for.
pub const LOAD_DURATION: Duration = Duration::from_secs(10);

/// Outcome of one load run.
#[derive(Debug, Clone, Copy)]
pub struct LoadReport {
    /// Workers launched for this run.
    pub workers: usize,
    /// Time from launch until the run returned to the caller.
    pub elapsed: Duration,
}

/// Logical processors visible to the process. Recomputed for every run so the
/// worker pool tracks the current runtime topology.
pub fn logical_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

/// Run `workers` busy-spin workers for `duration`, then broadcast the stop
/// signal. With `wait_for_workers` unset the call returns right after the
/// broadcast and workers drain asynchronously; set, it returns only once every
/// worker has observed the signal and exited.
pub async fn run_load(workers: usize, duration: Duration, wait_for_workers: bool) -> LoadReport {
    let started = Instant::now();
    let stop = CancellationToken::new();

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let stop = stop.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            // Non-blocking poll on every iteration; no sleep, no yield. The
            // loop itself is the load.
            while !stop.is_cancelled() {
                std::hint::spin_loop();
            }
        }));
    }

    tokio::time::sleep(duration).await;
    // Single transition from open to closed; observed by every worker.
    stop.cancel();

    if wait_for_workers {
        for handle in handles {
            let _ = handle.await;
        }
    }

    let report = LoadReport {
        workers,
        elapsed: started.elapsed(),
    };
    debug!(workers = report.workers, elapsed_ms = report.elapsed.as_millis() as u64, "load run finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SHORT: Duration = Duration::from_millis(50);

    #[test]
    fn logical_cpus_is_positive() {
        assert!(logical_cpus() >= 1);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    #[tokio::test]
    async fn worker_count_matches_requested(#[case] workers: usize) {
        let report = run_load(workers, SHORT, true).await;
        assert_eq!(report.workers, workers);
    }

    #[tokio::test]
    async fn run_spans_at_least_the_requested_duration() {
        let report = run_load(2, SHORT, false).await;
        assert!(report.elapsed >= SHORT, "elapsed {:?}", report.elapsed);
    }

    #[tokio::test]
    async fn waiting_run_joins_all_workers() {
        // Joining must not hang: every worker observes the broadcast.
        let report = run_load(4, SHORT, true).await;
        assert!(report.elapsed >= SHORT);
    }

    #[tokio::test]
    async fn zero_workers_still_honors_the_window() {
        let report = run_load(0, SHORT, true).await;
        assert_eq!(report.workers, 0);
        assert!(report.elapsed >= SHORT);
    }

    #[test]
    fn second_cancel_is_a_no_op() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
        // Closing an already-closed token must not panic or reopen it.
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancellation_is_visible_to_all_clones() {
        let token = CancellationToken::new();
        let observers: Vec<_> = (0..8).map(|_| token.clone()).collect();
        token.cancel();
        assert!(observers.iter().all(|t| t.is_cancelled()));
    }
}
