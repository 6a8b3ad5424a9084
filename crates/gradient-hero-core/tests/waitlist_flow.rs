//! Waitlist controller integration tests
//!
//! Drive the full Idle → Submitting → Submitted → Idle lifecycle on a
//! paused tokio clock, with simulated and failing backends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use gradient_hero_core::{
    FormState, HeroError, HeroResult, SimulatedSubmitter, Submitter, WaitlistConfig,
    WaitlistController,
};

const LATENCY: Duration = Duration::from_millis(1500);
const CONFIRMATION: Duration = Duration::from_millis(3000);

// ============================================================================
// Test Backends
// ============================================================================

/// Fails the first `failures` submissions immediately, then behaves like
/// the simulated backend.
struct FlakySubmitter {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakySubmitter {
    fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Submitter for FlakySubmitter {
    fn submit(&self, _email: String) -> BoxFuture<'static, HeroResult<()>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let fail = call < self.failures;
        async move {
            if fail {
                return Err(HeroError::Submission("503 Service Unavailable".into()));
            }
            tokio::time::sleep(LATENCY).await;
            Ok(())
        }
        .boxed()
    }
}

fn simulated() -> WaitlistController {
    WaitlistController::new(Arc::new(SimulatedSubmitter::new(LATENCY)), CONFIRMATION)
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_empty_email_is_ignored() {
    let waitlist = simulated();
    let rx = waitlist.subscribe();

    assert!(!waitlist.submit());
    sleep_ms(5000).await;

    assert_eq!(waitlist.state(), FormState::Idle);
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_email_without_at_is_ignored() {
    let waitlist = simulated();
    waitlist.set_email("not-an-email");

    assert!(!waitlist.submit());
    sleep_ms(5000).await;

    assert_eq!(waitlist.state(), FormState::Idle);
    assert_eq!(waitlist.email(), "not-an-email");
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_valid_email_full_lifecycle() {
    let waitlist = simulated();
    waitlist.set_email("a@b.com");

    assert!(waitlist.submit());
    assert_eq!(waitlist.state(), FormState::Submitting);

    sleep_ms(1400).await;
    assert_eq!(waitlist.state(), FormState::Submitting);
    assert_eq!(waitlist.email(), "a@b.com");

    sleep_ms(200).await;
    assert_eq!(waitlist.state(), FormState::Submitted);
    assert_eq!(waitlist.email(), "");

    sleep_ms(2800).await;
    assert_eq!(waitlist.state(), FormState::Submitted);

    sleep_ms(200).await;
    assert_eq!(waitlist.state(), FormState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_subscriber_sees_each_transition() {
    let waitlist = simulated();
    let mut rx = waitlist.subscribe();

    waitlist.set_email("a@b.com");
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().email, "a@b.com");

    waitlist.submit();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().state, FormState::Submitting);

    rx.changed().await.unwrap();
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.state, FormState::Submitted);
    assert!(snapshot.email.is_empty());

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().state, FormState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_submit_disabled_while_submitting() {
    let waitlist = simulated();
    waitlist.set_email("a@b.com");
    assert!(waitlist.submit());

    sleep_ms(100).await;
    assert!(!waitlist.submit());

    sleep_ms(1500).await;
    assert_eq!(waitlist.state(), FormState::Submitted);
}

#[tokio::test(start_paused = true)]
async fn test_controller_from_default_config() {
    let waitlist = WaitlistController::from_config(&WaitlistConfig::default()).unwrap();
    waitlist.set_email("someone@example.com");
    assert!(waitlist.submit());

    sleep_ms(1600).await;
    assert_eq!(waitlist.state(), FormState::Submitted);
}

// ============================================================================
// Failure
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_email_then_recovers() {
    let waitlist = WaitlistController::new(Arc::new(FlakySubmitter::new(1)), CONFIRMATION);
    waitlist.set_email("a@b.com");
    waitlist.submit();

    sleep_ms(10).await;
    match waitlist.state() {
        FormState::Failed(reason) => assert!(reason.contains("503")),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(waitlist.email(), "a@b.com");

    sleep_ms(3000).await;
    assert_eq!(waitlist.state(), FormState::Idle);
    assert_eq!(waitlist.email(), "a@b.com");
}

#[tokio::test(start_paused = true)]
async fn test_retry_supersedes_failure_message() {
    let waitlist = WaitlistController::new(Arc::new(FlakySubmitter::new(1)), CONFIRMATION);
    waitlist.set_email("a@b.com");
    waitlist.submit();
    sleep_ms(1000).await;
    assert!(matches!(waitlist.state(), FormState::Failed(_)));

    // Retry at t=1000; the first failure's dismissal would land at t=3000.
    assert!(waitlist.submit());
    sleep_ms(2100).await;
    assert_eq!(waitlist.state(), FormState::Submitted);

    sleep_ms(3000).await;
    assert_eq!(waitlist.state(), FormState::Idle);
}

// ============================================================================
// Teardown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_pending_transitions() {
    let waitlist = simulated();
    waitlist.set_email("a@b.com");
    waitlist.submit();

    sleep_ms(500).await;
    waitlist.shutdown().await;

    sleep_ms(10_000).await;
    assert_eq!(waitlist.state(), FormState::Submitting);
    assert_eq!(waitlist.email(), "a@b.com");
}

#[tokio::test(start_paused = true)]
async fn test_drop_releases_submission_task() {
    let waitlist = simulated();
    let mut rx = waitlist.subscribe();
    waitlist.set_email("a@b.com");
    waitlist.submit();
    rx.borrow_and_update();

    drop(waitlist);
    assert!(rx.changed().await.is_err());
}
