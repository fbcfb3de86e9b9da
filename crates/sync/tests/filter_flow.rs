//! End-to-end filter typing scenarios against a shared location

use ql_core::{Location, LocationProvider, QueryParams, SharedLocation};
use ql_sync::{ParamBinding, ParamSync};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

const DELAY: Duration = Duration::from_millis(500);

async fn settle() {
    for _ in 0..4 {
        yield_now().await;
    }
}

fn spawn(provider: &Arc<dyn LocationProvider>, key: &str, value: &str) -> ParamSync {
    ParamSync::spawn(
        provider.clone(),
        ParamBinding::new(value).with_key(key).with_delay(DELAY),
    )
}

#[tokio::test(start_paused = true)]
async fn typing_session_converges_to_last_values() {
    let location = SharedLocation::new("/library");
    let provider: Arc<dyn LocationProvider> = Arc::new(location.clone());

    let topic = spawn(&provider, "topic", "");
    let subject = spawn(&provider, "subject", "");
    settle().await;

    // user types "bio", then "biology" 100ms later, then picks a subject
    topic.set("bio");
    settle().await;
    advance(Duration::from_millis(100)).await;
    settle().await;
    topic.set("biology");
    settle().await;
    advance(Duration::from_millis(50)).await;
    settle().await;
    subject.set("science");
    settle().await;

    // nothing committed yet: both windows are still open
    assert_eq!(location.url(), "/library");

    // 500ms after the last topic keystroke
    advance(Duration::from_millis(450)).await;
    settle().await;
    assert_eq!(location.params().get("topic"), Some("biology"));

    // 500ms after the subject pick
    advance(Duration::from_millis(50)).await;
    settle().await;
    assert_eq!(location.params().get("subject"), Some("science"));
    assert_eq!(location.url(), "/library?topic=biology&subject=science");
}

#[tokio::test(start_paused = true)]
async fn clearing_a_filter_removes_its_key_only() {
    let location = SharedLocation::from_url("/library?topic=biology&subject=science");
    let provider: Arc<dyn LocationProvider> = Arc::new(location.clone());

    let topic = spawn(&provider, "topic", "biology");
    let _subject = spawn(&provider, "subject", "science");
    settle().await;

    topic.set("");
    settle().await;
    advance(DELAY).await;
    settle().await;

    assert_eq!(location.url(), "/library?subject=science");
}

/// Provider that stalls between deriving and swapping, widening the window
/// in which an interleaved commit could observe a stale base.
struct SlowLocation {
    inner: SharedLocation,
}

impl LocationProvider for SlowLocation {
    fn path(&self) -> String {
        self.inner.path()
    }

    fn params(&self) -> QueryParams {
        self.inner.params()
    }

    fn replace(&self, url: &str) {
        self.inner.replace(url)
    }

    fn update(&self, apply: &mut dyn FnMut(&Location) -> Option<String>) {
        self.inner.update(&mut |location| {
            let next = apply(location);
            std::thread::sleep(Duration::from_millis(10));
            next
        });
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_commits_on_different_keys_both_survive() {
    let shared = SharedLocation::new("/library");
    let provider: Arc<dyn LocationProvider> = Arc::new(SlowLocation {
        inner: shared.clone(),
    });

    // both windows expire together, so the commits overlap on worker threads
    let _topic = ParamSync::spawn(
        provider.clone(),
        ParamBinding::new("cells")
            .with_key("topic")
            .with_delay(Duration::from_millis(5)),
    );
    let _subject = ParamSync::spawn(
        provider.clone(),
        ParamBinding::new("science")
            .with_key("subject")
            .with_delay(Duration::from_millis(5)),
    );

    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    loop {
        let params = shared.params();
        if params.get("topic").is_some() && params.get("subject").is_some() {
            break;
        }
        assert!(
            std::time::Instant::now() < deadline,
            "a commit was lost: {}",
            shared.url()
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(shared.params().get("topic"), Some("cells"));
    assert_eq!(shared.params().get("subject"), Some("science"));
}

#[tokio::test(start_paused = true)]
async fn dropped_binding_leaves_location_untouched() {
    let location = SharedLocation::new("/library");
    let provider: Arc<dyn LocationProvider> = Arc::new(location.clone());

    let topic = spawn(&provider, "topic", "");
    settle().await;

    topic.set("half-typed");
    settle().await;
    advance(Duration::from_millis(200)).await;
    settle().await;
    drop(topic);
    settle().await;

    advance(Duration::from_secs(2)).await;
    settle().await;
    assert_eq!(location.url(), "/library");
}
