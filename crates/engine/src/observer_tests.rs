use super::*;
use bgw_core::{Progress, RecordingObserver};

fn p(value: u8) -> Progress {
    Progress::new(value).unwrap()
}

#[tokio::test]
async fn delivers_notifications_in_posted_order() {
    let (handle, link) = ObserverLoop::spawn(RecordingObserver::new());

    for value in 0..=10 {
        assert!(handle.post(Notification::progress(p(value))));
    }
    assert!(handle.post(Notification::Done));
    drop(handle);

    let observer = link.join().await.unwrap();
    let expected: Vec<_> = (0..=10)
        .map(|v| Notification::progress(p(v)))
        .chain(std::iter::once(Notification::Done))
        .collect();
    assert_eq!(observer.received, expected);
}

#[tokio::test]
async fn detached_observer_receives_nothing_more() {
    let (handle, link) = ObserverLoop::spawn(RecordingObserver::new());

    let observer = link.detach().unwrap();
    assert!(observer.received.is_empty());
    assert!(!link.is_attached());

    // Posting still succeeds; delivery is a no-op
    assert!(handle.post(Notification::Done));
    drop(handle);

    assert!(link.join().await.is_none());
}

#[tokio::test]
async fn post_fails_once_loop_is_gone() {
    let (handle, rx) = ObserverHandle::channel();
    drop(rx);

    assert!(handle.is_closed());
    assert!(!handle.post(Notification::Done));
}

#[tokio::test]
async fn with_inspects_attached_observer() {
    let (_handle, link) = ObserverLoop::spawn(RecordingObserver::new());
    assert_eq!(link.with(|o| o.received.len()), Some(0));
    link.detach();
    assert_eq!(link.with(|o| o.received.len()), None);
}
