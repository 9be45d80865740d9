use endpoint::{InProcessEndpoint, MessageEndpoint};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn deliver_without_subscriber_is_dropped() {
    let endpoint = InProcessEndpoint::new();
    assert!(!endpoint.deliver("{}"));
    assert!(!endpoint.has_subscriber());
}

#[test]
fn subscribe_replaces_previous_handler() {
    let endpoint = InProcessEndpoint::new();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let count = first.clone();
    endpoint
        .subscribe(Arc::new(move |_text| {
            count.fetch_add(1, Ordering::SeqCst);
        }))
        .expect("first subscribe");

    let count = second.clone();
    endpoint
        .subscribe(Arc::new(move |_text| {
            count.fetch_add(1, Ordering::SeqCst);
        }))
        .expect("second subscribe");

    assert!(endpoint.deliver("frame"));
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribe_without_subscriber_is_tolerated() {
    let endpoint = InProcessEndpoint::new();
    endpoint.unsubscribe().expect("unsubscribe");
    endpoint
        .subscribe(Arc::new(|_text| {}))
        .expect("subscribe");
    endpoint.unsubscribe().expect("unsubscribe again");
    assert!(!endpoint.deliver("frame"));
}

#[test]
fn send_records_outbound_frames() {
    let endpoint = InProcessEndpoint::new();
    endpoint.send("a").expect("send");
    endpoint.send("b").expect("send");
    assert_eq!(endpoint.take_sent(), vec!["a".to_string(), "b".to_string()]);
    assert!(endpoint.take_sent().is_empty());
}

#[test]
fn handler_sees_frame_text() {
    let endpoint = InProcessEndpoint::new();
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    endpoint
        .subscribe(Arc::new(move |text| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(text.to_string());
            }
        }))
        .expect("subscribe");

    endpoint.deliver("one");
    endpoint.deliver("two");
    let seen = seen.lock().expect("seen");
    assert_eq!(*seen, vec!["one".to_string(), "two".to_string()]);
}
