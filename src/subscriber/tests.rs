use super::{StopSignal, Subscriber, receive};
use crate::config::SubscriberSettings;
use crate::utils::error::TransportError;
use std::time::Duration;

fn settings(topic: &str) -> SubscriberSettings {
    SubscriberSettings {
        port: portpicker::pick_unused_port().expect("No free ports"),
        topic: topic.to_string(),
        poll_interval_ms: 20,
        ..SubscriberSettings::default()
    }
}

#[test]
fn test_stop_signal() {
    let stop = StopSignal::new();
    let shared = stop.clone();
    assert!(!stop.is_triggered());
    shared.trigger();
    assert!(stop.is_triggered());
}

#[test]
fn test_connect_without_publisher_succeeds() {
    // ZeroMQ connects lazily, so a silent endpoint is not an error.
    let mut subscriber = Subscriber::new(settings("t1"));
    subscriber.connect().unwrap();
    assert!(subscriber.is_connected());

    let received = subscriber.recv_timeout(Duration::from_millis(50)).unwrap();
    assert!(received.is_none());
}

#[test]
fn test_connect_with_invalid_endpoint_fails() {
    let mut subscriber = Subscriber::new(SubscriberSettings {
        host: "not a host".to_string(),
        ..settings("t1")
    });
    assert!(matches!(subscriber.connect(), Err(TransportError::InvalidEndpoint(_))));
    assert!(!subscriber.is_connected());
}

#[test]
fn test_recv_before_connect_is_refused() {
    let subscriber = Subscriber::new(settings("t1"));
    assert!(matches!(
        subscriber.recv_timeout(Duration::from_millis(10)),
        Err(TransportError::NotConnected)
    ));
}

#[test]
fn test_recv_after_close_is_refused() {
    let mut subscriber = Subscriber::new(settings("t1"));
    subscriber.connect().unwrap();
    subscriber.close();
    subscriber.close();

    assert!(!subscriber.is_connected());
    assert!(matches!(
        subscriber.recv_timeout(Duration::from_millis(10)),
        Err(TransportError::NotConnected)
    ));
}

#[test]
fn test_receive_loop_stops_and_closes() {
    let mut subscriber = Subscriber::new(settings(""));
    subscriber.connect().unwrap();

    let stop = StopSignal::new();
    stop.trigger();

    let mut seen = 0;
    let result = subscriber.receive_loop_with(&stop, |_| seen += 1);
    assert!(matches!(result, Err(TransportError::Interrupted)));
    assert_eq!(seen, 0);
    assert!(!subscriber.is_connected());
}

#[test]
fn test_receive_loop_on_disconnected_subscriber_ends_immediately() {
    let mut subscriber = Subscriber::new(settings(""));
    let stop = StopSignal::new();
    assert!(matches!(subscriber.receive_loop(&stop), Err(TransportError::NotConnected)));
}

#[test]
fn test_receive_reports_connect_failure() {
    let stop = StopSignal::new();
    let result = receive(
        SubscriberSettings {
            host: String::new(),
            ..settings("t1")
        },
        &stop,
    );
    assert!(matches!(result, Err(TransportError::InvalidEndpoint(_))));
}

#[test]
fn test_receive_loop_notices_stop_with_huge_poll_interval() {
    let mut subscriber = Subscriber::new(SubscriberSettings {
        poll_interval_ms: u64::MAX,
        ..settings("")
    });
    subscriber.connect().unwrap();

    let stop = StopSignal::new();
    let (tx, rx) = std::sync::mpsc::channel();
    let loop_stop = stop.clone();
    std::thread::spawn(move || {
        let result = subscriber.receive_loop(&loop_stop);
        let _ = tx.send((result, subscriber.is_connected()));
    });

    std::thread::sleep(Duration::from_millis(100));
    stop.trigger();

    let (result, connected) = rx
        .recv_timeout(Duration::from_secs(3))
        .expect("receive loop did not notice the stop signal");
    assert!(matches!(result, Err(TransportError::Interrupted)));
    assert!(!connected);
}
