use super::Publisher;
use crate::config::PublisherSettings;
use crate::utils::error::TransportError;
use crate::utils::logging;
use std::thread;
use std::time::Duration;

fn settings_on_free_port() -> PublisherSettings {
    PublisherSettings {
        port: portpicker::pick_unused_port().expect("No free ports"),
        ..PublisherSettings::default()
    }
}

fn raw_subscriber(context: &zmq::Context, port: u16) -> zmq::Socket {
    let socket = context.socket(zmq::SUB).unwrap();
    socket.set_rcvtimeo(2000).unwrap();
    socket.connect(&format!("tcp://127.0.0.1:{port}")).unwrap();
    socket.set_subscribe(b"").unwrap();
    // Let the subscription reach the publisher before anything is sent.
    thread::sleep(Duration::from_millis(300));
    socket
}

#[test]
fn test_publisher_new_is_not_bound() {
    let publisher = Publisher::new(PublisherSettings::default());
    assert!(!publisher.is_bound());
    assert_eq!(publisher.settings().port, 5555);
}

#[test]
fn test_publish_sends_exactly_one_frame() {
    let settings = settings_on_free_port();
    let port = settings.port;
    let mut publisher = Publisher::new(settings);
    publisher.setup().unwrap();
    assert!(publisher.is_bound());

    let context = zmq::Context::new();
    let subscriber = raw_subscriber(&context, port);

    publisher.publish("t1", "x").unwrap();

    let frame = subscriber.recv_bytes(0).unwrap();
    assert_eq!(frame, b"t1 x");
    assert!(!subscriber.get_rcvmore().unwrap());

    subscriber.set_rcvtimeo(200).unwrap();
    assert_eq!(subscriber.recv_bytes(0), Err(zmq::Error::EAGAIN));

    publisher.close();
}

#[test]
fn test_publish_before_setup_is_refused() {
    let publisher = Publisher::new(settings_on_free_port());

    let mut result = Ok(());
    let logs = logging::capture(|| result = publisher.publish("t1", "x"));

    assert!(matches!(result, Err(TransportError::NotConnected)));
    assert!(logs.contains(" | ERROR | ZeroMQ socket is not available for publishing"));
    assert!(!logs.contains("Published data"));
}

#[test]
fn test_publish_after_close_is_refused() {
    let mut publisher = Publisher::new(settings_on_free_port());
    publisher.setup().unwrap();
    publisher.close();

    assert!(!publisher.is_bound());

    let mut result = Ok(());
    let logs = logging::capture(|| result = publisher.publish("t1", "x"));

    assert!(matches!(result, Err(TransportError::NotConnected)));
    assert!(logs.contains("ZeroMQ socket is not available for publishing"));
}

#[test]
fn test_setup_and_close_are_logged() {
    let mut publisher = Publisher::new(settings_on_free_port());
    let logs = logging::capture(|| {
        publisher.setup().unwrap();
        publisher.publish("t1", "x").unwrap();
        publisher.close();
        publisher.close();
    });

    assert!(logs.contains(" | INFO | ZeroMQ server started on port"));
    assert!(logs.contains("Published data to ZeroMQ topic: t1"));
    assert_eq!(logs.matches("ZeroMQ connection closed.").count(), 1);
}

#[test]
fn test_close_twice_is_a_noop() {
    let mut publisher = Publisher::new(settings_on_free_port());
    publisher.close();
    publisher.setup().unwrap();
    publisher.close();
    publisher.close();
    assert!(!publisher.is_bound());
}

#[test]
fn test_setup_twice_keeps_the_socket() {
    let mut publisher = Publisher::new(settings_on_free_port());
    publisher.setup().unwrap();
    publisher.setup().unwrap();
    assert!(publisher.is_bound());
}

#[test]
fn test_close_releases_the_port() {
    let settings = settings_on_free_port();
    let mut first = Publisher::new(settings.clone());
    first.setup().unwrap();
    first.close();

    let mut second = Publisher::new(settings);
    second.setup().unwrap();
    assert!(second.is_bound());
}

#[test]
fn test_bind_to_port_in_use_fails() {
    let settings = settings_on_free_port();
    let mut first = Publisher::new(settings.clone());
    first.setup().unwrap();

    let mut second = Publisher::new(settings);
    assert!(matches!(second.setup(), Err(TransportError::Bind { .. })));
    assert!(!second.is_bound());
    assert!(matches!(second.publish("t1", "x"), Err(TransportError::NotConnected)));
}

#[test]
fn test_setup_with_invalid_host_fails() {
    let mut publisher = Publisher::new(PublisherSettings {
        host: String::new(),
        ..settings_on_free_port()
    });
    assert!(matches!(publisher.setup(), Err(TransportError::InvalidEndpoint(_))));
}
