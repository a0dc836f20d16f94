//! HttpSource against a throwaway local device

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use airwatch_connectors::{
    http::{HttpSource, HttpSourceConfig},
    SourceError,
};
use airwatch_core::{FixedTime, Monitor, MonitorConfig, ReadingSource};

/// Serve `count` identical responses, returning the device base URL
fn serve(status_line: &'static str, body: &'static str, count: usize) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        for stream in listener.incoming().take(count) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            // Drain the request head
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    (address.to_string(), handle)
}

#[test]
fn fetches_and_decodes_device_document() {
    let (host, server) = serve(
        "HTTP/1.1 200 OK",
        r#"{"temperature": 23.4, "humidity": 51.0, "airQuality": 180}"#,
        1,
    );

    let mut source = HttpSource::new(HttpSourceConfig::from_host(&host)).unwrap();
    let reading = source.fetch().unwrap();
    server.join().unwrap();

    assert_eq!(reading.temperature, 23.4);
    assert_eq!(reading.humidity, 51.0);
    assert_eq!(reading.air_quality, 180);
    assert_eq!(source.stats().successes, 1);
}

#[test]
fn server_error_maps_to_status() {
    let (host, server) = serve("HTTP/1.1 503 Service Unavailable", "sensor warming up", 1);

    let mut source = HttpSource::new(HttpSourceConfig::from_host(&host)).unwrap();
    let err = source.fetch().unwrap_err();
    server.join().unwrap();

    match err {
        SourceError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "sensor warming up");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(source.stats().failures, 1);
}

#[test]
fn garbage_body_is_malformed_payload() {
    let (host, server) = serve("HTTP/1.1 200 OK", "<html>hello</html>", 1);

    let mut source = HttpSource::new(HttpSourceConfig::from_host(&host)).unwrap();
    let err = source.fetch().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, SourceError::MalformedPayload(_)));
}

#[test]
fn refused_connection_is_request_error() {
    // Bind then drop to get a port nothing listens on
    let address = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let config = HttpSourceConfig::from_host(&address.to_string()).timeout_secs(1);
    let mut source = HttpSource::new(config).unwrap();
    let err = source.fetch().unwrap_err();

    assert!(matches!(err, SourceError::Request(_)));
    assert!(err.to_string().starts_with("Error fetching data:"));
    assert!(source.stats().last_error.is_some());
}

#[test]
fn silent_device_times_out() {
    // Connections complete in the listen backlog but nothing ever answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let host = listener.local_addr().unwrap().to_string();

    let config = HttpSourceConfig::from_host(&host).timeout_secs(1);
    let mut source = HttpSource::new(config).unwrap();

    let started = Instant::now();
    let err = source.fetch().unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, SourceError::Request(_)), "unexpected error: {err}");
    assert!(elapsed >= Duration::from_millis(900), "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(4), "returned after {elapsed:?}");
    drop(listener);
}

#[test]
fn monitor_survives_device_outage() {
    let (host, server) = serve(
        "HTTP/1.1 200 OK",
        r#"{"temperature": 21.0, "humidity": 45.0, "airQuality": 95}"#,
        1,
    );

    let source = HttpSource::new(HttpSourceConfig::from_host(&host).timeout_secs(1)).unwrap();
    let mut monitor = Monitor::new(source, FixedTime::new(0), MonitorConfig::default()).unwrap();

    assert!(monitor.poll().reading().is_some());
    server.join().unwrap();

    // Listener is gone now
    monitor.request_refresh();
    let outcome = monitor.poll_if_due().unwrap();
    assert!(outcome.reading().is_none());

    let view = monitor.dashboard();
    assert_eq!(view.window.len(), 1);
    assert!(view.connection_error.is_some());
    assert_eq!(monitor.source().stats().requests, 2);
}
