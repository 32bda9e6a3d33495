// tests/net_fetch.rs
//
// HttpFetcher against throwaway local servers.
//
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use spurt_scan::config::options::ScanOptions;
use spurt_scan::core::net::{Fetch, HttpFetcher};
use spurt_scan::error::ScanError;

fn fetcher(timeout: Duration) -> HttpFetcher {
    let opts = ScanOptions { timeout, ..ScanOptions::default() };
    HttpFetcher::new(&opts).expect("client")
}

/// Answer exactly one request with `response`, returning what the client sent.
fn serve_once(response: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/page", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut sock, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let n = sock.read(&mut buf).unwrap_or(0);
        sock.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&buf[..n]).into_owned()
    });
    (url, handle)
}

#[test]
fn silent_server_is_a_network_timeout() {
    // Accepted by the kernel backlog, never answered.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());

    let err = fetcher(Duration::from_millis(300)).fetch(&url).unwrap_err();
    match err {
        ScanError::NetworkTimeout { url: u, timeout } => {
            assert_eq!(u, url);
            assert_eq!(timeout, Duration::from_millis(300));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
    drop(listener);
}

#[test]
fn not_found_is_a_fetch_error_with_status() {
    let (url, handle) = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");

    let err = fetcher(Duration::from_secs(5)).fetch(&url).unwrap_err();
    assert!(matches!(err, ScanError::Fetch { .. }), "{err:?}");
    assert!(err.to_string().contains("404"), "{err}");
    handle.join().unwrap();
}

#[test]
fn ok_response_carries_body_and_user_agent() {
    let body = "<table><tr><td>x</td></tr></table>";
    let (url, handle) = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 34\r\nConnection: close\r\n\r\n\
         <table><tr><td>x</td></tr></table>",
    );

    let page = fetcher(Duration::from_secs(5)).fetch(&url).expect("200");
    assert_eq!(page.body, body);
    assert_eq!(page.url, url);

    let request = handle.join().unwrap().to_ascii_lowercase();
    assert!(request.contains("user-agent: mozilla/5.0"), "{request}");
}

#[test]
fn unusable_user_agent_is_a_client_error() {
    let opts = ScanOptions { user_agent: "bad\nagent".to_string(), ..ScanOptions::default() };
    match HttpFetcher::new(&opts) {
        Err(err @ ScanError::Client(_)) => {
            let msg = err.to_string();
            assert!(msg.starts_with("could not build HTTP client:"), "{msg}");
            assert!(!msg.contains("fetch failed for :"), "{msg}");
        }
        Err(other) => panic!("expected client error, got {other:?}"),
        Ok(_) => panic!("client built with an invalid header value"),
    }
}
