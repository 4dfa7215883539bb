use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use assert_matches::assert_matches;
use serde_json::{Value, json};

use eureka_client::config::ResolvedConfig;
use eureka_client::error::EurekaError;
use eureka_client::fallback;
use eureka_client::service::ResearchService;
use eureka_client::transport::{ApiMethod, ApiRequest, HttpTransport, Transport};

/// A base address on a local port nothing listens on.
fn closed_port_config() -> ResolvedConfig {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    ResolvedConfig {
        base_url: format!("http://127.0.0.1:{port}/api"),
        timeout: Duration::from_secs(5),
        dev_mode: true,
    }
}

/// Serves one canned HTTP response on a local port, after an optional delay.
fn canned_backend(response: &'static str, delay: Duration) -> ResolvedConfig {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|window| window == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => received.extend_from_slice(&buf[..n]),
            }
        }
        thread::sleep(delay);
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });
    ResolvedConfig {
        base_url: format!("http://127.0.0.1:{port}/api"),
        timeout: Duration::from_secs(5),
        dev_mode: true,
    }
}

const UNAVAILABLE: &str = "HTTP/1.1 503 Service Unavailable\r\n\
    Content-Length: 11\r\nConnection: close\r\n\r\nmaintenance";
const HTML_OK: &str = "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\
    Content-Length: 13\r\nConnection: close\r\n\r\n<html></html>";
const JSON_OK: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
    Content-Length: 11\r\nConnection: close\r\n\r\n{\"gaps\":[]}";
const NO_CONTENT: &str = "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n";

#[test]
fn request_constructors() {
    let get = ApiRequest::get("/discovery/gaps");
    assert_eq!(get.method, ApiMethod::Get);
    assert_eq!(get.body, None);

    let post = ApiRequest::post("/discovery/path", json!({ "max_depth": 4 }));
    assert_eq!(post.method, ApiMethod::Post);
    assert_eq!(post.body, Some(json!({ "max_depth": 4 })));
    assert_eq!(post.method.to_string(), "POST");
}

#[test]
fn url_joins_base_and_path() {
    let transport = HttpTransport::new(&ResolvedConfig::default()).unwrap();
    assert_eq!(transport.base_url(), "http://localhost:8000/api");
    assert_eq!(
        transport.url_for("/discovery/gaps"),
        "http://localhost:8000/api/discovery/gaps"
    );
    assert_eq!(
        transport.url_for("queries/ask"),
        "http://localhost:8000/api/queries/ask"
    );
}

#[tokio::test]
async fn unreachable_backend_surfaces_transport_error() {
    let transport = HttpTransport::new(&closed_port_config()).unwrap();
    let err = transport
        .send(ApiRequest::get("/discovery/gaps"))
        .await
        .unwrap_err();
    assert!(matches!(err, EurekaError::Http(_) | EurekaError::Timeout));
}

#[tokio::test]
async fn unreachable_backend_falls_back_through_facade() {
    let transport = HttpTransport::new(&closed_port_config()).unwrap();
    let service = ResearchService::new(transport).with_dev_mode(true);

    assert_eq!(service.fetch_research_gaps().await, fallback::gaps());
    assert_eq!(service.fetch_graph_stats().await, fallback::graph_stats());
    service
        .vote_on_hypothesis("1", eureka_client::domain::VoteDirection::Up)
        .await;
}

#[tokio::test]
async fn error_status_is_reported_with_code_and_body() {
    let transport = HttpTransport::new(&canned_backend(UNAVAILABLE, Duration::ZERO)).unwrap();
    let err = transport
        .send(ApiRequest::get("/discovery/gaps"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        EurekaError::Status { status: 503, ref message } if message == "maintenance"
    );
}

#[tokio::test]
async fn error_status_falls_back_through_facade() {
    let transport = HttpTransport::new(&canned_backend(UNAVAILABLE, Duration::ZERO)).unwrap();
    let service = ResearchService::new(transport);
    assert_eq!(service.fetch_research_gaps().await, fallback::gaps());
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let transport = HttpTransport::new(&canned_backend(HTML_OK, Duration::ZERO)).unwrap();
    assert_matches!(
        transport.send(ApiRequest::get("/discovery/gaps")).await,
        Err(EurekaError::Decode(_))
    );
}

#[tokio::test]
async fn json_body_is_returned() {
    let transport = HttpTransport::new(&canned_backend(JSON_OK, Duration::ZERO)).unwrap();
    let body = transport
        .send(ApiRequest::get("/discovery/gaps"))
        .await
        .unwrap();
    assert_eq!(body, json!({ "gaps": [] }));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let config = ResolvedConfig {
        timeout: Duration::from_secs(1),
        ..canned_backend(JSON_OK, Duration::from_secs(3))
    };
    let transport = HttpTransport::new(&config).unwrap();
    assert_matches!(
        transport.send(ApiRequest::get("/discovery/gaps")).await,
        Err(EurekaError::Timeout)
    );
}

#[tokio::test]
async fn empty_body_reads_as_null() {
    let transport = HttpTransport::new(&canned_backend(NO_CONTENT, Duration::ZERO)).unwrap();
    let body = transport
        .send(ApiRequest::post("/discovery/hypotheses/7/vote", json!({ "direction": "up" })))
        .await
        .unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn quiet_transport_passes_results_through() {
    let config = ResolvedConfig {
        dev_mode: false,
        ..canned_backend(JSON_OK, Duration::ZERO)
    };
    let transport = HttpTransport::new(&config).unwrap();
    let body = transport
        .send(ApiRequest::get("/discovery/gaps"))
        .await
        .unwrap();
    assert_eq!(body, json!({ "gaps": [] }));

    let quiet = ResolvedConfig {
        dev_mode: false,
        ..closed_port_config()
    };
    let transport = HttpTransport::new(&quiet).unwrap();
    assert_matches!(
        transport.send(ApiRequest::get("/discovery/gaps")).await,
        Err(EurekaError::Http(_) | EurekaError::Timeout)
    );
}
