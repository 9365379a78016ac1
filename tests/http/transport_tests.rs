// HttpPageSource against a one-shot loopback server
//
// - non-2xx responses abort with a reqwest error
// - keyword and page are appended after the fixed parameters

use salarytap::errors::SalarytapError;
use salarytap::http::Http;
use salarytap::http::fetcher::{HttpPageSource, PageSource};
use serde_json::json;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answer exactly one request with `status` and `body`; the handle yields the request line.
async fn serve_once(status: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (addr, handle)
}

fn page_source(addr: SocketAddr) -> HttpPageSource {
    let http = Http::new(format!("http://{addr}/vacancies")).param("count", "100");
    HttpPageSource::new(
        http.build_client().unwrap(),
        http.get_url().unwrap(),
        "keyword",
        "page",
    )
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (addr, server) = serve_once("403 Forbidden", "").await;

    let res = page_source(addr).fetch_page("C++", 3).await;

    assert!(matches!(res, Err(SalarytapError::Reqwest(_))), "got {res:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn test_keyword_and_page_follow_fixed_params() {
    let (addr, server) = serve_once("200 OK", r#"{"objects":[{"id":1}],"more":false}"#).await;

    let body = page_source(addr).fetch_page("C++", 3).await.unwrap();
    let request_line = server.await.unwrap();

    assert_eq!(body, json!({"objects": [{"id": 1}], "more": false}));
    assert_eq!(
        request_line,
        "GET /vacancies?count=100&keyword=C%2B%2B&page=3 HTTP/1.1"
    );
}
