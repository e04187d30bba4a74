//! End-to-end POSTs against a throwaway local HTTP listener.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use ready_core::{Catalog, Environment, Identity, Payload, VerdictLadder};
use ready_submit::{HttpTransport, SubmissionGateway, SubmitError, SubmitOutcome};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

struct Captured {
    head: String,
    body: String,
}

/// Accept one connection, capture the request, answer with `status_line`.
async fn serve_once(status_line: &'static str) -> (String, tokio::task::JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 4096];

        let (head, body_start) = loop {
            let n = socket.read(&mut chunk).await.expect("read");
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break (String::from_utf8_lossy(&buf[..pos]).into_owned(), pos + 4);
            }
        };

        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.trim()
                    .eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < body_start + content_length {
            let n = socket.read(&mut chunk).await.expect("read body");
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = String::from_utf8_lossy(&buf[body_start..body_start + content_length]).into_owned();

        let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();

        Captured { head, body }
    });

    (format!("http://{addr}/lead"), handle)
}

fn identity() -> Identity {
    Identity {
        name: "Jane Smith".into(),
        email: "jane@company.com".into(),
        consent: true,
    }
}

fn payload() -> Payload {
    let env = Environment {
        now: Utc
            .with_ymd_and_hms(2026, 10, 17, 9, 30, 0)
            .single()
            .expect("valid time"),
        page_url: "https://example.com/?utm_source=newsletter".into(),
    };
    let mut answers = ready_core::Answers::new();
    answers.insert("1.1".into(), ready_core::AnswerValue::Yes);
    Payload::build(
        &Catalog::standard(),
        &identity(),
        &answers,
        &VerdictLadder::standard(),
        &env,
    )
}

#[tokio::test]
async fn posts_json_payload_with_content_type() {
    let (url, server) = serve_once("HTTP/1.1 200 OK").await;
    let transport = HttpTransport::new(&url, Duration::from_secs(5)).expect("transport");
    let gateway = SubmissionGateway::forwarding(transport);

    let outcome = gateway
        .submit(&identity(), payload)
        .await
        .expect("submission should succeed");
    assert_eq!(outcome, SubmitOutcome::Delivered { status: 200 });

    let captured = server.await.expect("server task");
    assert!(captured.head.starts_with("POST /lead HTTP/1.1"));
    assert!(
        captured
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/json")
    );

    let body: Payload = serde_json::from_str(&captured.body).expect("body is a payload");
    assert_eq!(body, payload());
    assert_eq!(body.utm["utm_source"], "newsletter");
}

#[tokio::test]
async fn non_success_status_is_a_rejection() {
    let (url, server) = serve_once("HTTP/1.1 500 Internal Server Error").await;
    let transport = HttpTransport::new(&url, Duration::from_secs(5)).expect("transport");
    let gateway = SubmissionGateway::forwarding(transport);

    let err = gateway.submit(&identity(), payload).await.unwrap_err();
    assert!(matches!(err, SubmitError::Rejected { status: 500, .. }));
    assert_eq!(err.user_message(), "Submission failed. Please try again.");
    server.await.expect("server task");
}

#[tokio::test]
async fn unreachable_endpoint_is_an_http_error() {
    // Bind then drop to get a port nobody is listening on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("addr")
    };
    let transport =
        HttpTransport::new(format!("http://{addr}/lead"), Duration::from_secs(2)).expect("transport");
    let gateway = SubmissionGateway::forwarding(transport);

    let err = gateway.submit(&identity(), payload).await.unwrap_err();
    assert!(matches!(err, SubmitError::Http(_)));
}
