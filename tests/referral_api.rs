//! Integration tests for the referral client's status handling, against a
//! canned loopback HTTP stub.

use revlift::config::ReferralApiEnvConfig;
use revlift::domain::errors::SubmissionError;
use revlift::domain::ports::ReferralGateway;
use revlift::domain::referral::{Friend, ReferralBatch};
use revlift::infrastructure::api::HttpReferralClient;
use std::io::{Read, Write};
use std::net::TcpListener;

/// Accepts one connection, reads the full request, answers with the given
/// status line and closes. Returns the endpoint URL to aim the client at.
fn spawn_stub(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];

        // Read headers, then as many body bytes as content-length promises.
        let mut body_expected = None;
        loop {
            let header_end = request
                .windows(4)
                .position(|window| window == b"\r\n\r\n")
                .map(|pos| pos + 4);
            if let Some(header_end) = header_end {
                let expected = *body_expected.get_or_insert_with(|| {
                    let headers = String::from_utf8_lossy(&request[..header_end]);
                    headers
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0)
                });
                if request.len() >= header_end + expected {
                    break;
                }
            }
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response =
            format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://{addr}/api/referrals")
}

fn client_for(endpoint: String) -> HttpReferralClient {
    HttpReferralClient::new(&ReferralApiEnvConfig {
        endpoint,
        timeout_secs: 5,
        connect_timeout_secs: 5,
    })
}

fn sample_batch() -> ReferralBatch {
    ReferralBatch {
        friends: vec![Friend {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }],
        referrer_email: "referrer@example.com".to_string(),
    }
}

#[tokio::test]
async fn accepts_http_200() {
    let client = client_for(spawn_stub("200 OK"));
    assert!(client.submit(&sample_batch()).await.is_ok());
}

#[tokio::test]
async fn accepts_http_201() {
    let client = client_for(spawn_stub("201 Created"));
    assert!(client.submit(&sample_batch()).await.is_ok());
}

#[tokio::test]
async fn maps_http_400_to_invalid_request() {
    let client = client_for(spawn_stub("400 Bad Request"));
    let err = client.submit(&sample_batch()).await.unwrap_err();
    assert_eq!(err, SubmissionError::InvalidRequest);
}

#[tokio::test]
async fn maps_http_409_to_already_referred() {
    let client = client_for(spawn_stub("409 Conflict"));
    let err = client.submit(&sample_batch()).await.unwrap_err();
    assert_eq!(err, SubmissionError::AlreadyReferred);
}

#[tokio::test]
async fn maps_http_422_to_unprocessable() {
    let client = client_for(spawn_stub("422 Unprocessable Entity"));
    let err = client.submit(&sample_batch()).await.unwrap_err();
    assert_eq!(err, SubmissionError::Unprocessable);
}

#[tokio::test]
async fn maps_other_statuses_to_the_generic_failure() {
    let client = client_for(spawn_stub("503 Service Unavailable"));
    let err = client.submit(&sample_batch()).await.unwrap_err();
    assert_eq!(err, SubmissionError::Unexpected { status: 503 });
}

#[tokio::test]
async fn reports_transport_failures_separately() {
    // Bind and immediately drop a listener so the port is closed.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(format!("http://127.0.0.1:{port}/api/referrals"));

    let err = client.submit(&sample_batch()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Network { .. }));
}
