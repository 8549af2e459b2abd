//! `HttpJobSource` against a one-shot HTTP server on a local socket.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use jobboard::client::{HttpJobSource, JobSource};
use jobboard::{ApiConfig, FetchError};

const BODY: &str = r#"[
    {"id": 1, "title": "Rust Engineer", "company": "Ferrous", "location": "Remote",
     "salary": 150000, "job_type": "Senior", "post_date": "2025-03-01",
     "job_link": "https://ferrous.example/jobs/1"},
    {"id": 2, "title": "Support", "company": "Helpdesk", "location": "N/A",
     "salary": null, "job_type": null, "post_date": "2025-02-01",
     "job_link": "https://helpdesk.example/2"}
]"#;

/// Serves one response, then reports the request line and headers it received.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut head = Vec::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 {
                break;
            }
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            head.push(line);
        }

        let content_length = head
            .iter()
            .find_map(|h| {
                let (name, value) = h.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        let mut discard = vec![0; content_length];
        reader.read_exact(&mut discard).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
        tx.send(head).unwrap();
    });

    (base_url, rx)
}

fn header<'a>(head: &'a [String], name: &str) -> Option<&'a str> {
    head.iter().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim().eq_ignore_ascii_case(name).then(|| value.trim())
    })
}

fn source(base_url: String, token: &str) -> HttpJobSource {
    HttpJobSource::new(&ApiConfig {
        base_url,
        token: token.to_string(),
    })
    .unwrap()
}

#[test]
fn fetches_and_decodes_the_batch() {
    let (base_url, requests) = serve_once("200 OK", BODY);

    let jobs = source(base_url, "secret").fetch_jobs().unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Rust Engineer");
    assert_eq!(jobs[0].salary, Some(150_000));
    assert_eq!(jobs[1].salary, None);
    assert!(jobs[1].is_local());
    assert!(jobs.iter().all(|job| !job.applied_to));

    let head = requests.recv().unwrap();
    assert!(head[0].starts_with("GET /jobs "), "request line was {}", head[0]);
    assert_eq!(header(&head, "x_token"), Some("secret"));
    assert_eq!(header(&head, "accept"), Some("application/json"));
}

#[test]
fn base_url_with_path_prefix_keeps_it() {
    let (base_url, requests) = serve_once("200 OK", "[]");

    let jobs = source(format!("{base_url}/api/v1/"), "t").fetch_jobs().unwrap();

    assert!(jobs.is_empty());
    let head = requests.recv().unwrap();
    assert!(head[0].starts_with("GET /api/v1/jobs "), "request line was {}", head[0]);
}

#[test]
fn non_success_status_is_reported() {
    let (base_url, _requests) = serve_once("503 Service Unavailable", "down");

    let err = source(base_url, "t").fetch_jobs().unwrap_err();

    assert_eq!(err, FetchError::HttpStatus { status: 503 });
}

#[test]
fn malformed_record_fails_the_whole_fetch() {
    let (base_url, _requests) = serve_once(
        "200 OK",
        r#"[{"id": 1, "title": "t", "company": "c", "location": "l",
             "post_date": "2025-01-01", "job_link": "not a url"}]"#,
    );

    let err = source(base_url, "t").fetch_jobs().unwrap_err();

    assert!(matches!(err, FetchError::MalformedRecord { index: 0, .. }));
}

#[test]
fn non_array_body_is_a_decode_failure() {
    let (base_url, _requests) = serve_once("200 OK", r#"{"error": "nope"}"#);

    let err = source(base_url, "t").fetch_jobs().unwrap_err();

    assert!(matches!(err, FetchError::DecodeFailure(_)));
}

#[test]
fn unreachable_host_is_a_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = source(base_url, "t").fetch_jobs().unwrap_err();

    assert!(matches!(err, FetchError::NetworkFailure(_)));
}
