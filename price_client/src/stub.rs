//! Minimal in-process HTTP stub used by the unit tests.
//!
//! Binds a `TcpListener` on an ephemeral loopback port and answers each GET
//! with a canned response selected by the request target. Implements just
//! enough HTTP/1.1 for a blocking `reqwest` client: status line,
//! `Content-Length`, `Connection: close`. Unknown targets get a 404.
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Canned response for one request target (path plus query string).
#[derive(Debug, Clone)]
pub struct StubRoute {
    target: String,
    status: u16,
    body: String,
}

impl StubRoute {
    /// Creates a route answering `target` with `status` and `body`.
    pub fn new(target: &str, status: u16, body: &str) -> Self {
        StubRoute {
            target: target.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

/// In-process stub server; lives until the test process exits.
pub struct StubServer {
    base_url: String,
}

impl StubServer {
    /// Binds `127.0.0.1:0` and starts serving `routes` on a background thread.
    pub fn start(routes: Vec<StubRoute>) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub listener");
        let base_url = format!(
            "http://{}",
            listener.local_addr().expect("stub listener has no address")
        );

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let routes = routes.clone();
                thread::spawn(move || handle_connection(stream, &routes));
            }
        });

        StubServer { base_url }
    }

    /// Base URL (`http://127.0.0.1:<port>`) to point an `ExchangeApi` at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn handle_connection(stream: TcpStream, routes: &[StubRoute]) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }

    // Drain the headers; GET requests carry no body.
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(_) if line == "\r\n" || line.is_empty() => break,
            Ok(_) => continue,
            Err(_) => return,
        }
    }

    let target = request_line.split_whitespace().nth(1).unwrap_or("");
    let (status, body) = match routes.iter().find(|r| r.target == target) {
        Some(route) => (route.status, route.body.as_str()),
        None => (404, ""),
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason_phrase(status),
        body.len(),
        body
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unspecified",
    }
}
