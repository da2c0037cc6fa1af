//! Minimal one-shot HTTP responder.
//!
//! Serves exactly one request on an ephemeral local port so success
//! paths can run without a real server. The handle yields the raw
//! request text for asserting on the route and body the CLI sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// Spawn a listener that answers one request with `status` and `body`.
///
/// Returns the base URL to point the CLI at and a handle resolving to
/// the raw request once the exchange completes.
pub fn one_shot(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub server");
    let base_url = format!(
        "http://{}",
        listener.local_addr().expect("stub server has no address")
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("stub server accept failed");
        let request = read_request(&mut stream);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream
            .write_all(response.as_bytes())
            .expect("stub server write failed");

        request
    });

    (base_url, handle)
}

/// Read until the headers and a Content-Length-sized body have arrived.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).expect("stub server read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let expected = header_end + 4 + content_length(&text[..header_end]);
            if buf.len() >= expected {
                return text;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}
