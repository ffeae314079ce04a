//! Minimal HTTP/1.1 server for crawl integration tests.
//!
//! Serves a fixed table of path -> (content type, body) routes. Responds to
//! GET with 200 and the route's body, or 404 for unknown paths. Runs in a
//! background thread until the process exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

type Routes = HashMap<String, (String, String)>;

/// Starts a server serving `routes` as (path, content_type, body) triples.
/// Returns the base URL without a trailing slash (e.g. "http://127.0.0.1:12345").
pub fn start(routes: Vec<(&str, &str, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<Routes> = Arc::new(
        routes
            .into_iter()
            .map(|(path, content_type, body)| {
                (path.to_string(), (content_type.to_string(), body))
            })
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &Routes) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    let path = match request_path(request) {
        Some(path) => path,
        None => return,
    };

    match routes.get(path) {
        Some((content_type, body)) => {
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                content_type,
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.write_all(body.as_bytes());
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}

/// Extracts the request path from the first request line, query stripped.
fn request_path(request: &str) -> Option<&str> {
    let first_line = request.lines().next()?;
    let target = first_line.split_whitespace().nth(1)?;
    Some(target.split('?').next().unwrap_or(target))
}
