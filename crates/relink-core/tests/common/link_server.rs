//! Minimal HTTP/1.1 server that answers GETs with configurable `Link` headers.
//!
//! Each route maps a request path to a status line and extra header lines.
//! Unknown paths get 404 with no headers. Every response has an empty body
//! and `Connection: close`.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub headers: Vec<String>,
}

impl Route {
    pub fn ok(headers: &[&str]) -> Self {
        Self {
            status: "200 OK",
            headers: headers.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: "302 Found",
            headers: vec![format!("Location: {location}")],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkServerOptions {
    /// Response delays applied by request arrival order (cycled). Empty = no delay.
    pub delays: Vec<Duration>,
}

pub struct LinkServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl LinkServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> LinkServer {
    start_with_options(routes, LinkServerOptions::default())
}

pub fn start_with_options(routes: Vec<(&str, Route)>, opts: LinkServerOptions) -> LinkServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = server_hits.fetch_add(1, Ordering::SeqCst);
            let routes = Arc::clone(&routes);
            let delay = if opts.delays.is_empty() {
                None
            } else {
                Some(opts.delays[n % opts.delays.len()])
            };
            thread::spawn(move || handle(stream, &routes, delay));
        }
    });
    LinkServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

/// A port on 127.0.0.1 with nothing listening (connections are refused).
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, delay: Option<Duration>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let path = request_path(request);

    if let Some(d) = delay {
        thread::sleep(d);
    }

    let (status, headers) = match routes.get(path) {
        Some(route) => (route.status, route.headers.clone()),
        None => ("404 Not Found", Vec::new()),
    };
    let mut response = format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n");
    for h in headers {
        response.push_str(&h);
        response.push_str("\r\n");
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
}

/// Path of the request line, without query.
fn request_path(request: &str) -> &str {
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    target.split('?').next().unwrap_or("/")
}
