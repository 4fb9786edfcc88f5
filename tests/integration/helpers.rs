//! Test helpers: a loopback HTTP stub standing in for the deployed app.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
    pub content_type: &'static str,
    pub extra_headers: Vec<(String, String)>,
    pub delay: Duration,
}

impl Route {
    pub fn html(status: u16) -> Self {
        Self {
            status,
            body: "<html><body>ok</body></html>".to_string(),
            content_type: "text/html",
            extra_headers: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "application/json",
            extra_headers: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.extra_headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names lowercased
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Serve `routes` (keyed by path) on an ephemeral loopback port. Unknown
    /// paths answer 404. The server thread lives until the test process exits.
    pub fn start(routes: HashMap<String, Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let _ = handle(stream, &routes, &recorded);
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(
    stream: TcpStream,
    routes: &HashMap<String, Route>,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }

    let length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body)?;

    recorded.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let route = routes.get(&path).cloned().unwrap_or(Route {
        status: 404,
        body: "not found".to_string(),
        content_type: "text/plain",
        extra_headers: Vec::new(),
        delay: Duration::ZERO,
    });
    if !route.delay.is_zero() {
        thread::sleep(route.delay);
    }

    let mut response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.content_type,
        route.body.len()
    );
    for (name, value) in &route.extra_headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str("\r\n");
    response.push_str(&route.body);

    let mut stream = stream;
    stream.write_all(response.as_bytes())?;
    stream.flush()
}

/// Every route a fully working deployment answers.
pub fn healthy_routes() -> HashMap<String, Route> {
    let mut routes = HashMap::new();
    for path in [
        "/",
        "/auth",
        "/dashboard",
        "/network-monitor",
        "/ai-analysis",
        "/threat-intelligence",
        "/optimization-center",
        "/system-settings",
        "/free-access",
    ] {
        routes.insert(path.to_string(), Route::html(200));
    }
    routes.insert(
        "/api/system-status".to_string(),
        Route::json(200, serde_json::json!({"status": "operational"})),
    );
    routes.insert(
        "/api/realtime-data".to_string(),
        Route::json(
            200,
            serde_json::json!({
                "ai_confidence": 96,
                "system_health": {"cpu": 12},
                "threat_feed": [],
                "charts": {}
            }),
        ),
    );
    routes.insert(
        "/api/auth/login".to_string(),
        Route::json(200, serde_json::json!({"success": true, "token": "stub-token"})),
    );
    routes
}

/// A loopback address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}
