// tests/common/mod.rs
//
// Minimal canned-response HTTP server. Each test spins one up on an
// ephemeral port and points an ApiClient at it; unknown paths get the
// server's JSON 404 shape.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

pub struct StubServer {
    pub base_url: String,
}

type Routes = Arc<Vec<(String, String)>>;

pub fn start(routes: &[(&str, &str)]) -> StubServer {
    start_owned(
        routes
            .iter()
            .map(|(p, b)| (p.to_string(), b.to_string()))
            .collect(),
    )
}

/// Same server, but with request bodies composed at runtime (e.g. to
/// embed today's date).
#[allow(dead_code)]
pub fn start_owned(routes: Vec<(String, String)>) -> StubServer {
    let routes: Routes = Arc::new(routes);
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, routes));
        }
    });
    StubServer {
        base_url: format!("http://{addr}"),
    }
}

fn handle(mut stream: TcpStream, routes: Routes) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    });

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // drain headers; bodies are ignored (only empty POSTs come in)
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split('?').next().unwrap_or(target);

    let (status, body) = match routes.iter().find(|(p, _)| *p == path) {
        Some((_, body)) => ("200 OK", (*body).to_string()),
        None => (
            "404 Not Found",
            format!(
                r#"{{"status":404,"error":"Not Found","message":"no handler","path":"{path}"}}"#
            ),
        ),
    };

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}
