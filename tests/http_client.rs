use std::error::Error;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde_json::{json, Value};

use unglue::remote::{CompileClient, HttpCompileClient, TransportError};

type TestResult = Result<(), Box<dyn Error>>;

/// What the one-shot server saw.
struct SeenRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl SeenRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serve exactly one HTTP response on a local port and hand back the request.
fn serve_once(status_line: &'static str, body: &'static str) -> std::io::Result<(String, JoinHandle<SeenRequest>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let url = format!("http://{}", listener.local_addr()?);

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read header");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((k, v)) = line.split_once(':') {
                headers.push((k.trim().to_string(), v.trim().to_string()));
            }
        }

        let length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);
        let mut req_body = vec![0u8; length];
        reader.read_exact(&mut req_body).expect("read body");

        let mut stream = stream;
        write!(
            stream,
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .expect("write response");
        stream.flush().expect("flush response");

        SeenRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(req_body).expect("utf-8 body"),
        }
    });

    Ok((url, handle))
}

fn client() -> Result<HttpCompileClient, Box<dyn Error>> {
    Ok(HttpCompileClient::new(Duration::from_secs(5))?)
}

#[test]
fn success_status_returns_decoded_body_and_sends_json() -> TestResult {
    let (server, handle) = serve_once("HTTP/1.1 200 OK", r#"{"code":"a{}","map":""}"#)?;

    let body = json!({ "distFile": "layout.css", "files": [] });
    let answer = client()?.post(&format!("{server}/compile/scss"), &body)?;

    let seen = handle.join().map_err(|_| "server thread panicked")?;
    assert_eq!(seen.request_line, "POST /compile/scss HTTP/1.1");
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert_eq!(serde_json::from_str::<Value>(&seen.body)?, body);
    assert_eq!(answer, json!({ "code": "a{}", "map": "" }));
    Ok(())
}

#[test]
fn error_status_uses_message_from_body() -> TestResult {
    let (server, handle) = serve_once("HTTP/1.1 500 Internal Server Error", r#"{"message":"boom"}"#)?;

    let result = client()?.post(&format!("{server}/compile/js"), &json!({}));
    handle.join().map_err(|_| "server thread panicked")?;

    assert_eq!(
        result,
        Err(TransportError::Rejected {
            status: 500,
            message: "boom".to_string(),
        })
    );
    Ok(())
}

#[test]
fn error_status_without_json_falls_back_to_status_text() -> TestResult {
    let (server, handle) = serve_once("HTTP/1.1 502 Bad Gateway", "<html>upstream down</html>")?;

    let result = client()?.post(&format!("{server}/compile/js"), &json!({}));
    handle.join().map_err(|_| "server thread panicked")?;

    assert_eq!(
        result,
        Err(TransportError::Rejected {
            status: 502,
            message: "HTTP error 502 Bad Gateway".to_string(),
        })
    );
    Ok(())
}

#[test]
fn unreachable_server_is_a_network_error() -> TestResult {
    // Bind and drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();

    let result = client()?.post(&format!("http://127.0.0.1:{port}/compile/js"), &json!({}));

    assert!(matches!(result, Err(TransportError::Network(_))));
    Ok(())
}
