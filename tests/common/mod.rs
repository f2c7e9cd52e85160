// tests/common/mod.rs
//
// One-shot HTTP/1.0 stub server on localhost, plus fixture loading.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const ZZZ: &str = include_str!("../fixtures/zzz.html");
pub const GENSHIN: &str = include_str!("../fixtures/genshin.html");
pub const STARRAIL: &str = include_str!("../fixtures/starrail.html");

pub struct Stub {
    pub url: String,
    /// Raw request head as received.
    pub request: mpsc::Receiver<String>,
}

/// Serve exactly one request with `status` and `body`, then close.
pub fn serve_once(status: &str, body: &str) -> Stub {
    let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    let resp = format!(
        "HTTP/1.0 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        let Ok((mut s, _)) = listener.accept() else { return };
        s.set_read_timeout(Some(Duration::from_secs(5))).ok();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while let Ok(n) = s.read(&mut chunk) {
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
        let _ = s.write_all(resp.as_bytes());
        let _ = s.flush();
    });

    Stub { url: format!("http://{addr}/wiki/page"), request: rx }
}
