// tests/dispatch_http.rs
//
// Dispatcher over real HTTP against a localhost stub.

mod common;

use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use gacha_roster::config::Game;
use gacha_roster::config::options::FetchOptions;
use gacha_roster::core::{HttpFetcher, PageSource};
use gacha_roster::engine::RosterService;
use gacha_roster::error::{FetchError, RosterError};

fn opts() -> FetchOptions {
    FetchOptions::default().with_timeout(Duration::from_secs(5))
}

#[test]
fn http_500_is_empty_roster() {
    let stub = common::serve_once("500 Internal Server Error", "boom");
    let svc = RosterService::http(&opts()).unwrap().with_source_url(Game::Zzz, &stub.url);

    let roster = svc.current_roster("zzz");
    assert!(roster.is_empty());
}

#[test]
fn http_500_typed_cause() {
    let stub = common::serve_once("500 Internal Server Error", "boom");
    let svc = RosterService::http(&opts()).unwrap().with_source_url(Game::Genshin, &stub.url);

    match svc.try_roster(Game::Genshin) {
        Err(RosterError::Fetch(e @ FetchError::Status { .. })) => assert_eq!(e.status(), Some(500)),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn sends_tool_headers_and_reads_body() {
    let stub = common::serve_once("200 OK", common::STARRAIL);
    let svc = RosterService::http(&opts()).unwrap().with_source_url(Game::StarRail, &stub.url);

    let roster = svc.current_roster("HSR");
    assert_eq!(roster.into_vec(), vec!["Fugue", "Jiaoqiu"]);

    let req = stub.request.recv_timeout(Duration::from_secs(5)).unwrap().to_ascii_lowercase();
    assert!(req.starts_with("get /wiki/page"));
    assert!(req.contains("user-agent: mozilla/5.0 (compatible; gacha_roster/"));
    assert!(req.contains("accept-language: en-us,en;q=0.9,th;q=0.8"));
}

#[test]
fn connection_refused_is_transport_error() {
    // bind then drop to get a port nobody listens on
    let port = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap().local_addr().unwrap().port();
    let fetcher = HttpFetcher::new(&opts()).unwrap();

    let err = fetcher.fetch(&format!("http://127.0.0.1:{port}/")).unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

#[test]
fn silent_server_hits_timeout() {
    // accept, read the request, never answer
    let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            thread::sleep(Duration::from_secs(8));
        }
    });

    let fetcher = HttpFetcher::new(&FetchOptions::default().with_timeout(Duration::from_secs(1))).unwrap();
    let started = Instant::now();
    let err = fetcher.fetch(&format!("http://127.0.0.1:{port}/")).unwrap_err();

    assert!(matches!(&err, FetchError::Transport { source, .. } if source.is_timeout()), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn default_timeout_is_bounded() {
    let opts = FetchOptions::default();
    assert_eq!(opts.timeout, Duration::from_secs(gacha_roster::config::consts::DEFAULT_TIMEOUT_SECS));
    assert!(HttpFetcher::new(&opts).is_ok());
}

#[test]
fn unknown_game_never_connects() {
    let stub = common::serve_once("200 OK", common::ZZZ);
    let svc = RosterService::http(&opts()).unwrap().with_source_url(Game::Zzz, &stub.url);

    assert!(svc.current_roster("wuwa").is_empty());
    assert!(stub.request.recv_timeout(Duration::from_millis(300)).is_err());
}

#[test]
fn free_function_unknown_id_is_empty() {
    assert!(gacha_roster::current_roster("not-a-game").is_empty());
}
