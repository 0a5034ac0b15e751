use std::time::Duration;

use futures_util::StreamExt;
use wordcount_engine::{read_body, FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(settings: FetchSettings) -> ReqwestFetcher {
    ReqwestFetcher::new(settings).expect("client builds")
}

#[tokio::test]
async fn open_streams_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello streaming world"))
        .mount(&server)
        .await;

    let url = format!("{}/doc", server.uri());
    let body = fetcher(FetchSettings::default()).open(&url).await.expect("open ok");
    assert_eq!(read_body(body).await.unwrap(), b"hello streaming world");
}

#[tokio::test]
async fn open_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let err = fetcher(FetchSettings::default())
        .open(&url)
        .await
        .err()
        .expect("status error");
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.url, url);
}

#[tokio::test]
async fn open_rejects_empty_and_relative_urls_without_io() {
    let fetcher = fetcher(FetchSettings::default());
    for url in ["", "/item/1.json", "not a url"] {
        let err = fetcher.open(url).await.err().expect("invalid url");
        assert_eq!(err.kind, FailureKind::InvalidUrl, "url={url:?}");
    }
}

#[tokio::test]
async fn open_reports_connection_refused_as_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/gone", listener.local_addr().unwrap());
    drop(listener);

    let err = fetcher(FetchSettings::default())
        .open(&url)
        .await
        .err()
        .expect("connect error");
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn open_times_out_on_slow_response_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let url = format!("{}/slow", server.uri());
    let err = fetcher(settings).open(&url).await.err().expect("timeout");
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn body_can_be_consumed_chunk_by_chunk() {
    let server = MockServer::start().await;
    let payload = "word ".repeat(10_000);
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(200).set_body_string(payload.clone()))
        .mount(&server)
        .await;

    let url = format!("{}/big", server.uri());
    let mut body = fetcher(FetchSettings::default()).open(&url).await.unwrap();
    let mut total = 0;
    while let Some(chunk) = body.next().await {
        total += chunk.unwrap().len();
    }
    assert_eq!(total, payload.len());
}
