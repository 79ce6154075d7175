use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{http::StatusCode, routing::get, Router};
use flate2::{write::GzEncoder, Compression};

use iptv_aggregator::{
    config::{Config, StructuredFeedConfig},
    errors::SourceError,
    ingestor::SourceFetcher,
    models::{HealthStatus, SourceDescriptor},
    pipeline::{HttpStreamProber, PlaylistPipeline, StreamProbe},
    playlist::read_playlist,
    sources::SourceRegistry,
    utils::{HttpFetch, StandardHttpClient},
};

const FEED_JSON: &str = r#"{"regions": {"us": {"channels": {"US1": {"name": "Feed One", "chno": 5, "group": "News"}}}}}"#;
const UNREACHABLE: &str = "http://127.0.0.1:1/live";

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let playlist = format!(
        "#EXTM3U\n#EXTINF:-1 group-title=\"News\",Up Channel\nhttp://{addr}/live\n#EXTINF:-1,Down Channel\nhttp://{addr}/missing\n#EXTINF:-1,Silent Channel\nhttp://{addr}/empty\n"
    );
    let feed = gzip(FEED_JSON.as_bytes());

    let app = Router::new()
        .route("/live", get(|| async { "#EXTM3U\n#EXT-X-VERSION:3\nsegment0.ts\n" }))
        .route("/empty", get(|| async { "" }))
        .route(
            "/hang",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                "too late"
            }),
        )
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "not here") }))
        .route("/playlist.m3u", get(move || async move { playlist }))
        .route("/channels.json.gz", get(move || async move { feed }));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client() -> StandardHttpClient {
    StandardHttpClient::new(Duration::from_secs(5), "test-agent").unwrap()
}

fn prober() -> HttpStreamProber {
    HttpStreamProber::new(Duration::from_secs(5), "test-agent").unwrap()
}

#[tokio::test]
async fn test_fetch_text_success() {
    let addr = spawn_server().await;
    let content = client().fetch_text(&format!("http://{addr}/playlist.m3u")).await.unwrap();
    assert!(content.starts_with("#EXTM3U"));
    assert!(content.contains("Up Channel"));
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let addr = spawn_server().await;
    let err = client()
        .fetch_text(&format!("http://{addr}/missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    let err = client().fetch_text(UNREACHABLE).await.unwrap_err();
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn test_gzip_payload_is_decompressed() {
    let addr = spawn_server().await;
    let bytes = client()
        .fetch_bytes(&format!("http://{addr}/channels.json.gz"))
        .await
        .unwrap();
    assert_eq!(bytes, FEED_JSON.as_bytes());
}

#[tokio::test]
async fn test_probe_outcomes() {
    let addr = spawn_server().await;
    let prober = prober();

    assert_eq!(prober.probe(&format!("http://{addr}/live")).await, HealthStatus::Live);
    assert_eq!(
        prober.probe(&format!("http://{addr}/empty")).await,
        HealthStatus::HttpError(200)
    );
    assert_eq!(
        prober.probe(&format!("http://{addr}/missing")).await,
        HealthStatus::HttpError(404)
    );
    assert_eq!(prober.probe(UNREACHABLE).await, HealthStatus::NetworkError);
}

#[tokio::test]
async fn test_hanging_endpoint_times_out() {
    let addr = spawn_server().await;
    let url = format!("http://{addr}/hang");
    let timeout = Duration::from_millis(500);

    let prober = HttpStreamProber::new(timeout, "test-agent").unwrap();
    let started = Instant::now();
    assert_eq!(prober.probe(&url).await, HealthStatus::NetworkError);
    assert!(started.elapsed() < Duration::from_secs(5));

    let client = StandardHttpClient::new(timeout, "test-agent").unwrap();
    let started = Instant::now();
    let err = client.fetch_text(&url).await.unwrap_err();
    assert_eq!(err.kind(), "network");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_hanging_source_only_skips_itself() {
    let addr = spawn_server().await;
    let mut config = Config::default();
    config.target_regions = vec!["US".to_string()];
    config.health_check.workers = Some(2);

    let registry = SourceRegistry::new(vec![
        SourceDescriptor::plain_text("slow", "Slow", &format!("http://{addr}/hang"), "US"),
        SourceDescriptor::plain_text(
            "local",
            "Local",
            &format!("http://{addr}/playlist.m3u"),
            "US",
        ),
    ]);
    let client = StandardHttpClient::new(Duration::from_millis(500), "test-agent").unwrap();
    let pipeline = PlaylistPipeline::new(&config, Arc::new(client), Arc::new(prober())).unwrap();

    let output = pipeline.run(&registry, &[]).await.unwrap();
    assert_eq!(output.summary.failed_sources(), 1);
    assert_eq!(output.channels.len(), 1);
    assert_eq!(output.channels[0].record.name, "Up Channel");
}

#[tokio::test]
async fn test_structured_feed_over_http() {
    let addr = spawn_server().await;
    let fetcher = SourceFetcher::new(
        Arc::new(client()),
        StructuredFeedConfig {
            url: format!("http://{addr}/channels.json.gz"),
            ..StructuredFeedConfig::default()
        },
    );

    let records = fetcher
        .collect(&SourceDescriptor::structured_feed("samsung_us", "Samsung TV Plus US", "us"))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, "https://jmp2.uk/stvp-US1");
    assert!(records[0].extinf.contains("tvg-chno=\"5\""));
}

#[tokio::test]
async fn test_end_to_end_against_local_server() {
    let addr = spawn_server().await;
    let mut config = Config::default();
    config.target_regions = vec!["US".to_string()];
    config.health_check.workers = Some(2);

    let registry = SourceRegistry::new(vec![SourceDescriptor::plain_text(
        "local",
        "Local",
        &format!("http://{addr}/playlist.m3u"),
        "US",
    )]);
    let pipeline =
        PlaylistPipeline::new(&config, Arc::new(client()), Arc::new(prober())).unwrap();

    let output = pipeline.run(&registry, &[]).await.unwrap();
    let entries = read_playlist(&output.playlist);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Up Channel");
    assert_eq!(entries[0].group, "USA");
    assert_eq!(output.summary.probes.http_errors.get(&404), Some(&1));
    assert_eq!(output.summary.probes.http_errors.get(&200), Some(&1));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/playlist.m3u");
    iptv_aggregator::playlist::write_playlist(&path, &output.playlist)
        .await
        .unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_playlist(&written).len(), 1);
}
