//! Tests for the sequential batch download loop.

use postrip::downloader::BatchDownloaderBuilder;
use postrip::http::{create_http_client, HttpClientConfig};
use postrip::{Status, StyleOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let downloader =
        BatchDownloaderBuilder::new().build_with(RecordingFetcher::default(), MemorySink::default());

    assert_eq!(downloader.pacing(), Duration::from_millis(500));
    assert_eq!(downloader.filename_prefix(), "insta");
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = BatchDownloaderBuilder::new()
        .directory(temp_dir.path().to_path_buf())
        .pacing(Duration::from_millis(20))
        .filename_prefix("post")
        .style_options(StyleOptions::hidden())
        .build_with(RecordingFetcher::default(), MemorySink::default());

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.pacing(), Duration::from_millis(20));
    assert_eq!(downloader.filename_prefix(), "post");
    assert!(format!("{:?}", downloader).contains("BatchDownloader"));
}

#[tokio::test(start_paused = true)]
async fn test_fetches_in_order_with_fixed_pacing() {
    let urls = create_test_urls(4);
    let fetcher = RecordingFetcher::failing_on(vec![urls[1].clone()]);
    let downloader =
        BatchDownloaderBuilder::hidden().build_with(fetcher.clone(), MemorySink::default());

    let start = Instant::now();
    let summaries = downloader.download(TEST_OWNER, &urls).await;
    let elapsed = start.elapsed();

    // One fetch per URL, in order, failures included.
    assert_eq!(fetcher.urls(), urls);
    assert_eq!(summaries.len(), 4);

    // Exactly N-1 pauses of 500ms, none after the last item.
    assert!(elapsed >= Duration::from_millis(1500), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(1510), "elapsed {:?}", elapsed);

    let calls = fetcher.calls();
    for pair in calls.windows(2) {
        let gap = pair[1].1 - pair[0].1;
        assert!(gap >= Duration::from_millis(500), "gap {:?}", gap);
        assert!(gap < Duration::from_millis(505), "gap {:?}", gap);
    }
}

#[tokio::test(start_paused = true)]
async fn test_failed_item_does_not_stop_batch() {
    let urls = create_test_urls(3);
    let fetcher = RecordingFetcher::failing_on(vec![urls[1].clone()]);
    let sink = MemorySink::default();
    let downloader = BatchDownloaderBuilder::hidden().build_with(fetcher, sink.clone());

    let summaries = downloader.download(TEST_OWNER, &urls).await;

    assert!(summaries[0].is_success());
    assert!(matches!(summaries[1].status(), Status::Fail(msg) if msg.contains("502")));
    assert!(summaries[2].is_success());

    let names = sink.filenames();
    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("insta - jdoe -"));
    assert!(names[0].ends_with(" -1.jpg"));
    assert!(names[1].ends_with(" -3.jpg"));
}

#[tokio::test]
async fn test_zero_pacing_and_empty_batch() {
    let downloader = BatchDownloaderBuilder::hidden()
        .pacing(Duration::ZERO)
        .build_with(RecordingFetcher::default(), MemorySink::default());

    assert!(downloader.download(TEST_OWNER, &[]).await.is_empty());

    let summaries = downloader.download(TEST_OWNER, &create_test_urls(2)).await;
    assert!(summaries.iter().all(|s| s.is_success()));
}

#[tokio::test]
async fn test_filename_layout() {
    let sink = MemorySink::default();
    let downloader = BatchDownloaderBuilder::hidden()
        .pacing(Duration::ZERO)
        .build_with(RecordingFetcher::default(), sink.clone());

    let summaries = downloader.download(TEST_OWNER, &create_test_urls(2)).await;

    for (position, summary) in summaries.iter().enumerate() {
        let name = summary.filename();
        let rest = name.strip_prefix("insta - jdoe -").unwrap();
        let (millis, suffix) = rest.split_once(" -").unwrap();
        assert!(millis.parse::<i64>().unwrap() > 1_600_000_000_000);
        assert_eq!(suffix, format!("{}.jpg", position + 1));
    }
    assert_eq!(sink.filenames().len(), 2);
}

#[tokio::test]
async fn test_on_complete_called_for_every_item() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let urls = create_test_urls(3);

    let downloader = BatchDownloaderBuilder::hidden()
        .pacing(Duration::ZERO)
        .on_complete(move |summary| {
            seen_clone
                .lock()
                .unwrap()
                .push((summary.position(), summary.is_success()));
        })
        .build_with(
            RecordingFetcher::failing_on(vec![urls[2].clone()]),
            MemorySink::default(),
        );

    downloader.download(TEST_OWNER, &urls).await;

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(0, true), (1, true), (2, false)]
    );
}

#[tokio::test]
async fn test_http_download_to_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"first".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img2.jpg"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp_dir = create_temp_dir();
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let downloader = BatchDownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .pacing(Duration::ZERO)
        .build(client);

    let urls: Vec<reqwest::Url> = vec![
        format!("{}/img1.jpg", server.uri()).parse().unwrap(),
        format!("{}/img2.jpg", server.uri()).parse().unwrap(),
    ];
    let summaries = downloader.download("alice", &urls).await;

    assert!(summaries[0].is_success());
    assert_eq!(summaries[0].size(), 5);
    assert!(!summaries[1].is_success());

    let files = list_files(temp_dir.path());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0], summaries[0].filename());
    assert_eq!(
        std::fs::read(temp_dir.path().join(&files[0])).unwrap(),
        b"first"
    );
}

#[tokio::test]
async fn test_owner_with_path_separator_saves_in_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"first".to_vec()))
        .mount(&server)
        .await;

    let temp_dir = create_temp_dir();
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let downloader = BatchDownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .build(client);

    let urls: Vec<reqwest::Url> = vec![format!("{}/img1.jpg", server.uri()).parse().unwrap()];
    let summaries = downloader.download("team/alice", &urls).await;

    assert!(summaries[0].is_success());
    let files = list_files(temp_dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("insta - team_alice -"));
}
