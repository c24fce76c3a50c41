use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

mod common;

use crate::common::{dead_base_url, mount_delayed, mount_json, mount_text, processor_for, sample_listing};
use fileproc::services::http_api::HttpFileApi;
use fileproc::services::processor::{Action, FileProcessor};
use fileproc::sinks::{FileSink, OutputSink};
use fileproc::traits::file_api::FileApi;

#[tokio::test]
async fn listing_is_rendered_with_two_space_indent() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/files", 200, json!({"files": ["a.txt", "b.txt"]})).await;

    let p = processor_for(&server);
    p.run(Action::ListFiles).await.unwrap();
    assert_eq!(p.slot().get(), "{\n  \"files\": [\n    \"a.txt\",\n    \"b.txt\"\n  ]\n}");
}

#[tokio::test]
async fn malformed_body_renders_error_and_session_continues() {
    let server = MockServer::start().await;
    mount_text(&server, "GET", "/files/check", 200, "OK").await;
    mount_json(&server, "GET", "/files", 200, json!({"a": 1})).await;

    let p = processor_for(&server);
    let err = p.run(Action::CheckFiles).await.unwrap_err();
    assert_eq!(err.kind(), "parse");
    assert!(p.slot().get().starts_with("error: check_files: invalid JSON in response"));

    p.run(Action::ListFiles).await.unwrap();
    assert_eq!(p.slot().get(), "{\n  \"a\": 1\n}");
}

#[tokio::test]
async fn network_failure_is_rendered() {
    let api: Arc<dyn FileApi> = Arc::new(HttpFileApi::builder().base_url(dead_base_url()).build().unwrap());
    let p = FileProcessor::builder().api(api).build();
    assert!(p.run(Action::ProcessUnconverted).await.is_err());
    assert!(p.slot().get().starts_with("error: process_unconverted: network error"));
}

#[tokio::test]
async fn slower_first_call_overwrites_faster_second() {
    let server = MockServer::start().await;
    mount_delayed(&server, "GET", "/files", json!({"source": "list"}), Duration::from_millis(400)).await;
    mount_json(&server, "GET", "/files/check", 200, json!({"source": "check"})).await;

    let p = processor_for(&server);
    let results = p.run_all(vec![Action::ListFiles, Action::CheckFiles]).await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap()["source"], "list");
    assert_eq!(p.slot().get(), "{\n  \"source\": \"list\"\n}");
}

#[tokio::test]
async fn slower_second_call_wins_too() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/files", 200, json!({"source": "list"})).await;
    mount_delayed(&server, "GET", "/files/check", json!({"source": "check"}), Duration::from_millis(400)).await;

    let p = processor_for(&server);
    p.run_all(vec![Action::ListFiles, Action::CheckFiles]).await;
    assert_eq!(p.slot().get(), "{\n  \"source\": \"check\"\n}");
}

#[tokio::test]
async fn stats_and_file_sink() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/files", 200, sample_listing()).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("last.json");

    let api: Arc<dyn FileApi> = Arc::new(HttpFileApi::builder().base_url(server.uri()).build().unwrap());
    let sinks: Vec<Box<dyn OutputSink>> = vec![Box::new(FileSink { path: out.clone(), max_chars: None, append: false })];
    let p = FileProcessor::builder().api(api).sinks(sinks).build();
    let v = p.run(Action::Stats).await.unwrap();
    assert_eq!(v["total"], 2);
    assert_eq!(v["converted"], 1);
    assert_eq!(v["bytes_saved"], 3000);
    assert_eq!(v["percent_saved"], 37.5);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), format!("{}\n", p.slot().get()));
}

#[tokio::test]
async fn listing_keeps_server_key_order() {
    let server = MockServer::start().await;
    let raw = r#"[{"file_id":"x","file_name":"a.mkv","file_path":"/a.mkv","initial_size":10,"current_size":10,"deleted":false,"converted":false}]"#;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/files"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let p = processor_for(&server);
    p.run(Action::ListFiles).await.unwrap();

    let keys: Vec<String> = p
        .slot()
        .get()
        .lines()
        .filter_map(|l| l.trim().strip_prefix('"').and_then(|rest| rest.split('"').next()).map(str::to_string))
        .collect();
    assert_eq!(
        keys,
        ["file_id", "file_name", "file_path", "initial_size", "current_size", "deleted", "converted"]
    );
}
