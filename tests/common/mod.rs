#![allow(dead_code)]

use serde_json::{Value, json};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fileproc::models::{EndpointVariant, Endpoints};
use fileproc::services::http_api::HttpFileApi;
use fileproc::services::processor::FileProcessor;
use fileproc::traits::file_api::FileApi;

pub fn sample_listing() -> Value {
    json!([
        {
            "file_id": "4f1c",
            "file_name": "holiday.mkv",
            "file_path": "/media/holiday.mkv",
            "initial_size": 4000,
            "current_size": 1000,
            "deleted": false,
            "converted": true,
            "processed": true
        },
        {
            "file_id": "9ab2",
            "file_name": "raw.avi",
            "file_path": "/media/raw.avi",
            "initial_size": 4000,
            "current_size": 4000,
            "deleted": false,
            "converted": false,
            "processed": false
        }
    ])
}

pub async fn mount_json(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_delayed(server: &MockServer, verb: &str, route: &str, body: Value, delay: Duration) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_text(server: &MockServer, verb: &str, route: &str, status: u16, body: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

pub fn api_for(server: &MockServer, variant: EndpointVariant) -> HttpFileApi {
    HttpFileApi::builder()
        .base_url(server.uri())
        .endpoints(Endpoints::for_variant(variant))
        .build()
        .unwrap()
}

pub fn processor_for(server: &MockServer) -> FileProcessor {
    let api: Arc<dyn FileApi> = Arc::new(api_for(server, EndpointVariant::Script));
    FileProcessor::builder().api(api).build()
}

/// Base URL of a port nothing listens on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn write_config(dir: &std::path::Path, yaml: &str) -> std::path::PathBuf {
    let p = dir.join("fileproc.yaml");
    fs::write(&p, yaml).unwrap();
    p
}
