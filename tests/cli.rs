use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixbroken() -> Command {
    let mut cmd = Command::cargo_bin("fixbroken").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("MOSAIC_API_URL");
    cmd
}

#[test]
fn missing_arguments_exit_with_one() {
    fixbroken().assert().code(1).stderr(predicate::str::contains("required"));

    fixbroken()
        .args(["token", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PROJECT_DIR"));
}

#[test]
fn non_numeric_project_id_exits_with_one() {
    fixbroken()
        .args(["token", "not-a-number", "/tmp"])
        .assert()
        .code(1);
}

#[test]
fn help_exits_cleanly() {
    fixbroken()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_project_exits_cleanly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42/samples"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let url = server.uri();
    tokio::task::spawn_blocking(move || {
        let dir = tempfile::tempdir().unwrap();
        fixbroken()
            .args(["token", "42"])
            .arg(dir.path())
            .args(["--api-url", url.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 file(s) across 0 sample(s)"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn sample_listing_failure_exits_with_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42/samples"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let url = server.uri();
    tokio::task::spawn_blocking(move || {
        let dir = tempfile::tempdir().unwrap();
        fixbroken()
            .args(["token", "42"])
            .arg(dir.path())
            .args(["--api-url", url.as_str()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("403"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn moved_cram_is_repaired_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let bams = dir.path().join("Data/PolishedBams");
    fs::create_dir_all(&bams).unwrap();
    fs::write(bams.join("S1.cram"), b"alignments").unwrap();
    let expected_uri = format!("file://{}", bams.join("S1.cram").display());
    let stale_uri = format!("file://{}", dir.path().join("Old/S1.cram").display());

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42/samples"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/42/samples/1/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 9, "type": "cram", "name": "S1.cram", "nickname": "S1.cram",
                      "uri": stale_uri, "size": "10"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/projects/42/samples/1/files/9"))
        .and(body_json(json!({"uri": expected_uri})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let url = server.uri();
    let project_dir = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        fixbroken()
            .args(["token", "42"])
            .arg(&project_dir)
            .args(["--api-url", url.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 repaired"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn dry_run_sends_no_update() {
    let dir = tempfile::tempdir().unwrap();
    let bams = dir.path().join("Data/PolishedBams");
    fs::create_dir_all(&bams).unwrap();
    fs::write(bams.join("S1.cram"), b"alignments").unwrap();
    let stale_uri = format!("file://{}", dir.path().join("Old/S1.cram").display());

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42/samples"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/42/samples/1/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 9, "type": "cram", "name": "S1.cram", "nickname": "S1.cram",
                      "uri": stale_uri, "size": "10"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let url = server.uri();
    let project_dir = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        fixbroken()
            .args(["token", "42"])
            .arg(&project_dir)
            .args(["--api-url", url.as_str(), "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("would be repaired"));
    })
    .await
    .unwrap();
}
