//! CLI tests against a mock showcase API.
//!
//! Each test starts a wiremock server and runs the compiled binary with
//! `--api` pointed at it.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary against `api`, feeding `stdin` if given.
async fn run_cli(api: String, args: &[&str], stdin: Option<&str>) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let stdin = stdin.map(str::to_string);

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_showcase"));
        cmd.args(&args)
            .arg("--api")
            .arg(&api)
            .env("NO_COLOR", "1")
            .env_remove("SHOWCASE_API")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to execute CLI");
        {
            let mut handle = child.stdin.take().expect("stdin is piped");
            if let Some(input) = stdin {
                handle
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
            }
        }
        child.wait_with_output().expect("Failed to wait for CLI")
    })
    .await
    .expect("CLI task panicked")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

async fn mount_list(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_renders_cards() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        json!({
            "items": [{
                "repo_url": "https://github.com/octo/demo",
                "title": "Demo",
                "owner": "octo",
                "repo": "demo",
                "submitter": "sam",
                "description": "Does demo things",
                "createdAt": 1_700_000_000
            }],
            "next_cursor": "abc"
        }),
    )
    .await;

    let output = run_cli(server.uri(), &["list"], None).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Demo"));
    assert!(out.contains("octo/demo • 2023-11-14 22:13 UTC • by sam"));
    assert!(out.contains("Does demo things"));
    assert!(out.contains("https://github.com/octo/demo"));
    assert!(stderr(&output).contains("Next cursor: abc"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_lines() {
    let server = MockServer::start().await;
    mount_list(&server, json!([{"url": {"S": "https://github.com/a/b"}}, {}])).await;

    let output = run_cli(server.uri(), &["list", "--json"], None).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let records: Vec<Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["repo_url"], "https://github.com/a/b");
    assert_eq!(records[1]["repo_url"], "#");
    assert_eq!(records[1]["title"], "(untitled)");
    assert_eq!(records[1]["createdAt"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_all_follows_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"title": "second"}]
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_list(
        &server,
        json!({"items": [{"title": "first"}], "next_cursor": "abc"}),
    )
    .await;

    let output = run_cli(server.uri(), &["list", "--all", "--json"], None).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let titles: Vec<String> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["title"].to_string())
        .collect();
    assert_eq!(titles, vec!["\"first\"", "\"second\""]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_empty() {
    let server = MockServer::start().await;
    mount_list(&server, json!({"items": []})).await;

    let output = run_cli(server.uri(), &["list"], None).await;
    assert!(output.status.success());
    assert!(stderr(&output).contains("No submissions yet."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Invalid cursor"})))
        .mount(&server)
        .await;

    let output = run_cli(server.uri(), &["list", "--cursor", "zzz"], None).await;
    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(err.lines().any(|line| line == "Error: Invalid cursor"), "stderr: {err}");
    assert!(err.contains("List failed"));
    assert!(!err.contains("Caused by"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_all_stops_on_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(502))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_list(
        &server,
        json!({"items": [{"title": "first"}], "next_cursor": "abc"}),
    )
    .await;

    let output = run_cli(server.uri(), &["list", "--all"], None).await;
    assert!(!output.status.success());
    assert!(stdout(&output).contains("first"));

    let err = stderr(&output);
    assert!(err.lines().any(|line| line == "Error: Bad Gateway"), "stderr: {err}");
    assert!(!err.contains("Caused by"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_browse_loads_more_then_quits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"title": "Page two"}]
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_list(
        &server,
        json!({"items": [{"title": "Page one"}], "next_cursor": "abc"}),
    )
    .await;

    // Enter loads page two; the second Enter has nothing left to load.
    let output = run_cli(server.uri(), &["browse"], Some("\n\nq\n")).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Page one"));
    assert!(out.contains("Page two"));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_browse_survives_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let output = run_cli(server.uri(), &["browse"], Some("r\n")).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let err = stderr(&output);
    assert_eq!(err.matches("Error: Service Unavailable").count(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_posts_and_lists() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(json!({
            "repo_url": "https://github.com/octo/new",
            "title": "New",
            "submitter": "sam",
            "description": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ok": true,
            "id": "abc-123",
            "createdAt": 1_700_000_000
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_list(&server, json!({"items": [{"title": "New"}]})).await;

    let output = run_cli(
        server.uri(),
        &[
            "submit",
            "--repo-url",
            " https://github.com/octo/new ",
            "--title",
            "New",
            "--submitter",
            "sam ",
        ],
        None,
    )
    .await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Submitted!"));
    assert!(out.contains("abc-123"));
    assert!(out.contains("New"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_error_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = run_cli(
        server.uri(),
        &["submit", "--repo-url", "https://github.com/octo/new"],
        None,
    )
    .await;

    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(err.lines().any(|line| line == "Error: 500"), "stderr: {err}");
    assert!(err.contains("Submit failed"));
    assert!(!err.contains("Caused by"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_reports_failed_reload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true, "id": "abc-123"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let output = run_cli(
        server.uri(),
        &["submit", "--repo-url", "https://github.com/octo/new"],
        None,
    )
    .await;

    // The submission went through, so the command still succeeds.
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Submitted!"));
    assert!(stderr(&output).contains("Error: Service Unavailable"));
}

#[test]
fn test_rejects_plain_http_api() {
    let output = Command::new(env!("CARGO_BIN_EXE_showcase"))
        .args(["list", "--api", "http://api.example.com"])
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid API URL"));
}
