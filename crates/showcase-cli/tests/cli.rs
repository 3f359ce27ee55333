use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn showcase() -> Command {
    let mut cmd = Command::cargo_bin("showcase").unwrap();
    cmd.env_remove("SHOWCASE_API_URL").env_remove("SHOWCASE_PATH");
    cmd
}

#[test]
fn help_lists_health_subcommand() {
    showcase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("--api-url"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn version_prints_binary_name() {
    showcase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("showcase"));
}

#[tokio::test]
async fn health_reports_ok_against_live_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let data_dir = TempDir::new().unwrap();
        showcase()
            .args(["--api-url", &uri, "--data-dir"])
            .arg(data_dir.path())
            .arg("health")
            .assert()
            .success()
            .stdout(predicate::str::contains("ok"));
    })
    .await
    .unwrap();
}

#[test]
fn health_fails_when_backend_is_down() {
    let data_dir = TempDir::new().unwrap();
    showcase()
        .args(["--api-url", "http://127.0.0.1:9", "--data-dir"])
        .arg(data_dir.path())
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unreachable"));
}
