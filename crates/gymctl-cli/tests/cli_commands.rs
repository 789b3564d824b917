use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gymctl"));
    cmd.env("HOME", home);
    cmd.env_remove("GYMCTL_ADDR");
    cmd.env_remove("GYMCTL_TOKEN");
    cmd
}

fn gym_body(name: &str) -> serde_json::Value {
    json!({
        "id": "00000000-0000-0000-0000-00000000aaaa",
        "name": name,
        "type": "commercial",
        "location": "Oslo",
        "capacity": 120,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn profile_body(role: &str) -> serde_json::Value {
    json!({
        "id": "00000000-0000-0000-0000-00000000bbbb",
        "name": "Sam",
        "email": "sam@example.com",
        "dateOfBirth": "1990-04-12",
        "fitnessGoal": "strength",
        "role": role,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

#[test]
fn gyms_list_sends_bearer_token() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/api/gyms")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(json!([gym_body("Iron Gym")]).to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "gyms",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iron Gym"));
}

#[test]
fn whoami_shows_profile() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/api/users")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(profile_body("USER").to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "whoami",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sam@example.com"));
}

#[test]
fn available_lists_remaining_capacity() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let body = json!([{
        "gym": gym_body("Iron Gym"),
        "availableSpots": 5,
        "currentCount": 115
    }]);
    server
        .mock("GET", "/api/gyms/available-spots")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "gyms",
            "available",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("availableSpots"));
}

#[test]
fn server_error_message_reaches_the_user() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/api/gyms")
        .with_status(422)
        .with_body(json!({"message": "gym name already taken"}).to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "gyms",
            "list",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gym name already taken"));
}

#[test]
fn verify_posts_without_authorization_header() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/users/verify")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(
            json!({"email": "sam@example.com", "code": "123456"}),
        ))
        .with_status(200)
        .with_body("{}")
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "verify",
            "--email",
            "sam@example.com",
            "--code",
            "123456",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email verified"));
}

#[test]
fn verify_rejects_malformed_codes_without_a_request() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args([
            "--addr",
            "http://127.0.0.1:9",
            "--insecure",
            "verify",
            "--email",
            "sam@example.com",
            "--code",
            "12ab",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("6 digits"));
}

#[test]
fn resend_code_posts_the_email() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/auth/resend-code")
        .match_body(Matcher::Json(json!({"email": "sam@example.com"})))
        .with_status(200)
        .with_body("{}")
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "resend-code",
            "--email",
            "sam@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification code resent"));
}

#[test]
fn member_role_cannot_create_gyms() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/api/users")
        .with_status(200)
        .with_body(profile_body("USER").to_string())
        .create();
    let create = server.mock("POST", "/api/gyms").expect(0).create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "gyms",
            "create",
            "--name",
            "Iron Gym",
            "--kind",
            "commercial",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("manager role"));
    create.assert();
}

#[test]
fn manager_role_creates_gyms() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/api/users")
        .with_status(200)
        .with_body(profile_body("MANAGER").to_string())
        .create();
    server
        .mock("POST", "/api/gyms")
        .match_body(Matcher::Json(json!({
            "name": "Iron Gym",
            "type": "commercial",
            "capacity": 80,
            "userId": "00000000-0000-0000-0000-00000000bbbb"
        })))
        .with_status(201)
        .with_body(gym_body("Iron Gym").to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "gyms",
            "create",
            "--name",
            "Iron Gym",
            "--kind",
            "commercial",
            "--capacity",
            "80",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iron Gym"));
}

#[test]
fn delete_gym_reports_success_on_no_content() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/api/users")
        .with_status(200)
        .with_body(profile_body("MANAGER").to_string())
        .create();
    server
        .mock("DELETE", "/api/gyms/00000000-0000-0000-0000-00000000aaaa")
        .with_status(204)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "gyms",
            "delete",
            "00000000-0000-0000-0000-00000000aaaa",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym deleted"));
}

#[test]
fn config_set_addr_roundtrips_through_the_config_file() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args(["config", "set-addr", "https://gym.example.com"])
        .assert()
        .success();

    assert!(home_dir.path().join(".gymctl").join("config.json").exists());

    base_cmd(home_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://gym.example.com"));
}

#[test]
fn plain_http_requires_the_insecure_flag() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args([
            "--addr",
            "http://127.0.0.1:9",
            "--token",
            "token",
            "gyms",
            "list",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--insecure"));
}
