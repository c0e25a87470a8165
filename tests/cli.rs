use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Nothing listens here; any request made would fail
const DEAD_PROXY: &str = "http://127.0.0.1:9";

fn skyquote() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("skyquote"));
    for var in [
        "SKYQUOTE_CONFIG",
        "SKYQUOTE_DATA_DIR",
        "SKYQUOTE_FORMAT",
        "SKYQUOTE_PROXY",
        "SKYQUOTE_DEBUG",
        "AMADEUS_CLIENT_ID",
        "AMADEUS_CLIENT_SECRET",
        "LOGO_DEV_KEY",
        "PORT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(
        &path,
        "amadeus:\n  client_id: test-id\n  client_secret: test-secret\nserver:\n  port: 4100\n",
    )
    .expect("failed to write config");
    path
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

#[test]
fn version_prints_package_version() {
    let stdout = stdout_of(skyquote().arg("version"));
    assert!(stdout.contains(&format!("skyquote version {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path());

    let stdout = stdout_of(
        skyquote()
            .arg("status")
            .arg("--config")
            .arg(&config_path)
            .arg("--data-dir")
            .arg(temp.path().join("data")),
    );

    assert!(stdout.contains("Travel API credentials configured"));
    assert!(stdout.contains("Proxy port: 4100"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("No company profile saved"));

    Ok(())
}

#[test]
fn status_without_config_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let stdout = stdout_of(
        skyquote()
            .arg("status")
            .arg("--config")
            .arg(temp.path().join("missing.yaml"))
            .arg("--data-dir")
            .arg(temp.path().join("data")),
    );

    assert!(stdout.contains("not found, using defaults"));
    assert!(stdout.contains("Travel API credentials not configured"));
    assert!(stdout.contains("Proxy port: 3000"));

    Ok(())
}

#[test]
fn serve_requires_client_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = skyquote()
        .arg("serve")
        .arg("--config")
        .arg(temp.path().join("missing.yaml"))
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("AMADEUS_CLIENT_ID"));

    Ok(())
}

#[test]
fn profile_set_and_show() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let data_dir = temp.path().join("data");

    let stdout = stdout_of(
        skyquote()
            .args(["profile", "set", "--name", "  Acme Travel ", "--phone", "+55 11 5555-0000"])
            .arg("--data-dir")
            .arg(&data_dir),
    );
    assert!(stdout.contains("Profile saved successfully!"));

    let stdout = stdout_of(
        skyquote()
            .args(["profile", "show", "--format", "json"])
            .arg("--data-dir")
            .arg(&data_dir),
    );
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"]["name"], "Acme Travel");
    assert_eq!(json["data"]["phone"], "+55 11 5555-0000");
    assert!(json["data"].get("logo").is_none());

    Ok(())
}

#[test]
fn profile_logo_survives_update_without_logo() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let data_dir = temp.path().join("data");
    let logo = temp.path().join("logo.png");
    fs::write(&logo, [0x89, b'P', b'N', b'G'])?;

    skyquote()
        .args(["profile", "set", "--name", "Acme", "--phone", "1"])
        .arg("--logo")
        .arg(&logo)
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    skyquote()
        .args(["profile", "set", "--name", "Acme Tours", "--phone", "2"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    let stdout = stdout_of(
        skyquote()
            .args(["profile", "show", "--format", "json"])
            .arg("--data-dir")
            .arg(&data_dir),
    );
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"]["name"], "Acme Tours");
    assert_eq!(json["data"]["logo"], "data:image/png;base64,iVBORw==");

    Ok(())
}

#[test]
fn profile_show_when_empty() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let stdout = stdout_of(
        skyquote()
            .args(["profile", "show"])
            .arg("--data-dir")
            .arg(temp.path()),
    );

    assert!(stdout.contains("No company profile saved."));
    Ok(())
}

#[test]
fn places_short_keyword_skips_proxy() {
    let stdout = stdout_of(skyquote().args(["places", "L", "--proxy", DEAD_PROXY]));
    assert!(stdout.contains("No suggestions."));
}

#[test]
fn search_unreachable_proxy_fails() {
    let assert = skyquote()
        .args([
            "search", "--from", "GRU", "--to", "MAD", "--depart", "2025-03-10", "--one-way",
            "--proxy", DEAD_PROXY,
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("Error fetching flights."));
}

const OFFERS: &str = r#"{"offers":[
    {"price":"812.40","currency":"USD","duration":"PT13H35M","stops":1,"flights":[
        {"airline":"TP","flightNumber":"88","departureAirport":"GRU","departureTime":"2025-03-10T22:15:00","arrivalAirport":"LIS","arrivalTime":"2025-03-11T11:50:00","duration":"PT9H35M"},
        {"airline":"IB","flightNumber":"3107","departureAirport":"LIS","departureTime":"2025-03-11T13:40:00","arrivalAirport":"MAD","arrivalTime":"2025-03-11T15:50:00","duration":"PT1H10M"}
    ]},
    {"price":"640.00","currency":"USD","duration":"PT11H","stops":0,"flights":[
        {"airline":"LA","flightNumber":"8064","departureAirport":"GRU","departureTime":"2025-03-10T17:00:00","arrivalAirport":"MAD","arrivalTime":"2025-03-11T08:00:00","duration":"PT11H"}
    ]}
]}"#;

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn search_prints_offers_and_exports_quote() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _search = server
        .mock("POST", "/search-flights")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "origin": "GRU",
            "destination": "MAD",
            "oneWay": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(OFFERS)
        .create();

    let temp = tempdir()?;
    let data_dir = temp.path().join("data");
    let quote = temp.path().join("quote.txt");

    skyquote()
        .args(["profile", "set", "--name", "Acme Travel", "--phone", "555"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    let stdout = stdout_of(
        skyquote()
            .args([
                "search", "--from", " GRU", "--to", "MAD", "--depart", "2025-03-10",
                "--one-way", "--select", "2",
            ])
            .arg("--proxy")
            .arg(server.url())
            .arg("--export")
            .arg(&quote)
            .arg("--data-dir")
            .arg(&data_dir),
    );

    assert!(stdout.contains("OPTION 1"));
    assert!(stdout.contains("OPTION 2"));
    assert!(stdout.contains("TAP Air Portugal"));
    assert!(stdout.contains("GRU 22:15 → LIS 11:50"));

    let exported = fs::read_to_string(&quote)?;
    assert!(exported.starts_with("Option 1\nPrice: USD 640.00\nDuration: 11h 0m\nStops: 0"));
    assert!(exported.contains("LA LATAM Airlines 8064: GRU → MAD (11h 0m)"));
    assert!(exported.ends_with("Acme Travel\n555"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn search_proxy_error_fails_with_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _search = server
        .mock("POST", "/search-flights")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"Failed to fetch flight offers"}"#)
        .create();

    let assert = skyquote()
        .args(["search", "--from", "GRU", "--to", "MAD", "--depart", "2025-03-10"])
        .arg("--proxy")
        .arg(server.url())
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("Failed to fetch flight offers"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn search_empty_results_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _search = server
        .mock("POST", "/search-flights")
        .with_status(200)
        .with_body(r#"{"offers":[]}"#)
        .create();

    let stdout = stdout_of(
        skyquote()
            .args(["search", "--from", "GRU", "--to", "XXX", "--depart", "2025-03-10"])
            .args(["--format", "json"])
            .arg("--proxy")
            .arg(server.url()),
    );

    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"]["offers"], serde_json::json!([]));
    assert!(json["meta"]["version"].is_string());

    Ok(())
}
