use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

// Nothing listens on the discard port, so the wallet is unreachable.
const UNREACHABLE_RPC: &str = "http://127.0.0.1:9";

#[test]
fn init_config_writes_defaults() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("conf/wave-portal.toml");

    cargo_bin_cmd!("wave-portal")
        .args(["init-config", "--path", path.to_str().expect("utf-8 path")])
        .assert()
        .success();

    let config = fs::read_to_string(&path).expect("read config");
    assert!(config.contains("contract_address = \"0x80563D18d6A99f5c4D7ea18cF00A26aCF13156c8\""));
    assert!(config.contains("rpc_url = \"http://127.0.0.1:8545\""));
    assert!(config.contains("poll_interval_ms = 7000"));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("wave-portal.toml");
    fs::write(&path, "keep me").expect("write");

    cargo_bin_cmd!("wave-portal")
        .args(["init-config", "--path", path.to_str().expect("utf-8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).expect("read"), "keep me");
}

#[test]
fn init_config_rejects_malformed_contract() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("wave-portal.toml");

    cargo_bin_cmd!("wave-portal")
        .args([
            "init-config",
            "--path",
            path.to_str().expect("utf-8 path"),
            "--contract",
            "0x1234",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid address '0x1234'"));

    assert!(!path.exists());
}

#[test]
fn status_without_wallet_offers_connect() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("absent.toml");

    cargo_bin_cmd!("wave-portal")
        .env("NO_COLOR", "1")
        .args([
            "status",
            "--config",
            config.to_str().expect("utf-8 path"),
            "--rpc-url",
            UNREACHABLE_RPC,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Whats on your mind friend?"))
        .stdout(predicate::str::contains("Connect Wallet"))
        .stdout(predicate::str::contains("Number of frens").not());
}

#[test]
fn status_prints_json_page() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("absent.toml");

    cargo_bin_cmd!("wave-portal")
        .args([
            "status",
            "--json",
            "--config",
            config.to_str().expect("utf-8 path"),
            "--rpc-url",
            UNREACHABLE_RPC,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"connect_wallet\": true"))
        .stdout(predicate::str::contains("\"spinner\": false"));
}

#[test]
fn connect_without_wallet_alerts() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("absent.toml");

    cargo_bin_cmd!("wave-portal")
        .env("NO_COLOR", "1")
        .args([
            "connect",
            "--config",
            config.to_str().expect("utf-8 path"),
            "--rpc-url",
            UNREACHABLE_RPC,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wallet provider unavailable"));
}

#[test]
fn failed_log_read_is_reported_once() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("absent.toml");

    let output = cargo_bin_cmd!("wave-portal")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args([
            "logs",
            "--config",
            config.to_str().expect("utf-8 path"),
            "--rpc-url",
            UNREACHABLE_RPC,
        ])
        .output()
        .expect("run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("contract call failed").count(), 1, "{stderr}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Whats on your mind friend?"));
}

#[test]
fn failed_wave_is_reported_once() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("absent.toml");

    let output = cargo_bin_cmd!("wave-portal")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args([
            "wave",
            "--config",
            config.to_str().expect("utf-8 path"),
            "--rpc-url",
            UNREACHABLE_RPC,
            "gm",
        ])
        .output()
        .expect("run");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("contract call failed").count(), 1, "{stderr}");
    assert!(!stdout.contains("Mining..."));
}

#[test]
fn broken_config_file_is_reported() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("wave-portal.toml");
    fs::write(&config, "rpc_url = [").expect("write");

    cargo_bin_cmd!("wave-portal")
        .args(["status", "--config", config.to_str().expect("utf-8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn completions_name_the_binary() {
    cargo_bin_cmd!("wave-portal")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wave-portal"));
}
