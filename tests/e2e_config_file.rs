/// End-to-end tests for config file support
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// Config pointing at a fixture by absolute path.
fn config_with_input(fixture: &str, rest: &str) -> String {
    format!("input: \"{}\"\n{}", fixtures_path(fixture).display(), rest)
}

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_config_discovered_in_working_directory() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "pncp-radar.config.yml",
            &config_with_input("valid.json", "format: markdown\n"),
        );

        cargo_bin_cmd!("pncp-radar")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# PNCP Opportunity Report"))
            .stderr(predicate::str::contains("Auto-discovered config file"));
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("pncp-radar")
            .current_dir(dir.path())
            .output()
            .unwrap();
        assert!(output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered"));
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["metadata"]["source"], "embedded payload");
    }

    #[test]
    fn test_relative_input_resolves_from_working_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("dados")).unwrap();
        fs::copy(
            fixtures_path("module.js"),
            dir.path().join("dados/oportunidades.js"),
        )
        .unwrap();
        write_config(
            dir.path(),
            "pncp-radar.config.yml",
            "input: dados/oportunidades.js\n",
        );

        let output = cargo_bin_cmd!("pncp-radar")
            .current_dir(dir.path())
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["summary"]["loaded_opportunities"], 2);
    }

    #[test]
    fn test_invalid_discovered_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "pncp-radar.config.yml", "format: xml\n");

        cargo_bin_cmd!("pncp-radar")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid config: format"));
    }
}

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "radar.yml",
            &config_with_input("valid.json", "format: payload\n"),
        );

        let output = cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .output()
            .unwrap();
        assert!(output.status.success());

        let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 2);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Loaded config from"));
    }

    #[test]
    fn test_explicit_config_not_found() {
        cargo_bin_cmd!("pncp-radar")
            .args(["-c", "/nonexistent/radar.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path(), "radar.yml", "screening: [[[broken");

        cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_closing_after_value() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path(), "radar.yml", "closing_after: amanhã\n");

        cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("is not a date"));
    }

    #[test]
    fn test_unknown_field_warning() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "radar.yml",
            &config_with_input("valid.json", "colour: blue\n"),
        );

        cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "⚠️  Warning: Unknown config field 'colour' will be ignored.",
            ));
    }
}

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "radar.yml",
            &config_with_input("valid.json", "format: markdown\n"),
        );

        let output = cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .args(["-f", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["summary"]["opportunities"], 2);
    }

    #[test]
    fn test_cli_input_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "radar.yml",
            &config_with_input("integrity-errors.json", ""),
        );

        cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .arg("-i")
            .arg(fixtures_path("valid.json"))
            .assert()
            .success();
    }

    #[test]
    fn test_config_screening_section() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "radar.yml",
            &config_with_input(
                "valid.json",
                "screening:\n  keywords: [PREDNISOLONA, AMOXICILINA]\n",
            ),
        );

        let output = cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["screening"]["unmatched_keywords"][0], "AMOXICILINA");
        assert_eq!(json["opportunities"][0]["items"][0]["number"], 1);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Keyword 'AMOXICILINA' did not match any item."));
    }

    #[test]
    fn test_config_strict_fails_on_warnings() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "radar.yml",
            &config_with_input("warnings-only.json", "strict: true\n"),
        );

        cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("❌ Integrity: failed"));
    }

    #[test]
    fn test_cli_closing_after_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "radar.yml",
            &config_with_input("valid.json", "closing_after: \"2027-01-01\"\n"),
        );

        let output = cargo_bin_cmd!("pncp-radar")
            .arg("-c")
            .arg(&config)
            .args(["--closing-after", "2026-01-01"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["cutoff"]["excluded"], 0);
        assert_eq!(json["summary"]["opportunities"], 2);
    }
}
