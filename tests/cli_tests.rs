//! CLI integration tests against the bundled data directory

use assert_cmd::Command;
use predicates::prelude::*;

fn uipro() -> Command {
    let mut cmd = Command::cargo_bin("uipro").unwrap();
    cmd.env("UIPRO_DATA_DIR", concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// design-system
// =============================================================================

mod design_system_command_tests {
    use super::*;

    #[test]
    fn test_box_report() {
        uipro()
            .args(["design-system", "beauty spa wellness service", "-p", "Serenity Spa"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "TARGET: Serenity Spa - RECOMMENDED DESIGN SYSTEM",
            ))
            .stdout(predicate::str::contains("STYLE: Soft UI Evolution"))
            .stdout(predicate::str::contains("PRE-DELIVERY CHECKLIST"));
    }

    #[test]
    fn test_markdown_alias() {
        uipro()
            .args(["ds", "saas dashboard", "--format", "markdown"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("## Design System: SAAS DASHBOARD"));
    }

    #[test]
    fn test_json_output() {
        let output = uipro()
            .args(["design-system", "crypto exchange", "-f", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["category"], "Fintech/Crypto");
        assert_eq!(value["severity"], "HIGH");
    }

    #[test]
    fn test_missing_data_dir_still_recommends() {
        let dir = tempfile::tempdir().unwrap();
        uipro()
            .env("UIPRO_DATA_DIR", dir.path().join("absent"))
            .args(["design-system", "bakery"])
            .assert()
            .success()
            .stdout(predicate::str::contains("STYLE: Minimalism"))
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        uipro()
            .args(["design-system", "saas", "-f", "yaml"])
            .assert()
            .failure();
    }
}

// =============================================================================
// search / stack / rules
// =============================================================================

mod lookup_command_tests {
    use super::*;

    #[test]
    fn test_search_domain() {
        uipro()
            .args(["search", "glass blur", "-d", "style"])
            .assert()
            .success()
            .stdout(predicate::str::contains("## UI Pro Max Search Results"))
            .stdout(predicate::str::contains("Glassmorphism"));
    }

    #[test]
    fn test_search_unknown_domain() {
        uipro()
            .args(["search", "anything", "-d", "weather"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("weather"));
    }

    #[test]
    fn test_search_missing_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        uipro()
            .env("UIPRO_DATA_DIR", dir.path())
            .args(["search", "palette", "-d", "color"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Data file not found"));
    }

    #[test]
    fn test_stack_json() {
        uipro()
            .args(["stack", "label input forms", "-s", "react", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"stack\": \"react\""))
            .stdout(predicate::str::contains("Label every input"));
    }

    #[test]
    fn test_stack_requires_stack_flag() {
        uipro()
            .args(["stack", "label input forms"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--stack"));
    }

    #[test]
    fn test_rules_explain() {
        uipro()
            .args(["rules", "--match", "Landing"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[exact]"));
    }

    #[test]
    fn test_rules_list() {
        uipro()
            .arg("rules")
            .assert()
            .success()
            .stdout(predicate::str::contains("Fintech/Crypto"));
    }
}

// =============================================================================
// logging
// =============================================================================

mod logging_tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug_logs() {
        uipro()
            .args(["--verbose", "rules"])
            .assert()
            .success()
            .stderr(predicate::str::contains("reasoning rules"));
    }

    #[test]
    fn test_rust_log_overrides_verbose() {
        uipro()
            .env("RUST_LOG", "uipro=off")
            .args(["--verbose", "rules"])
            .assert()
            .success()
            .stderr(predicate::str::contains("reasoning rules").not());
    }

    #[test]
    fn test_rust_log_enables_debug_without_verbose() {
        uipro()
            .env("RUST_LOG", "uipro=debug")
            .arg("rules")
            .assert()
            .success()
            .stderr(predicate::str::contains("reasoning rules"));
    }
}
