use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn cmd() -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("exposure-audit");
    c.env("NO_COLOR", "1");
    c
}

/// Copy a fixture snapshot into a fresh working directory.
fn work_dir_with_snapshot(fixture: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(
        fixtures_path().join("snapshots").join(fixture).join("all_comp.json"),
        dir.path().join("all_comp.json"),
    )
    .unwrap();
    dir
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

mod classify {
    use super::*;

    #[test]
    fn test_mixed_snapshot_reports_findings() {
        let snapshot = fixtures_path().join("snapshots/mixed/all_comp.json");

        cmd()
            .arg("classify")
            .arg(snapshot)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("[UNDEFINED] service"))
            .stdout(predicate::str::contains("com.example.app/.LegacyService"))
            .stdout(predicate::str::contains("[UNPRIVILEGED] activity"))
            .stdout(predicate::str::contains("com.example.app/.DataProvider"))
            .stdout(predicate::str::contains("com.example.app/.CommandReceiver"))
            .stdout(predicate::str::contains("Summary: 1 undefined, 3 unprivileged"))
            .stdout(predicate::str::contains("Result: FAIL"));
    }

    #[test]
    fn test_privileged_and_protected_are_not_reported() {
        let snapshot = fixtures_path().join("snapshots/mixed/all_comp.json");

        cmd()
            .arg("classify")
            .arg(snapshot)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("SyncService").not())
            .stdout(predicate::str::contains("BootReceiver").not());
    }

    #[test]
    fn test_clean_snapshot_passes() {
        let snapshot = fixtures_path().join("snapshots/clean/all_comp.json");

        cmd()
            .arg("classify")
            .arg(snapshot)
            .assert()
            .success()
            .stdout(predicate::str::contains("No exposed components found."))
            .stdout(predicate::str::contains("Result: PASS"));
    }

    #[test]
    fn test_json_output_shape() {
        let snapshot = fixtures_path().join("snapshots/mixed/all_comp.json");

        let output = cmd()
            .args(["classify", "--format", "json"])
            .arg(snapshot)
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let undefined = &report["undefined_permissions"];
        let unprivileged = &report["unprivileged_permissions"];
        assert_eq!(undefined["service"][0]["name"], "com.example.app/.LegacyService");
        assert_eq!(undefined["service"][0]["permission"], "com.vendor.REMOVED");
        assert_eq!(unprivileged["activity"].as_array().unwrap().len(), 1);
        assert_eq!(unprivileged["receiver"].as_array().unwrap().len(), 1);

        let provider = &unprivileged["provider"][0];
        assert_eq!(provider["readPermission"], "com.example.lib.READ");
        assert_eq!(provider["writePermission"], "com.example.lib.SIGNED");
        assert!(provider["path_permission"].as_array().unwrap().is_empty());
        // Non-provider findings carry only name and permission.
        assert!(unprivileged["activity"][0].get("readPermission").is_none());
    }

    #[test]
    fn test_output_file_written() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.json");

        cmd()
            .arg("classify")
            .arg(fixtures_path().join("snapshots/mixed/all_comp.json"))
            .arg("--output")
            .arg(&output)
            .assert()
            .code(1);

        let report = read_json(&output);
        assert_eq!(
            report["unprivileged_permissions"]["activity"][0]["name"],
            "com.example.app/.MainActivity"
        );
    }

    #[test]
    fn test_malformed_protection_level_is_error() {
        cmd()
            .arg("classify")
            .arg(fixtures_path().join("snapshots/bad_level/all_comp.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid protection level"));
    }

    #[test]
    fn test_missing_snapshot_is_error() {
        let dir = TempDir::new().unwrap();

        cmd()
            .arg("classify")
            .arg(dir.path().join("all_comp.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("File not found"));
    }
}

mod scan {
    use super::*;

    #[test]
    fn test_reuses_snapshot_and_writes_report() {
        let dir = work_dir_with_snapshot("mixed");

        cmd()
            .arg("scan")
            .arg(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Result: FAIL"));

        let report = read_json(&dir.path().join("accessible_comp.json"));
        assert_eq!(
            report["undefined_permissions"]["service"][0]["name"],
            "com.example.app/.LegacyService"
        );
    }

    #[test]
    fn test_clean_work_dir_exits_zero() {
        let dir = work_dir_with_snapshot("clean");

        cmd().arg("scan").arg(dir.path()).assert().success();
        assert!(dir.path().join("accessible_comp.json").is_file());
    }

    #[test]
    fn test_missing_work_dir_is_error() {
        let dir = TempDir::new().unwrap();

        cmd()
            .arg("scan")
            .arg(dir.path().join("missing"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_no_snapshot_and_no_packages_is_error() {
        let dir = TempDir::new().unwrap();

        cmd()
            .arg("scan")
            .arg(dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("packages"));
    }

    /// The decoder prints the JSON file stored next to each package.
    #[cfg(unix)]
    fn work_dir_with_decoder() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".exposure-audit.yaml"),
            "extractor:\n  program: sh\n  args: ['-c', 'cat \"$0.json\"', '{apk}']\n",
        )
        .unwrap();

        let demo = dir.path().join("packages/Demo");
        fs::create_dir_all(&demo).unwrap();
        fs::write(demo.join("Demo.apk"), b"PK").unwrap();
        fs::write(
            demo.join("Demo.apk.json"),
            r#"{
                "package": "com.demo",
                "application": {
                    "activities": [
                        {"name": ".Open", "exported": "true"},
                        {"name": ".Hidden", "exported": "false"}
                    ],
                    "receivers": [
                        {"name": ".Ping", "permission": "com.demo.PING_PERM",
                         "intent_filters": [{"actions": ["com.demo.PING"]}]}
                    ]
                },
                "permissions": [{"name": "com.demo.PING_PERM", "protectionLevel": "0x2"}]
            }"#,
        )
        .unwrap();

        let overlay = dir.path().join("packages/Demo__auto_generated_rro_product__");
        fs::create_dir_all(&overlay).unwrap();
        fs::write(overlay.join("Overlay.apk"), b"PK").unwrap();
        dir
    }

    #[cfg(unix)]
    #[test]
    fn test_extracts_packages_through_decoder() {
        let dir = work_dir_with_decoder();

        cmd()
            .args(["scan", "--ci"])
            .arg(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("com.demo/.Open"))
            .stdout(predicate::str::contains("com.demo/.Hidden").not())
            .stdout(predicate::str::contains("com.demo/.Ping").not());

        let snapshot = read_json(&dir.path().join("all_comp.json"));
        let packages = snapshot.as_array().unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0]["package"], "com.demo");
        assert_eq!(packages[0]["components"].as_array().unwrap().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_rescan_replaces_snapshot() {
        let dir = work_dir_with_decoder();
        fs::copy(
            fixtures_path().join("snapshots/clean/all_comp.json"),
            dir.path().join("all_comp.json"),
        )
        .unwrap();

        // The stale snapshot is clean, so only a rescan can fail.
        cmd().arg("scan").arg(dir.path()).assert().success();
        cmd()
            .args(["scan", "--rescan"])
            .arg(dir.path())
            .assert()
            .code(1);

        let snapshot = read_json(&dir.path().join("all_comp.json"));
        assert_eq!(snapshot[0]["package"], "com.demo");
    }
}

mod census {
    use super::*;

    #[test]
    fn test_prints_counts_per_package() {
        let dir = work_dir_with_snapshot("mixed");

        cmd()
            .arg("census")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "[com.example.app] Activity = 1, Service = 2, ContentProvider = 1, BroadcastReceiver = 2",
            ))
            .stdout(predicate::str::contains(
                "[android] Activity = 0, Service = 0, ContentProvider = 0, BroadcastReceiver = 0",
            ))
            .stdout(predicate::str::contains("3 packages, 6 exported components"));
    }
}

mod cli {
    use super::*;

    #[test]
    fn test_help() {
        cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("scan"))
            .stdout(predicate::str::contains("classify"))
            .stdout(predicate::str::contains("census"));
    }

    #[test]
    fn test_version() {
        cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("exposure-audit"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        cmd()
            .args(["classify", "--format", "xml", "all_comp.json"])
            .assert()
            .failure()
            .code(2);
    }
}
