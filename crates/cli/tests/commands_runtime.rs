use std::env;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use coverly_cli::commands::{collections, doctor, quote};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn quote_rates_an_accident_intake_from_a_file() {
    with_env(&[], || {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("intake.json");
        fs::write(
            &path,
            r#"{
  "accident-plan-choice": "Plan A - Higher reimbursements for hospital stays, surgeries, and doctor visits",
  "accident-coverage-type": "Just me"
}"#,
        )
        .expect("write answers");

        let result = quote::run("Accident Insurance", &path, false);
        assert_eq!(result.exit_code, 0, "expected successful quote: {}", result.output);
        assert!(result.output.contains("Accident Insurance - Plan A, Individual"));
        assert!(result.output.contains("monthly premium: $14.03"));
    });
}

#[test]
fn quote_emits_machine_readable_json() {
    with_env(&[], || {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("intake.json");
        fs::write(
            &path,
            r#"{
  "cancer-coverage-amount": "$10,000",
  "cancer-coverage-type": "My Family",
  "cancer-age": "45"
}"#,
        )
        .expect("write answers");

        let result = quote::run("Cancer Insurance", &path, true);
        assert_eq!(result.exit_code, 0, "expected successful quote: {}", result.output);

        let payload: Value =
            serde_json::from_str(&result.output).expect("json output should parse");
        let recommendations = payload.as_array().expect("array payload");
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0]["price"], "31.45");
    });
}

#[test]
fn quote_fails_cleanly_on_a_missing_answers_file() {
    with_env(&[], || {
        let result = quote::run("Accident Insurance", Path::new("no-such-intake.json"), false);
        assert_eq!(result.exit_code, 4, "expected answers load failure");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "quote");
        assert_eq!(payload["error_class"], "answers_load");
    });
}

#[test]
fn quote_surfaces_the_critical_illness_domain_failure() {
    with_env(&[], || {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("intake.json");
        fs::write(&path, r#"{ "critical-coverage-amount": "$10,000" }"#).expect("write answers");

        let result = quote::run("Critical Illness Insurance", &path, false);
        assert_eq!(result.exit_code, 1, "expected domain failure");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "domain");
        let message = payload["message"].as_str().unwrap_or("");
        assert!(message.contains("coverage type"), "unexpected message: {message}");
    });
}

#[test]
fn quote_reports_no_recommendation_for_unknown_collections() {
    with_env(&[], || {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("intake.json");
        fs::write(&path, "{}").expect("write answers");

        let result = quote::run("Pet Insurance", &path, false);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "ok");
        let message = payload["message"].as_str().unwrap_or("");
        assert!(message.contains("no recommendation available"), "unexpected: {message}");
    });
}

#[test]
fn doctor_passes_with_builtin_catalogs() {
    with_env(&[], || {
        let output = doctor::run(true);
        let payload: Value = serde_json::from_str(&output).expect("doctor json should parse");

        assert_eq!(payload["overall_status"], "pass", "doctor output: {output}");
        let checks = payload["checks"].as_array().expect("checks array");
        assert_eq!(checks.len(), 3);
        assert!(checks.iter().all(|check| check["status"] == "pass"));
    });
}

#[test]
fn collections_lists_all_five_lines() {
    with_env(&[], || {
        let output = collections::run();
        for name in [
            "Accident Insurance",
            "Cancer Insurance",
            "Hospital Indemnity Insurance",
            "Critical Illness Insurance",
            "Short Term Accident/Sickness Pay",
        ] {
            assert!(output.contains(name), "missing collection `{name}` in:\n{output}");
        }
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "COVERLY_SERVER_BIND_ADDRESS",
        "COVERLY_SERVER_PORT",
        "COVERLY_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "COVERLY_CHECKOUT_ENABLED",
        "COVERLY_CHECKOUT_ENDPOINT",
        "COVERLY_CHECKOUT_API_KEY",
        "COVERLY_CHECKOUT_TIMEOUT_SECS",
        "COVERLY_CATALOG_PRODUCTS_PATH",
        "COVERLY_CATALOG_QUESTIONS_PATH",
        "COVERLY_LOGGING_LEVEL",
        "COVERLY_LOGGING_FORMAT",
        "COVERLY_LOG_LEVEL",
        "COVERLY_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
