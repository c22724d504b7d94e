mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::Value;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn process_json_template_substitutes_and_labels() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.json");

    let output = ctx
        .cli()
        .args(["process", "guestbook.json", "--seed", "1337", "-p", "CUSTOM_PARAM1=1"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let template = stdout_json(&output);
    let objects = template["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 4);

    let env = &objects[2]["spec"]["containers"][0]["env"];
    let username = env[0]["value"].as_str().unwrap();
    assert!(username.starts_with("admin"));
    assert_eq!(username.len(), 8);
    assert_eq!(env[1]["value"].as_str().unwrap().len(), 8);
    assert_eq!(env[3]["value"], "redis-slave");
    assert_eq!(env[4]["value"], "costs $$5 or $1");

    for object in &objects[..3] {
        assert_eq!(object["metadata"]["labels"]["template"], "guestbook");
    }
    assert_eq!(objects[2]["metadata"]["labels"]["name"], "frontend-service");

    // metadata takes precedence over a top-level labels field
    assert_eq!(objects[3]["metadata"]["name"], "redis-slave");
    assert_eq!(objects[3]["metadata"]["labels"]["template"], "guestbook");
    assert_eq!(objects[3]["labels"], serde_json::json!({"legacy": "true"}));
}

#[test]
fn process_with_same_seed_is_deterministic() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.json");

    let run = || ctx.cli().args(["process", "guestbook.json", "--seed", "42"]).output().unwrap();
    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn process_reports_missing_required_parameter() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.yaml");

    ctx.cli()
        .args(["process", "guestbook.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: template.parameters[2]: Required value: parameter DATABASE_URL is required",
        ));
}

#[test]
fn process_yaml_template_outputs_yaml() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.yaml");

    ctx.cli()
        .args(["process", "guestbook.yaml", "-p", "DATABASE_URL=postgres://db/app"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kind: Template\n"))
        .stdout(predicate::str::contains("value: redis-slave"))
        .stdout(predicate::str::contains("template: guestbook"))
        .stdout(predicate::str::contains("${").not());
}

#[test]
fn process_list_output_contains_only_objects() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.json");

    let output = ctx.cli().args(["process", "guestbook.json", "--list", "-o", "json"]).output().unwrap();

    assert!(output.status.success());
    let list = stdout_json(&output);
    assert_eq!(list["kind"], "List");
    assert_eq!(list["apiVersion"], "v1");
    assert_eq!(list["items"].as_array().unwrap().len(), 4);
    assert!(list.get("parameters").is_none());
}

#[test]
fn process_cli_labels_override_template_labels() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.json");

    let output = ctx
        .cli()
        .args(["process", "guestbook.json", "-l", "template=custom", "--label", "env=prod"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let template = stdout_json(&output);
    let labels = &template["objects"][0]["metadata"]["labels"];
    assert_eq!(labels["template"], "custom");
    assert_eq!(labels["env"], "prod");
}

#[test]
fn process_reads_standard_input() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["process", "-", "-o", "json"])
        .write_stdin(
            r#"{"kind":"Template","objects":[{"kind":"Service","apiVersion":"v1beta3${VALUE}","metadata":{"labels":{"key1":"${VALUE}","key2":"$${VALUE}"}}}],"parameters":[{"name":"VALUE","value":"1"}]}"#,
        )
        .output()
        .unwrap();

    assert!(output.status.success());
    let template = stdout_json(&output);
    assert_eq!(template["objects"][0]["apiVersion"], "v1beta31");
    assert_eq!(template["objects"][0]["metadata"]["labels"]["key1"], "1");
    assert_eq!(template["objects"][0]["metadata"]["labels"]["key2"], "$1");
}

#[test]
fn process_uses_config_file() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.json");
    ctx.write_file(
        "tproc.toml",
        "[output]\nformat = \"yaml\"\n\n[generators]\nseed = 7\n\n[labels]\nteam = \"web\"\n",
    );

    ctx.cli()
        .args(["process", "guestbook.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kind: Template\n"))
        .stdout(predicate::str::contains("team: web"));
}

#[test]
fn process_rejects_invalid_config() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.json");
    ctx.write_file("custom.toml", "[output]\nformat = \"xml\"\n");

    ctx.cli()
        .args(["process", "guestbook.json", "--config", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn process_missing_template_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["process", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template not found"));
}

#[test]
fn process_rejects_malformed_parameter_argument() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.json");

    ctx.cli()
        .args(["process", "guestbook.json", "-p", "NO_EQUALS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter 'NO_EQUALS'"));
}

#[test]
fn parameters_lists_declared_parameters() {
    let ctx = TestContext::new();
    ctx.install_fixture("guestbook.yaml");

    ctx.cli()
        .args(["parameters", "guestbook.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NAME"))
        .stdout(predicate::str::contains("ADMIN_PASSWORD"))
        .stdout(predicate::str::contains("[a-zA-Z0-9]{8}"))
        .stdout(predicate::str::contains("DATABASE_URL*"));
}
