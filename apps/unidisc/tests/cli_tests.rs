//! # CLI Tests
//!
//! One-shot commands over scenario files.

use clap::Parser;
use std::path::{Path, PathBuf};
use unidisc::Scenario;
use unidisc::cli::{Cli, execute};
use unidisc_core::{EntityId, UnidiscError};

const TERM: &str = r#"
faculty = ["Turing"]
rooms = ["A1"]
prerequisites = [[0, 1], [1, 2]]
implications = [[2, 1]]

[[courses]]
code = "CS101"
name = "Intro"
credits = 3

[[courses]]
code = "CS201"
name = "Structures"
credits = 3

[[courses]]
code = "CS301"
name = "Algorithms"
credits = 4

[[students]]
name = "Ana"
enrolled = [0]

[[assignments]]
course = 0
faculty = 0
room = 0

[[assignments]]
course = 1
faculty = 0
room = 0
"#;

fn write_scenario(dir: &Path) -> PathBuf {
    let path = dir.join("term.toml");
    std::fs::write(&path, TERM).expect("write scenario");
    path
}

fn run(args: &[&str]) -> Result<(), UnidiscError> {
    let mut argv = vec!["unidisc", "--quiet"];
    argv.extend_from_slice(args);
    execute(Cli::parse_from(argv))
}

#[test]
fn scenario_file_round_trips_into_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(dir.path());
    let session = Scenario::from_file(&path)
        .expect("parse")
        .to_session()
        .expect("apply");

    assert_eq!(session.catalog().course_count(), 3);
    assert!(session.relations().get_implication(EntityId(2), EntityId(1)));
    assert_eq!(session.catalog().rooms().len(), 1);
}

#[test]
fn every_command_runs_over_a_scenario() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(dir.path());
    let scenario = path.to_str().expect("utf8 path");

    run(&["--scenario", scenario, "report"]).expect("report");
    run(&["--scenario", scenario, "--json-mode", "report"]).expect("report json");
    run(&["--scenario", scenario, "orders", "--limit", "3"]).expect("orders");
    run(&["--scenario", scenario, "check", "--course", "2", "--completed", "0,1"]).expect("check");
    run(&["--scenario", scenario, "propagate", "--facts", "2"]).expect("propagate");
    run(&["--scenario", scenario, "recommend", "--student", "0"]).expect("recommend");
}

#[test]
fn proof_command_writes_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(dir.path());
    let out = dir.path().join("proof.txt");

    run(&[
        "--scenario",
        path.to_str().expect("utf8 path"),
        "proof",
        "--course",
        "2",
        "--completed",
        "0",
        "--output",
        out.to_str().expect("utf8 path"),
    ])
    .expect("proof");

    let text = std::fs::read_to_string(&out).expect("read proof");
    assert!(text.starts_with("Proof for prerequisites of CS301.\n"));
    assert!(text.contains("- Indirect prerequisite: CS201 : MISSING."));
    assert!(text.ends_with("Conclusion: Prerequisites NOT satisfied for CS301.\n"));
}

#[test]
fn unknown_student_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(dir.path());
    let result = run(&[
        "--scenario",
        path.to_str().expect("utf8 path"),
        "recommend",
        "--student",
        "4",
    ]);
    assert!(matches!(result, Err(UnidiscError::StudentNotFound(4))));
}

#[test]
fn bad_id_list_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(dir.path());
    let result = run(&[
        "--scenario",
        path.to_str().expect("utf8 path"),
        "propagate",
        "--facts",
        "1,two",
    ]);
    assert!(matches!(result, Err(UnidiscError::InvalidInput(_))));
}

#[test]
fn missing_scenario_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");
    let result = run(&["--scenario", missing.to_str().expect("utf8 path"), "report"]);
    assert!(matches!(result, Err(UnidiscError::ScenarioError(_))));
}

#[test]
fn broken_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("unidisc.toml");
    std::fs::write(&config, "order_limit = \"many\"\n").expect("write config");
    let result = run(&["--config", config.to_str().expect("utf8 path"), "report"]);
    assert!(matches!(result, Err(UnidiscError::ConfigError(_))));
}
