use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn fight_narrates_to_a_single_victor() {
    Command::cargo_bin("warriors")
        .unwrap()
        .args(["fight", "--seed", "7", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thor attacks Loki and deals"))
        .stdout(predicate::str::contains("is victorious"))
        .stdout(predicate::str::contains("Game Over"))
        .stdout(predicate::str::contains("is the winner!"));
}

#[test]
fn fight_can_emit_json() {
    let out = Command::cargo_bin("warriors")
        .unwrap()
        .args(["fight", "--seed", "7", "--delay-ms", "0", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(report["exchanges"].as_u64().unwrap() > 0);
    assert!(report["winner"].is_string());
}

#[test]
fn unknown_warrior_fails() {
    Command::cargo_bin("warriors")
        .unwrap()
        .args(["fight", "--second", "odin", "--delay-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown warrior 'odin'"));
}

#[test]
fn teleport_demo_swaps_strategies() {
    Command::cargo_bin("warriors")
        .unwrap()
        .args(["teleport", "--warrior", "loki"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Loki's teleport attempt: Teleports Away\n--- Loki's teleport ability is removed ---\nLoki's teleport attempt: Fails at Teleporting",
        ));
}

#[test]
fn teleport_without_strategy_is_reported() {
    Command::cargo_bin("warriors")
        .unwrap()
        .args(["teleport", "--warrior", "thor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("illegal state"));
}

#[test]
fn roster_dumps_builtins() {
    Command::cargo_bin("warriors")
        .unwrap()
        .args(["roster", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""dodge_chance":0.25"#));
}

#[test]
fn simulate_vs_summarises_trials() {
    Command::cargo_bin("simulate-vs")
        .unwrap()
        .args(["--trials", "20", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trials:             20"))
        .stdout(predicate::str::contains("stalemate rate:     0.0%"));
}

#[test]
fn rust_log_raises_the_global_level() {
    Command::cargo_bin("warriors")
        .unwrap()
        .env("RUST_LOG", "debug")
        .args(["fight", "--seed", "7", "--delay-ms", "0", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("round resolved"));
}

#[test]
fn default_log_level_keeps_stderr_quiet() {
    Command::cargo_bin("warriors")
        .unwrap()
        .env_remove("RUST_LOG")
        .args(["fight", "--seed", "7", "--delay-ms", "0", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
