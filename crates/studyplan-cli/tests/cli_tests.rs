//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TODAY: &str = "2026-10-16";

fn studyplan() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("studyplan").unwrap();
    // Keep a developer's own profile and overrides out of the tests.
    cmd.env("HOME", "/nonexistent-studyplan-home")
        .env_remove("STUDYPLAN_EXAM_DATE")
        .env_remove("STUDYPLAN_DAILY_HOURS")
        .env_remove("STUDYPLAN_INTENSITY");
    cmd
}

#[test]
fn help_output() {
    studyplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mastery-weighted exam preparation planner"));
}

#[test]
fn version_output() {
    studyplan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studyplan"));
}

#[test]
fn plan_defaults_to_six_week_runway() {
    studyplan()
        .args(["plan", "--today", TODAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unified Competitive Exam – Weekly Trajectory"))
        .stdout(predicate::str::contains("Runway: 6 weeks"))
        .stdout(predicate::str::contains("Budget: 35.0 h/week (Steady Momentum)"))
        .stdout(predicate::str::contains("Week 1 · Oct 16 → Oct 22 (8 focus tracks)"))
        .stdout(predicate::str::contains("Week 6 · Nov 20 → Nov 26"))
        .stdout(predicate::str::contains("Mock Test Cadence"));
}

#[test]
fn plan_from_profile() {
    studyplan()
        .args(["plan", "--config", "../../profiles/sciences-sprint.toml", "--today", TODAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Medical Entrance"))
        .stdout(predicate::str::contains("Runway: 13 weeks"))
        .stdout(predicate::str::contains("61.4 h/week (Aggressive Push)"))
        .stdout(predicate::str::contains("(3 focus tracks)"))
        .stdout(predicate::str::contains("concept-building"))
        .stdout(predicate::str::contains("Mathematics").not());
}

#[test]
fn plan_json_output() {
    let output = studyplan()
        .args([
            "plan",
            "--today",
            TODAY,
            "--exam-date",
            "2026-11-13",
            "--subjects",
            "mathematics,english",
            "--mastery",
            "mathematics=20,english=90",
            "--no-mock-tests",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["weeks"], 4);
    assert_eq!(report["weekly_hour_budget"], 35.0);
    assert_eq!(report["plans"].as_array().unwrap().len(), 4);
    assert!(report["mock_targets"].as_array().unwrap().is_empty());

    let areas = report["plans"][0]["focus_areas"].as_array().unwrap();
    assert_eq!(areas[0]["subject"], "mathematics");
    assert_eq!(areas[0]["priority"], "concept-building");
    assert_eq!(areas[1]["subject"], "english");
    assert_eq!(areas[1]["priority"], "revision");
    assert!(areas[0]["hours"].as_f64().unwrap() > areas[1]["hours"].as_f64().unwrap());
}

#[test]
fn plan_markdown_output() {
    studyplan()
        .args(["plan", "--today", TODAY, "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Unified Competitive Exam – Weekly Trajectory"))
        .stdout(predicate::str::contains("## Week 1 · Oct 16 → Oct 22"))
        .stdout(predicate::str::contains("| Subject | Hours | Priority | Outcomes |"))
        .stdout(predicate::str::contains("**Mock test:** Topic-wise sectional test"));
}

#[test]
fn plan_with_no_subjects_is_empty() {
    studyplan()
        .args(["plan", "--today", TODAY, "--subjects", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("No focus subjects selected"))
        .stderr(predicate::str::contains("no focus subjects selected"));
}

#[test]
fn plan_saves_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports/plan.json");

    studyplan()
        .args(["plan", "--today", TODAY, "--output"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Plan saved to"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["exam_name"], "Unified Competitive Exam");
    assert_eq!(saved["mastery"]["computerScience"], 55);
}

#[test]
fn plan_rejects_out_of_range_mastery() {
    studyplan()
        .args(["plan", "--today", TODAY, "--mastery", "physics=140"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("physics=140"));
}

#[test]
fn plan_rejects_unknown_format() {
    studyplan()
        .args(["plan", "--today", TODAY, "--format", "jsno"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Weekly Trajectory").not())
        .stderr(predicate::str::contains("Unknown format: jsno"));
}

#[test]
fn plan_rejects_unknown_intensity() {
    studyplan()
        .args(["plan", "--today", TODAY, "--intensity", "relaxed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn practice_draws_single_candidate() {
    studyplan()
        .args([
            "practice",
            "--subject",
            "biology",
            "--difficulty",
            "foundation",
            "--seed",
            "7",
            "--reveal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions available: 1 · Difficulty: Foundation"))
        .stdout(predicate::str::contains("biology-1"))
        .stdout(predicate::str::contains("Solution:"));
}

#[test]
fn practice_seed_is_reproducible() {
    let run = || {
        studyplan()
            .args(["practice", "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn practice_empty_pool() {
    studyplan()
        .args(["practice", "--subject", "english", "--difficulty", "advanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions available: 0"))
        .stdout(predicate::str::contains("No questions match these filters"));
}

#[test]
fn practice_mixed_follows_mastery_band() {
    // 30% mastery limits the mixed band to foundation questions.
    studyplan()
        .args([
            "practice",
            "--subject",
            "math",
            "--mastery",
            "mathematics=30",
            "--seed",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Difficulty: Smart Mix"))
        .stdout(predicate::str::contains("math-1"));
}

#[test]
fn practice_review_tags() {
    studyplan()
        .args([
            "practice",
            "--subject",
            "english",
            "--seed",
            "3",
            "--tag",
            "Silly mistake",
            "--tag",
            "Formula gap",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tagged: Silly mistake, Formula gap"))
        .stdout(predicate::str::contains("error journal"));
}

#[test]
fn focus_lists_weakest_subjects() {
    studyplan()
        .args(["focus", "--config", "../../profiles/sample.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning Launchpad"))
        .stdout(predicate::str::contains("1. Mathematics (40% mastery)"))
        .stdout(predicate::str::contains("2. Physics (52% mastery)"))
        .stdout(predicate::str::contains("3. History (58% mastery)"));
}

#[test]
fn timeline_long_runway_prepends_extended_phase() {
    studyplan()
        .args(["timeline", "--weeks", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase 1 · Extended Mastery Cycle (Weeks 1-5)"))
        .stdout(predicate::str::contains("Phase 5 · Precision Taper (Final Week)"));
}

#[test]
fn timeline_short_runway_keeps_final_phases() {
    studyplan()
        .args(["timeline", "--weeks", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase 1 · Simulation & Recovery"))
        .stdout(predicate::str::contains("Foundational Lift-Off").not());
}

#[test]
fn timeline_weeks_clamped_to_max() {
    studyplan()
        .args(["timeline", "--weeks", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Macro Timeline Navigator (26 weeks)"))
        .stdout(predicate::str::contains("Extended Mastery Cycle (Weeks 1-19)"));
}

#[test]
fn timeline_weeks_clamped_to_min() {
    studyplan()
        .args(["timeline", "--weeks", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Macro Timeline Navigator (4 weeks)"))
        .stdout(predicate::str::contains("Phase 1 · Simulation & Recovery"))
        .stdout(predicate::str::contains("Phase 3").not());
}

#[test]
fn subjects_table() {
    studyplan()
        .args(["subjects", "--mastery", "english=90", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Computer Science"))
        .stdout(predicate::str::contains("90%"))
        .stdout(predicate::str::contains("Weekly Focus Blueprint"))
        .stdout(predicate::str::contains("Exam Tips"));
}

#[test]
fn resources_for_subject_include_general() {
    studyplan()
        .args(["resources", "--subject", "mathematics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AoPS Competitive Math Series"))
        .stdout(predicate::str::contains("Active Recall Playbook"))
        .stdout(predicate::str::contains("NeetCode Roadmap").not());
}

#[test]
fn resources_by_kind() {
    studyplan()
        .args(["resources", "--kind", "video"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MIT OCW"))
        .stdout(predicate::str::contains("Crash Course World History"))
        .stdout(predicate::str::contains("Active Recall Playbook").not());
}

#[test]
fn resources_unknown_kind() {
    studyplan()
        .args(["resources", "--kind", "podcast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn dashboard_text() {
    studyplan()
        .args(["dashboard", "--config", "../../profiles/sample.toml", "--today", TODAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Readiness Snapshot – National Entrance Exam"))
        .stdout(predicate::str::contains("Weekly Runway:   6 weeks"))
        .stdout(predicate::str::contains(
            "You have 6 weeks to master 8 subjects averaging 5.0 focused hours daily.",
        ));
}

#[test]
fn dashboard_json_without_exam_date() {
    let output = studyplan()
        .args(["dashboard", "--today", TODAY, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["average_mastery"], 55);
    assert_eq!(snapshot["weeks_remaining"], 6);
    assert!(snapshot["calibration"]
        .as_str()
        .unwrap()
        .starts_with("Set your exam date"));
    assert_eq!(snapshot["priority_subjects"].as_array().unwrap().len(), 3);
    assert_eq!(snapshot["milestones"].as_array().unwrap().len(), 4);
}

#[test]
fn dashboard_rejects_unknown_format() {
    studyplan()
        .args(["dashboard", "--today", TODAY, "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: yaml"));
}

#[test]
fn validate_sample_profile() {
    studyplan()
        .args(["validate", "--config", "../../profiles/sample.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("National Entrance Exam (8 focus subjects"));
}

#[test]
fn validate_flags_past_exam_date() {
    studyplan()
        .args(["validate", "--config", "../../profiles/sample.toml", "--today", TODAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile valid."));

    studyplan()
        .args(["validate", "--config", "../../profiles/sample.toml", "--today", "2027-01-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[date] WARNING: exam date 2026-11-27 is in the past"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_reports_warnings() {
    studyplan()
        .args(["validate", "--config", "../../profiles/needs-review.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[daily_hours] WARNING"))
        .stdout(predicate::str::contains("[focus_subjects] WARNING"))
        .stdout(predicate::str::contains("[mastery.astronomy] WARNING"))
        .stdout(predicate::str::contains("3 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    studyplan()
        .args(["validate", "--config", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn profile_with_out_of_range_mastery_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studyplan.toml");
    std::fs::write(&path, "[mastery]\nchemistry = 120\n").unwrap();

    studyplan()
        .arg("validate")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("chemistry"));
}

#[test]
fn env_overrides_profile() {
    studyplan()
        .env("STUDYPLAN_INTENSITY", "revision")
        .env("STUDYPLAN_DAILY_HOURS", "4")
        .args(["plan", "--today", TODAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget: 23.8 h/week (Revision Taper)"));
}

#[test]
fn init_creates_profile() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created studyplan.toml"));

    assert!(dir.path().join("studyplan.toml").exists());

    // The generated profile is picked up from the working directory.
    studyplan()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    studyplan()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    studyplan()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
