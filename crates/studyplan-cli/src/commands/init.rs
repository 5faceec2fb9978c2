//! The `studyplan init` command.

use std::path::Path;

use anyhow::Result;

use studyplan_core::config::PROFILE_FILE_NAME;

pub fn execute() -> Result<()> {
    if Path::new(PROFILE_FILE_NAME).exists() {
        println!("{PROFILE_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(PROFILE_FILE_NAME, SAMPLE_PROFILE)?;
    println!("Created {PROFILE_FILE_NAME}");

    println!("\nNext steps:");
    println!("  1. Set your exam date and current mastery in {PROFILE_FILE_NAME}");
    println!("  2. Run: studyplan validate");
    println!("  3. Run: studyplan plan");

    Ok(())
}

const SAMPLE_PROFILE: &str = r#"# studyplan profile

[exam]
name = "Unified Competitive Exam"
# Quoted YYYY-MM-DD; leave out to plan a 6-week default runway.
# date = "2026-12-01"
daily_hours = 5.0
# steady, aggressive, or revision
intensity = "steady"
include_mock_tests = true
focus_subjects = [
    "mathematics",
    "physics",
    "chemistry",
    "biology",
    "history",
    "economics",
    "computerScience",
    "english",
]

# Self-assessed mastery, 0-100. Subjects left out default to 55.
[mastery]
mathematics = 55
physics = 55
chemistry = 55
biology = 55
history = 55
economics = 55
computerScience = 55
english = 55
"#;
