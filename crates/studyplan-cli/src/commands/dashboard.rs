//! The `studyplan dashboard` command.

use anyhow::Result;

use studyplan_core::dashboard::readiness_snapshot;

use super::ProfileArgs;

pub fn execute(profile_args: ProfileArgs, format: String) -> Result<()> {
    let (profile, today) = profile_args.resolve()?;
    let snapshot = readiness_snapshot(&profile.plan, &profile.mastery, today);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(());
        }
        "text" => {}
        other => anyhow::bail!("Unknown format: {other} (expected text or json)"),
    }

    println!("Readiness Snapshot – {}", snapshot.exam_name);
    println!("  Average Mastery: {}%", snapshot.average_mastery);
    println!("  Weekly Runway:   {} weeks", snapshot.weeks_remaining);
    println!("  {}", snapshot.calibration);

    println!("\nBottom three subjects");
    for entry in &snapshot.priority_subjects {
        println!("  - {} ({}%)", entry.name, entry.mastery);
    }

    println!("\nPhases");
    for (i, milestone) in snapshot.milestones.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, milestone.phase, milestone.range);
    }

    Ok(())
}
