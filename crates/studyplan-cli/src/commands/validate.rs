//! The `studyplan validate` command.

use anyhow::Result;

use studyplan_core::config::validate_profile;

use super::ProfileArgs;

pub fn execute(profile_args: ProfileArgs) -> Result<()> {
    let (profile, today) = profile_args.resolve()?;

    println!(
        "Profile: {} ({} focus subjects, average mastery {}%)",
        profile.plan.exam_name,
        profile.plan.selected_subjects().len(),
        profile.mastery.average()
    );

    let warnings = validate_profile(&profile, today);
    for w in &warnings {
        let prefix = w
            .field
            .as_ref()
            .map(|f| format!("  [{f}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Profile valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
