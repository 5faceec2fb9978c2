//! The `studyplan focus` command.

use anyhow::Result;

use studyplan_core::focus::{priority_subjects, EVENING_CLOSURE, MIDDAY_MOMENTUM, MORNING_LAUNCHPAD};

use super::ProfileArgs;

pub fn execute(profile_args: ProfileArgs) -> Result<()> {
    let (profile, _) = profile_args.resolve()?;

    print_ritual("Morning Launchpad", &MORNING_LAUNCHPAD);
    print_ritual("Midday Momentum", &MIDDAY_MOMENTUM);
    print_ritual("Evening Closure", &EVENING_CLOSURE);

    println!("SOS Subjects – Priority Queue");
    for (i, entry) in priority_subjects(&profile.mastery).iter().enumerate() {
        println!("  {}. {} ({}% mastery)", i + 1, entry.name, entry.mastery);
        for item in &entry.focus {
            println!("     - {item}");
        }
    }
    println!(
        "\nTip: Schedule these subjects in your first study block when energy is highest. \
         Reassess mastery weekly to ensure rotation."
    );

    Ok(())
}

fn print_ritual(title: &str, items: &[&str]) {
    println!("{title}");
    for item in items {
        println!("  - {item}");
    }
    println!();
}
