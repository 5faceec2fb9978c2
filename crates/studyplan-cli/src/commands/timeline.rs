//! The `studyplan timeline` command.

use anyhow::Result;

use studyplan_core::planner::{weeks_until_exam, MAX_WEEKS, MIN_WEEKS};
use studyplan_core::timeline::tailored_milestones;

use super::ProfileArgs;

pub fn execute(profile_args: ProfileArgs, weeks: Option<u32>) -> Result<()> {
    let weeks = match weeks {
        Some(w) => w.clamp(MIN_WEEKS, MAX_WEEKS),
        None => {
            let (profile, today) = profile_args.resolve()?;
            weeks_until_exam(profile.plan.exam_date, today)
        }
    };

    println!("Macro Timeline Navigator ({weeks} weeks)");
    for (i, milestone) in tailored_milestones(weeks).iter().enumerate() {
        println!("\nPhase {} · {} ({})", i + 1, milestone.phase, milestone.range);
        for directive in milestone.directives {
            println!("  - {directive}");
        }
    }

    Ok(())
}
