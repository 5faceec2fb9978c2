//! The `studyplan subjects` command.

use anyhow::Result;

use studyplan_core::content::SUBJECTS;
use studyplan_core::planner::Priority;

use super::ProfileArgs;

pub fn execute(profile_args: ProfileArgs, details: bool) -> Result<()> {
    use comfy_table::{Cell, Table};

    let (profile, _) = profile_args.resolve()?;

    let mut table = Table::new();
    table.set_header(vec!["Key", "Subject", "Mastery", "Priority", "Summary"]);
    for subject in &SUBJECTS {
        let score = profile.mastery.get(subject.key);
        table.add_row(vec![
            Cell::new(subject.key),
            Cell::new(subject.name),
            Cell::new(format!("{score}%")),
            Cell::new(Priority::from_mastery(score)),
            Cell::new(subject.summary),
        ]);
    }
    println!("{table}");
    println!("Average mastery: {}%", profile.mastery.average());

    if details {
        for subject in &SUBJECTS {
            println!("\n{}", subject.name);
            println!("  Weekly Focus Blueprint");
            for item in subject.weekly_focus {
                println!("    - {item}");
            }
            println!("  Exam Tips");
            for tip in subject.exam_tips {
                println!("    - {tip}");
            }
        }
    }

    Ok(())
}
