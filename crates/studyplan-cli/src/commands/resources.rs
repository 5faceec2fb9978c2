//! The `studyplan resources` command.

use anyhow::Result;

use studyplan_core::content::{resource_subject_name, resources_for};
use studyplan_core::model::{ResourceKind, SubjectKey};

pub fn execute(subject: Option<String>, kind: Option<String>) -> Result<()> {
    use comfy_table::{Cell, Table};

    let subject = subject.map(|s| s.parse::<SubjectKey>()).transpose()?;
    let kind = kind.map(|k| k.parse::<ResourceKind>()).transpose()?;

    let resources = resources_for(subject, kind);
    if resources.is_empty() {
        println!("No resources match these filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Title", "Subject", "Kind", "Duration", "Tags", "Link"]);
    for r in &resources {
        let tags: Vec<String> = r.skill_tags.iter().map(|t| format!("#{t}")).collect();
        table.add_row(vec![
            Cell::new(r.title),
            Cell::new(resource_subject_name(r)),
            Cell::new(r.kind.label()),
            Cell::new(r.duration.unwrap_or("-")),
            Cell::new(tags.join(" ")),
            Cell::new(r.url),
        ]);
    }
    println!("{table}");

    Ok(())
}
