//! The `studyplan plan` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use studyplan_core::config::validate_profile;
use studyplan_core::content;
use studyplan_core::model::SubjectKey;
use studyplan_core::planner::PlanConfig;
use studyplan_core::report::PlanReport;

use super::ProfileArgs;

/// Flag values that override the loaded profile.
#[derive(Debug, Default)]
pub struct PlanOverrides {
    pub exam_name: Option<String>,
    pub exam_date: Option<NaiveDate>,
    pub daily_hours: Option<String>,
    pub intensity: Option<String>,
    pub subjects: Option<String>,
    pub no_mock_tests: bool,
}

impl PlanOverrides {
    fn apply(self, config: &mut PlanConfig) -> Result<()> {
        if let Some(name) = self.exam_name {
            config.exam_name = name;
        }
        if let Some(date) = self.exam_date {
            config.exam_date = Some(date);
        }
        if let Some(hours) = self.daily_hours {
            config.daily_hours = PlanConfig::parse_daily_hours(&hours);
        }
        if let Some(intensity) = self.intensity {
            config.intensity = intensity.parse()?;
        }
        if let Some(subjects) = self.subjects {
            config.focus_subjects = subjects
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<SubjectKey>())
                .collect::<Result<Vec<_>, _>>()
                .context("invalid --subjects value")?;
        }
        if self.no_mock_tests {
            config.include_mock_tests = false;
        }
        Ok(())
    }
}

pub fn execute(
    profile_args: ProfileArgs,
    overrides: PlanOverrides,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let (mut profile, today) = profile_args.resolve()?;
    overrides.apply(&mut profile.plan)?;

    for w in validate_profile(&profile, today) {
        eprintln!("Warning: {}", w.message);
    }

    let report = PlanReport::generate(&profile.plan, &profile.mastery, today);

    match format.as_str() {
        "markdown" | "md" => println!("{}", report.to_markdown()),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_text(&report),
        other => anyhow::bail!("Unknown format: {other} (expected text, markdown, or json)"),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Plan saved to: {}", path.display());
    }

    Ok(())
}

fn print_text(report: &PlanReport) {
    use comfy_table::{Cell, Table};

    println!("{} – Weekly Trajectory", report.exam_name);
    println!(
        "Runway: {} weeks · Budget: {:.1} h/week ({})",
        report.weeks,
        report.weekly_hour_budget,
        report.intensity.label()
    );

    if report.plans.is_empty() {
        println!("\nNo focus subjects selected. Pick at least one subject to build a plan.");
    }

    for week in &report.plans {
        println!(
            "\nWeek {} · {} → {} ({} focus tracks)",
            week.week_index + 1,
            week.start_date.format("%b %-d"),
            week.end_date.format("%b %-d"),
            week.focus_areas.len()
        );

        let mut table = Table::new();
        table.set_header(vec!["Subject", "Hours", "Priority", "Outcomes"]);
        for area in &week.focus_areas {
            table.add_row(vec![
                Cell::new(content::subject(area.subject).name),
                Cell::new(format!("{:.1}", area.hours)),
                Cell::new(area.priority),
                Cell::new(area.outcomes.join("\n")),
            ]);
        }
        println!("{table}");
        println!("Accountability: {}", week.accountability);
    }

    if !report.mock_targets.is_empty() {
        println!("\nMock Test Cadence");
        for target in &report.mock_targets {
            println!("  Week {}: {}", target.week, target.kind.label());
        }
    }
}
