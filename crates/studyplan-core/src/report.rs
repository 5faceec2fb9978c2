//! Plan reports with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::content;
use crate::mastery::MasteryMap;
use crate::planner::{build_plan, Intensity, MockTarget, PlanConfig, WeeklyPlan};

/// A generated study plan, ready to save or render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub exam_name: String,
    pub exam_date: Option<NaiveDate>,
    pub intensity: Intensity,
    pub daily_hours: f64,
    /// Mastery scores the plan was derived from.
    pub mastery: MasteryMap,
    pub weeks: u32,
    pub weekly_hour_budget: f64,
    pub plans: Vec<WeeklyPlan>,
    pub mock_targets: Vec<MockTarget>,
}

impl PlanReport {
    /// Build the plan and wrap it in a report.
    pub fn generate(config: &PlanConfig, mastery: &MasteryMap, today: NaiveDate) -> Self {
        let plan = build_plan(config, mastery, today);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exam_name: config.exam_name.clone(),
            exam_date: config.exam_date,
            intensity: config.intensity,
            daily_hours: config.daily_hours,
            mastery: *mastery,
            weeks: plan.weeks,
            weekly_hour_budget: plan.weekly_hour_budget,
            plans: plan.plans,
            mock_targets: plan.mock_targets,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(report = %self.id, weeks = self.weeks, "saved plan report to {}", path.display());
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: PlanReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// The mock test scheduled for a one-based week number, if any.
    pub fn mock_for_week(&self, week: u32) -> Option<&MockTarget> {
        self.mock_targets.iter().find(|t| t.week == week)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# {} – Weekly Trajectory\n\n", self.exam_name));
        md.push_str(&format!(
            "**Runway:** {} weeks · **Budget:** {:.1} h/week ({}) · **Average mastery:** {}%\n\n",
            self.weeks,
            self.weekly_hour_budget,
            self.intensity.label(),
            self.mastery.average()
        ));

        if self.plans.is_empty() {
            md.push_str("_No focus subjects selected._\n");
            return md;
        }

        for week in &self.plans {
            md.push_str(&format!(
                "## Week {} · {} → {}\n\n",
                week.week_index + 1,
                week.start_date.format("%b %-d"),
                week.end_date.format("%b %-d")
            ));
            md.push_str("| Subject | Hours | Priority | Outcomes |\n");
            md.push_str("|---------|-------|----------|----------|\n");
            for area in &week.focus_areas {
                md.push_str(&format!(
                    "| {} | {:.1} | {} | {} |\n",
                    content::subject(area.subject).name,
                    area.hours,
                    area.priority,
                    area.outcomes.join("<br>")
                ));
            }
            md.push('\n');
            if let Some(mock) = self.mock_for_week(week.week_index + 1) {
                md.push_str(&format!("**Mock test:** {}\n\n", mock.kind.label()));
            }
            md.push_str(&format!("> {}\n\n", week.accountability));
        }

        md
    }
}
