//! Readiness snapshot: the one-screen summary of where preparation stands.

use chrono::NaiveDate;
use serde::Serialize;

use crate::focus::{priority_subjects, PrioritySubject};
use crate::mastery::MasteryMap;
use crate::planner::{weeks_until_exam, PlanConfig, DEFAULT_WEEKS};
use crate::timeline::{tailored_milestones, Milestone};

/// Everything the dashboard shows, derived from mastery and plan settings.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessSnapshot {
    pub exam_name: String,
    pub average_mastery: u8,
    /// Weeks until the exam, as the planner computes it.
    pub weeks_remaining: u32,
    pub calibration: String,
    pub priority_subjects: Vec<PrioritySubject>,
    pub milestones: Vec<Milestone>,
}

/// The planner's one-line summary of the current settings.
pub fn calibration_summary(config: &PlanConfig, weeks: u32) -> String {
    if config.exam_date.is_some() {
        format!(
            "You have {weeks} weeks to master {} subjects averaging {:.1} focused hours daily.",
            config.selected_subjects().len(),
            config.effective_daily_hours()
        )
    } else {
        format!(
            "Set your exam date to calibrate the timeline. Defaults to a structured \
             {DEFAULT_WEEKS}-week runway if the date is left blank."
        )
    }
}

pub fn readiness_snapshot(
    config: &PlanConfig,
    mastery: &MasteryMap,
    today: NaiveDate,
) -> ReadinessSnapshot {
    let weeks = weeks_until_exam(config.exam_date, today);
    ReadinessSnapshot {
        exam_name: config.exam_name.clone(),
        average_mastery: mastery.average(),
        weeks_remaining: weeks,
        calibration: calibration_summary(config, weeks),
        priority_subjects: priority_subjects(mastery),
        milestones: tailored_milestones(weeks),
    }
}
