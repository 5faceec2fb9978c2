//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use studyplan_core::config::{load_profile_from, StudyProfile};

pub mod dashboard;
pub mod focus;
pub mod init;
pub mod plan;
pub mod practice;
pub mod resources;
pub mod subjects;
pub mod timeline;
pub mod validate;

/// Where mastery and planner settings come from.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Profile path (defaults to ./studyplan.toml, then ~/.config/studyplan/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mastery override, e.g. "mathematics=30" (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub mastery: Vec<String>,

    /// Date to plan from (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl ProfileArgs {
    /// Load the profile, apply mastery overrides, and resolve today's date.
    pub fn resolve(&self) -> Result<(StudyProfile, NaiveDate)> {
        let mut profile = load_profile_from(self.config.as_deref())?;
        for assignment in &self.mastery {
            profile
                .mastery
                .apply_assignment(assignment)
                .with_context(|| format!("invalid --mastery value '{assignment}'"))?;
        }
        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        debug!(
            %today,
            average_mastery = profile.mastery.average(),
            "resolved study profile"
        );
        Ok((profile, today))
    }
}
