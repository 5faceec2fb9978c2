//! Study profile loading: TOML file, environment overrides, validation.
//!
//! A profile is the planner configuration plus the mastery map. Flags on the
//! command line are applied on top by the CLI after loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::mastery::MasteryMap;
use crate::model::SubjectKey;
use crate::planner::{Intensity, PlanConfig, DEFAULT_DAILY_HOURS, DEFAULT_EXAM_NAME};

/// File name searched for in the working directory.
pub const PROFILE_FILE_NAME: &str = "studyplan.toml";

pub const ENV_EXAM_DATE: &str = "STUDYPLAN_EXAM_DATE";
pub const ENV_DAILY_HOURS: &str = "STUDYPLAN_DAILY_HOURS";
pub const ENV_INTENSITY: &str = "STUDYPLAN_INTENSITY";

const MIN_DAILY_HOURS: f64 = 2.0;
const MAX_DAILY_HOURS: f64 = 12.0;

/// Planner configuration and mastery, as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyProfile {
    pub plan: PlanConfig,
    pub mastery: MasteryMap,
    /// Keys in the `[mastery]` table that name no known subject.
    pub ignored_mastery_keys: Vec<String>,
}

/// Intermediate TOML structure for profile files.
#[derive(Debug, Default, Deserialize)]
struct TomlProfile {
    #[serde(default)]
    exam: TomlExam,
    #[serde(default)]
    mastery: BTreeMap<String, i64>,
}

#[derive(Debug, Deserialize)]
struct TomlExam {
    #[serde(default = "default_exam_name")]
    name: String,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default = "default_daily_hours")]
    daily_hours: f64,
    #[serde(default)]
    intensity: Intensity,
    #[serde(default = "default_true")]
    include_mock_tests: bool,
    #[serde(default)]
    focus_subjects: Option<Vec<String>>,
}

impl Default for TomlExam {
    fn default() -> Self {
        Self {
            name: default_exam_name(),
            date: None,
            daily_hours: default_daily_hours(),
            intensity: Intensity::default(),
            include_mock_tests: true,
            focus_subjects: None,
        }
    }
}

fn default_exam_name() -> String {
    DEFAULT_EXAM_NAME.to_string()
}

fn default_daily_hours() -> f64 {
    DEFAULT_DAILY_HOURS
}

fn default_true() -> bool {
    true
}

/// Parse a profile from TOML text. `source` is only used in error messages.
pub fn parse_profile_str(content: &str, source: &Path) -> Result<StudyProfile> {
    let parsed: TomlProfile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source.display()))?;

    let focus_subjects = match parsed.exam.focus_subjects {
        Some(keys) => keys
            .iter()
            .map(|k| k.parse::<SubjectKey>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid focus_subjects in {}", source.display()))?,
        None => SubjectKey::ALL.to_vec(),
    };

    let mut known = Vec::new();
    let mut ignored_mastery_keys = Vec::new();
    for (key, value) in &parsed.mastery {
        if key.parse::<SubjectKey>().is_ok() {
            known.push((key.as_str(), *value));
        } else {
            warn!("ignoring mastery for unknown subject '{key}' in {}", source.display());
            ignored_mastery_keys.push(key.clone());
        }
    }
    let mastery = MasteryMap::from_entries(known)
        .with_context(|| format!("invalid [mastery] table in {}", source.display()))?;

    Ok(StudyProfile {
        plan: PlanConfig {
            exam_name: parsed.exam.name,
            exam_date: parsed.exam.date,
            daily_hours: parsed.exam.daily_hours,
            intensity: parsed.exam.intensity,
            include_mock_tests: parsed.exam.include_mock_tests,
            focus_subjects,
        },
        mastery,
        ignored_mastery_keys,
    })
}

/// Read and parse a profile file.
pub fn parse_profile(path: &Path) -> Result<StudyProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile: {}", path.display()))?;
    parse_profile_str(&content, path)
}

/// Apply environment-style overrides through `lookup`.
///
/// Daily hours that do not parse become 0 rather than failing.
pub fn apply_overrides<F>(profile: &mut StudyProfile, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(date) = lookup(ENV_EXAM_DATE) {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .with_context(|| format!("{ENV_EXAM_DATE} must be YYYY-MM-DD, got '{date}'"))?;
        profile.plan.exam_date = Some(date);
    }
    if let Some(hours) = lookup(ENV_DAILY_HOURS) {
        profile.plan.daily_hours = PlanConfig::parse_daily_hours(&hours);
    }
    if let Some(intensity) = lookup(ENV_INTENSITY) {
        profile.plan.intensity = intensity.parse()?;
    }
    Ok(())
}

/// Load a profile from well-known paths.
///
/// Search order:
/// 1. `studyplan.toml` in the current directory
/// 2. `~/.config/studyplan/config.toml`
///
/// Falls back to defaults when neither exists. Environment overrides:
/// `STUDYPLAN_EXAM_DATE`, `STUDYPLAN_DAILY_HOURS`, `STUDYPLAN_INTENSITY`.
pub fn load_profile() -> Result<StudyProfile> {
    load_profile_from(None)
}

/// Load a profile from an explicit path, or search the default locations.
pub fn load_profile_from(path: Option<&Path>) -> Result<StudyProfile> {
    let profile_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("profile not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(PROFILE_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut profile = match profile_path {
        Some(path) => {
            debug!("loading profile from {}", path.display());
            parse_profile(&path)?
        }
        None => StudyProfile::default(),
    };

    apply_overrides(&mut profile, |key| std::env::var(key).ok())?;
    Ok(profile)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studyplan"))
}

/// A non-fatal issue found in a profile.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending setting (if applicable).
    pub field: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a profile for settings the planner accepts but that are probably
/// mistakes.
pub fn validate_profile(profile: &StudyProfile, today: NaiveDate) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let plan = &profile.plan;

    if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&plan.daily_hours) {
        warnings.push(ValidationWarning {
            field: Some("daily_hours".into()),
            message: format!(
                "daily_hours {} is outside the supported range {MIN_DAILY_HOURS}-{MAX_DAILY_HOURS}",
                plan.daily_hours
            ),
        });
    } else if (plan.daily_hours * 2.0).fract() != 0.0 {
        warnings.push(ValidationWarning {
            field: Some("daily_hours".into()),
            message: format!(
                "daily_hours {} is not a multiple of 0.5",
                plan.daily_hours
            ),
        });
    }

    if plan.selected_subjects().is_empty() {
        warnings.push(ValidationWarning {
            field: Some("focus_subjects".into()),
            message: "no focus subjects selected; the plan will be empty".into(),
        });
    }

    if let Some(date) = plan.exam_date {
        if date < today {
            warnings.push(ValidationWarning {
                field: Some("date".into()),
                message: format!("exam date {date} is in the past"),
            });
        }
    }

    for key in &profile.ignored_mastery_keys {
        warnings.push(ValidationWarning {
            field: Some(format!("mastery.{key}")),
            message: format!("unknown subject '{key}' will be ignored"),
        });
    }

    warnings
}
