//! Mastery-weighted weekly plan allocation.
//!
//! The weekly hour budget is split across the selected subjects in
//! proportion to their mastery gap (100 - mastery). Every call recomputes the
//! whole plan from its inputs; nothing is cached between calls.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StudyError;
use crate::mastery::MasteryMap;
use crate::model::SubjectKey;

/// Runway used when no exam date is set.
pub const DEFAULT_WEEKS: u32 = 6;
/// Shortest runway a plan is stretched to.
pub const MIN_WEEKS: u32 = 4;
/// Longest runway a plan is cut to.
pub const MAX_WEEKS: u32 = 26;
/// Floor for any single subject's weekly allocation.
pub const MIN_WEEKLY_HOURS: f64 = 3.0;

pub const DEFAULT_EXAM_NAME: &str = "Unified Competitive Exam";
pub const DEFAULT_DAILY_HOURS: f64 = 5.0;

const ACCOUNTABILITY_TIPS: [&str; 5] = [
    "Run a Sunday evening retrospective: highlight successes, document blockers, tweak next week accordingly.",
    "Share your weekly targets with a peer accountability partner; exchange progress updates every Friday.",
    "Use a daily 5-minute voice note to reflect on what accelerated or slowed you.",
    "Attach a reward to delivering 90% completion—for example, a leisure block or digital detox session.",
    "Log accuracy after every mock test and compute rolling averages to track readiness.",
];

/// Intensity preset scaling the weekly hour budget.
///
/// Deserializes through [`FromStr`], so config files accept any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Intensity {
    #[default]
    Steady,
    Aggressive,
    Revision,
}

impl Intensity {
    pub fn multiplier(&self) -> f64 {
        match self {
            Intensity::Steady => 1.0,
            Intensity::Aggressive => 1.35,
            Intensity::Revision => 0.85,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Steady => "Steady Momentum",
            Intensity::Aggressive => "Aggressive Push",
            Intensity::Revision => "Revision Taper",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::Steady => write!(f, "steady"),
            Intensity::Aggressive => write!(f, "aggressive"),
            Intensity::Revision => write!(f, "revision"),
        }
    }
}

impl FromStr for Intensity {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "steady" => Ok(Intensity::Steady),
            "aggressive" => Ok(Intensity::Aggressive),
            "revision" => Ok(Intensity::Revision),
            other => Err(StudyError::UnknownIntensity(other.to_string())),
        }
    }
}

impl TryFrom<String> for Intensity {
    type Error = StudyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What a subject's hours should be spent on this week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    ConceptBuilding,
    Drill,
    Mixed,
    Revision,
}

impl Priority {
    /// Half-open thresholds: [0,40) concept, [40,65) drill, [65,80) mixed,
    /// [80,100] revision.
    pub fn from_mastery(score: u8) -> Self {
        match score {
            0..=39 => Priority::ConceptBuilding,
            40..=64 => Priority::Drill,
            65..=79 => Priority::Mixed,
            _ => Priority::Revision,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::ConceptBuilding => "concept-building",
            Priority::Drill => "drill",
            Priority::Mixed => "mixed",
            Priority::Revision => "revision",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three canned weekly outcomes for one subject.
#[derive(Debug)]
struct OutcomeTemplates {
    concept: &'static str,
    drill: &'static str,
    revision: &'static str,
}

/// Indexed by [`SubjectKey::index`].
static OUTCOME_LIBRARY: [OutcomeTemplates; 8] = [
    OutcomeTemplates {
        concept: "Revise core formulae & attempt 10 novel problems on high-leverage topics.",
        drill: "Time-box mixed sectionals with negative marking simulation.",
        revision: "Re-attempt incorrect questions & build error flashcards.",
    },
    OutcomeTemplates {
        concept: "Rebuild derivations from first principles and annotate assumptions.",
        drill: "Solve 15 numericals focusing on units and dimensional checks.",
        revision: "Summarize three experiment setups and important graphs.",
    },
    OutcomeTemplates {
        concept: "Craft mechanism maps for new reactions encountered this week.",
        drill: "Run 30-minute speed quizzes alternating inorganic & physical sections.",
        revision: "Revisit summary sheets highlighting exceptions and color changes.",
    },
    OutcomeTemplates {
        concept: "Sketch flow diagrams for physiological processes and label keywords.",
        drill: "Attempt 40 assertion–reason MCQs targeting weak chapters.",
        revision: "Narrate processes aloud and cross-check with primary notes.",
    },
    OutcomeTemplates {
        concept: "Build layered timelines weaving political, social, and economic triggers.",
        drill: "Write two 200-word essays with focus on thesis clarity and evidence.",
        revision: "Review and memorize cause-impact tables using spaced recall.",
    },
    OutcomeTemplates {
        concept: "Re-derive demand/supply results and annotate policy implications.",
        drill: "Solve four numerical case studies with graphs drawn from scratch.",
        revision: "Summarize news articles and map them to syllabus themes.",
    },
    OutcomeTemplates {
        concept: "Implement algorithms without IDE assist and annotate invariants.",
        drill: "Complete 3 timed coding problems with post-mortem analysis.",
        revision: "Convert solved problems into template notes with pitfalls.",
    },
    OutcomeTemplates {
        concept: "Curate vocabulary sets and embed them into contextual sentences.",
        drill: "Attempt RC drills with 65% of time allocated to analysis.",
        revision: "Polish essay intros & conclusions; memorize grammar error log.",
    },
];

/// Ordered outcome list for a subject at a given priority.
pub fn outcomes_for(subject: SubjectKey, priority: Priority) -> Vec<&'static str> {
    let t = &OUTCOME_LIBRARY[subject.index()];
    match priority {
        Priority::ConceptBuilding => vec![t.concept, t.drill],
        Priority::Drill => vec![t.drill, t.concept],
        Priority::Revision => vec![t.revision, t.drill],
        Priority::Mixed => vec![t.concept, t.drill, t.revision],
    }
}

/// Planner inputs other than mastery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub exam_name: String,
    pub exam_date: Option<NaiveDate>,
    /// Intended range is 2–12 in half-hour steps; out-of-range values are
    /// still planned with (see `config::validate_profile`).
    pub daily_hours: f64,
    pub intensity: Intensity,
    pub include_mock_tests: bool,
    pub focus_subjects: Vec<SubjectKey>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            exam_name: DEFAULT_EXAM_NAME.to_string(),
            exam_date: None,
            daily_hours: DEFAULT_DAILY_HOURS,
            intensity: Intensity::Steady,
            include_mock_tests: true,
            focus_subjects: SubjectKey::ALL.to_vec(),
        }
    }
}

impl PlanConfig {
    /// Total study hours available per week.
    pub fn weekly_hour_budget(&self) -> f64 {
        self.daily_hours * 7.0 * self.intensity.multiplier()
    }

    /// Daily hours after the intensity multiplier.
    pub fn effective_daily_hours(&self) -> f64 {
        self.daily_hours * self.intensity.multiplier()
    }

    /// Focus subjects in catalogue order, without duplicates.
    pub fn selected_subjects(&self) -> Vec<SubjectKey> {
        SubjectKey::ALL
            .iter()
            .copied()
            .filter(|key| self.focus_subjects.contains(key))
            .collect()
    }

    /// Toggle a subject in or out of the focus selection.
    pub fn toggle_subject(&mut self, subject: SubjectKey) {
        if self.focus_subjects.contains(&subject) {
            self.focus_subjects.retain(|s| *s != subject);
        } else {
            self.focus_subjects.push(subject);
        }
    }

    /// Parse free-text daily hours. Anything unparseable becomes 0.
    pub fn parse_daily_hours(text: &str) -> f64 {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite())
            .unwrap_or(0.0)
    }
}

/// One subject's share of a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusAllocation {
    pub subject: SubjectKey,
    pub hours: f64,
    pub priority: Priority,
    pub outcomes: Vec<String>,
}

/// One week of the study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Zero-based.
    pub week_index: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub focus_areas: Vec<FocusAllocation>,
    pub accountability: String,
}

/// Mock-test format for a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockTestKind {
    Sectional,
    HalfLength,
    FullLength,
}

impl MockTestKind {
    pub fn label(&self) -> &'static str {
        match self {
            MockTestKind::Sectional => "Topic-wise sectional test",
            MockTestKind::HalfLength => "Half-length simulation",
            MockTestKind::FullLength => "Full-length mock with review sprint",
        }
    }
}

/// The mock test scheduled for a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockTarget {
    /// One-based.
    pub week: u32,
    pub kind: MockTestKind,
}

/// A fully derived plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub weeks: u32,
    pub weekly_hour_budget: f64,
    pub subjects: Vec<SubjectKey>,
    pub plans: Vec<WeeklyPlan>,
    pub mock_targets: Vec<MockTarget>,
}

/// Whole weeks between `today` and the exam, clamped to the planning range.
pub fn weeks_until_exam(exam_date: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(exam_date) = exam_date else {
        return DEFAULT_WEEKS;
    };
    let days = (exam_date - today).num_days();
    let weeks = (days as f64 / 7.0).ceil() as i64;
    weeks.clamp(MIN_WEEKS as i64, MAX_WEEKS as i64) as u32
}

/// Round to the nearest half hour.
fn round_half_hour(hours: f64) -> f64 {
    (hours * 2.0).round() / 2.0
}

/// Hour allocation for each selected subject, in the order given.
///
/// Shares follow the mastery gap; when every gap is zero the budget is split
/// evenly. Each share is rounded to the nearest half hour and clamped to
/// `[MIN_WEEKLY_HOURS, budget]`, with the floor winning if the budget itself
/// is below it.
pub fn allocate_hours(
    mastery: &MasteryMap,
    subjects: &[SubjectKey],
    weekly_budget: f64,
) -> Vec<(SubjectKey, f64)> {
    if subjects.is_empty() {
        return Vec::new();
    }
    let total_gap: u32 = subjects.iter().map(|s| u32::from(mastery.gap(*s))).sum();
    subjects
        .iter()
        .map(|subject| {
            let ratio = if total_gap > 0 {
                f64::from(mastery.gap(*subject)) / f64::from(total_gap)
            } else {
                1.0 / subjects.len() as f64
            };
            let hours = round_half_hour(ratio * weekly_budget)
                .min(weekly_budget)
                .max(MIN_WEEKLY_HOURS);
            (*subject, hours)
        })
        .collect()
}

/// Mock-test schedule across the runway. Empty when disabled.
pub fn mock_test_cadence(weeks: u32, enabled: bool) -> Vec<MockTarget> {
    if !enabled {
        return Vec::new();
    }
    let segment = (weeks / 4).max(1);
    (1..=weeks)
        .map(|week| {
            let phase = week.div_ceil(segment);
            let kind = match phase {
                1 => MockTestKind::Sectional,
                2 => MockTestKind::HalfLength,
                _ => MockTestKind::FullLength,
            };
            MockTarget { week, kind }
        })
        .collect()
}

/// Derive the full plan from mastery and configuration.
///
/// An empty subject selection yields zero weekly plans; the runway and mock
/// cadence are still reported.
pub fn build_plan(config: &PlanConfig, mastery: &MasteryMap, today: NaiveDate) -> StudyPlan {
    let weeks = weeks_until_exam(config.exam_date, today);
    let subjects = config.selected_subjects();
    let budget = config.weekly_hour_budget();

    debug!(
        weeks,
        budget,
        subjects = subjects.len(),
        intensity = %config.intensity,
        "building study plan"
    );

    let plans = if subjects.is_empty() {
        Vec::new()
    } else {
        let focus_areas: Vec<FocusAllocation> = allocate_hours(mastery, &subjects, budget)
            .into_iter()
            .map(|(subject, hours)| {
                let priority = Priority::from_mastery(mastery.get(subject));
                FocusAllocation {
                    subject,
                    hours,
                    priority,
                    outcomes: outcomes_for(subject, priority)
                        .into_iter()
                        .map(String::from)
                        .collect(),
                }
            })
            .collect();

        (0..weeks)
            .map(|index| {
                let start_date = today + Duration::days(i64::from(index) * 7);
                WeeklyPlan {
                    week_index: index,
                    start_date,
                    end_date: start_date + Duration::days(6),
                    focus_areas: focus_areas.clone(),
                    accountability: ACCOUNTABILITY_TIPS[index as usize % ACCOUNTABILITY_TIPS.len()]
                        .to_string(),
                }
            })
            .collect()
    };

    StudyPlan {
        weeks,
        weekly_hour_budget: budget,
        subjects,
        plans,
        mock_targets: mock_test_cadence(weeks, config.include_mock_tests),
    }
}
