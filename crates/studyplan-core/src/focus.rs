//! Daily focus board: the weakest subjects plus fixed daily rituals.

use serde::Serialize;

use crate::content::SUBJECTS;
use crate::mastery::MasteryMap;
use crate::model::SubjectKey;

/// How many subjects the board surfaces.
pub const PRIORITY_SLOTS: usize = 3;
/// How many weekly-focus items are shown per surfaced subject.
pub const FOCUS_ITEMS_PER_SUBJECT: usize = 2;

pub const MORNING_LAUNCHPAD: [&str; 4] = [
    "10-minute formula or definition rapid-fire recall",
    "3 Pomodoro warm-up with low stakes problem-solving",
    "Mindfulness breathing for 4 minutes to prime focus",
    "Quick status log: yesterday’s win, today’s constraint, immediate priority",
];

pub const MIDDAY_MOMENTUM: [&str; 3] = [
    "Attempt a sectional test under half time to build pacing stamina",
    "Teach a concept aloud or to a study buddy to reinforce retention",
    "Rewrite incorrect answers as mini case-studies to avoid repeat errors",
];

pub const EVENING_CLOSURE: [&str; 3] = [
    "Reflect on top 3 insights & log them into knowledge base",
    "Plan tomorrow’s first study block in detail",
    "Light-weight review: flashcards, diagrams, or summary maps",
];

/// A subject flagged for extra attention today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrioritySubject {
    pub subject: SubjectKey,
    pub name: &'static str,
    pub mastery: u8,
    pub focus: Vec<&'static str>,
}

/// Lowest-mastery subjects, weakest first. Ties keep catalogue order.
pub fn priority_subjects(mastery: &MasteryMap) -> Vec<PrioritySubject> {
    let mut ranked: Vec<_> = SUBJECTS.iter().collect();
    ranked.sort_by_key(|s| mastery.get(s.key));
    ranked
        .into_iter()
        .take(PRIORITY_SLOTS)
        .map(|s| PrioritySubject {
            subject: s.key,
            name: s.name,
            mastery: mastery.get(s.key),
            focus: s
                .weekly_focus
                .iter()
                .take(FOCUS_ITEMS_PER_SUBJECT)
                .copied()
                .collect(),
        })
        .collect()
}
