//! Practice question selection.
//!
//! Narrows the question bank by subject and difficulty, then draws a single
//! question at random. `Mixed` difficulty with a specific subject picks a
//! difficulty band from that subject's mastery.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::content::QUESTION_BANK;
use crate::error::StudyError;
use crate::mastery::MasteryMap;
use crate::model::{Difficulty, PracticeQuestion, SubjectKey};

/// Suggested reflection labels for a practised question.
pub const SUGGESTED_REVIEW_TAGS: [&str; 4] = [
    "Need revision",
    "Formula gap",
    "Concept unclear",
    "Silly mistake",
];

pub const ERROR_JOURNAL_NOTE: &str =
    "Add this prompt to your error journal and revisit within 72 hours for spaced reinforcement.";

/// Below this mastery the mixed band is foundation only.
const FOUNDATION_BAND_BELOW: u8 = 45;
/// Above this mastery the mixed band is advanced only.
const ADVANCED_BAND_ABOVE: u8 = 80;

/// Subject lane of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubjectFilter {
    #[default]
    All,
    Only(SubjectKey),
}

impl FromStr for SubjectFilter {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(SubjectFilter::All)
        } else {
            s.parse().map(SubjectFilter::Only)
        }
    }
}

/// Difficulty selection: an explicit tier, or mastery-driven `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    Mixed,
    Exactly(Difficulty),
}

impl DifficultyFilter {
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyFilter::Mixed => "Smart Mix",
            DifficultyFilter::Exactly(d) => d.label(),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::Mixed => write!(f, "mixed"),
            DifficultyFilter::Exactly(d) => write!(f, "{d}"),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            Ok(DifficultyFilter::Mixed)
        } else {
            s.parse().map(DifficultyFilter::Exactly)
        }
    }
}

/// Difficulties allowed for a subject under `Mixed`, based on its mastery.
pub fn mastery_band(mastery: u8) -> &'static [Difficulty] {
    if mastery < FOUNDATION_BAND_BELOW {
        &[Difficulty::Foundation]
    } else if mastery > ADVANCED_BAND_ABOVE {
        &[Difficulty::Advanced]
    } else {
        &[Difficulty::Foundation, Difficulty::Intermediate]
    }
}

/// The questions matching both filters, in bank order.
pub fn candidate_pool(
    mastery: &MasteryMap,
    subject: SubjectFilter,
    difficulty: DifficultyFilter,
) -> Vec<&'static PracticeQuestion> {
    let band: Option<&[Difficulty]> = match (subject, &difficulty) {
        (_, DifficultyFilter::Exactly(d)) => Some(std::slice::from_ref(d)),
        (SubjectFilter::Only(key), DifficultyFilter::Mixed) => Some(mastery_band(mastery.get(key))),
        (SubjectFilter::All, DifficultyFilter::Mixed) => None,
    };

    QUESTION_BANK
        .iter()
        .filter(|q| match subject {
            SubjectFilter::All => true,
            SubjectFilter::Only(key) => q.subject == key,
        })
        .filter(|q| band.map_or(true, |b| b.contains(&q.difficulty)))
        .collect()
}

/// State of one practice sitting: the active question and the reflection
/// tags the user attached to it.
#[derive(Debug, Clone, Default)]
pub struct PracticeSession {
    active: Option<&'static PracticeQuestion>,
    show_answer: bool,
    review_tags: Vec<String>,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a question uniformly from `pool`.
    ///
    /// A draw hides the answer and clears review tags. An empty pool leaves
    /// no active question and clears all prior state.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        pool: &[&'static PracticeQuestion],
        rng: &mut R,
    ) -> Option<&'static PracticeQuestion> {
        self.show_answer = false;
        self.review_tags.clear();
        self.active = pool.choose(rng).copied();
        match self.active {
            Some(q) => debug!(question = q.id, pool = pool.len(), "drew practice question"),
            None => debug!("practice pool is empty"),
        }
        self.active
    }

    pub fn active(&self) -> Option<&'static PracticeQuestion> {
        self.active
    }

    /// Flip answer visibility. Returns the new state.
    pub fn toggle_answer(&mut self) -> bool {
        self.show_answer = self.active.is_some() && !self.show_answer;
        self.show_answer
    }

    pub fn answer_visible(&self) -> bool {
        self.show_answer
    }

    /// Add `tag` if absent, remove it if present. No-op without an active
    /// question. Returns whether the tag is now set.
    pub fn toggle_review_tag(&mut self, tag: &str) -> bool {
        if self.active.is_none() {
            return false;
        }
        let tag = tag.trim();
        if let Some(pos) = self.review_tags.iter().position(|t| t == tag) {
            self.review_tags.remove(pos);
            false
        } else {
            self.review_tags.push(tag.to_string());
            true
        }
    }

    pub fn review_tags(&self) -> &[String] {
        &self.review_tags
    }

    /// The error-journal reminder, shown once any review tag is set.
    pub fn journal_note(&self) -> Option<&'static str> {
        (!self.review_tags.is_empty()).then_some(ERROR_JOURNAL_NOTE)
    }
}
