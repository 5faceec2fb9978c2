//! Core data model types for studyplan.
//!
//! Subjects, practice questions, and resources are immutable catalogue
//! entries; the catalogue itself lives in [`crate::content`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StudyError;

/// One of the eight fixed exam subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubjectKey {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    History,
    Economics,
    ComputerScience,
    English,
}

impl SubjectKey {
    /// All subjects in catalogue order.
    pub const ALL: [SubjectKey; 8] = [
        SubjectKey::Mathematics,
        SubjectKey::Physics,
        SubjectKey::Chemistry,
        SubjectKey::Biology,
        SubjectKey::History,
        SubjectKey::Economics,
        SubjectKey::ComputerScience,
        SubjectKey::English,
    ];

    /// The identifier used in config files and flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKey::Mathematics => "mathematics",
            SubjectKey::Physics => "physics",
            SubjectKey::Chemistry => "chemistry",
            SubjectKey::Biology => "biology",
            SubjectKey::History => "history",
            SubjectKey::Economics => "economics",
            SubjectKey::ComputerScience => "computerScience",
            SubjectKey::English => "english",
        }
    }

    /// Position in catalogue order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectKey {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mathematics" | "math" | "maths" => Ok(SubjectKey::Mathematics),
            "physics" => Ok(SubjectKey::Physics),
            "chemistry" => Ok(SubjectKey::Chemistry),
            "biology" => Ok(SubjectKey::Biology),
            "history" => Ok(SubjectKey::History),
            "economics" => Ok(SubjectKey::Economics),
            "computerscience" | "computer-science" | "computer_science" | "cs" => {
                Ok(SubjectKey::ComputerScience)
            }
            "english" => Ok(SubjectKey::English),
            _ => Err(StudyError::UnknownSubject(s.trim().to_string())),
        }
    }
}

/// Static description of a subject.
#[derive(Debug, Clone, Serialize)]
pub struct Subject {
    pub key: SubjectKey,
    pub name: &'static str,
    pub summary: &'static str,
    /// Recurring weekly activities, most important first.
    pub weekly_focus: &'static [&'static str],
    pub exam_tips: &'static [&'static str],
}

/// Question difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Foundation,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Foundation => "foundation",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Foundation => "Foundation",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "foundation" => Ok(Difficulty::Foundation),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(StudyError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}

/// A question from the practice bank.
#[derive(Debug, Clone, Serialize)]
pub struct PracticeQuestion {
    pub id: &'static str,
    pub subject: SubjectKey,
    pub difficulty: Difficulty,
    pub prompt: &'static str,
    pub answer: &'static str,
    pub concepts: &'static [&'static str],
}

/// Which subject a resource belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceSubject {
    Subject(SubjectKey),
    General,
}

impl ResourceSubject {
    /// Whether a resource for this subject should be listed under `key`.
    /// General resources match every subject.
    pub fn covers(&self, key: SubjectKey) -> bool {
        match self {
            ResourceSubject::Subject(own) => *own == key,
            ResourceSubject::General => true,
        }
    }
}

impl Serialize for ResourceSubject {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResourceSubject::Subject(key) => serializer.serialize_str(key.as_str()),
            ResourceSubject::General => serializer.serialize_str("general"),
        }
    }
}

/// Format of a study resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Article,
    Book,
    ProblemSet,
    Tool,
}

impl ResourceKind {
    /// Heading used when listing resources of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Video => "Video Series",
            ResourceKind::Article => "Article / Notes",
            ResourceKind::Book => "Book Companion",
            ResourceKind::ProblemSet => "Problem Sets",
            ResourceKind::Tool => "Tools & Apps",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "video" => Ok(ResourceKind::Video),
            "article" => Ok(ResourceKind::Article),
            "book" => Ok(ResourceKind::Book),
            "problem_set" => Ok(ResourceKind::ProblemSet),
            "tool" => Ok(ResourceKind::Tool),
            _ => Err(StudyError::UnknownResourceKind(s.trim().to_string())),
        }
    }
}

/// An external study resource. URLs are listed, never fetched.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub id: &'static str,
    pub subject: ResourceSubject,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub kind: ResourceKind,
    pub duration: Option<&'static str>,
    pub skill_tags: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_key_display_and_parse() {
        assert_eq!(SubjectKey::ComputerScience.to_string(), "computerScience");
        assert_eq!(
            "computerScience".parse::<SubjectKey>().unwrap(),
            SubjectKey::ComputerScience
        );
        assert_eq!("cs".parse::<SubjectKey>().unwrap(), SubjectKey::ComputerScience);
        assert_eq!(" Physics ".parse::<SubjectKey>().unwrap(), SubjectKey::Physics);
        assert!("art".parse::<SubjectKey>().is_err());
    }

    #[test]
    fn subject_index_follows_catalogue_order() {
        for (i, key) in SubjectKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn serde_uses_config_identifiers() {
        let json = serde_json::to_string(&SubjectKey::ComputerScience).unwrap();
        assert_eq!(json, "\"computerScience\"");
        let kind = serde_json::to_string(&ResourceKind::ProblemSet).unwrap();
        assert_eq!(kind, "\"problem_set\"");
        let general = serde_json::to_string(&ResourceSubject::General).unwrap();
        assert_eq!(general, "\"general\"");
        let math = serde_json::to_string(&ResourceSubject::Subject(SubjectKey::Mathematics)).unwrap();
        assert_eq!(math, "\"mathematics\"");
    }

    #[test]
    fn resource_kind_parse_accepts_dashes() {
        assert_eq!(
            "problem-set".parse::<ResourceKind>().unwrap(),
            ResourceKind::ProblemSet
        );
        assert!("podcast".parse::<ResourceKind>().is_err());
    }
}
