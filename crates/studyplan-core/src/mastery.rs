//! Per-subject mastery scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StudyError;
use crate::model::SubjectKey;

/// Score every subject starts from until the user adjusts it.
pub const DEFAULT_MASTERY: u8 = 55;

/// Upper bound of a mastery score.
pub const MAX_MASTERY: u8 = 100;

/// Mastery score (0–100) for every known subject.
///
/// The map is total: every [`SubjectKey`] always has a score, so lookups
/// never need a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasteryMap {
    scores: [u8; SubjectKey::ALL.len()],
}

impl Default for MasteryMap {
    fn default() -> Self {
        Self::uniform(DEFAULT_MASTERY)
    }
}

impl MasteryMap {
    /// Every subject at the same score (capped at 100).
    pub fn uniform(value: u8) -> Self {
        Self {
            scores: [value.min(MAX_MASTERY); SubjectKey::ALL.len()],
        }
    }

    pub fn get(&self, subject: SubjectKey) -> u8 {
        self.scores[subject.index()]
    }

    /// Set a subject's score. Values above 100 are rejected.
    pub fn set(&mut self, subject: SubjectKey, value: u8) -> Result<(), StudyError> {
        if value > MAX_MASTERY {
            return Err(StudyError::MasteryOutOfRange {
                subject: subject.to_string(),
                value: value.into(),
            });
        }
        self.scores[subject.index()] = value;
        Ok(())
    }

    /// Builder-style [`set`](Self::set) that caps instead of failing.
    pub fn with(mut self, subject: SubjectKey, value: u8) -> Self {
        self.scores[subject.index()] = value.min(MAX_MASTERY);
        self
    }

    /// Apply a `subject=value` assignment, as given on the command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), StudyError> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| StudyError::MalformedAssignment(assignment.to_string()))?;
        let subject: SubjectKey = key.parse()?;
        let value: i64 = value
            .trim()
            .parse()
            .map_err(|_| StudyError::MalformedAssignment(assignment.to_string()))?;
        let value = u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_MASTERY)
            .ok_or_else(|| StudyError::MasteryOutOfRange {
                subject: subject.to_string(),
                value,
            })?;
        self.set(subject, value)
    }

    /// Build a map from sparse `subject -> score` entries, filling the rest
    /// with [`DEFAULT_MASTERY`].
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, StudyError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut map = Self::default();
        for (key, value) in entries {
            let subject: SubjectKey = key.parse()?;
            let value = u8::try_from(value)
                .ok()
                .filter(|v| *v <= MAX_MASTERY)
                .ok_or_else(|| StudyError::MasteryOutOfRange {
                    subject: subject.to_string(),
                    value,
                })?;
            map.set(subject, value)?;
        }
        Ok(map)
    }

    /// Iterate `(subject, score)` pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (SubjectKey, u8)> + '_ {
        SubjectKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// Rounded mean over all subjects.
    pub fn average(&self) -> u8 {
        let total: u32 = self.scores.iter().map(|s| u32::from(*s)).sum();
        (f64::from(total) / self.scores.len() as f64).round() as u8
    }

    /// Distance from full mastery.
    pub fn gap(&self, subject: SubjectKey) -> u8 {
        MAX_MASTERY - self.get(subject)
    }
}

impl Serialize for MasteryMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<&str, u8> = self.iter().map(|(k, v)| (k.as_str(), v)).collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MasteryMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, i64>::deserialize(deserializer)?;
        MasteryMap::from_entries(raw.iter().map(|(k, v)| (k.as_str(), *v)))
            .map_err(serde::de::Error::custom)
    }
}
