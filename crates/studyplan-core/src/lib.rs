//! studyplan-core: mastery-weighted exam preparation planning.
//!
//! This crate holds the subject catalogue, the mastery model, and the pure
//! derivations built on them: weekly plan allocation, practice question
//! selection, the daily focus board, and the phase timeline.

pub mod config;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod focus;
pub mod mastery;
pub mod model;
pub mod planner;
pub mod practice;
pub mod report;
pub mod timeline;

pub use error::StudyError;
pub use mastery::MasteryMap;
pub use model::{Difficulty, SubjectKey};
pub use planner::{build_plan, PlanConfig, StudyPlan};
