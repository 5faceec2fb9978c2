//! Macro timeline: preparation phases tailored to the weeks remaining.

use serde::Serialize;

/// A preparation phase with its execution directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub phase: &'static str,
    pub range: String,
    pub directives: &'static [&'static str],
}

struct MilestoneTemplate {
    phase: &'static str,
    range: &'static str,
    directives: &'static [&'static str],
}

const TEMPLATES: [MilestoneTemplate; 4] = [
    MilestoneTemplate {
        phase: "Foundational Lift-Off",
        range: "Weeks 1-2",
        directives: &[
            "Perform diagnostic tests across every subject to benchmark mastery.",
            "Set up knowledge base: formula sheets, concept maps, summarised notes.",
            "Lock core routines—morning review, mid-day drills, evening synthesis.",
        ],
    },
    MilestoneTemplate {
        phase: "Acceleration Sprint",
        range: "Weeks 3-5",
        directives: &[
            "Alternate between concept-focused mornings and mock-driven evenings.",
            "Integrate interleaving—mix subjects in each study block to avoid fatigue.",
            "Maintain weekly retrospective with quantifiable KPIs: accuracy, speed, depth.",
        ],
    },
    MilestoneTemplate {
        phase: "Simulation & Recovery",
        range: "Weeks 6-8",
        directives: &[
            "Run full-length mocks bi-weekly; conduct post-mortems within 12 hours.",
            "Shift focus to high-yield short notes and flashcards.",
            "Practise stress-management drills: breathing, visualization, positive reframing.",
        ],
    },
    MilestoneTemplate {
        phase: "Precision Taper",
        range: "Final Week",
        directives: &[
            "Protect sleep, hydrate, and limit new content. Focus on calm execution.",
            "Do lightweight mixed quizzing to keep momentum without burnout.",
            "Prepare exam-day kit: documents, logistics, food, timed arrival plan.",
        ],
    },
];

const EXTENDED_PHASE: &str = "Extended Mastery Cycle";
const EXTENDED_DIRECTIVES: &[&str] = &[
    "Segment the syllabus into monthly arcs; focus on depth-first mastery.",
    "Layer in peer discussion groups or mentorship for feedback loops.",
    "Conduct monthly super-mock days covering all subjects sequentially.",
];

/// Weeks covered by the canned phases; longer runways get an extra phase.
const CANNED_SPAN: u32 = 8;
/// Runways this short only keep the last two phases.
const SHORT_RUNWAY: u32 = 4;

fn from_template(t: &MilestoneTemplate) -> Milestone {
    Milestone {
        phase: t.phase,
        range: t.range.to_string(),
        directives: t.directives,
    }
}

/// Phases to show for a runway of `weeks`.
pub fn tailored_milestones(weeks: u32) -> Vec<Milestone> {
    if weeks <= SHORT_RUNWAY {
        return TEMPLATES[2..].iter().map(from_template).collect();
    }
    if weeks <= CANNED_SPAN {
        return TEMPLATES.iter().map(from_template).collect();
    }
    let extended = Milestone {
        phase: EXTENDED_PHASE,
        range: format!("Weeks 1-{}", weeks - 7),
        directives: EXTENDED_DIRECTIVES,
    };
    std::iter::once(extended)
        .chain(TEMPLATES.iter().map(from_template))
        .collect()
}
