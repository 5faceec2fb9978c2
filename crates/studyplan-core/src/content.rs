//! The built-in study catalogue: subjects, practice questions, resources.
//!
//! Everything here is `'static` data. Lookups are linear scans; the
//! catalogue never holds more than a dozen entries of any kind.

use crate::model::{
    Difficulty, PracticeQuestion, Resource, ResourceKind, ResourceSubject, Subject, SubjectKey,
};

/// Every subject, in catalogue order (matches [`SubjectKey::ALL`]).
pub static SUBJECTS: [Subject; 8] = [
    Subject {
        key: SubjectKey::Mathematics,
        name: "Mathematics",
        summary: "High-value quantitative section focusing on algebra, calculus, and data interpretation.",
        weekly_focus: &[
            "Concept consolidation with mixed problem sets",
            "Speed drills for arithmetic and algebra",
            "Mock tests emphasizing accuracy under time pressure",
            "Formula flashcards & spaced repetition review",
        ],
        exam_tips: &[
            "Derive formulae to reinforce memory before relying on rote recall.",
            "Track common calculation traps and build a personal checklist.",
            "Use weekend full-length mocks to calibrate pacing.",
        ],
    },
    Subject {
        key: SubjectKey::Physics,
        name: "Physics",
        summary: "Concept-driven questions requiring strong fundamentals in mechanics, waves, and electromagnetism.",
        weekly_focus: &[
            "Rebuild conceptual notes with visual diagrams",
            "Alternate between numerical and qualitative problems",
            "Review past year papers to discover repeating themes",
            "Simulate experiment-based questions for clarity",
        ],
        exam_tips: &[
            "Translate every problem into known laws before manipulating equations.",
            "Memorize boundary conditions and unit systems for quick validation.",
            "Highlight inter-topic links, e.g., SHM ↔ waves ↔ optics.",
        ],
    },
    Subject {
        key: SubjectKey::Chemistry,
        name: "Chemistry",
        summary: "Balanced preparation across Physical, Inorganic, and Organic chemistry with emphasis on reaction logic.",
        weekly_focus: &[
            "Alternate between inorganic fact revision and reaction mechanisms",
            "Solve numericals in physical chemistry after reading theory",
            "Maintain reaction flashcards with functional group transformations",
            "Quiz yourself on qualitative analysis and periodic trends",
        ],
        exam_tips: &[
            "Build a wall chart of periodic trends for rapid daily reference.",
            "Practice mechanism writing to reinforce reagent-product mapping.",
            "Use mnemonic devices to retain inorganic chemistry exceptions.",
        ],
    },
    Subject {
        key: SubjectKey::Biology,
        name: "Biology",
        summary: "Retention-heavy subject requiring high recall accuracy and application of key processes.",
        weekly_focus: &[
            "Convert complex processes into flow diagrams and mind maps",
            "Attempt assertion-reason and statement-based MCQs daily",
            "Summarize NCERT margin notes into quick review sheets",
            "Revise lab techniques and classification tables twice weekly",
        ],
        exam_tips: &[
            "Annotate diagrams with keywords to reinforce terminologies.",
            "Teach a quick concept aloud to deepen retention.",
            "Schedule nightly low-intensity reviews using spaced repetition.",
        ],
    },
    Subject {
        key: SubjectKey::History,
        name: "History",
        summary: "Blend of timeline accuracy with thematic analysis for modern and world history.",
        weekly_focus: &[
            "Consolidate timelines with cause-effect annotations",
            "Practice writing 200-word analytical answers",
            "Curate quote bank for essays and long answers",
            "Revise map-based questions and landmark events",
        ],
        exam_tips: &[
            "Map every event to its social, economic, and political impact.",
            "Use spaced repetition to retain factual chronology.",
            "Develop essay introductions and conclusions for major themes.",
        ],
    },
    Subject {
        key: SubjectKey::Economics,
        name: "Economics",
        summary: "Quantitative and theoretical understanding across micro, macro, and statistics.",
        weekly_focus: &[
            "Solve past year numerical questions with time targets",
            "Update short notes on policy developments weekly",
            "Alternate between theory revision and case study practice",
            "Review graphs and derivations to ensure conceptual clarity",
        ],
        exam_tips: &[
            "Create layered mind maps to connect macroeconomic indicators.",
            "Translate theoretical models into real-world examples.",
            "Memorize formulas by re-deriving them every weekend.",
        ],
    },
    Subject {
        key: SubjectKey::ComputerScience,
        name: "Computer Science",
        summary: "Programming, data structures, and computational thinking tested via problem-solving.",
        weekly_focus: &[
            "Daily coding practice with alternating topics",
            "Revise algorithms and analyze complexity trade-offs",
            "Build quick reference sheets for data structure operations",
            "Attempt timed mock tests to improve debugging speed",
        ],
        exam_tips: &[
            "Implement algorithms from scratch without auto-complete.",
            "Maintain error logbooks to avoid repeating mistakes.",
            "Balance conceptual study with hands-on coding challenges.",
        ],
    },
    Subject {
        key: SubjectKey::English,
        name: "English",
        summary: "Critical reading, vocabulary, and verbal reasoning with emphasis on comprehension speed.",
        weekly_focus: &[
            "Practice RC sets with active annotation strategies",
            "Iterate on vocabulary lists using spaced repetition apps",
            "Record and review speaking drills for orals/interviews",
            "Alternate grammar drills with writing polished essays",
        ],
        exam_tips: &[
            "Skim passages first, then deep dive with a question-first approach.",
            "Maintain a personal idiom and phrase sheet for quick recall.",
            "Use audio summaries to reinforce new vocabulary.",
        ],
    },
];

/// The practice question bank.
pub static QUESTION_BANK: [PracticeQuestion; 11] = [
    PracticeQuestion {
        id: "math-1",
        subject: SubjectKey::Mathematics,
        difficulty: Difficulty::Foundation,
        prompt: "If the function f(x) = ax^2 + bx + c passes through (1,3), (2,8), and (3,15), determine the value of a + b + c.",
        answer: "Solving the system yields a = 1, b = 0, c = 2, so a + b + c = 3.",
        concepts: &["quadratic-equations", "simultaneous-equations"],
    },
    PracticeQuestion {
        id: "math-2",
        subject: SubjectKey::Mathematics,
        difficulty: Difficulty::Advanced,
        prompt: "Evaluate the sum of the infinite series S = 1/(1·2) + 1/(2·3) + 1/(3·4) + …",
        answer: "Use telescoping: S = Σ (1/n − 1/(n+1)) = 1. Limit tends to 1 as n → ∞.",
        concepts: &["infinite-series", "telescoping-series"],
    },
    PracticeQuestion {
        id: "physics-1",
        subject: SubjectKey::Physics,
        difficulty: Difficulty::Intermediate,
        prompt: "A block of mass m on a frictionless table is attached to a spring with constant k and displaced by x. Derive the expression for time period.",
        answer: "Simple harmonic motion gives T = 2π√(m/k). Independence from displacement highlights linear restoring force.",
        concepts: &["shm", "spring-mass-system"],
    },
    PracticeQuestion {
        id: "physics-2",
        subject: SubjectKey::Physics,
        difficulty: Difficulty::Advanced,
        prompt: "Explain how energy is conserved when a charged particle spirals in a uniform magnetic field emitting synchrotron radiation.",
        answer: "Magnetic fields perform no work; energy loss manifests as radiation. A separate electric field or power source must supply energy to sustain motion.",
        concepts: &["electromagnetism", "radiation"],
    },
    PracticeQuestion {
        id: "chemistry-1",
        subject: SubjectKey::Chemistry,
        difficulty: Difficulty::Foundation,
        prompt: "State and explain the trend of ionization enthalpy down a group and across a period.",
        answer: "Down a group: decreases due to increased atomic radius and shielding. Across a period: increases with higher nuclear charge and smaller radius.",
        concepts: &["periodic-trends"],
    },
    PracticeQuestion {
        id: "chemistry-2",
        subject: SubjectKey::Chemistry,
        difficulty: Difficulty::Advanced,
        prompt: "Predict the major product for the reaction of 2-methylpropene with HBr in the presence of ROOR.",
        answer: "Peroxide effect induces anti-Markovnikov addition. Product: 1-bromobutane via radical mechanism.",
        concepts: &["organic-chemistry", "radicals"],
    },
    PracticeQuestion {
        id: "biology-1",
        subject: SubjectKey::Biology,
        difficulty: Difficulty::Foundation,
        prompt: "Differentiate between transcription and translation in terms of location, template, and output.",
        answer: "Transcription (nucleus): DNA→mRNA. Translation (cytoplasm/ribosome): mRNA→polypeptide using tRNA and rRNA.",
        concepts: &["central-dogma"],
    },
    PracticeQuestion {
        id: "history-1",
        subject: SubjectKey::History,
        difficulty: Difficulty::Intermediate,
        prompt: "Analyze the economic factors that contributed to the outbreak of the French Revolution.",
        answer: "Mounting national debt, regressive tax system burdening Third Estate, poor harvests, and stagnant wages catalyzed revolutionary pressures.",
        concepts: &["french-revolution", "economic-history"],
    },
    PracticeQuestion {
        id: "economics-1",
        subject: SubjectKey::Economics,
        difficulty: Difficulty::Intermediate,
        prompt: "Explain the IS-LM model adjustment when fiscal policy increases government spending.",
        answer: "IS curve shifts right; equilibrium income and interest rates rise. If monetary policy accomodates, LM can shift right to stabilize interest rates.",
        concepts: &["macroeconomics"],
    },
    PracticeQuestion {
        id: "computer-1",
        subject: SubjectKey::ComputerScience,
        difficulty: Difficulty::Advanced,
        prompt: "Design a dynamic programming state for counting the number of ways to make sum S using unlimited coins of denominations d₁…dₙ.",
        answer: "Let dp[i] denote ways to make sum i. Initialize dp[0]=1. For each coin d and sum s≥d: dp[s]+=dp[s-d]. Order coins outermost to avoid permutations.",
        concepts: &["dynamic-programming", "combinatorics"],
    },
    PracticeQuestion {
        id: "english-1",
        subject: SubjectKey::English,
        difficulty: Difficulty::Foundation,
        prompt: "Draft a thesis statement comparing two poems addressing the theme of resilience.",
        answer: "Example: “While Poem A portrays resilience as an individualistic triumph, Poem B frames it as a communal endeavor, revealing how structure and imagery reshape perseverance into either solitary defiance or collective renewal.”",
        concepts: &["literary-analysis", "writing"],
    },
];

/// Curated external resources. General entries apply to every subject.
pub static RESOURCES: [Resource; 10] = [
    Resource {
        id: "math-art-of-problem-solving",
        subject: ResourceSubject::Subject(SubjectKey::Mathematics),
        title: "AoPS Competitive Math Series",
        description: "Progressive problem sets covering algebra, number theory, combinatorics, and geometry.",
        url: "https://artofproblemsolving.com/school",
        kind: ResourceKind::ProblemSet,
        duration: Some("3-4 hrs / week"),
        skill_tags: &[
            "problem-solving",
            "speed",
            "accuracy",
        ],
    },
    Resource {
        id: "physics-ocw-mechanics",
        subject: ResourceSubject::Subject(SubjectKey::Physics),
        title: "MIT OCW: 8.01 Classical Mechanics",
        description: "Concept-first lecture series with assignments that mirror competitive exam difficulty.",
        url: "https://ocw.mit.edu/courses/8-01sc-classical-mechanics-fall-2016/",
        kind: ResourceKind::Video,
        duration: Some("15 hrs total"),
        skill_tags: &[
            "mechanics",
            "visualization",
            "derivations",
        ],
    },
    Resource {
        id: "chemistry-named-reactions",
        subject: ResourceSubject::Subject(SubjectKey::Chemistry),
        title: "Organic Chemistry Tutor - Named Reactions",
        description: "Concise breakdowns of high-yield reactions, reagents, and mechanisms.",
        url: "https://www.organicchemistrytutor.com/named-reactions/",
        kind: ResourceKind::Article,
        duration: None,
        skill_tags: &["organic-chemistry", "mechanisms"],
    },
    Resource {
        id: "biology-anatomy-app",
        subject: ResourceSubject::Subject(SubjectKey::Biology),
        title: "Complete Anatomy 3D Visualization",
        description: "Interactive tool to visualize anatomical structures with quizzes for retention.",
        url: "https://www.completeanatomy.com/",
        kind: ResourceKind::Tool,
        duration: None,
        skill_tags: &["visual-learning", "retention"],
    },
    Resource {
        id: "history-crash-course",
        subject: ResourceSubject::Subject(SubjectKey::History),
        title: "Crash Course World History Playlist",
        description: "Fast-moving videos that provide thematic context and exam-friendly narratives.",
        url: "https://www.youtube.com/playlist?list=PLBDA2E52FB1EF80C9",
        kind: ResourceKind::Video,
        duration: Some("40 videos"),
        skill_tags: &["contextualization", "timelines"],
    },
    Resource {
        id: "economics-mankiw",
        subject: ResourceSubject::Subject(SubjectKey::Economics),
        title: "Principles of Economics – Mankiw Summary Notes",
        description: "Concise chapter summaries with example questions and graphical explanations.",
        url: "https://college.cengage.com/economics/mankiw/principles/6e/students/index.html",
        kind: ResourceKind::Article,
        duration: None,
        skill_tags: &[
            "macro",
            "micro",
            "graphs",
        ],
    },
    Resource {
        id: "cs-leetcode-patterns",
        subject: ResourceSubject::Subject(SubjectKey::ComputerScience),
        title: "NeetCode Roadmap",
        description: "Structured problem sequence focusing on data structures & algorithms mastery.",
        url: "https://neetcode.io/roadmap",
        kind: ResourceKind::ProblemSet,
        duration: None,
        skill_tags: &["algorithms", "data-structures"],
    },
    Resource {
        id: "english-word-power",
        subject: ResourceSubject::Subject(SubjectKey::English),
        title: "Word Power Made Easy – Practice Decks",
        description: "Daily vocabulary drills with etymology-based retention techniques.",
        url: "https://wordpowermadeeasy.com/",
        kind: ResourceKind::Book,
        duration: None,
        skill_tags: &["vocabulary", "etymology"],
    },
    Resource {
        id: "general-pomodoro",
        subject: ResourceSubject::General,
        title: "Focus To-Do Pomodoro & Tasks",
        description: "Pomodoro timer integrated with task management and streak tracking.",
        url: "https://www.focustodo.cn/",
        kind: ResourceKind::Tool,
        duration: None,
        skill_tags: &["productivity", "time-management"],
    },
    Resource {
        id: "general-active-recall",
        subject: ResourceSubject::General,
        title: "Active Recall Playbook",
        description: "Step-by-step guide to building flashcards and retrieval practice systems.",
        url: "https://www.notebooktech.com/active-recall-guide",
        kind: ResourceKind::Article,
        duration: None,
        skill_tags: &["memory", "spaced-repetition"],
    },
];

/// Look up a subject's catalogue entry.
pub fn subject(key: SubjectKey) -> &'static Subject {
    &SUBJECTS[key.index()]
}

/// Look up a practice question by id.
pub fn question(id: &str) -> Option<&'static PracticeQuestion> {
    QUESTION_BANK.iter().find(|q| q.id == id)
}

/// Resources matching an optional subject and kind filter.
///
/// When a subject is given, general resources are included alongside the
/// subject's own.
pub fn resources_for(
    subject: Option<SubjectKey>,
    kind: Option<ResourceKind>,
) -> Vec<&'static Resource> {
    RESOURCES
        .iter()
        .filter(|r| subject.map_or(true, |key| r.subject.covers(key)))
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .collect()
}

/// Display name for a resource's subject ("All Subjects" for general ones).
pub fn resource_subject_name(resource: &Resource) -> &'static str {
    match resource.subject {
        ResourceSubject::Subject(key) => subject(key).name,
        ResourceSubject::General => "All Subjects",
    }
}
