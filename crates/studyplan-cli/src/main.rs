//! studyplan CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

use commands::ProfileArgs;

#[derive(Parser)]
#[command(
    name = "studyplan",
    version,
    about = "Mastery-weighted exam preparation planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the weekly study plan and mock-test cadence
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Exam name shown in the plan heading
        #[arg(long)]
        exam_name: Option<String>,

        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        exam_date: Option<NaiveDate>,

        /// Daily focus hours (2-12, step 0.5); unparseable values become 0
        #[arg(long)]
        daily_hours: Option<String>,

        /// Intensity preset: steady, aggressive, revision
        #[arg(long)]
        intensity: Option<String>,

        /// Focus subjects (comma-separated subject keys)
        #[arg(long)]
        subjects: Option<String>,

        /// Leave the mock-test cadence out of the plan
        #[arg(long)]
        no_mock_tests: bool,

        /// Output format: text, markdown, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also save the plan as a JSON report at this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Draw a practice question
    Practice {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Subject lane: a subject key or "all"
        #[arg(long, default_value = "all")]
        subject: String,

        /// Difficulty: foundation, intermediate, advanced, or mixed
        #[arg(long, default_value = "mixed")]
        difficulty: String,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Print the solution along with the prompt
        #[arg(long)]
        reveal: bool,

        /// Review tag to attach to the drawn question (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Show the daily focus board
    Focus {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Show preparation phases for the current runway
    Timeline {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Weeks remaining, 4-26 (defaults to the planner's runway)
        #[arg(long)]
        weeks: Option<u32>,
    },

    /// Show subjects with their mastery, focus areas, and exam tips
    Subjects {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print weekly focus and exam tips for each subject
        #[arg(long)]
        details: bool,
    },

    /// List curated study resources
    Resources {
        /// Only resources for this subject (general ones are always included)
        #[arg(long)]
        subject: Option<String>,

        /// Only resources of this kind: video, article, book, problem_set, tool
        #[arg(long)]
        kind: Option<String>,
    },

    /// Show the readiness snapshot
    Dashboard {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check a profile for likely mistakes
    Validate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Create a starter studyplan.toml
    Init,
}

fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "studyplan=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan {
            profile,
            exam_name,
            exam_date,
            daily_hours,
            intensity,
            subjects,
            no_mock_tests,
            format,
            output,
        } => commands::plan::execute(
            profile,
            commands::plan::PlanOverrides {
                exam_name,
                exam_date,
                daily_hours,
                intensity,
                subjects,
                no_mock_tests,
            },
            format,
            output,
        ),
        Commands::Practice {
            profile,
            subject,
            difficulty,
            seed,
            reveal,
            tags,
        } => commands::practice::execute(profile, subject, difficulty, seed, reveal, tags),
        Commands::Focus { profile } => commands::focus::execute(profile),
        Commands::Timeline { profile, weeks } => commands::timeline::execute(profile, weeks),
        Commands::Subjects { profile, details } => commands::subjects::execute(profile, details),
        Commands::Resources { subject, kind } => commands::resources::execute(subject, kind),
        Commands::Dashboard { profile, format } => commands::dashboard::execute(profile, format),
        Commands::Validate { profile } => commands::validate::execute(profile),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
