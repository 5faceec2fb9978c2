//! The `studyplan practice` command.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use studyplan_core::content;
use studyplan_core::practice::{
    candidate_pool, DifficultyFilter, PracticeSession, SubjectFilter, SUGGESTED_REVIEW_TAGS,
};

use super::ProfileArgs;

pub fn execute(
    profile_args: ProfileArgs,
    subject: String,
    difficulty: String,
    seed: Option<u64>,
    reveal: bool,
    tags: Vec<String>,
) -> Result<()> {
    let (profile, _) = profile_args.resolve()?;
    let subject: SubjectFilter = subject.parse()?;
    let difficulty: DifficultyFilter = difficulty.parse()?;

    let pool = candidate_pool(&profile.mastery, subject, difficulty);
    println!(
        "Questions available: {} · Difficulty: {}",
        pool.len(),
        difficulty.label()
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = PracticeSession::new();
    let Some(question) = session.generate(&pool, &mut rng) else {
        println!("No questions match these filters. Try another subject or difficulty.");
        return Ok(());
    };

    println!(
        "\n[{} · {}] {}",
        content::subject(question.subject).name,
        question.difficulty.label(),
        question.id
    );
    println!("Concepts: {}", question.concepts.join(", "));
    println!("\nPrompt:\n  {}", question.prompt);

    if reveal && session.toggle_answer() {
        println!("\nSolution:\n  {}", question.answer);
    }

    for tag in &tags {
        session.toggle_review_tag(tag);
    }
    if session.review_tags().is_empty() {
        println!("\nReview tags: {}", SUGGESTED_REVIEW_TAGS.join(" | "));
    } else {
        println!("\nTagged: {}", session.review_tags().join(", "));
    }
    if let Some(note) = session.journal_note() {
        println!("{note}");
    }

    Ok(())
}
