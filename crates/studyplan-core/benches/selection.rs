use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use studyplan_core::mastery::MasteryMap;
use studyplan_core::model::{Difficulty, SubjectKey};
use studyplan_core::practice::{candidate_pool, DifficultyFilter, PracticeSession, SubjectFilter};

fn bench_candidate_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_pool");
    let mastery = MasteryMap::default().with(SubjectKey::Physics, 85);

    group.bench_function("all_mixed", |b| {
        b.iter(|| {
            candidate_pool(
                black_box(&mastery),
                SubjectFilter::All,
                DifficultyFilter::Mixed,
            )
        })
    });

    group.bench_function("subject_mixed", |b| {
        b.iter(|| {
            candidate_pool(
                black_box(&mastery),
                SubjectFilter::Only(SubjectKey::Physics),
                DifficultyFilter::Mixed,
            )
        })
    });

    group.bench_function("explicit_difficulty", |b| {
        b.iter(|| {
            candidate_pool(
                black_box(&mastery),
                SubjectFilter::All,
                DifficultyFilter::Exactly(Difficulty::Advanced),
            )
        })
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let pool = candidate_pool(
        &MasteryMap::default(),
        SubjectFilter::All,
        DifficultyFilter::Mixed,
    );
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = PracticeSession::new();

    c.bench_function("practice_generate", |b| {
        b.iter(|| session.generate(black_box(&pool), &mut rng).map(|q| q.id))
    });
}

criterion_group!(benches, bench_candidate_pool, bench_generate);
criterion_main!(benches);
