// Criterion benchmarks for ArchIntent

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use arch_intent::core::{Catalog, Matcher, extract_intent};
use arch_intent::models::ProfileRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn create_profile(id: u32) -> ProfileRecord {
    let style = ["Modern", "Classic", "Industrial", "Eco-friendly"][id as usize % 4];
    ProfileRecord {
        id,
        name: format!("Architect {}", id),
        style_tags: vec![style.to_string(), "Urban".to_string()],
        portfolio_highlight: format!("Project {}", id),
    }
}

fn bench_extract_intent(c: &mut Criterion) {
    let text = "Looking for a spacious, sustainable modern home with large windows \
                and a cozy reading nook overlooking the garden";

    c.bench_function("extract_intent", |b| {
        b.iter(|| extract_intent(black_box(text)));
    });
}

fn bench_rank_builtin(c: &mut Criterion) {
    let matcher = Matcher::default();
    let catalog = Catalog::builtin();
    let intent = extract_intent("I want a spacious modern home");
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("rank_builtin_catalog", |b| {
        b.iter(|| matcher.rank(black_box(&intent), catalog.profiles(), &mut rng))
    });
}

fn bench_rank_catalog_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let matcher = Matcher::default();
    let intent = extract_intent("an industrial loft");

    for size in [10u32, 100, 1000] {
        let catalog = Catalog::new((0..size).map(create_profile).collect()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| matcher.rank(black_box(&intent), catalog.profiles(), &mut rng))
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let matcher = Matcher::default();
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("analyze_end_to_end", |b| {
        b.iter(|| {
            matcher.analyze(
                black_box("Looking for a classic brick house"),
                catalog.profiles(),
                &mut rng,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_extract_intent,
    bench_rank_builtin,
    bench_rank_catalog_sizes,
    bench_analyze
);
criterion_main!(benches);
