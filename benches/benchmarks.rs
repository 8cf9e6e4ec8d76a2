criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        resolving_all_pairs,
        sampling_random_move,
        playing_seeded_session,
}

fn resolving_all_pairs(c: &mut criterion::Criterion) {
    c.bench_function("resolve all 9 move pairs", |b| {
        b.iter(|| {
            Move::all()
                .into_iter()
                .flat_map(|a| Move::all().into_iter().map(move |b| resolve(a, b)))
                .filter(|o| *o == Outcome::Win)
                .count()
        })
    });
}

fn sampling_random_move(c: &mut criterion::Criterion) {
    c.bench_function("sample a uniform random Move", |b| {
        b.iter(|| Move::random())
    });
}

fn playing_seeded_session(c: &mut criterion::Criterion) {
    c.bench_function("play 1000 games in a seeded Session", |b| {
        b.iter(|| {
            let mut session = Session::with(Seeded::from(0));
            for i in 0..1000u32 {
                session.play(Move::from((i % 3) as u8));
            }
            session.win_rate()
        })
    });
}

use roshambo::*;
