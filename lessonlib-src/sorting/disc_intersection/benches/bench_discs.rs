use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use disc_intersection::DiscIntersection;
use pair_discs::PairDiscs;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn bench_discs(c: &mut Criterion) {
    let mut group = c.benchmark_group("discs");

    let mut rng = ChaCha20Rng::from_seed([
        0x3B, 0x91, 0x0E, 0xC4, 0x5F, 0x72, 0xA8, 0x16, 0xD3, 0x2A, 0x87, 0xE9,
        0x40, 0xBC, 0x65, 0x1F, 0x9D, 0x08, 0x7A, 0xF2, 0x33, 0xCE, 0x54, 0xB1,
        0x6E, 0x29, 0x8F, 0x03, 0xDA, 0x47, 0xA5, 0x1C,
    ]);

    for n in [1_000, 100_000] {
        let a: Vec<usize> = (0..n).map(|_| rng.gen_range(0..8)).collect();
        group.bench_function(BenchmarkId::new("sweep", n), |b| {
            b.iter(|| black_box(a.disc_intersections_within(usize::MAX)))
        });
    }

    let a: Vec<usize> = (0..1_000).map(|_| rng.gen_range(0..8)).collect();
    group.bench_function(BenchmarkId::new("pairs", 1_000), |b| {
        b.iter(|| black_box(a.pair_discs()))
    });

    group.finish();
}

criterion_group!(benches, bench_discs);
criterion_main!(benches);
