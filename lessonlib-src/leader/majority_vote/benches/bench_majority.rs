use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use majority_vote::MajorityVote;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tally_majority::TallyMajority;

fn bench_majority(c: &mut Criterion) {
    let mut group = c.benchmark_group("majority");

    let mut rng = ChaCha20Rng::seed_from_u64(0x8A2C_41F3_D9E0_5B17);
    let n = 100_000;
    let a: Vec<u32> = (0..n)
        .map(|_| if rng.gen_ratio(3, 5) { 7 } else { rng.gen_range(0..1000) })
        .collect();

    group
        .bench_function(BenchmarkId::new("boyer-moore", n), |b| {
            b.iter(|| black_box(a.dominator()))
        })
        .bench_function(BenchmarkId::new("tally", n), |b| {
            b.iter(|| black_box(a.tally_majority()))
        });

    group.finish();
}

criterion_group!(benches, bench_majority);
criterion_main!(benches);
