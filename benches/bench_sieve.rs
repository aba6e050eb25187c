use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_sieve_small(c: &mut Criterion) {
    c.bench_function("compute_primes_1k", |b| {
        b.iter(|| primes2_lib::sieve::compute_primes(black_box(1_000)))
    });
}

fn bench_sieve_large(c: &mut Criterion) {
    c.bench_function("compute_primes_1m", |b| {
        b.iter(|| primes2_lib::sieve::compute_primes(black_box(1_000_000)))
    });
}

criterion_group!(benches, bench_sieve_small, bench_sieve_large);
criterion_main!(benches);
