use criterion::{criterion_group, criterion_main, Criterion};

use kornia_perf::{
    filter::select_cases, params::warp_perspective_combinations, runner::run_suite_with,
};

// e.g. WARP_PERSPECTIVE_FILTER="(640x480, INTER_LINEAR, BORDER_CONSTANT)" cargo bench
fn bench_warp_perspective(c: &mut Criterion) {
    let filter = std::env::var("WARP_PERSPECTIVE_FILTER").ok();
    let cases = select_cases(filter.as_deref(), &warp_perspective_combinations());
    run_suite_with(c, &cases).unwrap();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_warp_perspective
}
criterion_main!(benches);
