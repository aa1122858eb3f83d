use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput};

use crate::case::WarpPerspectiveCase;
use crate::error::PerfError;
use crate::params::WarpPerspectiveParams;

/// Name of the benchmark group and of the timed function.
pub const SUITE_NAME: &str = "warpPerspective";

/// Timing configuration of the suite.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteConfig {
    /// Number of samples collected per case, at least 10.
    pub sample_size: usize,
    /// Time spent warming up each case.
    pub warm_up_time: Duration,
    /// Target time spent measuring each case.
    pub measurement_time: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            sample_size: 10,
            warm_up_time: Duration::from_secs(1),
            measurement_time: Duration::from_secs(3),
        }
    }
}

impl SuiteConfig {
    /// Check the values criterion would otherwise panic on.
    pub fn validate(&self) -> Result<(), PerfError> {
        if self.sample_size < 10 {
            return Err(PerfError::InvalidConfig(format!(
                "sample size must be at least 10, got {}",
                self.sample_size
            )));
        }
        if self.warm_up_time.is_zero() {
            return Err(PerfError::InvalidConfig(
                "warm-up time must be greater than zero".to_string(),
            ));
        }
        if self.measurement_time.is_zero() {
            return Err(PerfError::InvalidConfig(
                "measurement time must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a criterion instance following the configuration.
    pub fn criterion(&self) -> Result<Criterion, PerfError> {
        self.validate()?;
        Ok(Criterion::default()
            .sample_size(self.sample_size)
            .warm_up_time(self.warm_up_time)
            .measurement_time(self.measurement_time))
    }
}

/// Counters of a finished suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuiteSummary {
    /// Number of cases selected.
    pub total: usize,
    /// Number of cases benchmarked.
    pub completed: usize,
}

/// Benchmark every case with a fresh criterion instance and print the final summary.
pub fn run_suite(
    cases: &[WarpPerspectiveParams],
    config: &SuiteConfig,
) -> Result<SuiteSummary, PerfError> {
    let mut criterion = config.criterion()?;
    let summary = run_suite_with(&mut criterion, cases)?;
    criterion.final_summary();
    Ok(summary)
}

/// Benchmark every case on an existing criterion instance.
///
/// Each case is set up right before being measured and dropped right after,
/// so only one pair of images is alive at a time. The warp result of the timed
/// iterations is discarded.
pub fn run_suite_with(
    criterion: &mut Criterion,
    cases: &[WarpPerspectiveParams],
) -> Result<SuiteSummary, PerfError> {
    let total = cases.len();
    log::info!("Running {total} tests from {SUITE_NAME}");

    let mut summary = SuiteSummary {
        total,
        completed: 0,
    };

    let mut group = criterion.benchmark_group(SUITE_NAME);

    for (i, params) in cases.iter().enumerate() {
        log::info!("[{}/{}] {SUITE_NAME} {params}", i + 1, total);

        let mut case = WarpPerspectiveCase::setup(*params)?;

        group.throughput(Throughput::Elements(params.size.area() as u64));
        group.bench_function(BenchmarkId::new(SUITE_NAME, params), |b| {
            b.iter(|| black_box(case.run()))
        });

        summary.completed += 1;
    }

    group.finish();
    log::info!("Finished {}/{} tests from {SUITE_NAME}", summary.completed, total);

    Ok(summary)
}
