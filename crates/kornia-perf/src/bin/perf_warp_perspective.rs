use argh::{EarlyExit, FromArgs};
use std::time::Duration;

use kornia_perf::{
    filter::select_cases,
    params::warp_perspective_combinations,
    runner::{run_suite, SuiteConfig, SUITE_NAME},
};

#[derive(FromArgs)]
/// Time warp_perspective across output sizes, interpolation and border modes
struct Args {
    /// run a single combination, e.g. "(640x480, INTER_LINEAR, BORDER_CONSTANT)";
    /// --test_param_filter=(...) is accepted too
    #[argh(option)]
    test_param_filter: Option<String>,

    /// number of samples per case (at least 10)
    #[argh(option, default = "10")]
    sample_size: usize,

    /// warm-up time per case in milliseconds
    #[argh(option, default = "1000")]
    warm_up_ms: u64,

    /// measurement time per case in milliseconds
    #[argh(option, default = "3000")]
    measurement_ms: u64,

    /// print the selected cases without running them
    #[argh(switch)]
    list: bool,
}

const FILTER_FLAG: &str = "--test-param-filter";

/// Split `--test_param_filter=TEXT` and `--test-param-filter=TEXT` into the
/// flag and its value, the form argh expects.
fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    args.into_iter()
        .flat_map(|arg| {
            let value = arg
                .strip_prefix("--test_param_filter=")
                .or_else(|| arg.strip_prefix("--test-param-filter="))
                .map(str::to_string);
            match value {
                Some(value) => vec![FILTER_FLAG.to_string(), value],
                None => vec![arg],
            }
        })
        .collect()
}

fn parse_args(raw: Vec<String>) -> Result<Args, EarlyExit> {
    let raw = normalize_args(raw);
    let strs: Vec<&str> = raw.iter().map(String::as_str).collect();
    let (cmd, rest) = match strs.split_first() {
        Some((cmd, rest)) => (*cmd, rest),
        None => ("perf_warp_perspective", &[][..]),
    };
    Args::from_args(&[cmd], rest)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(std::env::args().collect()) {
        Ok(args) => args,
        Err(EarlyExit { output, status }) => match status {
            Ok(()) => {
                println!("{output}");
                std::process::exit(0);
            }
            Err(()) => {
                eprintln!("{output}\nRun perf_warp_perspective --help for more information.");
                std::process::exit(1);
            }
        },
    };

    let cases = select_cases(
        args.test_param_filter.as_deref(),
        &warp_perspective_combinations(),
    );

    if args.list {
        for params in &cases {
            println!("{SUITE_NAME} {params}");
        }
        return Ok(());
    }

    let config = SuiteConfig {
        sample_size: args.sample_size,
        warm_up_time: Duration::from_millis(args.warm_up_ms),
        measurement_time: Duration::from_millis(args.measurement_ms),
    };

    let summary = run_suite(&cases, &config)?;
    log::info!(
        "{SUITE_NAME}: {} of {} cases completed",
        summary.completed,
        summary.total
    );

    Ok(())
}
