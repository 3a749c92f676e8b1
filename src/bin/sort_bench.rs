//! Runs the full sorting benchmark and prints the report.
//!
//! Takes no arguments. Log verbosity follows `RUST_LOG` (default `warn`);
//! logs go to stderr, the report to stdout.

use sort_bench::registry::build_registry;
use sort_bench::tui;
use sort_bench::utils::BenchConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let registry = build_registry();
    let config = BenchConfig::default();

    tui::print_header(&registry, &config);

    match sort_bench::run_all_algorithms(&registry, &config, |event| {
        tui::print_event(&registry, event)
    }) {
        Ok(reports) => {
            let failures: usize = reports.iter().map(|r| r.failures().count()).sum();
            if failures > 0 {
                tracing::warn!(failures, "some algorithms failed the correctness check");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "benchmark run aborted");
            eprintln!("Benchmark aborted: {}", e);
        }
    }

    if registry.all().iter().any(|a| a.input_size.is_some()) {
        println!("* runs on a smaller input size");
    }
}
