//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use super::bench::to_millis;
use super::cpu_affinity;
use super::runner::{BenchConfig, RunEvent};
use super::timer::MeasureResult;
use crate::registry::{AlgorithmRegistry, SortAlgorithm};
use terminal_size::{terminal_size, Width};

/// Widest the divider lines get
const MAX_DIVIDER_WIDTH: usize = 63;

/// Rust compiler that built this binary, captured by the build script
pub const RUSTC_VERSION: Option<&str> = option_env!("RUSTC_VERSION");

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn divider() -> String {
    "-".repeat(get_term_width().min(MAX_DIVIDER_WIDTH))
}

pub fn print_divider() {
    println!("{}", divider());
}

/// Name shown in the report; algorithms on a non-default input size get a `*`
pub fn display_name(algo: &SortAlgorithm) -> String {
    match algo.input_size {
        Some(_) => format!("{}*", algo.name),
        None => algo.name.to_string(),
    }
}

/// Header lines describing the machine and the run
pub fn system_info_lines(registry: &AlgorithmRegistry, config: &BenchConfig) -> Vec<String> {
    let mut lines = vec![
        "Benchmark System Info:".to_string(),
        format!("sort-bench Version: {}", env!("CARGO_PKG_VERSION")),
        format!("Rust Version: {}", RUSTC_VERSION.unwrap_or("unknown")),
        format!(
            "OS: {} {}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        format!(
            "Cores: {}",
            cpu_affinity::core_count()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ),
    ];

    let overrides: Vec<String> = registry
        .all()
        .iter()
        .filter_map(|a| a.input_size.map(|n| format!("{} runs on N={}", display_name(a), n)))
        .collect();
    if overrides.is_empty() {
        lines.push(format!("All algorithms run on N={}", config.input_size));
    } else {
        lines.push(format!(
            "{}, others on N={}",
            overrides.join(", "),
            config.input_size
        ));
    }
    lines.push(format!(
        "Warmup rounds: {}, measured rounds: {}",
        config.timing.warmup_rounds, config.timing.measure_rounds
    ));

    lines
}

/// Print the system info block and the results table header
pub fn print_header(registry: &AlgorithmRegistry, config: &BenchConfig) {
    for line in system_info_lines(registry, config) {
        println!("{}", line);
    }
    print_divider();
    println!();
    println!(
        "{:<15} | {:<12} | {:>10} | {}",
        "Dataset", "Algorithm", "Time (ms)", "Result"
    );
    print_divider();
}

/// One result row, plus an error line when the correctness check failed
pub fn result_lines(dataset: &str, name: &str, result: &MeasureResult) -> Vec<String> {
    let status = if result.is_correct() { "OK" } else { "FAILED" };
    let mut lines = vec![format!(
        "{:<15} | {:<12} | {:>10.2} | {}",
        dataset,
        name,
        to_millis(result.mean_time),
        status
    )];
    if let Err(err) = &result.verification {
        lines.push(format!("ERROR: {} failed correctness check! ({})", name, err));
    }
    lines
}

/// Print the report incrementally as the runner makes progress
pub fn print_event(registry: &AlgorithmRegistry, event: RunEvent<'_>) {
    match event {
        RunEvent::DatasetStarted(distribution) => {
            println!("Running tests for: {}", distribution);
        }
        RunEvent::Measured(distribution, result) => {
            let name = registry
                .find(&result.algorithm)
                .map(display_name)
                .unwrap_or_else(|| result.algorithm.clone());
            for line in result_lines(distribution.label(), &name, result) {
                println!("{}", line);
            }
        }
        RunEvent::DatasetFinished(_) => print_divider(),
    }
}
