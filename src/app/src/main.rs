use anyhow::{bail, Context, Result};
use primes::counter::{count_parallel_with, count_sequential, WorkerCount};
use primes::input::read_numbers;
use primes::report::{measure, measure_result, Report};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: prime_counter <file>";

fn main() -> ExitCode {
    init_tracing();

    let path = std::env::args().nth(1);
    let stdout = io::stdout();

    match run(path.as_deref(), WorkerCount::available(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// 日志输出到 stderr，stdout 只保留报告
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// 读取输入，依次执行单线程与多线程计数并输出对比报告
fn run<W: Write>(path: Option<&str>, workers: WorkerCount, out: &mut W) -> Result<()> {
    let Some(path) = path else {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    };

    let numbers = read_numbers(path)?;
    if numbers.is_empty() {
        writeln!(out, "No valid numbers found.")?;
        return Ok(());
    }

    // 单线程
    let sequential = measure(|| count_sequential(&numbers));
    info!(count = sequential.count, elapsed = ?sequential.elapsed, "单线程计数完成");

    // 多线程
    let parallel = measure_result(|| {
        count_parallel_with(&numbers, workers).map(|result| result.total)
    })
    .context("parallel count failed")?;
    info!(count = parallel.count, elapsed = ?parallel.elapsed, workers = workers.get(), "多线程计数完成");

    let report = Report {
        path: path.to_string(),
        total_numbers: numbers.len(),
        workers,
        sequential,
        parallel,
    };
    writeln!(out, "{}", report)?;

    if !report.counts_match() {
        error!(sequential = sequential.count, parallel = parallel.count, "计数结果不一致");
        bail!(
            "sequential and parallel counts differ: {} vs {}",
            sequential.count,
            parallel.count
        );
    }

    Ok(())
}
