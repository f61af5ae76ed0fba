//! 计时与结果报告
//!
//! 计时属于驱动程序，计数器本身不感知时间：
//! 调用方用 [`measure`] 包住一次计数，再把两次测量交给 [`Report`] 输出。

use std::fmt;
use std::time::{Duration, Instant};

use crate::counter::WorkerCount;

/// 一次计数的结果与墙钟耗时
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub count: usize,
    pub elapsed: Duration,
}

impl Measurement {
    #[inline]
    pub fn new(count: usize, elapsed: Duration) -> Self {
        Self { count, elapsed }
    }

    /// 耗时（毫秒，保留小数）
    #[inline]
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// 对计数闭包计时
pub fn measure<F>(f: F) -> Measurement
where
    F: FnOnce() -> usize,
{
    let start = Instant::now();
    let count = f();
    Measurement::new(count, start.elapsed())
}

/// 对可能失败的计数闭包计时
pub fn measure_result<F, E>(f: F) -> Result<Measurement, E>
where
    F: FnOnce() -> Result<usize, E>,
{
    let start = Instant::now();
    let count = f()?;
    Ok(Measurement::new(count, start.elapsed()))
}

/// 单线程与多线程的对比报告
#[derive(Debug, Clone)]
pub struct Report {
    pub path: String,
    pub total_numbers: usize,
    pub workers: WorkerCount,
    pub sequential: Measurement,
    pub parallel: Measurement,
}

impl Report {
    /// 加速比 = 单线程耗时 / 多线程耗时
    pub fn speedup(&self) -> f64 {
        let parallel = self.parallel.elapsed.as_secs_f64();
        if parallel == 0.0 {
            return f64::INFINITY;
        }
        self.sequential.elapsed.as_secs_f64() / parallel
    }

    /// 两种方式的计数是否一致
    #[inline]
    pub fn counts_match(&self) -> bool {
        self.sequential.count == self.parallel.count
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, label: &str, m: &Measurement) -> fmt::Result {
    writeln!(f, "[{}]", label)?;
    writeln!(f, "  Primes found: {}", m.count)?;
    writeln!(f, "  Time: {:.2} ms", m.millis())?;
    writeln!(f)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {} ({} numbers)", self.path, self.total_numbers)?;
        writeln!(f)?;
        write_block(f, "Single-Threaded", &self.sequential)?;
        write_block(
            f,
            &format!("Multi-Threaded ({} threads)", self.workers),
            &self.parallel,
        )?;
        write!(f, "Speedup: {:.2}x", self.speedup())
    }
}
