//! 素数计数器
//!
//! 同一输入上提供两种计数方式：
//! - 单线程顺序扫描，作为正确性与耗时基准
//! - 多线程静态分区扫描，各线程结果在 join 之后求和
//!
//! 对任意输入和任意线程数 W >= 1，两者结果必须相同。
//!
//! # 示例
//!
//! ```
//! use primes::counter::*;
//!
//! let input: Vec<i64> = (1..=100).collect();
//!
//! assert_eq!(count_sequential(&input), 25);
//! assert_eq!(count_parallel(&input, 4), Ok(25));
//! assert_eq!(count_parallel(&input, 0), Err(CountError::ZeroWorkers));
//! ```

pub mod parallel;   // 多线程计数
pub mod sequential; // 单线程计数
pub mod types;      // 类型定义

// 重新导出常用类型
pub use parallel::{count_parallel, count_parallel_with, partition};
pub use sequential::count_sequential;
pub use types::{CountError, ParallelCount, Partition, WorkerCount};
