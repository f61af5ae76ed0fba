/// 计数器类型定义
///
/// 工作线程数、分区和计数错误。

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::thread;
use thiserror::Error;

/// 工作线程数（保证 >= 1）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerCount(NonZeroUsize);

impl WorkerCount {
    /// 创建工作线程数，0 会被拒绝
    #[inline]
    pub fn new(n: usize) -> Result<Self, CountError> {
        NonZeroUsize::new(n).map(Self).ok_or(CountError::ZeroWorkers)
    }

    /// 按硬件并行度取值，平台无法报告时退化为 1
    pub fn available() -> Self {
        Self(thread::available_parallelism().unwrap_or(NonZeroUsize::MIN))
    }

    /// 获取线程数
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self::available()
    }
}

impl From<NonZeroUsize> for WorkerCount {
    fn from(n: NonZeroUsize) -> Self {
        Self(n)
    }
}

impl TryFrom<usize> for WorkerCount {
    type Error = CountError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 输入序列上的一个连续分区（左闭右开）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub index: usize, // 所属工作线程编号
    pub start: usize, // 起始下标（含）
    pub end: usize,   // 结束下标（不含）
}

impl Partition {
    #[inline]
    pub fn new(index: usize, start: usize, end: usize) -> Self {
        Self { index, start, end }
    }

    /// 分区内元素个数
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// 分区是否为空（输入长度小于线程数时会出现）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// 转换为切片下标范围
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker {} [{}, {})", self.index, self.start, self.end)
    }
}

/// 并行计数结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelCount {
    /// 所有部分结果之和
    pub total: usize,
    /// 每个工作线程的部分结果，按线程编号排列
    pub partials: Vec<usize>,
}

impl ParallelCount {
    /// 由各线程的部分结果归约出总数
    pub fn from_partials(partials: Vec<usize>) -> Self {
        let total = partials.iter().sum();
        Self { total, partials }
    }

    /// 参与计数的工作线程数
    #[inline]
    pub fn workers(&self) -> usize {
        self.partials.len()
    }
}

/// 计数错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    #[error("Worker count must be at least 1")]
    ZeroWorkers,

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Worker scope terminated abnormally")]
    Scope,
}
