/// 多线程计数
///
/// 静态分区 + 作用域线程：
/// - 输入按线程数切成连续、互不重叠的分区，最后一个分区吸收余数
/// - 每个工作线程只读自己的切片，结果写入各自的槽位（即 join 句柄的返回值）
/// - 全部 join 之后才归约，无需锁或原子计数

use super::sequential::count_sequential;
use super::types::{CountError, ParallelCount, Partition, WorkerCount};
use tracing::{debug, span, trace, Level};

/// 将长度为 `len` 的输入切分为 `workers` 个分区
///
/// 前 W-1 个分区长度均为 `len / W`，最后一个分区延伸到 `len`。
/// `len < W` 时前面的分区为空。
pub fn partition(len: usize, workers: WorkerCount) -> Vec<Partition> {
    let workers = workers.get();
    let chunk = len / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { len } else { start + chunk };
            Partition::new(i, start, end)
        })
        .collect()
}

/// 多线程统计素数个数
///
/// `workers == 0` 返回 `CountError::ZeroWorkers`。
pub fn count_parallel(input: &[i64], workers: usize) -> Result<usize, CountError> {
    let workers = WorkerCount::new(workers)?;
    count_parallel_with(input, workers).map(|result| result.total)
}

/// 多线程统计素数个数，同时返回各线程的部分结果
pub fn count_parallel_with(
    input: &[i64],
    workers: WorkerCount,
) -> Result<ParallelCount, CountError> {
    run_partitions(input, workers, count_sequential)
}

/// 每个分区启动一个工作线程执行 `work`，join 全部线程后归约
pub(crate) fn run_partitions<F>(
    input: &[i64],
    workers: WorkerCount,
    work: F,
) -> Result<ParallelCount, CountError>
where
    F: Fn(&[i64]) -> usize + Sync,
{
    let span = span!(Level::DEBUG, "count_parallel", len = input.len(), workers = workers.get());
    let _guard = span.enter();

    let partitions = partition(input.len(), workers);
    let work = &work;

    let joined = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .iter()
            .map(|part| {
                trace!(worker = part.index, start = part.start, end = part.end, "启动工作线程");
                let slice = &input[part.range()];
                scope.spawn(move |_| work(slice))
            })
            .collect();

        // 屏障：先 join 全部线程，再读取任何部分结果
        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    })
    .map_err(|_| CountError::Scope)?;

    let mut partials = Vec::with_capacity(joined.len());
    for (worker, outcome) in joined.into_iter().enumerate() {
        let count = outcome.map_err(|_| CountError::WorkerPanicked { worker })?;
        trace!(worker, count, "工作线程完成");
        partials.push(count);
    }

    let result = ParallelCount::from_partials(partials);
    debug!(total = result.total, "并行计数完成");
    Ok(result)
}
