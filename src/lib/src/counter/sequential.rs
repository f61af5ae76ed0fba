/// 单线程计数（基准实现）

use crate::primality::is_prime;

/// 顺序扫描整个输入，统计素数个数
#[inline]
pub fn count_sequential(input: &[i64]) -> usize {
    input.iter().filter(|&&n| is_prime(n)).count()
}
