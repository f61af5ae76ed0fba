//! 素数判定
//!
//! 基于 6k±1 轮的试除法：
//! - 先排除 n <= 1、2 和 3 的倍数
//! - 之后只需尝试形如 6k-1 / 6k+1 的除数
//! - 除数超过 sqrt(n) 即停止

/// 判断 `n` 是否为素数（负数、0、1 均不是素数）
#[inline]
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i <= n / i 等价于 i * i <= n，但对接近 i64::MAX 的输入不会溢出
    let mut i: i64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_and_one() {
        for n in [-7, -3, -2, -1, 0, 1, i64::MIN] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
    }

    #[test]
    fn test_known_primes() {
        for n in [2, 3, 5, 7, 11, 97, 7919] {
            assert!(is_prime(n), "{} should be prime", n);
        }
    }

    #[test]
    fn test_even_and_multiples_of_three() {
        for n in (4..2000).step_by(2) {
            assert!(!is_prime(n));
        }
        for n in (6..2000).step_by(3) {
            assert!(!is_prime(n));
        }
    }

    #[test]
    fn test_squares_of_wheel_candidates() {
        // 25 = 5*5, 49 = 7*7, 121 = 11*11 恰好落在循环边界上
        for n in [25, 35, 49, 77, 121, 143, 169, 289, 7917, 7921] {
            assert!(!is_prime(n), "{} should be composite", n);
        }
    }

    #[test]
    fn test_first_hundred() {
        let count = (1..=100).filter(|&n| is_prime(n)).count();
        assert_eq!(count, 25);
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(1_000_000_009));
        assert!(!is_prime(1_000_000_007 * 3));
        // i64::MAX = 7^2 * 73 * 127 * 337 * 92737 * 649657
        assert!(!is_prime(i64::MAX));
    }
}
