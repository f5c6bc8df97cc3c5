//! Number-theoretic predicates over `i64`. All of them are total: no input
//! panics or overflows, including `i64::MIN` and `i64::MAX`.

/// Decimal digits of `|n|`, most significant first. `0` yields `[0]`.
pub fn digits(n: i64) -> Vec<u32> {
    let mut rest = n.unsigned_abs();
    let mut out = Vec::new();
    loop {
        out.push((rest % 10) as u32);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    out.reverse();
    out
}

pub fn digit_sum(n: i64) -> u32 {
    digits(n).into_iter().sum()
}

/// Trial division by every `i` in `2..=isqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i: i64 = 2;
    // i <= n / i 等同 i * i <= n，但不會溢位
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// True when `n` equals the sum of its proper divisors.
///
/// Divisors are collected in pairs `(i, n / i)` for `i` up to `isqrt(n)`, so
/// this runs in O(√n) while agreeing with the plain O(n) definition.
pub fn is_perfect(n: i64) -> bool {
    if n <= 0 {
        return false;
    }
    if n == 1 {
        // 1 沒有真因數，和為 0
        return false;
    }
    let target = n as u128;
    let mut sum: u128 = 1;
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            sum += i as u128;
            let pair = n / i;
            if pair != i {
                sum += pair as u128;
            }
            if sum > target {
                return false;
            }
        }
        i += 1;
    }
    sum == target
}

/// Digits come from `|n|` but the comparison is against the signed `n`, so a
/// negative number is never Armstrong.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = digits(n);
    let power = digits.len() as u32;
    // 19 位數時 9^19 * 19 會超過 i64，改用 u128 累加
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();
    sum == n as u128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), vec![0]);
        assert_eq!(digits(153), vec![1, 5, 3]);
        assert_eq!(digits(-407), vec![4, 0, 7]);
        assert_eq!(digits(i64::MIN).len(), 19);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(153), 9);
        assert_eq!(digit_sum(-28), 10);
        // |i64::MIN| = 9223372036854775808
        assert_eq!(digit_sum(i64::MIN), 89);
        assert_eq!(digit_sum(i64::MAX), 88);
    }

    #[test]
    fn test_is_prime() {
        for n in [i64::MIN, -7, -1, 0, 1] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
        for n in [2, 3, 5, 7, 11, 13, 97, 7919] {
            assert!(is_prime(n), "{} should be prime", n);
        }
        for n in [4, 6, 8, 9, 10, 12, 25, 49, 7917] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
    }

    #[test]
    fn test_is_prime_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn test_is_perfect() {
        for n in [i64::MIN, -6, 0, 1, 5, 27, 100, 12, 8128 + 1] {
            assert!(!is_perfect(n), "{} should not be perfect", n);
        }
        for n in [6, 28, 496, 8128, 33_550_336] {
            assert!(is_perfect(n), "{} should be perfect", n);
        }
    }

    #[test]
    fn test_is_perfect_matches_naive_definition() {
        for n in 1..2000_i64 {
            let naive: i64 = (1..n).filter(|d| n % d == 0).sum();
            assert_eq!(is_perfect(n), naive == n, "mismatch at {}", n);
        }
    }

    #[test]
    fn test_is_armstrong() {
        for n in [0, 1, 5, 9, 153, 370, 371, 407, 1634, 9474] {
            assert!(is_armstrong(n), "{} should be Armstrong", n);
        }
        for n in [10, 100, 154, 1000] {
            assert!(!is_armstrong(n), "{} should not be Armstrong", n);
        }
    }

    #[test]
    fn test_is_armstrong_negative_is_never_armstrong() {
        for n in [-1, -5, -153, -407, i64::MIN] {
            assert!(!is_armstrong(n), "{} should not be Armstrong", n);
        }
    }

    #[test]
    fn test_is_armstrong_extremes_do_not_overflow() {
        assert!(!is_armstrong(i64::MAX));
        assert!(!is_armstrong(9_999_999_999_999_999));
    }
}
