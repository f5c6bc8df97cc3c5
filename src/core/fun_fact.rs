use crate::core::predicates::{digits, is_armstrong, is_perfect, is_prime};

/// Describes `n` using the first matching property, in the order
/// Armstrong, prime, perfect.
pub fn fun_fact(n: i64) -> String {
    if is_armstrong(n) {
        let digits = digits(n);
        let power = digits.len();
        let terms: Vec<String> = digits
            .iter()
            .map(|d| format!("{}^{}", d, power))
            .collect();
        format!(
            "{} is an Armstrong number because {} = {}",
            n,
            terms.join(" + "),
            n
        )
    } else if is_prime(n) {
        format!(
            "{} is a prime number because it has only two divisors: 1 and itself.",
            n
        )
    } else if is_perfect(n) {
        format!(
            "{} is a perfect number because the sum of its proper divisors equals the number.",
            n
        )
    } else {
        format!("{} is just an interesting number!", n)
    }
}
