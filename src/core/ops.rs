/// Computes `n!` by recursive multiplication.
///
/// Returns `None` once the product no longer fits in a `u128`, which first
/// happens at 35!.
pub fn factorial(n: u64) -> Option<u128> {
    if n <= 1 {
        return Some(1);
    }
    factorial(n - 1)?.checked_mul(u128::from(n))
}

/// Trial-division primality test: odd divisors from 3 up to floor(sqrt(num)).
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    if num == 2 {
        return true;
    }
    if num % 2 == 0 {
        return false;
    }
    let mut div = 3;
    // div <= num / div avoids overflowing div * div near i64::MAX
    while div <= num / div {
        if num % div == 0 {
            return false;
        }
        div += 2;
    }
    true
}

/// Reverses the order of Unicode scalar values in `s`.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
