/// Deterministic trial division with 6k±1 wheel skipping.
///
/// Multiples of 2 and 3 are rejected up front, so the remaining candidate
/// divisors are checked pairwise as `i` and `i + 2` for `i = 5, 11, 17, ...`.
/// The loop bound is `i <= n / i` rather than `i * i <= n` so the comparison
/// cannot overflow for inputs near `i64::MAX`.
pub(crate) fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
