use crate::utils::error::{DemoError, Result};
use num_bigint::BigUint;
use num_traits::One;

pub fn factorial(n: i64) -> Result<BigUint> {
    if n < 0 {
        return Err(DemoError::InvalidArgument {
            message: "Factorial is not defined for negative numbers".to_string(),
        });
    }

    let mut result = BigUint::one();
    for i in 2..=n as u64 {
        result *= i;
    }
    Ok(result)
}

/// 試除法，檢查到 `isqrt(n)` 為止
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let n = n as u64;
    let mut i: u64 = 2;
    // i <= isqrt(n) < 2^32, so i * i never overflows
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

pub fn primes_in(candidates: &[i64]) -> Vec<i64> {
    candidates.iter().copied().filter(|&n| is_prime(n)).collect()
}
