//! Prime sequence producer based on trial division

use crate::core::data::PrimeBound;
use crate::utils::error::ValidationError;
use tracing::debug;

/// Trial-division primality test.
///
/// Any composite `n` has a factor no greater than `sqrt(n)`, so divisors are
/// only tried up to that point.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    // i <= n / i is i * i <= n without overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Lazy iterator over the primes in `2..=bound`, ascending.
///
/// Cloning an iterator, or building a new one from the same bound, restarts
/// the enumeration.
#[derive(Debug, Clone)]
pub struct Primes {
    next: u64,
    bound: u64,
    done: bool,
}

impl Primes {
    pub fn new(bound: PrimeBound) -> Self {
        Self {
            next: PrimeBound::MIN,
            bound: bound.get(),
            done: false,
        }
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while !self.done && self.next <= self.bound {
            let candidate = self.next;
            match self.next.checked_add(1) {
                Some(n) => self.next = n,
                None => self.done = true,
            }
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Collect all primes `p` with `2 <= p <= bound`.
pub fn primes_up_to(bound: u64) -> Result<Vec<u64>, ValidationError> {
    let bound = PrimeBound::new(bound)?;
    let primes: Vec<u64> = Primes::new(bound).collect();
    debug!(bound = bound.get(), count = primes.len(), "generated primes");
    Ok(primes)
}
