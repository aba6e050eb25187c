//! Sieve of Eratosthenes.
//!
//! `compute_primes` is the entry point used by the CLI. The underlying
//! `PrimalityTable` is public so library callers can query individual
//! slots after elimination instead of collecting the whole sequence.

use log::debug;

/// One flag per integer in `[0, n)`, `true` while the index is believed prime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimalityTable {
    flags: Vec<bool>,
}

impl PrimalityTable {
    /// Allocate a table for `[0, n)` with 0 and 1 marked not prime.
    ///
    /// `n` of 0 or 1 yields a table with no slot marked prime.
    pub fn new(n: usize) -> Self {
        let mut flags = vec![true; n];
        for slot in flags.iter_mut().take(2) {
            *slot = false;
        }
        PrimalityTable { flags }
    }

    /// Number of slots, i.e. the exclusive bound `n`.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether slot `i` is still marked prime. Out of range is never prime.
    pub fn is_prime(&self, i: usize) -> bool {
        self.flags.get(i).copied().unwrap_or(false)
    }

    /// Strike out the multiples of every prime `i` with `i * i < n`.
    ///
    /// Elimination starts at `i * i`; smaller multiples already fell to a
    /// smaller prime factor.
    pub fn eliminate(&mut self) {
        let n = self.flags.len();
        let mut i = 2usize;
        while i.checked_mul(i).is_some_and(|sq| sq < n) {
            if self.flags[i] {
                for j in (i * i..n).step_by(i) {
                    self.flags[j] = false;
                }
            }
            i += 1;
        }
    }

    /// Collect the indices still marked prime, ascending.
    pub fn into_primes(self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .skip(2)
            .filter_map(|(i, &p)| p.then_some(i))
            .collect()
    }
}

/// Return every prime strictly less than `n`, in ascending order.
///
/// Total over `usize`: `n <= 2` gives an empty vector.
///
/// ```
/// assert_eq!(primes2_lib::sieve::compute_primes(10), vec![2, 3, 5, 7]);
/// ```
pub fn compute_primes(n: usize) -> Vec<usize> {
    debug!("allocating primality table of {} slots", n);
    let mut table = PrimalityTable::new(n);
    table.eliminate();
    let primes = table.into_primes();
    debug!("found {} primes below {}", primes.len(), n);
    primes
}
