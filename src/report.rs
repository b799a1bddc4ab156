use std::fmt;

use crate::counter::{ParallelOutcome, PassOutcome};

pub(crate) struct BenchReport {
    pub(crate) sequential: PassOutcome,
    pub(crate) parallel: ParallelOutcome,
}

impl BenchReport {
    /// Sequential over parallel elapsed time. Computed over nanoseconds with
    /// a floor of 1 ns on the divisor, so an instant parallel pass (empty
    /// input) never divides by zero.
    pub(crate) fn speedup(&self) -> f64 {
        let single = self.sequential.elapsed.as_nanos();
        let multi = self.parallel.elapsed.as_nanos().max(1);
        single as f64 / multi as f64
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n[Single-Threaded]")?;
        writeln!(f, "Primes found: {}", self.sequential.count)?;
        writeln!(f, "Time: {} ms", self.sequential.elapsed.as_millis())?;
        writeln!(f)?;
        writeln!(f, "[Multi-Threaded] {} threads", self.parallel.workers)?;
        writeln!(f, "Primes found: {}", self.parallel.count)?;
        writeln!(f, "Time: {} ms", self.parallel.elapsed.as_millis())?;
        writeln!(f)?;
        write!(f, "Speedup: {:.2}x", self.speedup())
    }
}
