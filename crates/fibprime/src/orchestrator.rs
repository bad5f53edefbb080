//! Generator selection, execution and cross-validation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use fibprime_core::{intersect, Bound, FibPrimeError, GeneratorFactory, Intersection, PrimeGenerator};

/// Result of running one generator.
#[derive(Debug, Clone)]
pub struct GeneratorRun<T> {
    /// Generator name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<T, FibPrimeError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Outcome summary used for comparison tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStatus {
    pub algorithm: String,
    pub duration: Duration,
    pub ok: bool,
}

impl<T> GeneratorRun<T> {
    #[must_use]
    pub fn status(&self) -> RunStatus {
        RunStatus {
            algorithm: self.algorithm.clone(),
            duration: self.duration,
            ok: self.outcome.is_ok(),
        }
    }
}

/// Values that can be cross-checked between generators.
pub trait Consensus {
    /// Whether two results computed by different generators agree.
    fn agrees_with(&self, other: &Self) -> bool;
}

impl Consensus for Intersection {
    fn agrees_with(&self, other: &Self) -> bool {
        self.bound == other.bound
            && self.values == other.values
            && self.primes_considered == other.primes_considered
            && self.fibonaccis_considered == other.fibonaccis_considered
    }
}

impl Consensus for Vec<u64> {
    fn agrees_with(&self, other: &Self) -> bool {
        self == other
    }
}

/// Get generators to run based on the `--algo` selection.
pub fn get_generators_to_run(
    algo: &str,
    factory: &dyn GeneratorFactory,
) -> Result<Vec<Arc<dyn PrimeGenerator>>, FibPrimeError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

/// Run every generator's intersection for `bound`, in order.
pub fn execute_intersections(
    generators: &[Arc<dyn PrimeGenerator>],
    bound: Bound,
) -> Vec<GeneratorRun<Intersection>> {
    execute(generators, bound, intersect)
}

/// Run every generator's prime listing for `bound`, in order.
pub fn execute_prime_listings(
    generators: &[Arc<dyn PrimeGenerator>],
    bound: Bound,
) -> Vec<GeneratorRun<Vec<u64>>> {
    execute(generators, bound, |gen, bound| gen.primes_below(bound))
}

fn execute<T>(
    generators: &[Arc<dyn PrimeGenerator>],
    bound: Bound,
    task: impl Fn(&dyn PrimeGenerator, Bound) -> Result<T, FibPrimeError>,
) -> Vec<GeneratorRun<T>> {
    generators
        .iter()
        .map(|gen| {
            let start = Instant::now();
            let outcome = task(gen.as_ref(), bound);
            let duration = start.elapsed();
            match &outcome {
                Ok(_) => tracing::debug!(generator = gen.name(), ?duration, "generator finished"),
                Err(e) => tracing::warn!(generator = gen.name(), error = %e, "generator failed"),
            }
            GeneratorRun {
                algorithm: gen.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results<T: Consensus>(
    runs: &[GeneratorRun<T>],
) -> Result<(), FibPrimeError> {
    let mut valid = runs.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = valid.next() else {
        return Err(FibPrimeError::Calculation("no valid results".into()));
    };

    if valid.all(|value| value.agrees_with(first)) {
        Ok(())
    } else {
        Err(FibPrimeError::Mismatch)
    }
}
