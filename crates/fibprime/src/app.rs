//! Application entry point and dispatch.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use fibprime_core::{Bound, DefaultFactory, FibPrimeError, Fibonacci, PrimeGenerator};

use crate::config::{AppConfig, OutputFormat, SequenceKind};
use crate::orchestrator::{
    analyze_comparison_results, execute_intersections, execute_prime_listings,
    get_generators_to_run, Consensus, GeneratorRun, RunStatus,
};
use crate::output::write_to_file;
use crate::presenter::{CliPresenter, JsonPresenter, ResultPresenter};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crate::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter: Box<dyn ResultPresenter> = match config.format {
        OutputFormat::Text => Box::new(CliPresenter::new(
            config.verbose,
            config.quiet,
            config.details,
        )),
        OutputFormat::Json => Box::new(JsonPresenter),
    };

    let rendered = render(config, presenter.as_ref())?;
    println!("{rendered}");

    if let Some(ref path) = config.output {
        write_to_file(path, &rendered)?;
        tracing::info!(path = %path, "result written");
    }

    Ok(())
}

/// Compute the requested sequence and render it, without printing.
pub fn render(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<String> {
    let bound = config.bound();
    tracing::info!(%bound, sequence = ?config.sequence, algo = %config.algo, "starting");

    match config.sequence {
        SequenceKind::Fibonacci => {
            let values: Vec<u64> = Fibonacci::below(bound).collect();
            presenter.render_sequence(config.sequence.label(), bound, &values, &[])
        }
        SequenceKind::Primes => {
            let runs = run_generators(config, bound, execute_prime_listings)?;
            let (values, _) = first_success(&runs)?;
            presenter.render_sequence(config.sequence.label(), bound, values, &statuses(&runs))
        }
        SequenceKind::Intersection => {
            let runs = run_generators(config, bound, execute_intersections)?;
            let (report, duration) = first_success(&runs)?;
            presenter.render_intersection(report, duration, &statuses(&runs))
        }
    }
}

fn statuses<T>(runs: &[GeneratorRun<T>]) -> Vec<RunStatus> {
    runs.iter().map(GeneratorRun::status).collect()
}

/// Select generators, run them, and cross-validate when more than one ran.
fn run_generators<T: Consensus>(
    config: &AppConfig,
    bound: Bound,
    execute: impl Fn(&[Arc<dyn PrimeGenerator>], Bound) -> Vec<GeneratorRun<T>>,
) -> Result<Vec<GeneratorRun<T>>> {
    let factory = DefaultFactory::new();
    let generators = get_generators_to_run(&config.algo, &factory)?;
    let runs = execute(&generators, bound);

    if runs.len() > 1 {
        if let Err(FibPrimeError::Mismatch) = analyze_comparison_results(&runs) {
            return Err(FibPrimeError::Mismatch.into());
        }
    }
    Ok(runs)
}

fn first_success<T>(runs: &[GeneratorRun<T>]) -> Result<(&T, Duration)> {
    runs.iter()
        .find_map(|r| r.outcome.as_ref().ok().map(|value| (value, r.duration)))
        .ok_or_else(|| first_error(runs).into())
}

fn first_error<T>(runs: &[GeneratorRun<T>]) -> FibPrimeError {
    runs.iter()
        .find_map(|r| r.outcome.as_ref().err().cloned())
        .unwrap_or_else(|| FibPrimeError::Calculation("no generators ran".into()))
}
