//! Result presenters for text and JSON output.

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use fibprime_core::{Bound, Intersection};

use crate::orchestrator::RunStatus;
use crate::output::{format_duration, format_number, format_values};

/// Renders results for the user.
///
/// `runs` lists every generator that ran; presenters include a comparison
/// when more than one did. Each call produces one complete document.
pub trait ResultPresenter {
    /// Render a Fibonacci-prime intersection.
    fn render_intersection(
        &self,
        report: &Intersection,
        duration: Duration,
        runs: &[RunStatus],
    ) -> Result<String>;

    /// Render a plain sequence (primes or Fibonacci numbers).
    fn render_sequence(
        &self,
        label: &str,
        bound: Bound,
        values: &[u64],
        runs: &[RunStatus],
    ) -> Result<String>;
}

/// Human-readable presenter.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    fn push_comparison(&self, lines: &mut Vec<String>, runs: &[RunStatus]) {
        if runs.len() < 2 {
            return;
        }
        lines.push("\nComparison Results:".to_string());
        lines.push(format!("{:-<60}", ""));
        for run in runs {
            let status = if run.ok { "OK" } else { "ERROR" };
            lines.push(format!(
                "  {:<24} {:>10} [{}]",
                run.algorithm,
                format_duration(run.duration),
                status,
            ));
        }
    }
}

impl ResultPresenter for CliPresenter {
    fn render_intersection(
        &self,
        report: &Intersection,
        duration: Duration,
        runs: &[RunStatus],
    ) -> Result<String> {
        let values: Vec<u64> = report.values.iter().copied().collect();
        if self.quiet {
            return Ok(format_values(&values, true));
        }

        let mut lines = vec![
            format!("Algorithm: {}", report.algorithm),
            format!("N: {}", format_number(report.bound.get())),
        ];
        if self.details {
            lines.push(format!(
                "Primes considered: {}",
                format_number(report.primes_considered as u64)
            ));
            lines.push(format!(
                "Fibonaccis considered: {}",
                format_number(report.fibonaccis_considered as u64)
            ));
            lines.push(format!("Duration: {}", format_duration(duration)));
        }
        lines.push(format!(
            "Fibonacci primes below {}: {}",
            format_number(report.bound.get()),
            format_values(&values, self.verbose)
        ));
        self.push_comparison(&mut lines, runs);
        Ok(lines.join("\n"))
    }

    fn render_sequence(
        &self,
        label: &str,
        bound: Bound,
        values: &[u64],
        runs: &[RunStatus],
    ) -> Result<String> {
        if self.quiet {
            return Ok(format_values(values, true));
        }
        let mut lines = Vec::new();
        if self.details {
            lines.push(format!("Count: {}", format_number(values.len() as u64)));
        }
        lines.push(format!(
            "{label} below {}: {}",
            format_number(bound.get()),
            format_values(values, self.verbose)
        ));
        self.push_comparison(&mut lines, runs);
        Ok(lines.join("\n"))
    }
}

/// JSON presenter; every render produces one pretty-printed document.
pub struct JsonPresenter;

#[derive(Serialize)]
struct IntersectionDoc<'a> {
    #[serde(flatten)]
    report: &'a Intersection,
    duration_us: u128,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    comparison: Vec<StatusDoc<'a>>,
}

#[derive(Serialize)]
struct SequenceDoc<'a> {
    sequence: &'a str,
    bound: Bound,
    count: usize,
    values: &'a [u64],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    comparison: Vec<StatusDoc<'a>>,
}

#[derive(Serialize)]
struct StatusDoc<'a> {
    algorithm: &'a str,
    duration_us: u128,
    ok: bool,
}

fn comparison_docs(runs: &[RunStatus]) -> Vec<StatusDoc<'_>> {
    if runs.len() < 2 {
        return Vec::new();
    }
    runs.iter()
        .map(|r| StatusDoc {
            algorithm: &r.algorithm,
            duration_us: r.duration.as_micros(),
            ok: r.ok,
        })
        .collect()
}

impl ResultPresenter for JsonPresenter {
    fn render_intersection(
        &self,
        report: &Intersection,
        duration: Duration,
        runs: &[RunStatus],
    ) -> Result<String> {
        let doc = IntersectionDoc {
            report,
            duration_us: duration.as_micros(),
            comparison: comparison_docs(runs),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn render_sequence(
        &self,
        label: &str,
        bound: Bound,
        values: &[u64],
        runs: &[RunStatus],
    ) -> Result<String> {
        let doc = SequenceDoc {
            sequence: label,
            bound,
            count: values.len(),
            values,
            comparison: comparison_docs(runs),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn report() -> Intersection {
        Intersection {
            bound: Bound::new(100),
            algorithm: "BoundedTrialDivision".into(),
            primes_considered: 25,
            fibonaccis_considered: 11,
            values: BTreeSet::from([2, 3, 5, 13, 89]),
        }
    }

    fn statuses() -> Vec<RunStatus> {
        let ok = RunStatus {
            algorithm: "TrialDivision".into(),
            duration: Duration::from_micros(3),
            ok: true,
        };
        let failed = RunStatus {
            algorithm: "SieveOfEratosthenes".into(),
            ok: false,
            ..ok.clone()
        };
        vec![ok, failed]
    }

    #[test]
    fn cli_quiet_prints_values_only() {
        let p = CliPresenter::new(false, true, false);
        let s = p
            .render_intersection(&report(), Duration::ZERO, &statuses())
            .unwrap();
        assert_eq!(s, "2 3 5 13 89");
    }

    #[test]
    fn cli_details_include_counts() {
        let p = CliPresenter::new(false, false, true);
        let s = p.render_intersection(&report(), Duration::ZERO, &[]).unwrap();
        assert!(s.contains("Algorithm: BoundedTrialDivision"));
        assert!(s.contains("Primes considered: 25"));
        assert!(s.contains("Fibonaccis considered: 11"));
        assert!(s.ends_with("Fibonacci primes below 100: 2 3 5 13 89"));
    }

    #[test]
    fn cli_sequence() {
        let p = CliPresenter::new(false, false, false);
        let s = p
            .render_sequence("primes", Bound::new(10), &[2, 3, 5, 7], &[])
            .unwrap();
        assert_eq!(s, "primes below 10: 2 3 5 7");
    }

    #[test]
    fn cli_comparison_needs_two_runs() {
        let p = CliPresenter::new(false, false, false);
        let one = &statuses()[..1];
        let s = p.render_sequence("primes", Bound::new(3), &[2], one).unwrap();
        assert!(!s.contains("Comparison Results"));

        let s = p
            .render_sequence("primes", Bound::new(3), &[2], &statuses())
            .unwrap();
        assert!(s.contains("Comparison Results"));
        assert!(s.contains("[OK]"));
        assert!(s.contains("[ERROR]"));
    }

    #[test]
    fn json_intersection_is_flat() {
        let s = JsonPresenter
            .render_intersection(&report(), Duration::from_micros(7), &[])
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["bound"], 100);
        assert_eq!(v["primes_considered"], 25);
        assert_eq!(v["duration_us"], 7);
        assert_eq!(v["values"], serde_json::json!([2, 3, 5, 13, 89]));
        assert!(v.get("comparison").is_none());
    }

    #[test]
    fn json_comparison_is_embedded() {
        let s = JsonPresenter
            .render_intersection(&report(), Duration::ZERO, &statuses())
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["comparison"][0]["algorithm"], "TrialDivision");
        assert_eq!(v["comparison"][1]["ok"], false);
    }

    #[test]
    fn json_sequence() {
        let s = JsonPresenter
            .render_sequence("fibonacci", Bound::new(3), &[0, 1, 1, 2], &[])
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["sequence"], "fibonacci");
        assert_eq!(v["count"], 4);
    }
}
