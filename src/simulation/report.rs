//! Result formatting.

use std::io::Write;

use super::config::Algorithm;
use super::runner::{format_duration_hms, SolverReport};
use super::scaling::ScalingRound;
use crate::distance::Metric;
use crate::error::Result;

/// Writes one text block per report: algorithm, tour, distance and runtime.
///
/// Distances carry a `km` suffix under [`Metric::GreatCircle`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::distance::Metric;
/// use u_tsp::models::Tour;
/// use u_tsp::simulation::{write_report, Algorithm, SolverReport};
///
/// let report = SolverReport {
///     algorithm: Algorithm::Exact,
///     tour: Tour::new(vec![0, 1, 0], 2.0),
///     elapsed: Duration::from_millis(12),
/// };
/// let mut out = Vec::new();
/// write_report(&mut out, &[report], Metric::Euclidean).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("Exact Algorithm: Held-Karp\n"));
/// assert!(text.contains("Optimal Tour: [0, 1, 0]\n"));
/// ```
pub fn write_report<W: Write>(writer: &mut W, reports: &[SolverReport], metric: Metric) -> Result<()> {
    let unit = metric.unit().map(|u| format!(" {u}")).unwrap_or_default();
    for report in reports {
        let (kind, tour_label, distance_label) = labels(report.algorithm);
        writeln!(writer, "{kind}: {}", report.algorithm.name())?;
        writeln!(writer, "{tour_label}: {:?}", report.tour.order())?;
        writeln!(writer, "{distance_label}: {}{unit}", report.tour.length())?;
        writeln!(writer, "Runtime: {}", format_duration_hms(report.elapsed))?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes every round of a scaling run: a header naming the round, the
/// instance size and the algorithms run, followed by [`write_report`] blocks.
pub fn write_scaling_report<W: Write>(
    writer: &mut W,
    rounds: &[ScalingRound],
    metric: Metric,
) -> Result<()> {
    for round in rounds {
        let names: Vec<&str> = round.reports.iter().map(|r| r.algorithm.name()).collect();
        writeln!(writer, "Running simulation: {}", round.round)?;
        writeln!(writer, "Number of cities: {}", round.cities)?;
        writeln!(writer, "Algorithms: [{}]", names.join(", "))?;
        write_report(writer, &round.reports, metric)?;
    }
    Ok(())
}

/// Serializes reports as a pretty-printed JSON array.
pub fn reports_to_json(reports: &[SolverReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

fn labels(algorithm: Algorithm) -> (&'static str, &'static str, &'static str) {
    match algorithm {
        Algorithm::Exact => ("Exact Algorithm", "Optimal Tour", "Optimal Distance"),
        Algorithm::Approx => (
            "Approximation Algorithm",
            "Approximate Best Tour",
            "Approximate Best Distance",
        ),
        Algorithm::Heuristic => (
            "Heuristic Algorithm",
            "Heuristic Best Tour",
            "Heuristic Best Distance",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tour;
    use std::time::Duration;

    fn sample() -> Vec<SolverReport> {
        vec![
            SolverReport {
                algorithm: Algorithm::Approx,
                tour: Tour::new(vec![0, 2, 1, 0], 7.5),
                elapsed: Duration::from_millis(2_003),
            },
            SolverReport {
                algorithm: Algorithm::Heuristic,
                tour: Tour::new(vec![0, 1, 2, 0], 7.0),
                elapsed: Duration::from_millis(40),
            },
        ]
    }

    #[test]
    fn test_write_report_great_circle() {
        let mut out = Vec::new();
        write_report(&mut out, &sample(), Metric::GreatCircle).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let expected = "\
Approximation Algorithm: Christofides
Approximate Best Tour: [0, 2, 1, 0]
Approximate Best Distance: 7.5 km
Runtime: 00:00:02.003

Heuristic Algorithm: 2-opt
Heuristic Best Tour: [0, 1, 2, 0]
Heuristic Best Distance: 7 km
Runtime: 00:00:00.040

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_report_euclidean_has_no_unit() {
        let mut out = Vec::new();
        write_report(&mut out, &sample()[..1], Metric::Euclidean).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Approximate Best Distance: 7.5\n"));
    }

    #[test]
    fn test_write_scaling_report_headers() {
        let rounds = vec![
            ScalingRound {
                round: 1,
                cities: 20,
                reports: sample(),
            },
            ScalingRound {
                round: 2,
                cities: 25,
                reports: sample()[1..].to_vec(),
            },
        ];
        let mut out = Vec::new();
        write_scaling_report(&mut out, &rounds, Metric::Euclidean).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with(
            "Running simulation: 1\nNumber of cities: 20\nAlgorithms: [Christofides, 2-opt]\nApproximation Algorithm: Christofides\n"
        ));
        assert!(text.contains(
            "Running simulation: 2\nNumber of cities: 25\nAlgorithms: [2-opt]\nHeuristic Algorithm: 2-opt\n"
        ));
        assert_eq!(text.matches("Runtime: ").count(), 3);
    }

    #[test]
    fn test_reports_to_json_round_trip() {
        let json = reports_to_json(&sample()).expect("json");
        assert!(json.contains("\"algorithm\": \"approx\""));
        let back: Vec<SolverReport> = serde_json::from_str(&json).expect("parse");
        assert_eq!(back.len(), 2);
        assert_eq!(back[1].tour.order(), &[0, 1, 2, 0]);
        assert_eq!(back[0].elapsed, Duration::from_millis(2_003));
    }
}
