//! Empirical comparison of the two vertex cover algorithms on random graphs.
//!
//! Nothing here prints. [`run_experiment`] returns an [`ExperimentReport`]
//! and the caller decides how to present it (its `Display` impl gives a
//! short summary).

use std::fmt;

use crate::cs::approx::cover::{find_uncovered_edge, Cover};
use crate::cs::approx::greedy_vertex_cover::greedy_degree_vertex_cover;
use crate::cs::approx::vertex_cover_two::two_approx_vertex_cover;
use crate::cs::graph::{generate_random_graph, Graph};
use crate::error::{Error, Result};

/// Parameters for a batch of random-graph trials.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Vertices per generated graph
    pub vertex_count: usize,
    /// Probability that any given pair of vertices is joined
    pub density: f64,
    /// Number of graphs to generate
    pub trials: usize,
    /// Base seed; trial `i` uses `seed + i`
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            vertex_count: 15,
            density: 0.25,
            trials: 10,
            seed: 42,
        }
    }
}

/// Summary of cover sizes over the trials that were run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

impl CoverStats {
    fn from_sizes(sizes: &[usize]) -> Option<Self> {
        let min = *sizes.iter().min()?;
        let max = *sizes.iter().max()?;
        let mean = sizes.iter().sum::<usize>() as f64 / sizes.len() as f64;
        Some(Self { min, max, mean })
    }
}

impl fmt::Display for CoverStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean {:.2}, min {}, max {}", self.mean, self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    /// Trials whose graph had at least one edge
    pub trials_run: usize,
    /// Trials skipped because the generated graph had no edges
    pub skipped: usize,
    pub two_approx: Option<CoverStats>,
    pub greedy: Option<CoverStats>,
    /// Total 2-approximation cover size divided by total greedy cover size
    pub ratio: Option<f64>,
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.two_approx, &self.greedy, self.ratio) {
            (Some(two), Some(greedy), Some(ratio)) => write!(
                f,
                "{} graphs: 2-approx [{}], greedy [{}], ratio {:.2}",
                self.trials_run, two, greedy, ratio
            ),
            _ => write!(f, "no graphs with edges ({} skipped)", self.skipped),
        }
    }
}

/// Runs both vertex cover algorithms on `config.trials` seeded random graphs.
///
/// Graphs without edges are skipped. Every produced cover is checked
/// against its graph.
///
/// # Errors
/// * `InvalidInput` if the density is outside `[0, 1]`
/// * `InvalidCover` if an algorithm returns a cover that misses an edge
///
/// # Examples
/// ```
/// use algos_approx::cs::approx::{run_experiment, ExperimentConfig};
///
/// let report = run_experiment(&ExperimentConfig::default()).unwrap();
/// assert_eq!(report.trials_run + report.skipped, 10);
/// ```
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let mut two_sizes = Vec::with_capacity(config.trials);
    let mut greedy_sizes = Vec::with_capacity(config.trials);
    let mut skipped = 0;

    for trial in 0..config.trials {
        let seed = config.seed.wrapping_add(trial as u64);
        let graph = generate_random_graph(config.vertex_count, config.density, seed)?;
        if !graph.has_edges() {
            log::warn!("trial {} (seed {}) produced no edges, skipping", trial, seed);
            skipped += 1;
            continue;
        }

        let two = two_approx_vertex_cover(&graph);
        let greedy = greedy_degree_vertex_cover(&graph);
        check_cover(&graph, &two, "2-approx", trial)?;
        check_cover(&graph, &greedy, "greedy", trial)?;

        log::debug!(
            "trial {}: 2-approx {} vertices, greedy {} vertices",
            trial,
            two.len(),
            greedy.len()
        );
        two_sizes.push(two.len());
        greedy_sizes.push(greedy.len());
    }

    let two_total: usize = two_sizes.iter().sum();
    let greedy_total: usize = greedy_sizes.iter().sum();
    let ratio = (greedy_total > 0).then(|| two_total as f64 / greedy_total as f64);

    Ok(ExperimentReport {
        trials_run: two_sizes.len(),
        skipped,
        two_approx: CoverStats::from_sizes(&two_sizes),
        greedy: CoverStats::from_sizes(&greedy_sizes),
        ratio,
    })
}

fn check_cover(
    graph: &Graph,
    cover: &Cover,
    algorithm: &'static str,
    trial: usize,
) -> Result<()> {
    match find_uncovered_edge(graph, cover) {
        Some((u, v)) => {
            log::error!(
                "{} cover misses edge ({}, {}) in trial {}",
                algorithm,
                u,
                v,
                trial
            );
            Err(Error::InvalidCover {
                algorithm,
                trial,
                u,
                v,
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.vertex_count, 15);
        assert_eq!(config.density, 0.25);
        assert_eq!(config.trials, 10);
    }

    #[test]
    fn test_report_is_reproducible() {
        let config = ExperimentConfig {
            vertex_count: 12,
            density: 0.3,
            trials: 6,
            seed: 7,
        };

        let first = run_experiment(&config).unwrap();
        let second = run_experiment(&config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_stats_are_consistent() {
        let config = ExperimentConfig {
            vertex_count: 10,
            density: 0.5,
            trials: 8,
            seed: 1,
        };

        let report = run_experiment(&config).unwrap();
        assert_eq!(report.trials_run + report.skipped, 8);

        let two = report.two_approx.unwrap();
        let greedy = report.greedy.unwrap();
        assert!(two.min as f64 <= two.mean && two.mean <= two.max as f64);
        assert!(greedy.min as f64 <= greedy.mean && greedy.mean <= greedy.max as f64);
        // Matching covers always have even size
        assert_eq!(two.min % 2, 0);
        assert!(report.ratio.unwrap() > 0.0);
    }

    #[test]
    fn test_all_trials_skipped() {
        let config = ExperimentConfig {
            density: 0.0,
            trials: 3,
            ..ExperimentConfig::default()
        };

        let report = run_experiment(&config).unwrap();

        assert_eq!(report.trials_run, 0);
        assert_eq!(report.skipped, 3);
        assert_eq!(report.two_approx, None);
        assert_eq!(report.ratio, None);
        assert_eq!(report.to_string(), "no graphs with edges (3 skipped)");
    }

    #[test]
    fn test_invalid_density() {
        let config = ExperimentConfig {
            density: 2.0,
            ..ExperimentConfig::default()
        };
        assert!(matches!(run_experiment(&config), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_check_cover_reports_missed_edge() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();

        assert_eq!(check_cover(&graph, &Cover::from([1]), "greedy", 0), Ok(()));
        assert_eq!(
            check_cover(&graph, &Cover::from([0]), "2-approx", 3),
            Err(Error::InvalidCover {
                algorithm: "2-approx",
                trial: 3,
                u: 1,
                v: 2,
            })
        );
    }

    #[test]
    fn test_stats_display() {
        let stats = CoverStats::from_sizes(&[4, 6, 8]).unwrap();
        assert_eq!(stats.to_string(), "mean 6.00, min 4, max 8");
        assert_eq!(CoverStats::from_sizes(&[]), None);
    }
}
