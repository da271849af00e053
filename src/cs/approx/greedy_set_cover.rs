use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct SetCoverInstance<T: Clone + Eq + Hash> {
    universe: HashSet<T>,
    sets: Vec<HashSet<T>>,
    weights: Option<Vec<f64>>,
}

impl<T: Clone + Eq + Hash> SetCoverInstance<T> {
    /// Creates an unweighted instance; every set costs 1.
    pub fn new(universe: HashSet<T>, sets: Vec<HashSet<T>>) -> Self {
        Self {
            universe,
            sets,
            weights: None,
        }
    }

    /// Creates a weighted instance.
    ///
    /// # Errors
    /// * `InvalidInput` if the weight count differs from the set count, or
    ///   any weight is negative or not finite
    pub fn weighted(
        universe: HashSet<T>,
        sets: Vec<HashSet<T>>,
        weights: Vec<f64>,
    ) -> Result<Self> {
        if sets.len() != weights.len() {
            return Err(Error::invalid_input(format!(
                "each set must have a corresponding weight: {} sets, {} weights",
                sets.len(),
                weights.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::invalid_input(format!(
                "set weights must be finite and non-negative, got {w}"
            )));
        }
        Ok(Self {
            universe,
            sets,
            weights: Some(weights),
        })
    }

    pub fn universe(&self) -> &HashSet<T> {
        &self.universe
    }

    pub fn sets(&self) -> &[HashSet<T>] {
        &self.sets
    }

    fn weight(&self, idx: usize) -> f64 {
        self.weights.as_ref().map_or(1.0, |w| w[idx])
    }

    fn ensure_coverable(&self) -> Result<()> {
        let reachable: HashSet<&T> = self.sets.iter().flatten().collect();
        let missing = self
            .universe
            .iter()
            .filter(|e| !reachable.contains(e))
            .count();
        if missing > 0 {
            return Err(Error::infeasible(format!(
                "{missing} universe elements appear in no set"
            )));
        }
        Ok(())
    }
}

/// Implements the greedy Set Cover algorithm.
///
/// Repeatedly selects the set covering the most still-uncovered elements of
/// the universe (lowest index on ties). This gives an H(d) approximation,
/// where d is the size of the largest set and H is the harmonic number, so
/// at most `ln(n) + 1` times optimal.
///
/// Elements of a set that are not in the universe are ignored.
///
/// # Arguments
///
/// * `instance` - The set cover instance containing the universe and sets
///
/// # Returns
///
/// * Indices of the selected sets, in selection order
///
/// # Errors
/// * `Infeasible` if the sets do not jointly cover the universe
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use algos_approx::cs::approx::{greedy_set_cover, SetCoverInstance};
///
/// let universe: HashSet<_> = (1..=4).collect();
/// let sets = vec![HashSet::from([1, 2]), HashSet::from([3, 4]), HashSet::from([2, 3])];
/// let cover = greedy_set_cover(&SetCoverInstance::new(universe, sets)).unwrap();
/// assert_eq!(cover, vec![0, 1]);
/// ```
pub fn greedy_set_cover<T: Clone + Eq + Hash>(instance: &SetCoverInstance<T>) -> Result<Vec<usize>> {
    instance.ensure_coverable()?;

    let mut selected_sets = Vec::new();
    let mut uncovered: HashSet<&T> = instance.universe.iter().collect();

    while !uncovered.is_empty() {
        let mut best: Option<(usize, usize)> = None;
        for (idx, set) in instance.sets.iter().enumerate() {
            let gain = set.iter().filter(|e| uncovered.contains(e)).count();
            if gain > 0 && best.map_or(true, |(_, best_gain)| gain > best_gain) {
                best = Some((idx, gain));
            }
        }

        let Some((idx, gain)) = best else {
            return Err(Error::infeasible("no set covers the remaining elements"));
        };

        log::debug!("selected set {} covering {} new elements", idx, gain);
        for element in &instance.sets[idx] {
            uncovered.remove(element);
        }
        selected_sets.push(idx);
    }

    Ok(selected_sets)
}

/// Weighted greedy Set Cover.
///
/// Repeatedly selects the set with the minimum cost-effectiveness ratio
/// (weight per newly covered element). Gives an H_n approximation for the
/// weighted problem. Unweighted instances use weight 1 for every set.
///
/// # Errors
/// * `Infeasible` if the sets do not jointly cover the universe
pub fn greedy_weighted_set_cover<T: Clone + Eq + Hash>(
    instance: &SetCoverInstance<T>,
) -> Result<Vec<usize>> {
    instance.ensure_coverable()?;

    let mut selected_sets = Vec::new();
    let mut uncovered: HashSet<&T> = instance.universe.iter().collect();

    while !uncovered.is_empty() {
        let mut best_ratio = f64::INFINITY;
        let mut best_idx = None;

        // Find set with best cost-effectiveness ratio
        for (idx, set) in instance.sets.iter().enumerate() {
            let gain = set.iter().filter(|e| uncovered.contains(e)).count();
            if gain == 0 {
                continue;
            }

            let ratio = instance.weight(idx) / gain as f64;
            if ratio < best_ratio {
                best_ratio = ratio;
                best_idx = Some(idx);
            }
        }

        let Some(idx) = best_idx else {
            return Err(Error::infeasible("no set covers the remaining elements"));
        };

        log::debug!("selected set {} at cost {} per element", idx, best_ratio);
        for element in &instance.sets[idx] {
            uncovered.remove(element);
        }
        selected_sets.push(idx);
    }

    Ok(selected_sets)
}
