use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::cs::approx::bin_packing::within_capacity;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    value: T,
    weight: T,
}

impl<T: Float> Item<T> {
    pub fn new(value: T, weight: T) -> Self {
        Self { value, weight }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn weight(&self) -> T {
        self.weight
    }

    /// Value per unit of weight.
    pub fn density(&self) -> T {
        self.value / self.weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution<T> {
    /// Indices of the chosen items, in the order they were taken
    pub selected: Vec<usize>,
    pub total_value: T,
    pub total_weight: T,
}

fn validate<T: Float + Debug>(items: &[Item<T>], capacity: T) -> Result<()> {
    if !capacity.is_finite() || capacity < T::zero() {
        return Err(Error::invalid_input(format!(
            "knapsack capacity must be finite and non-negative, got {:?}",
            capacity
        )));
    }
    for (i, item) in items.iter().enumerate() {
        if !item.weight.is_finite() || item.weight <= T::zero() {
            return Err(Error::invalid_input(format!(
                "item {} must have a positive weight, got {:?}",
                i, item.weight
            )));
        }
        if !item.value.is_finite() || item.value < T::zero() {
            return Err(Error::invalid_input(format!(
                "item {} must have a non-negative value, got {:?}",
                i, item.value
            )));
        }
    }
    Ok(())
}

/// Greedy 0/1 knapsack by value density.
///
/// Items are considered in order of decreasing `value / weight` (ties keep
/// input order) and each one is taken if it still fits. Fitting allows the
/// same relative slack as bin packing
/// ([`FIT_TOLERANCE`](crate::cs::approx::FIT_TOLERANCE)), so weights `0.1`
/// and `0.2` fill a capacity of `0.3`. On its own this has no constant
/// approximation factor: a tiny dense item can block a large valuable one. See [`knapsack_greedy_best_single`] for the 2-approximate
/// variant.
///
/// # Arguments
///
/// * `items` - Candidate items
/// * `capacity` - Maximum total weight
///
/// # Errors
/// * `InvalidInput` if a weight is not positive, a value is negative, or
///   the capacity is negative or non-finite
///
/// # Examples
/// ```
/// use algos_approx::cs::approx::{knapsack_greedy, Item};
///
/// let items = vec![Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
/// let solution = knapsack_greedy(&items, 50.0).unwrap();
/// assert_eq!(solution.selected, vec![0, 1]);
/// assert_eq!(solution.total_value, 160.0);
/// ```
pub fn knapsack_greedy<T: Float + Debug>(
    items: &[Item<T>],
    capacity: T,
) -> Result<KnapsackSolution<T>> {
    validate(items, capacity)?;

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .density()
            .partial_cmp(&items[a].density())
            .unwrap_or(Ordering::Equal)
    });

    let mut solution = KnapsackSolution {
        selected: Vec::new(),
        total_value: T::zero(),
        total_weight: T::zero(),
    };
    for idx in order {
        let item = &items[idx];
        if within_capacity(solution.total_weight + item.weight, capacity) {
            log::trace!("taking item {} with density {:?}", idx, item.density());
            solution.selected.push(idx);
            solution.total_value = solution.total_value + item.value;
            solution.total_weight = solution.total_weight + item.weight;
        }
    }

    Ok(solution)
}

/// Modified greedy: the better of [`knapsack_greedy`] and the single most
/// valuable item that fits on its own.
///
/// The fractional optimum is bounded by the greedy prefix plus the first
/// item that did not fit, so one of the two candidates is at least half of
/// OPT.
///
/// # Errors
/// * `InvalidInput` under the same conditions as [`knapsack_greedy`]
pub fn knapsack_greedy_best_single<T: Float + Debug>(
    items: &[Item<T>],
    capacity: T,
) -> Result<KnapsackSolution<T>> {
    let greedy = knapsack_greedy(items, capacity)?;

    let best_single = items
        .iter()
        .enumerate()
        .filter(|(_, item)| within_capacity(item.weight, capacity))
        .max_by(|(_, a), (_, b)| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));

    match best_single {
        Some((idx, item)) if item.value > greedy.total_value => {
            log::debug!(
                "single item {} beats greedy value {:?}",
                idx,
                greedy.total_value
            );
            Ok(KnapsackSolution {
                selected: vec![idx],
                total_value: item.value,
                total_weight: item.weight,
            })
        }
        _ => Ok(greedy),
    }
}
