//! Online and offline bin packing heuristics.
//!
//! | Heuristic              | Time        | Worst-case bins     |
//! |------------------------|-------------|---------------------|
//! | Next Fit               | O(n)        | 2 · OPT             |
//! | First Fit              | O(n · bins) | 1.7 · OPT           |
//! | First Fit Decreasing   | O(n log n + n · bins) | 11/9 · OPT + 6/9 |

use num_traits::Float;
use std::fmt::Debug;

use crate::error::{Error, Result};

/// Relative slack allowed when testing whether an item fits, so that sizes
/// like `0.7 + 0.3` fill a unit bin exactly. The slack is
/// `capacity * FIT_TOLERANCE`, so packing decisions do not depend on the
/// unit the sizes are measured in.
pub const FIT_TOLERANCE: f64 = 1e-9;

/// Whether a total of `load` stays within `capacity`, up to the relative
/// [`FIT_TOLERANCE`]. A zero capacity allows no slack.
pub(crate) fn within_capacity<T: Float>(load: T, capacity: T) -> bool {
    let tolerance = T::from(FIT_TOLERANCE).unwrap_or_else(T::epsilon);
    load <= capacity + capacity * tolerance
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bin<T> {
    capacity: T,
    load: T,
    items: Vec<usize>,
}

impl<T: Float> Bin<T> {
    fn new(capacity: T) -> Self {
        Self {
            capacity,
            load: T::zero(),
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Sum of the sizes packed into this bin.
    pub fn load(&self) -> T {
        self.load
    }

    /// Indices into the caller's item slice.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn remaining(&self) -> T {
        self.capacity - self.load
    }

    fn fits(&self, size: T) -> bool {
        within_capacity(self.load + size, self.capacity)
    }

    fn push(&mut self, index: usize, size: T) {
        self.items.push(index);
        self.load = self.load + size;
    }
}

fn validate<T: Float + Debug>(items: &[T], capacity: T) -> Result<()> {
    if !capacity.is_finite() || capacity <= T::zero() {
        return Err(Error::invalid_input(format!(
            "bin capacity must be positive and finite, got {:?}",
            capacity
        )));
    }
    for (i, &size) in items.iter().enumerate() {
        if !size.is_finite() || size < T::zero() || size > capacity {
            return Err(Error::invalid_input(format!(
                "item {} has size {:?}, expected a value in [0, {:?}]",
                i, size, capacity
            )));
        }
    }
    Ok(())
}

/// Next Fit: keep one open bin, and open a new one whenever the next item
/// does not fit.
///
/// # Errors
/// * `InvalidInput` if capacity is not positive, or an item is negative,
///   non-finite or larger than the capacity
///
/// # Examples
/// ```
/// use algos_approx::cs::approx::next_fit;
///
/// let bins = next_fit(&[0.7, 0.5, 0.3, 0.4, 0.2, 0.6, 0.1, 0.8], 1.0).unwrap();
/// assert_eq!(bins.len(), 5);
/// ```
pub fn next_fit<T: Float + Debug>(items: &[T], capacity: T) -> Result<Vec<Bin<T>>> {
    validate(items, capacity)?;

    let mut bins: Vec<Bin<T>> = Vec::new();
    for (i, &size) in items.iter().enumerate() {
        match bins.last_mut() {
            Some(bin) if bin.fits(size) => bin.push(i, size),
            _ => {
                log::debug!("next fit: opening bin {} for item {}", bins.len(), i);
                let mut bin = Bin::new(capacity);
                bin.push(i, size);
                bins.push(bin);
            }
        }
    }
    Ok(bins)
}

/// First Fit: place each item into the first bin with enough room.
///
/// # Errors
/// * `InvalidInput` under the same conditions as [`next_fit`]
pub fn first_fit<T: Float + Debug>(items: &[T], capacity: T) -> Result<Vec<Bin<T>>> {
    validate(items, capacity)?;
    Ok(pack_first_fit(items, 0..items.len(), capacity))
}

/// First Fit Decreasing: sort items by size, largest first, then run First
/// Fit. Bins still report indices into the original, unsorted slice.
///
/// # Errors
/// * `InvalidInput` under the same conditions as [`next_fit`]
pub fn first_fit_decreasing<T: Float + Debug>(items: &[T], capacity: T) -> Result<Vec<Bin<T>>> {
    validate(items, capacity)?;

    let mut order: Vec<usize> = (0..items.len()).collect();
    // Sizes are validated finite, so partial_cmp never fails
    order.sort_by(|&a, &b| {
        items[b]
            .partial_cmp(&items[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(pack_first_fit(items, order, capacity))
}

fn pack_first_fit<T, I>(items: &[T], order: I, capacity: T) -> Vec<Bin<T>>
where
    T: Float + Debug,
    I: IntoIterator<Item = usize>,
{
    let mut bins: Vec<Bin<T>> = Vec::new();
    for i in order {
        let size = items[i];
        match bins.iter().position(|bin| bin.fits(size)) {
            Some(b) => {
                log::trace!("first fit: item {} ({:?}) -> bin {}", i, size, b);
                bins[b].push(i, size);
            }
            None => {
                log::debug!("first fit: opening bin {} for item {}", bins.len(), i);
                let mut bin = Bin::new(capacity);
                bin.push(i, size);
                bins.push(bin);
            }
        }
    }
    bins
}
