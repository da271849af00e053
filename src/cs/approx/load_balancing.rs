use num_traits::{CheckedAdd, Zero};
use std::fmt::Debug;

use crate::error::{Error, Result};

/// Assignment of tasks to identical machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<T> {
    /// `assignment[i]` is the machine running task `i` (input order)
    pub assignment: Vec<usize>,
    /// Total processing time on each machine
    pub loads: Vec<T>,
    /// Largest machine load
    pub makespan: T,
}

/// Graham's list scheduling.
///
/// Tasks are taken in the given order and each is assigned to the machine
/// with the smallest current load (lowest index on ties). The makespan is at
/// most `(2 - 1/m) * OPT`.
///
/// # Arguments
///
/// * `tasks` - Processing time of each task
/// * `machines` - Number of identical machines
///
/// # Errors
/// * `InvalidInput` if `machines` is zero, or a machine load overflows `T`
///
/// # Examples
/// ```
/// use algos_approx::cs::approx::list_scheduling;
///
/// let schedule = list_scheduling(&[7, 5, 4, 4, 3, 3, 2], 3).unwrap();
/// assert_eq!(schedule.makespan, 10);
/// ```
pub fn list_scheduling<T>(tasks: &[T], machines: usize) -> Result<Schedule<T>>
where
    T: Copy + Ord + Zero + CheckedAdd + Debug,
{
    schedule_in_order(tasks, 0..tasks.len(), machines)
}

/// Longest Processing Time first.
///
/// Sorts tasks by decreasing processing time and then list-schedules them,
/// which tightens the makespan bound to `(4/3 - 1/(3m)) * OPT`. The returned
/// assignment is still indexed by the caller's task order.
///
/// # Errors
/// * `InvalidInput` under the same conditions as [`list_scheduling`]
pub fn lpt_scheduling<T>(tasks: &[T], machines: usize) -> Result<Schedule<T>>
where
    T: Copy + Ord + Zero + CheckedAdd + Debug,
{
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by(|&a, &b| tasks[b].cmp(&tasks[a]));
    schedule_in_order(tasks, order, machines)
}

fn schedule_in_order<T, I>(tasks: &[T], order: I, machines: usize) -> Result<Schedule<T>>
where
    T: Copy + Ord + Zero + CheckedAdd + Debug,
    I: IntoIterator<Item = usize>,
{
    if machines == 0 {
        return Err(Error::invalid_input(
            "scheduling requires at least one machine",
        ));
    }

    let mut loads = vec![T::zero(); machines];
    let mut assignment = vec![0; tasks.len()];

    for task in order {
        // min_by_key returns the first minimum, i.e. the lowest machine index
        let machine = (0..machines).min_by_key(|&m| loads[m]).unwrap_or(0);
        loads[machine] = loads[machine].checked_add(&tasks[task]).ok_or_else(|| {
            Error::invalid_input(format!(
                "load on machine {} overflows when adding task {} ({:?})",
                machine, task, tasks[task]
            ))
        })?;
        assignment[task] = machine;
        log::trace!(
            "task {} ({:?}) -> machine {}, load now {:?}",
            task,
            tasks[task],
            machine,
            loads[machine]
        );
    }

    let makespan = loads.iter().copied().max().unwrap_or_else(T::zero);
    log::debug!(
        "scheduled {} tasks on {} machines, makespan {:?}",
        tasks.len(),
        machines,
        makespan
    );

    Ok(Schedule {
        assignment,
        loads,
        makespan,
    })
}
