//! Evaluate many grids at once.
//!
//! Engine calls share no state, so a batch can be fanned out freely. With the
//! `parallel` feature the work is spread over the rayon thread pool;
//! otherwise the grids are processed in order on the calling thread. Results
//! are always returned in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::Grid;
use crate::paths::dense::count_paths;
use crate::paths::simple::enumerate_all_simple_paths;

/// [`count_paths`] for every grid.
///
/// # Panics
/// Panics if any grid is empty or has a blocked start or goal cell.
pub fn count_paths_batch(grids: &[Grid]) -> Vec<u64> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("count_paths_batch", grids = grids.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    map_grids(grids, count_paths)
}

/// Number of 4-directional simple paths for every grid.
///
/// # Panics
/// Panics if any grid is empty or has a blocked start or goal cell.
pub fn count_simple_paths_batch(grids: &[Grid]) -> Vec<u64> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("count_simple_paths_batch", grids = grids.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    map_grids(grids, |grid| enumerate_all_simple_paths(grid, |_| {}))
}

#[cfg(feature = "parallel")]
fn map_grids<F>(grids: &[Grid], f: F) -> Vec<u64>
where
    F: Fn(&Grid) -> u64 + Sync + Send,
{
    grids.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_grids<F>(grids: &[Grid], f: F) -> Vec<u64>
where
    F: Fn(&Grid) -> u64,
{
    grids.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_input_order() {
        let grids: Vec<Grid> = ["OOO\nOOO\nOOO", "OOO\nOSO\nSOO", "OO\nOO"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(count_paths_batch(&grids), vec![6, 1, 2]);
        assert_eq!(count_simple_paths_batch(&grids), vec![12, 1, 2]);
    }

    #[test]
    fn empty_batch() {
        assert!(count_paths_batch(&[]).is_empty());
    }
}
