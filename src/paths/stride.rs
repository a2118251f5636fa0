//! Monotone path counting with a rolling array over a sparse blocked set.
//!
//! The shorter grid dimension is the *major* axis and sizes the rolling
//! frontier; the longer one is walked stride by stride. When rows outnumber
//! columns the blocked coordinates are transposed first, which leaves the
//! count unchanged and keeps working memory at `O(min(rows, columns))`.
//!
//! Within a stride, `count[i]` still holds the previous stride's value (the
//! predecessor along the minor axis) when it is updated, and `count[i - 1]`
//! already holds the current stride's value (the predecessor along the major
//! axis), so `count[i] += count[i - 1]` is exactly the DP recurrence.

use std::borrow::Cow;

use crate::blocked::BlockedSet;
use crate::grid::Position;
use crate::utils::stride_axes;

/// Rolling counts indexed by the major coordinate.
#[derive(Clone, Debug)]
struct StrideFrontier {
    counts: Vec<u64>,
}

impl StrideFrontier {
    /// Frontier of a virtual stride before the first one: only the start
    /// cell's row carries a path.
    fn init(major: usize) -> Self {
        let mut counts = vec![0; major];
        counts[0] = 1;
        Self { counts }
    }

    /// Advance to the next stride. `blocked` lists the major coordinates
    /// blocked in that stride, ascending.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, fields(snakes = blocked.len()))
    )]
    fn forward_step(&mut self, blocked: &[usize]) {
        let mut blocked = blocked.iter().copied().peekable();
        for i in 0..self.counts.len() {
            if blocked.next_if_eq(&i).is_some() {
                self.counts[i] = 0;
            } else if i > 0 {
                self.counts[i] = self.counts[i].saturating_add(self.counts[i - 1]);
            }
        }
    }

    fn last(&self) -> u64 {
        self.counts.last().copied().unwrap_or(0)
    }
}

/// Count right/down paths of the grid described by `blocked`.
///
/// Agrees with [`count_paths`](crate::paths::dense::count_paths) on the
/// equivalent dense grid, including saturation at `u64::MAX`.
///
/// ```
/// use snake_paths::{count_paths_sparse, BlockedSet};
///
/// let set = BlockedSet::new(3, 3, [(1, 1), (2, 0)]).unwrap();
/// assert_eq!(count_paths_sparse(&set), 1);
/// ```
pub fn count_paths_sparse(blocked: &BlockedSet) -> u64 {
    let axes = stride_axes(blocked.rows(), blocked.columns());

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "count_paths_sparse",
        rows = blocked.rows(),
        columns = blocked.columns(),
        snakes = blocked.len(),
        transposed = axes.transposed
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let oriented: Cow<'_, BlockedSet> = if axes.transposed {
        Cow::Owned(blocked.transpose())
    } else {
        Cow::Borrowed(blocked)
    };

    // Major coordinate = row, stride = column after orientation.
    let mut by_stride: Vec<Position> = oriented.cells().to_vec();
    by_stride.sort_unstable_by_key(|p| (p.column, p.row));

    let mut frontier = StrideFrontier::init(axes.major);
    let mut in_stride: Vec<usize> = Vec::new();
    let mut pending = by_stride.iter().peekable();
    for stride in 0..axes.minor {
        in_stride.clear();
        while let Some(p) = pending.next_if(|p| p.column == stride) {
            in_stride.push(p.row);
        }
        frontier.forward_step(&in_stride);
    }

    frontier.last()
}
