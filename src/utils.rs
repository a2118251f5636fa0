//! Assorted helpers used by the engines and the probe binary.

use crate::grid::Position;

/// Axis choice for the rolling-array counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideAxes {
    /// Length of the rolling array (the shorter dimension).
    pub major: usize,
    /// Number of strides processed (the longer dimension).
    pub minor: usize,
    /// `true` when rows exceed columns and coordinates must be swapped.
    pub transposed: bool,
}

/// Pick the shorter dimension as the major axis.
///
/// Rows are the major axis unless there are more rows than columns.
#[inline]
pub fn stride_axes(rows: usize, columns: usize) -> StrideAxes {
    if rows > columns {
        StrideAxes {
            major: columns,
            minor: rows,
            transposed: true,
        }
    } else {
        StrideAxes {
            major: rows,
            minor: columns,
            transposed: false,
        }
    }
}

/// Render a path as linear cell indices, e.g. `0 -> 1 -> 4`.
pub fn render_path(columns: usize, path: &[Position]) -> String {
    path.iter()
        .map(|p| (p.row * columns + p.column).to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_dimension_is_major() {
        assert_eq!(
            stride_axes(2, 5),
            StrideAxes {
                major: 2,
                minor: 5,
                transposed: false
            }
        );
        assert_eq!(
            stride_axes(5, 2),
            StrideAxes {
                major: 2,
                minor: 5,
                transposed: true
            }
        );
    }

    #[test]
    fn square_grids_keep_their_orientation() {
        assert!(!stride_axes(4, 4).transposed);
        assert!(!stride_axes(1, 1).transposed);
    }

    #[test]
    fn renders_linear_indices() {
        let path = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
        ];
        assert_eq!(render_path(3, &path), "0 -> 1 -> 4 -> 7");
        assert_eq!(render_path(3, &[]), "");
    }
}
