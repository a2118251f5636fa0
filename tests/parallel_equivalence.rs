#![cfg(feature = "parallel")]

mod common;

use common::grid_strategy;
use proptest::prelude::*;
use snake_paths::batch::{count_paths_batch, count_simple_paths_batch};
use snake_paths::{count_paths, enumerate_all_simple_paths};

proptest! {
    #[test]
    fn batch_matches_one_by_one(grids in prop::collection::vec(grid_strategy(6, 6), 0..24)) {
        let expected: Vec<u64> = grids.iter().map(count_paths).collect();
        prop_assert_eq!(count_paths_batch(&grids), expected);
    }

    #[test]
    fn simple_batch_matches_one_by_one(grids in prop::collection::vec(grid_strategy(4, 4), 0..12)) {
        let expected: Vec<u64> = grids
            .iter()
            .map(|g| enumerate_all_simple_paths(g, |_| {}))
            .collect();
        prop_assert_eq!(count_simple_paths_batch(&grids), expected);
    }
}
