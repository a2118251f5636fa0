//! Example: counting monotone paths with both DP engines.
//!
//! Run with:
//! `cargo run --example count`

use snake_paths::{count_paths, count_paths_sparse, GridBuilder};

fn main() {
    let builder = GridBuilder::new(4, 6).block(1, 1).block(2, 3).block(0, 4);

    let grid = match builder.clone().build() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad grid: {err}");
            std::process::exit(1);
        }
    };
    println!("{grid}");
    println!("dense table count:  {}", count_paths(&grid));

    match builder.build_sparse() {
        Ok(set) => println!("stride count:       {}", count_paths_sparse(&set)),
        Err(err) => eprintln!("bad blocked set: {err}"),
    }
}
