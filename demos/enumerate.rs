//! Example: printing every monotone path, in the order they are found.
//!
//! Run with:
//! `cargo run --example enumerate`

use snake_paths::{enumerate_monotone_paths, utils::render_path, Grid};

fn main() {
    let grid: Grid = match "OOOO\nOSOO\nOOSO".parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad grid: {err}");
            std::process::exit(1);
        }
    };

    println!("{grid}");
    let total = enumerate_monotone_paths(&grid, |path| {
        println!("{}", render_path(grid.columns(), path));
    });
    println!("{total} monotone paths");
}
