//! Example: monotone versus 4-directional simple paths.
//!
//! Run with:
//! `cargo run --example simple_paths`

use snake_paths::{enumerate_all_simple_paths, enumerate_monotone_paths, utils::render_path, Grid};

fn main() {
    let grid: Grid = match "OOO\nOOO\nOSS\nOOO".parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad grid: {err}");
            std::process::exit(1);
        }
    };

    let monotone = enumerate_monotone_paths(&grid, |_| {});
    let simple = enumerate_all_simple_paths(&grid, |path| {
        println!("{}", render_path(grid.columns(), path));
    });

    println!("monotone paths: {monotone}");
    println!("simple paths:   {simple}");
}
