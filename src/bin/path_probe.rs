//! Times every path engine on deterministic snake grids and cross-checks
//! their counts. Emits one row per engine per grid.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use snake_paths::utils::stride_axes;
use snake_paths::{
    count_paths, count_paths_sparse, enumerate_all_simple_paths, enumerate_monotone_paths,
    BlockedSet, CellFlag, Grid,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Square grid sides for the dense counter and the monotone enumerator.
const SQUARE_SIDES: &[usize] = &[4, 6, 8, 10, 12, 64, 256, 1024, 2048];
/// Short sides of the `2n × n` grids handed to the stride counter.
const TALL_SIDES: &[usize] = &[8, 64, 512, 2048, 4096];
/// Simple-path enumeration is exponential; stay tiny.
const SIMPLE_SIDES: &[usize] = &[2, 3, 4, 5, 6];
/// Grids above this many cells are not re-counted with the dense table.
const DENSE_CHECK_CELLS: usize = 1 << 22;

const USAGE: &str = "\
usage: path_probe [--format csv|table] [--verify-limit N]

  --format        csv (default) or an aligned table
  --verify-limit  largest side enumerated to check the dense count (default 10, at least 1)
";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Table,
}

struct Options {
    format: Format,
    verify_limit: usize,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        format: Format::Csv,
        verify_limit: 10,
    };
    let mut rest = args;
    while let Some((flag, tail)) = rest.split_first() {
        rest = tail;
        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag.as_str(), None),
        };
        let mut value = || -> Result<String, String> {
            if let Some(value) = inline.clone() {
                return Ok(value);
            }
            let (next, tail) = rest
                .split_first()
                .ok_or_else(|| format!("{name} needs a value"))?;
            rest = tail;
            Ok(next.clone())
        };
        match name {
            "--format" => {
                options.format = match value()?.as_str() {
                    "csv" => Format::Csv,
                    "table" => Format::Table,
                    other => return Err(format!("--format: expected csv or table, got '{other}'")),
                }
            }
            "--verify-limit" => {
                options.verify_limit = match value()?.parse::<usize>() {
                    Ok(0) | Err(_) => return Err("--verify-limit must be at least 1".into()),
                    Ok(n) => n,
                }
            }
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }
    Ok(options)
}

#[derive(Clone, Copy)]
enum Engine {
    Dense,
    Stride,
    Monotone,
    Simple,
}

impl Engine {
    fn name(self) -> &'static str {
        match self {
            Engine::Dense => "dense",
            Engine::Stride => "stride",
            Engine::Monotone => "monotone",
            Engine::Simple => "simple",
        }
    }
}

/// How a row's count relates to another engine's count on the same grid.
enum Check {
    Skipped,
    Equals(Engine),
    AtLeast(Engine),
    Mismatch { against: Engine, expected: u64 },
}

impl Check {
    fn exact(against: Engine, expected: u64, got: u64) -> Self {
        if expected == got {
            Check::Equals(against)
        } else {
            Check::Mismatch { against, expected }
        }
    }

    fn describe(&self) -> String {
        match self {
            Check::Skipped => "-".to_string(),
            Check::Equals(e) => format!("= {}", e.name()),
            Check::AtLeast(e) => format!(">= {}", e.name()),
            Check::Mismatch { against, expected } => {
                format!("MISMATCH {} says {expected}", against.name())
            }
        }
    }

    fn failed(&self) -> bool {
        matches!(self, Check::Mismatch { .. })
    }
}

struct Row {
    engine: Engine,
    rows: usize,
    columns: usize,
    snakes: usize,
    transposed: bool,
    paths: u64,
    seconds: f64,
    rss_growth_kib: u64,
    check: Check,
}

impl Row {
    /// Paths accounted for per second of wall time.
    fn rate(&self) -> f64 {
        self.paths as f64 / self.seconds.max(1e-9)
    }
}

struct Recorder {
    sys: System,
    rows: Vec<Row>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            sys: System::new(),
            rows: Vec::new(),
        }
    }

    /// Time `count` on `grid`, then judge the result with `check`.
    fn record(
        &mut self,
        engine: Engine,
        grid: &Grid,
        count: impl FnOnce() -> u64,
        check: impl FnOnce(u64) -> Check,
    ) {
        let resident = resident_kib(&mut self.sys);
        let clock = Instant::now();
        let paths = count();
        let seconds = clock.elapsed().as_secs_f64();
        let rss_growth_kib = resident_kib(&mut self.sys).saturating_sub(resident);

        let row = Row {
            engine,
            rows: grid.rows(),
            columns: grid.columns(),
            snakes: grid.blocked_positions().count(),
            transposed: matches!(engine, Engine::Stride)
                && stride_axes(grid.rows(), grid.columns()).transposed,
            paths,
            seconds,
            rss_growth_kib,
            check: check(paths),
        };
        eprintln!(
            "  {:<8} {:>5}x{:<5} {:>22} paths  {:>9.4}s  {}",
            row.engine.name(),
            row.rows,
            row.columns,
            row.paths,
            row.seconds,
            row.check.describe()
        );
        self.rows.push(row);
    }

    fn last_paths(&self) -> u64 {
        self.rows.last().map_or(0, |row| row.paths)
    }
}

fn resident_kib(sys: &mut System) -> u64 {
    let Ok(pid) = get_current_pid() else {
        return 0;
    };
    sys.refresh_process_specifics(pid, ProcessRefreshKind::new());
    sys.process(pid).map_or(0, |process| process.memory() / 1024)
}

/// Roughly one snake in eleven cells, laid out on a fixed diagonal pattern,
/// never on the two corners.
fn snake_grid(rows: usize, columns: usize) -> Grid {
    let mut cells = vec![CellFlag::Open; rows * columns];
    for r in 0..rows {
        for c in 0..columns {
            let corner = (r == 0 && c == 0) || (r + 1 == rows && c + 1 == columns);
            if !corner && (r * 7 + c * 3) % 11 == 5 {
                cells[r * columns + c] = CellFlag::Blocked;
            }
        }
    }
    Grid::new(rows, columns, cells).unwrap_or_else(|err| panic!("snake grid {rows}x{columns}: {err}"))
}

fn run(options: &Options) -> Vec<Row> {
    let mut recorder = Recorder::new();

    eprintln!("dense table vs. monotone enumeration");
    for &side in SQUARE_SIDES {
        let grid = snake_grid(side, side);
        recorder.record(Engine::Dense, &grid, || count_paths(&grid), |_| Check::Skipped);
        if side <= options.verify_limit {
            let dense = recorder.last_paths();
            recorder.record(
                Engine::Monotone,
                &grid,
                || enumerate_monotone_paths(&grid, |_| {}),
                |got| Check::exact(Engine::Dense, dense, got),
            );
        }
    }

    eprintln!("stride counter on tall grids");
    for &side in TALL_SIDES {
        let grid = snake_grid(2 * side, side);
        let set = match BlockedSet::from_grid(&grid) {
            Ok(set) => set,
            Err(err) => {
                eprintln!("  skipping {}x{side}: {err}", 2 * side);
                continue;
            }
        };
        recorder.record(
            Engine::Stride,
            &grid,
            || count_paths_sparse(&set),
            |got| {
                if grid.len() <= DENSE_CHECK_CELLS {
                    Check::exact(Engine::Dense, count_paths(&grid), got)
                } else {
                    Check::Skipped
                }
            },
        );
    }

    eprintln!("simple paths");
    for &side in SIMPLE_SIDES {
        let grid = snake_grid(side, side);
        recorder.record(
            Engine::Simple,
            &grid,
            || enumerate_all_simple_paths(&grid, |_| {}),
            |got| {
                let monotone = count_paths(&grid);
                if got >= monotone {
                    Check::AtLeast(Engine::Dense)
                } else {
                    Check::Mismatch {
                        against: Engine::Dense,
                        expected: monotone,
                    }
                }
            },
        );
    }

    recorder.rows
}

fn print_rows(format: Format, rows: &[Row]) {
    match format {
        Format::Csv => {
            println!("engine,rows,columns,snakes,transposed,paths,seconds,paths_per_sec,rss_growth_kib,check");
            for row in rows {
                println!(
                    "{},{},{},{},{},{},{:.6},{:.0},{},{}",
                    row.engine.name(),
                    row.rows,
                    row.columns,
                    row.snakes,
                    row.transposed,
                    row.paths,
                    row.seconds,
                    row.rate(),
                    row.rss_growth_kib,
                    row.check.describe()
                );
            }
        }
        Format::Table => {
            println!(
                "{:<8} {:>11} {:>8} {:>5} {:>22} {:>10} {:>14} {:>8}  check",
                "engine", "shape", "snakes", "T", "paths", "seconds", "paths/s", "rss+KiB"
            );
            for row in rows {
                println!(
                    "{:<8} {:>11} {:>8} {:>5} {:>22} {:>10.4} {:>14.3e} {:>8}  {}",
                    row.engine.name(),
                    format!("{}x{}", row.rows, row.columns),
                    row.snakes,
                    if row.transposed { "yes" } else { "" },
                    row.paths,
                    row.seconds,
                    row.rate(),
                    row.rss_growth_kib,
                    row.check.describe()
                );
            }
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("path_probe: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let rows = run(&options);
    print_rows(options.format, &rows);

    let mismatches = rows.iter().filter(|row| row.check.failed()).count();
    if mismatches > 0 {
        eprintln!("{mismatches} engine result(s) disagree");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
