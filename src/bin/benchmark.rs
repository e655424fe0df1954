//! Generation stepping benchmark over random grids

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use life_canvas::domain::{Grid, rules};

fn benchmark_next(size: usize, iterations: u32, rng: &mut StdRng) -> (f64, usize) {
    let mut grid = match Grid::random(size, size, 0.3, rng) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("skipping {}x{}: {}", size, size, err);
            return (0.0, 0);
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        grid = rules::next(&grid);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, grid.count_alive())
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5EED);

    println!("{:>10} {:>12} {:>16} {:>12}", "Size", "ms/gen", "Mcells/sec", "Alive");
    println!("{:-<54}", "");

    for size in sizes {
        let (ms, alive) = benchmark_next(size, iterations, &mut rng);
        let cells = (size * size) as f64;
        let throughput = if ms > 0.0 { cells / (ms / 1000.0) / 1_000_000.0 } else { 0.0 };

        println!(
            "{:>10} {:>12.3} {:>16.1} {:>12}",
            format!("{}x{}", size, size),
            ms,
            throughput,
            alive
        );
    }
}
