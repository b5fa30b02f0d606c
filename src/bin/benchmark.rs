//! Throughput comparison of the serial and parallel stepping strategies

use std::time::Instant;

use life_board::{Algorithm, Grid};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut grid = match Grid::create(size, size) {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("{err}");
            return f64::NAN;
        }
    };
    if let Err(err) = grid.randomize(0.3) {
        log::error!("{err}");
        return f64::NAN;
    }

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.step(&mut grid);
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    log::debug!("{} {size}x{size}: population {}", algorithm.name(), grid.population());
    elapsed
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
