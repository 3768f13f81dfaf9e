//! Performance benchmark comparing the serial and parallel sweeps

use std::time::Instant;

use duolife::domain::Grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are positive");
    let mut rng = StdRng::seed_from_u64(0x5EED);
    grid.randomize(&mut rng);
    grid
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_generation();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_generation_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    println!("=== Two-Color Life Performance Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>10}",
        "Size", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_parallel(2000, iterations);
    println!(
        "Parallel sweep:   {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
