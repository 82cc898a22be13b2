use std::time::Instant;

use mazewright::{Generator, generate_maze};

/// Iteration count and side length, defaulting to 10 mazes of 255x255.
fn parse_args<I: Iterator<Item = String>>(mut args: I) -> (usize, usize) {
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let size = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(u8::MAX as usize);
    (num_iters, size)
}

/// Generate a square maze (255x255 by default) with every generator and report timings.
/// Usage: `profile [iterations] [size]`
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    // Skip executable name
    let (num_iters, size) = parse_args(std::env::args().skip(1));

    for generator in Generator::ALL {
        let started = Instant::now();
        for i in 0..num_iters {
            let grid = generate_maze(size, size, generator, Some(i as u64))?;
            debug_assert!(grid.is_perfect());
        }
        let elapsed = started.elapsed();
        tracing::info!(
            "[profile] {}: {} x {}x{} in {:?} ({:?} per maze)",
            generator,
            num_iters,
            size,
            size,
            elapsed,
            elapsed / num_iters.max(1) as u32
        );
    }
    Ok(())
}
