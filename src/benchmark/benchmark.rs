use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SimResult;
use crate::simulation::engine::Chamber;
use crate::simulation::laser::Laser;

/// Helper to build a seeded full-chamber run with `pairs` D/T pairs
fn make_chamber(pairs: usize, seed: u64) -> SimResult<Chamber> {
    let mut chamber = Chamber::new(&Laser::default(), [1.0, 1.0, 1.0], 1, pairs)?;
    let mut rng = StdRng::seed_from_u64(seed);
    chamber.create_particles(&mut rng)?;
    Ok(chamber)
}

/// Time the O(n^2) tick for a few particle counts
pub fn bench_step() -> SimResult<()> {
    let pairs = [10, 20, 40, 80, 160, 320];
    let steps = 5; // ticks per size

    for n in pairs {
        let mut chamber = make_chamber(n, 42)?;

        // Warm up
        chamber.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            chamber.step();
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {:5}, step = {:8.6} s, reactions = {}",
            chamber.particles().len(),
            per_step,
            chamber.reaction_count()
        );
    }
    Ok(())
}

/// Per-tick cost for a range of particle counts.
/// Paste output directly into excel to graph
pub fn bench_step_curve() -> SimResult<()> {
    println!("N,step_ms");

    for pairs in (25..=500).step_by(25) {
        // Small n: average over a few steps to smooth noise
        let steps = if pairs <= 100 { 10 } else { 2 };
        let mut chamber = make_chamber(pairs, 42)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            chamber.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", 2 * pairs, ms);
    }
    Ok(())
}
