#![cfg(test)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;
use tracing::Level;

/// Routes `tracing` output through the test harness so it only shows for failing tests.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn scratch_dir() -> TempDir {
    init_logging();
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("failed to create scratch directory: {e}"),
    }
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
