//! Concurrency helper (§5): running several independent [`crate::driver::optimize`]
//! calls in parallel. This is the only module in the crate allowed to depend
//! on `rayon` — every other module is pure, sequential, single-threaded code.

use rayon::prelude::*;

use crate::config::CuttingConfig;
use crate::error::{OptimizationError, Result};
use crate::result::OptimizationResult;

/// Runs [`crate::driver::optimize`] over every config in `configs`, one
/// worker thread per item via rayon's global pool. Each run is fully
/// independent — there is no shared panel state across configs, so this is
/// just a parallel map, not a distinct algorithm (§5).
pub fn pack_many(configs: &[CuttingConfig]) -> Vec<OptimizationResult> {
    configs.par_iter().map(crate::driver::optimize).collect()
}

/// Same as [`pack_many`], but bounded to a caller-chosen thread count rather
/// than rayon's default (usually the number of logical CPUs). Returns an
/// error if `max_threads` is zero, since a zero-size pool can never run
/// anything.
pub fn pack_many_with_threads(configs: &[CuttingConfig], max_threads: usize) -> Result<Vec<OptimizationResult>> {
    if max_threads == 0 {
        return Err(OptimizationError::InvalidThreadCount { max_threads: 0 });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_threads)
        .build()
        .map_err(|_| OptimizationError::InvalidThreadCount { max_threads })?;

    Ok(pool.install(|| configs.par_iter().map(crate::driver::optimize).collect()))
}
