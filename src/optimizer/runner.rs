use super::swaps::SwapMode;
use super::{HillClimber, Solution};
use crate::config::SolverParams;
use crate::error::CfResult;
use crate::language::LanguageModel;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Runs the configured number of independent climbs in parallel and
/// keeps the best. Restarts share nothing mutable; each gets its own
/// matrix, key, and RNG, derived from `seed + attempt` so a fixed base
/// seed reproduces the whole batch.
pub fn run_restarts(
    model: &LanguageModel,
    ciphertext: &str,
    params: &SolverParams,
) -> CfResult<Solution> {
    let restarts = params.restarts.max(1);

    if params.mode == SwapMode::Deterministic && restarts > 1 {
        // Every deterministic climb walks the same 325 pairs.
        warn!("deterministic mode ignores extra restarts; running once");
        return climb(model, ciphertext, params, 0);
    }

    let solutions: CfResult<Vec<Solution>> = (0..restarts)
        .into_par_iter()
        .map(|attempt| climb(model, ciphertext, params, attempt))
        .collect();

    let best = solutions?
        .into_iter()
        .min_by(|a, b| a.score.partial_cmp(&b.score).unwrap())
        .expect("at least one restart runs");

    debug!(score = best.score, restarts, "restart batch finished");
    Ok(best)
}

fn climb(
    model: &LanguageModel,
    ciphertext: &str,
    params: &SolverParams,
    attempt: usize,
) -> CfResult<Solution> {
    HillClimber::new(model, params.mode)
        .with_max_stall(params.max_stall)
        .with_seed(params.seed.map(|s| s + attempt as u64))
        .solve(ciphertext)
}
