use crate::optimizer::swaps::SwapMode;
use crate::optimizer::DEFAULT_MAX_STALL;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SolverParams {
    /// Swap generator driving the climb.
    #[arg(long, value_enum, default_value_t = SwapMode::Random)]
    pub mode: SwapMode,

    /// Consecutive non-improving swaps before a climb stops.
    #[arg(long, default_value_t = DEFAULT_MAX_STALL)]
    pub max_stall: usize,

    /// Independent random-mode climbs; the best result wins.
    #[arg(short = 'a', long, default_value_t = 1)]
    pub restarts: usize,

    /// Base RNG seed for reproducible random-mode runs.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            mode: SwapMode::Random,
            max_stall: DEFAULT_MAX_STALL,
            restarts: 1,
            seed: None,
        }
    }
}
