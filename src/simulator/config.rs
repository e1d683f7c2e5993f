//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated campaigns
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Town battles fought back to back in each campaign
    pub battles_per_run: u32,

    /// Player turns before the bot gives up and flees
    pub max_turns_per_battle: u32,

    /// Hp fraction below which the bot drinks a health potion
    pub heal_threshold: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            battles_per_run: 20,
            max_turns_per_battle: 100,
            heal_threshold: 0.3,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a smoke check of roster balance
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            battles_per_run: 10,
            ..Default::default()
        }
    }

    /// Long campaigns to look at level pacing
    pub fn progression_test() -> Self {
        Self {
            num_runs: 50,
            battles_per_run: 200,
            ..Default::default()
        }
    }
}
