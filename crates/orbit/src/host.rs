/// Host capabilities handed to a motion engine
///
/// Pairs the register file with a seedable random source. Both the native
/// driver and the plugin store own one of these.
use crate::registers::RegisterFile;
use orbit_core::RandomSource;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Debug)]
pub struct HostState {
    pub registers: RegisterFile,
    pub random: HostRandom,
}

impl HostState {
    pub fn new(registers: RegisterFile, seed: Option<u64>) -> Self {
        Self {
            registers,
            random: HostRandom::new(seed),
        }
    }
}

/// Uniform random integers for guests without their own entropy
#[derive(Debug)]
pub struct HostRandom {
    rng: StdRng,
}

impl HostRandom {
    /// Seeded from the OS when `seed` is absent
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self { rng }
    }
}

impl RandomSource for HostRandom {
    fn random_in_range(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            tracing::warn!(bound, "random_in_range called with an empty range");
            return 0;
        }

        let value = self.rng.random_range(0..bound);
        tracing::debug!(bound, value, "random_in_range");
        value
    }
}
