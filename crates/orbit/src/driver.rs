// Run loop shared by the native and plugin drivers

use crate::host::HostState;
use anyhow::{Result, bail};
use orbit_core::{MotionEngine, MotionParams, STATUS_OK};
use serde::{Deserialize, Serialize};

/// Something that advances an initialized engine one frame at a time
pub trait MotionDriver {
    /// Run one tick, returning the engine's status code
    fn tick(&mut self) -> Result<i32>;

    /// Current fixed-point `FX`/`FY` register values
    fn position(&self) -> (i32, i32);
}

/// Runs the engine in-process against a [`HostState`]
pub struct NativeDriver {
    engine: MotionEngine,
    host: HostState,
}

impl NativeDriver {
    pub fn new(params: MotionParams, mut host: HostState) -> Self {
        let engine = MotionEngine::initialize(params, &mut host.registers, &mut host.random);

        tracing::info!(?params, "Initialized native engine");
        Self { engine, host }
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }
}

impl MotionDriver for NativeDriver {
    fn tick(&mut self) -> Result<i32> {
        Ok(self.engine.tick(&mut self.host.registers))
    }

    fn position(&self) -> (i32, i32) {
        self.host.registers.position()
    }
}

/// Position published after a tick, in fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub tick: u32,
    pub x: i32,
    pub y: i32,
}

/// Tick `driver` `ticks` times, collecting the position after each one
pub fn run_ticks(driver: &mut dyn MotionDriver, ticks: u32) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    for tick in 1..=ticks {
        let status = driver.tick()?;
        if status != STATUS_OK {
            bail!("tick {} returned status {}", tick, status);
        }

        let (x, y) = driver.position();
        tracing::debug!(tick, x, y, "tick");
        samples.push(Sample { tick, x, y });
    }

    Ok(samples)
}
