//! Motion engine shared by the Orbit guest plugin and host.
//!
//! This crate intentionally avoids any WebAssembly- or host-specific
//! dependencies. All host state is reached through the capabilities in
//! [`host`].

pub mod fixed;
pub mod host;
pub mod motion;

pub use host::{FX, FY, RandomSource, Registers};
pub use motion::{MotionEngine, MotionParams, MotionState, Point, STATUS_OK};

#[cfg(test)]
mod testing;
