//! Reference host for the Orbit motion plugin.
//!
//! Owns the register file and random source a guest engine runs against,
//! loads the guest as a WebAssembly component, and drives it tick by tick.

pub mod config;
pub mod driver;
pub mod host;
pub mod plugin;
pub mod registers;
