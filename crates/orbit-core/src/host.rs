//! Capabilities the engine borrows from its host.
//!
//! The host owns every register and the only source of randomness. The
//! engine reaches them through these traits for the duration of a single
//! call and never keeps a reference.

/// Register holding the object's X position
pub const FX: i32 = 0x000D;

/// Register holding the object's Y position
pub const FY: i32 = 0x000E;

/// Access to the host's register file.
///
/// Register values are fixed-point integers, see [`crate::fixed`].
pub trait Registers {
    fn get_register(&mut self, id: i32) -> i32;

    fn set_register(&mut self, id: i32, value: i32);
}

/// Uniform random integers supplied by the host.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`
    fn random_in_range(&mut self, bound: i32) -> i32;
}
