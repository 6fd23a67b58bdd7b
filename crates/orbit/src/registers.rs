/// Host-owned register file
///
/// Registers hold fixed-point integers keyed by small ids. Ids the host has
/// never written read as zero.
use orbit_core::{FX, FY, Registers};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RegisterFile {
    values: HashMap<i32, i32>,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register file with the object placed at `(x, y)`
    pub fn with_position(x: i32, y: i32) -> Self {
        let mut file = Self::new();
        file.set(FX, x);
        file.set(FY, y);
        file
    }

    pub fn get(&self, id: i32) -> i32 {
        self.values.get(&id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: i32, value: i32) {
        self.values.insert(id, value);
    }

    /// Current `FX`/`FY` values
    pub fn position(&self) -> (i32, i32) {
        (self.get(FX), self.get(FY))
    }
}

impl Registers for RegisterFile {
    fn get_register(&mut self, id: i32) -> i32 {
        if !self.values.contains_key(&id) {
            tracing::trace!(id, "read of unset register");
        }
        self.get(id)
    }

    fn set_register(&mut self, id: i32, value: i32) {
        tracing::trace!(id, value, "set register");
        self.set(id, value);
    }
}
