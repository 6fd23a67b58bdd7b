//! Host doubles for engine tests.

use crate::host::{FX, FY, RandomSource, Registers};
use std::collections::HashMap;

/// Register file that records every write
#[derive(Debug, Default)]
pub struct MockHost {
    pub registers: HashMap<i32, i32>,
    pub writes: Vec<(i32, i32)>,
}

impl MockHost {
    /// Host with the object already placed at `(x, y)`
    pub fn at(x: i32, y: i32) -> Self {
        let mut host = Self::default();
        host.registers.insert(FX, x);
        host.registers.insert(FY, y);
        host
    }

    pub fn position(&self) -> (i32, i32) {
        (
            self.registers.get(&FX).copied().unwrap_or_default(),
            self.registers.get(&FY).copied().unwrap_or_default(),
        )
    }
}

impl Registers for MockHost {
    fn get_register(&mut self, id: i32) -> i32 {
        self.registers.get(&id).copied().unwrap_or_default()
    }

    fn set_register(&mut self, id: i32, value: i32) {
        self.registers.insert(id, value);
        self.writes.push((id, value));
    }
}

/// Random source that always returns the same value and records each bound
#[derive(Debug, Default)]
pub struct MockRandom {
    pub value: i32,
    pub calls: Vec<i32>,
}

impl MockRandom {
    pub fn returning(value: i32) -> Self {
        Self {
            value,
            calls: Vec::new(),
        }
    }
}

impl RandomSource for MockRandom {
    fn random_in_range(&mut self, bound: i32) -> i32 {
        self.calls.push(bound);
        self.value
    }
}
