// Orbit guest plugin
//
// Exposes a motion engine as a component resource. The host creates one
// `engine` per object and calls `run` once per frame; register access and
// randomness are imported from the host.

wit_bindgen::generate!({
    world: "plugin",
    path: "../orbit/wit",
});

use exports::orbit::plugin::motion::{Engine, Guest, GuestEngine};
use orbit::plugin::{random, registers};
use orbit_core::{MotionEngine, MotionParams, RandomSource, Registers};
use std::cell::RefCell;

struct Component;

export!(Component);

impl Guest for Component {
    type Engine = EngineResource;
}

/// Register and random capabilities backed by the host imports
struct HostImports;

impl Registers for HostImports {
    fn get_register(&mut self, id: i32) -> i32 {
        registers::get_register(id)
    }

    fn set_register(&mut self, id: i32, value: i32) {
        registers::set_register(id, value)
    }
}

impl RandomSource for HostImports {
    fn random_in_range(&mut self, bound: i32) -> i32 {
        random::random_in_range(bound)
    }
}

struct EngineResource {
    engine: RefCell<MotionEngine>,
}

impl GuestEngine for EngineResource {
    fn initialize(radius: i32, speed: i32, angle: i32, radius2: i32, angle2: i32) -> Engine {
        let params = MotionParams {
            radius,
            speed,
            angle,
            radius2,
            angle2,
        };
        let engine = MotionEngine::initialize(params, &mut HostImports, &mut HostImports);

        Engine::new(EngineResource {
            engine: RefCell::new(engine),
        })
    }

    fn run(&self) -> i32 {
        self.engine.borrow_mut().tick(&mut HostImports)
    }
}
