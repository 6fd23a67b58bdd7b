/// Plugin loading and execution
///
/// This module compiles the guest motion component, links the register and
/// random capabilities into it, and drives one `engine` resource per loaded
/// plugin.
use anyhow::{Context, Result};
use orbit_core::{MotionParams, RandomSource, Registers};
use std::path::Path;
use wasmtime::{
    Config as WasmtimeConfig, Engine, Store,
    component::{Component, HasSelf, Linker, ResourceAny, ResourceTable},
};
use wasmtime_wasi::{WasiCtx, WasiCtxBuilder, WasiCtxView, WasiView};

use crate::{driver::MotionDriver, host::HostState};

// Generate WIT bindings using wasmtime's bindgen! macro
wasmtime::component::bindgen!({
    path: "wit",
    world: "plugin",
});

/// Create a wasmtime engine configured for plugin components
pub fn create_engine() -> Result<Engine> {
    let mut config = WasmtimeConfig::new();
    config.wasm_component_model(true);
    config.async_support(false);

    Engine::new(&config).context("failed to create wasmtime engine")
}

/// State for plugin WASM instances
pub struct PluginState {
    wasi: WasiCtx,
    table: ResourceTable,
    host: HostState,
}

impl PluginState {
    pub fn new(host: HostState) -> Self {
        let wasi = WasiCtxBuilder::new().inherit_stdio().build();
        let table = ResourceTable::new();

        Self { wasi, table, host }
    }
}

impl WasiView for PluginState {
    fn ctx(&mut self) -> WasiCtxView<'_> {
        WasiCtxView {
            ctx: &mut self.wasi,
            table: &mut self.table,
        }
    }
}

// Implement the host side of the register interface
impl self::orbit::plugin::registers::Host for PluginState {
    fn get_register(&mut self, id: i32) -> i32 {
        self.host.registers.get_register(id)
    }

    fn set_register(&mut self, id: i32, value: i32) {
        self.host.registers.set_register(id, value)
    }
}

impl self::orbit::plugin::random::Host for PluginState {
    fn random_in_range(&mut self, bound: i32) -> i32 {
        self.host.random.random_in_range(bound)
    }
}

/// Create a linker for plugins with WASI and the Orbit host interfaces
pub fn create_plugin_linker(engine: &Engine) -> Result<Linker<PluginState>> {
    let mut linker = Linker::new(engine);

    wasmtime_wasi::p2::add_to_linker_sync(&mut linker)
        .context("failed to add WASI to plugin linker")?;

    Plugin::add_to_linker::<_, HasSelf<_>>(&mut linker, |state| state)
        .context("failed to add Orbit interfaces to plugin linker")?;

    Ok(linker)
}

/// Compile a plugin component without instantiating it
pub fn compile_plugin(engine: &Engine, path: &Path) -> Result<Component> {
    let wasm_bytes = std::fs::read(path)
        .with_context(|| format!("failed to read plugin file {}", path.display()))?;

    Component::from_binary(engine, &wasm_bytes)
        .with_context(|| format!("failed to compile plugin component {}", path.display()))
}

/// A loaded plugin driving a single engine resource
pub struct MotionPlugin {
    store: Store<PluginState>,
    bindings: Plugin,
    handle: ResourceAny,
}

impl MotionPlugin {
    /// Instantiate the component at `path` and initialize its engine against
    /// the registers in `host`
    pub fn load(
        engine: &Engine,
        linker: &Linker<PluginState>,
        path: &Path,
        params: MotionParams,
        host: HostState,
    ) -> Result<Self> {
        tracing::info!("Loading plugin from: {}", path.display());

        let component = compile_plugin(engine, path)?;
        let mut store = Store::new(engine, PluginState::new(host));

        let bindings = Plugin::instantiate(&mut store, &component, linker)
            .with_context(|| format!("failed to instantiate plugin {}", path.display()))?;

        let handle = bindings
            .orbit_plugin_motion()
            .engine()
            .call_initialize(
                &mut store,
                params.radius,
                params.speed,
                params.angle,
                params.radius2,
                params.angle2,
            )
            .context("plugin initialize trapped")?;

        tracing::info!(?params, "Initialized plugin engine");

        Ok(Self {
            store,
            bindings,
            handle,
        })
    }

    /// Release the engine resource inside the guest
    pub fn unload(mut self) -> Result<()> {
        self.handle
            .resource_drop(&mut self.store)
            .context("failed to drop plugin engine")
    }
}

impl MotionDriver for MotionPlugin {
    fn tick(&mut self) -> Result<i32> {
        self.bindings
            .orbit_plugin_motion()
            .engine()
            .call_run(&mut self.store, self.handle)
            .context("plugin run trapped")
    }

    fn position(&self) -> (i32, i32) {
        self.store.data().host.registers.position()
    }
}
