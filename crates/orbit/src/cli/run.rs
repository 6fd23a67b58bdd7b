use anyhow::Result;
use clap::{Args, ValueEnum};
use orbit::{
    config::Config,
    driver::{NativeDriver, Sample, run_ticks},
    host::HostState,
    plugin::{self, MotionPlugin},
    registers::RegisterFile,
};
use orbit_core::fixed::from_fixed;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RunArgs {
    /// Path to the configuration file (TOML or JSON).
    pub config: PathBuf,

    /// Number of ticks to run, overriding `run.ticks`.
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Run the engine in-process even if a plugin is configured.
    #[arg(long)]
    pub native: bool,

    /// Output format for samples.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    /// `tick x y` in real units
    Text,
    /// One JSON object per line, fixed-point values
    Json,
}

impl RunArgs {
    pub fn run(&self) -> Result<()> {
        let mut config = Config::from_file(&self.config)?;
        if let Some(ticks) = self.ticks {
            config.run.ticks = ticks;
        }
        config.validate()?;

        tracing::info!("Running orbit with config: {}", self.config.display());

        let registers = RegisterFile::with_position(config.start.x, config.start.y);
        let host = HostState::new(registers, config.run.seed);

        let samples = match config.plugin.as_deref().filter(|_| !self.native) {
            Some(path) => {
                let engine = plugin::create_engine()?;
                let linker = plugin::create_plugin_linker(&engine)?;
                let mut driver =
                    MotionPlugin::load(&engine, &linker, Path::new(path), config.motion, host)?;
                let samples = run_ticks(&mut driver, config.run.ticks)?;
                driver.unload()?;
                samples
            }
            None => {
                let mut driver = NativeDriver::new(config.motion, host);
                run_ticks(&mut driver, config.run.ticks)?
            }
        };

        for sample in &samples {
            self.print(sample)?;
        }

        Ok(())
    }

    fn print(&self, sample: &Sample) -> Result<()> {
        match self.format {
            Format::Text => println!(
                "{} {:.4} {:.4}",
                sample.tick,
                from_fixed(sample.x),
                from_fixed(sample.y)
            ),
            Format::Json => println!("{}", serde_json::to_string(sample)?),
        }
        Ok(())
    }
}
