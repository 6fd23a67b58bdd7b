use anyhow::Result;
use clap::Args;
use orbit::{config::Config, plugin};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the configuration file (TOML or JSON).
    pub config: PathBuf,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config)?;
        config.validate()?;

        match &config.plugin {
            Some(path) => {
                let engine = plugin::create_engine()?;
                plugin::compile_plugin(&engine, Path::new(path))?;
                println!("{}: ok (plugin {})", self.config.display(), path);
            }
            None => println!("{}: ok (native engine)", self.config.display()),
        }

        Ok(())
    }
}
