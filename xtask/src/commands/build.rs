use anyhow::Result;
use clap::Args;
use xshell::{Shell, cmd};

use super::common;

#[derive(Args)]
pub struct Build {
    #[arg(long, default_value = "dev")]
    profile: String,
}

impl Build {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        let profile = &self.profile;
        cmd!(sh, "cargo build -p orbit --profile {profile}").run()?;
        common::build_plugin(sh, profile)?;
        Ok(())
    }
}
