use anyhow::Result;
use xshell::{Shell, cmd};

/// Target the plugin component is compiled for
pub const PLUGIN_TARGET: &str = "wasm32-wasip2";

/// Build the plugin as a wasm component, adding the target if it is missing
pub fn build_plugin(sh: &Shell, profile: &str) -> Result<()> {
    let installed = cmd!(sh, "rustup target list --installed").quiet().read()?;
    if !installed.lines().any(|line| line.trim() == PLUGIN_TARGET) {
        eprintln!("Installing {PLUGIN_TARGET} target...");
        cmd!(sh, "rustup target add {PLUGIN_TARGET}").run()?;
    }

    eprintln!("Building orbit-plugin for {PLUGIN_TARGET}...");
    cmd!(
        sh,
        "cargo build -p orbit-plugin --target {PLUGIN_TARGET} --profile {profile}"
    )
    .run()?;
    Ok(())
}

/// Run rustfmt check (does not modify files)
pub fn run_fmt_check(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo fmt check...");
    cmd!(sh, "cargo fmt --all -- --check").run()?;
    Ok(())
}

/// Apply rustfmt to all files
pub fn run_fmt(sh: &Shell) -> Result<()> {
    eprintln!("Applying cargo fmt...");
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

/// Run clippy with all warnings treated as errors
pub fn run_clippy(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo clippy...");
    cmd!(
        sh,
        "cargo clippy --all-features --all-targets --workspace -- -D warnings"
    )
    .run()?;
    Ok(())
}
