/// Integration tests for loading configuration files from disk
use anyhow::Result;
use orbit::config::Config;
use std::fs;

const TOML: &str = r#"
plugin = "plugins/orbit_plugin.wasm"

[motion]
radius = 50000
speed = 10000

[start]
x = 1000000
y = 800000
"#;

#[test]
fn test_relative_plugin_path_follows_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("orbit.toml");
    fs::write(&path, TOML)?;

    let config = Config::from_file(&path)?;
    let plugin = config.plugin.expect("plugin path");
    assert_eq!(
        plugin,
        dir.path().join("plugins/orbit_plugin.wasm").to_string_lossy()
    );
    assert_eq!(config.start.x, 1000000);

    Ok(())
}

#[test]
fn test_absolute_plugin_path_is_kept() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let plugin = dir.path().join("orbit_plugin.wasm");
    let path = dir.path().join("orbit.json");
    let json = serde_json::json!({
        "plugin": plugin,
        "motion": { "radius": 10000, "speed": 10000 },
    });
    fs::write(&path, json.to_string())?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.plugin.as_deref(), Some(&*plugin.to_string_lossy()));

    Ok(())
}

#[test]
fn test_unknown_extension_falls_back_to_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("orbit.conf");
    fs::write(&path, r#"{ "motion": { "radius": 10000, "speed": 20000 } }"#)?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.motion.speed, 20000);
    assert_eq!(config.plugin, None);

    Ok(())
}

#[test]
fn test_missing_file() {
    let err = Config::from_file("/nonexistent/orbit.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_empty_plugin_path_fails_validation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("orbit.toml");
    fs::write(&path, "plugin = \"\"\n\n[motion]\nradius = 10000\nspeed = 10000\n")?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.plugin.as_deref(), Some(""));

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("plugin cannot be empty"));

    Ok(())
}
