use ferrous_dig_domain::{CliOverrides, Config};

/// Loads the configuration and rejects values the lookup cannot run with.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
