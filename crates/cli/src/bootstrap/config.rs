use menuvault_domain::{CliOverrides, Config};

/// Loads and validates the configuration. Runs before logging is
/// initialised, so the summary is logged from `init_logging`.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
