use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;
pub mod shell;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config)?;

    // 4. Convertir
    shell::run(&cli, &config)
}

/// Load `--config` if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<pa_core::config::RenderConfig> {
    if cli.config.exists() {
        pa_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(pa_core::config::RenderConfig::default())
    }
}
