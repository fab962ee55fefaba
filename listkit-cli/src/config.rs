use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listkit_core::config::CONFIG_TEMPLATE;
use listkit_core::ListkitConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a commented config template
    Init(InitArgs),
    /// Print the effective configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

/// `cfg` is the load result; only `show` needs a parsed config
pub fn run_config(args: ConfigArgs, cfg: Result<ListkitConfig>) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(&cfg?),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = ListkitConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .context(format!("Failed to write config file: {:?}", config_path))?;

    println!("Created config at: {:?}", config_path);
    Ok(())
}

fn run_show(cfg: &ListkitConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(cfg).context("Failed to serialize config to TOML")?;
    print!("{}", toml_str);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", ListkitConfig::config_path().display());
    Ok(())
}
