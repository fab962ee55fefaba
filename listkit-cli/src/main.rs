//! listkit CLI - run the list pipeline over sample datasets
//!
//! Entry point for the `listkit` command-line tool, which provides:
//! - Search, filter and sort over the sample datasets (`list`)
//! - Listing the filter and sort options a dataset offers (`options`)
//! - Resizable panel width state with keyed persistence (`panel`)
//! - Configuration management (`config`)

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use listkit_core::ListkitConfig;
use tracing::debug;

mod commands;
mod config;
mod tracing_setup;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "listkit",
    author,
    version,
    about = "Search, filter and sort in-memory lists",
    long_about = "Run the list pipeline (filter, then search, then sort) over sample datasets, \
                  inspect their options, and manage resizable panel widths."
)]
struct Cli {
    /// Suppress headers and hints (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a dataset after search, filter and sort
    List(commands::list::ListArgs),
    /// Show the search, filter and sort options of a dataset
    Options(commands::list::OptionsArgs),
    /// Resizable panel widths (list, show, drag, set, reset)
    Panel(commands::panel::PanelArgs),
    /// Manage listkit configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file is only fatal for commands that read it, so
    // `config init --force` can still repair it
    let cfg = ListkitConfig::load();
    let default_level = cfg
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        default_level,
    })
    .ok();
    debug!(
        config = ?ListkitConfig::config_path(),
        ok = cfg.is_ok(),
        "loaded configuration"
    );

    ui::init_quiet_mode(cli.quiet);

    match cli.command {
        Commands::List(args) => commands::list::run_list(args, &cfg?)?,
        Commands::Options(args) => commands::list::run_options(args, &cfg?)?,
        Commands::Panel(args) => commands::panel::run_panel(args, &cfg?)?,
        Commands::Config(args) => config::run_config(args, cfg)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
