mod commands;
mod render;
mod session;
mod shell;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use apptcal_core::config::SchedulerConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

/// Used until the config file says otherwise
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "apptcal")]
#[command(about = "Book doctors and patients into appointments and browse them by month")]
struct Cli {
    /// Use this config file instead of ~/.config/apptcal/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,
    /// List the doctor directory
    Doctors,
    /// List the patient directory
    Patients,
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write a commented default config file
    Init,
}

/// `APPTCAL_LOG` wins over the config file's `log_filter`.
fn filter_directives(from_env: Option<String>, configured: Option<&str>) -> String {
    from_env
        .filter(|directives| !directives.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is up before the config loads, then switched to its filter
    let from_env = std::env::var("APPTCAL_LOG").ok();
    let (filter, filter_handle) = reload::Layer::new(EnvFilter::new(filter_directives(from_env.clone(), None)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = match cli.config {
        Some(path) => path,
        None => SchedulerConfig::config_path()?,
    };
    let config = SchedulerConfig::load_from(&config_path)?;
    filter_handle.reload(EnvFilter::new(filter_directives(from_env, Some(&config.log_filter))))?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run(&config),
        Commands::Doctors => {
            commands::directory::doctors(&config.doctor_directory());
            Ok(())
        }
        Commands::Patients => {
            commands::directory::patients(&config.patient_directory());
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init => commands::config::init(&config_path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_wins_over_config() {
        assert_eq!(filter_directives(Some("debug".to_string()), Some("info")), "debug");
        assert_eq!(filter_directives(None, Some("info")), "info");
        assert_eq!(filter_directives(Some("  ".to_string()), Some("info")), "info");
        assert_eq!(filter_directives(None, None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn views_are_shell_commands_only() {
        for view in ["month", "day", "upcoming", "search", "book", "edit"] {
            assert!(Cli::try_parse_from(["apptcal", view]).is_err(), "{} parsed at top level", view);
        }

        assert!(Cli::try_parse_from(["apptcal"]).unwrap().command.is_none());
        assert!(matches!(Cli::try_parse_from(["apptcal", "shell"]).unwrap().command, Some(Commands::Shell)));
        assert!(matches!(Cli::try_parse_from(["apptcal", "doctors"]).unwrap().command, Some(Commands::Doctors)));
        assert!(matches!(
            Cli::try_parse_from(["apptcal", "--config", "/tmp/a.toml", "config", "path"]).unwrap().command,
            Some(Commands::Config { action: ConfigAction::Path })
        ));
    }
}
