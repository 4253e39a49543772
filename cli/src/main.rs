//! Command-line front end for the watering control panel.
//!
//! Invokes the domain operations and renders their results; all input
//! validation happens here, before the client is ever constructed. The
//! connection profile comes from the environment at startup
//! (`PLANTCTL_API_URL`, `PLANTCTL_API_KEY`, `PLANTCTL_TIMEOUT_MS`).

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Result};
use tracing_subscriber::EnvFilter;

use plantctl_core::{Api, ClientConfig, SettingsStore, TimerSeconds};

#[derive(Parser)]
#[command(name = "plantctl", version, about = "Control panel for the home watering service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether the remote service is healthy
    Health,
    /// Run the pump for the given number of seconds
    Water {
        /// Watering duration, 1 to 60 seconds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
        seconds: u32,
    },
    /// Show or change local preferences
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current (merged) preferences
    Show,
    /// Update one or more preferences
    Set {
        /// Enable or disable notifications
        #[arg(long)]
        notifications: Option<bool>,
        /// Enable or disable automatic refresh
        #[arg(long)]
        auto_refresh: Option<bool>,
        /// Seconds between automatic refreshes (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        interval: Option<u32>,
    },
    /// Restore all preferences to their defaults
    Reset,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Health => health(),
        Command::Water { seconds } => water(seconds),
        Command::Settings { action } => settings(&SettingsStore::default_location()?, action),
    }
}

fn health() -> Result<()> {
    let config = ClientConfig::from_env()?;
    let api = Api::new(&config);
    match api.health_check() {
        Ok(result) if result.healthy => {
            println!("service is healthy");
            Ok(())
        }
        Ok(result) => {
            println!("payload: {}", result.raw);
            bail!(result
                .message
                .unwrap_or_else(|| "service is unhealthy".to_string()))
        }
        Err(failure) => bail!(failure.message),
    }
}

fn water(seconds: u32) -> Result<()> {
    let timer = TimerSeconds::new(seconds)?;
    let config = ClientConfig::from_env()?;
    let api = Api::new(&config);
    match api.water_plants(timer) {
        Ok(ack) => {
            println!("{}", ack.message);
            println!("device: {}", ack.device_name);
            println!("duration: {} seconds", ack.timer_seconds);
            Ok(())
        }
        Err(failure) => bail!(failure.message),
    }
}

fn settings(store: &SettingsStore, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {
            print_settings(&store.load()?);
        }
        SettingsAction::Set {
            notifications,
            auto_refresh,
            interval,
        } => {
            let mut settings = store.load()?;
            if let Some(value) = notifications {
                settings.enable_notifications = value;
            }
            if let Some(value) = auto_refresh {
                settings.auto_refresh = value;
            }
            if let Some(value) = interval {
                settings.refresh_interval_seconds = value;
            }
            store.save(&settings)?;
            print_settings(&settings);
        }
        SettingsAction::Reset => {
            let settings = plantctl_core::Settings::default();
            store.save(&settings)?;
            print_settings(&settings);
        }
    }
    Ok(())
}

fn print_settings(settings: &plantctl_core::Settings) {
    println!("notifications:    {}", settings.enable_notifications);
    println!("auto refresh:     {}", settings.auto_refresh);
    println!("refresh interval: {} seconds", settings.refresh_interval_seconds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn settings_reset_parses() {
        assert!(Cli::try_parse_from(["plantctl", "settings", "reset"]).is_ok());
        // Reset takes no flags.
        assert!(
            Cli::try_parse_from(["plantctl", "settings", "reset", "--interval", "5"]).is_err()
        );
    }

    #[test]
    fn settings_reset_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());

        settings(
            &store,
            SettingsAction::Set {
                notifications: Some(false),
                auto_refresh: Some(false),
                interval: Some(45),
            },
        )
        .unwrap();
        assert_ne!(store.load().unwrap(), plantctl_core::Settings::default());

        settings(&store, SettingsAction::Reset).unwrap();
        assert_eq!(store.load().unwrap(), plantctl_core::Settings::default());
    }

    #[test]
    fn water_seconds_are_bounded() {
        assert!(Cli::try_parse_from(["plantctl", "water", "--seconds", "0"]).is_err());
        assert!(Cli::try_parse_from(["plantctl", "water", "--seconds", "61"]).is_err());
        assert!(Cli::try_parse_from(["plantctl", "water", "--seconds", "60"]).is_ok());
    }
}
