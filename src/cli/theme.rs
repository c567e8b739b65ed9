//! Theme CLI commands

use clap::Subcommand;

use crate::error::KantongResult;
use crate::services::ThemeService;
use crate::storage::Storage;

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the active theme
    Show,
    /// Flip between light and dark
    Toggle,
}

/// Handle a theme command
pub fn handle_theme_command(storage: &mut Storage, cmd: ThemeCommands) -> KantongResult<()> {
    match cmd {
        ThemeCommands::Show => {
            println!("{}", ThemeService::new(storage).current().as_str());
        }
        ThemeCommands::Toggle => {
            let next = ThemeService::new(storage).toggle()?;
            println!("Theme is now {}", next.as_str());
        }
    }

    Ok(())
}
