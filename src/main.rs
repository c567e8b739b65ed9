use anyhow::Result;
use clap::{Parser, Subcommand};

use kantong::cli::{
    handle_goal_command, handle_summary_command, handle_theme_command, handle_transaction_command,
    GoalCommands, ThemeCommands, TransactionCommands,
};
use kantong::config::paths::KantongPaths;
use kantong::storage::Storage;
use kantong::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "kantong",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "kantong is a terminal-based personal finance tracker: record \
                  income and expenses in fixed categories, watch the balance and \
                  per-category breakdown, and track progress toward a savings goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Print the balance summary and category breakdown
    Summary,

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Display theme commands
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = KantongPaths::new()?;
    let mut storage = Storage::new(paths)?;
    storage.load_all();

    match cli.command {
        Some(Commands::Tui) | None => {
            run_tui(storage)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut storage, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut storage, cmd)?;
        }
        Some(Commands::Theme(cmd)) => {
            handle_theme_command(&mut storage, cmd)?;
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Goal file:         {}", paths.goal_file().display());
            println!("Theme file:        {}", paths.theme_file().display());
            println!("Active theme:      {}", storage.theme.get().as_str());
        }
    }

    Ok(())
}
