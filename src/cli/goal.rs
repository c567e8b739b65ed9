//! Savings goal CLI commands

use clap::Subcommand;

use crate::display::format_goal;
use crate::error::{KantongError, KantongResult};
use crate::models::Money;
use crate::reports;
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set (or replace) the savings goal
    Set {
        /// Goal name
        name: String,
        /// Target amount in whole rupiah
        target: String,
    },
    /// Remove the savings goal
    Clear,
    /// Show the goal and progress toward it
    Show,
}

/// Handle a goal command
pub fn handle_goal_command(storage: &mut Storage, cmd: GoalCommands) -> KantongResult<()> {
    match cmd {
        GoalCommands::Set { name, target } => {
            let target = Money::parse(&target)
                .map_err(|e| KantongError::Validation(e.to_string()))?;
            let goal = GoalService::new(storage).set(&name, target)?;
            println!("Goal set: {} ({})", goal.name, goal.target);
        }
        GoalCommands::Clear => {
            GoalService::new(storage).clear()?;
            println!("Goal cleared");
        }
        GoalCommands::Show => match storage.goal.get() {
            Some(goal) => {
                let progress = reports::goal_progress(storage.transactions.list(), goal);
                print!("{}", format_goal(goal, &progress));
            }
            None => println!("No goal set"),
        },
    }

    Ok(())
}
