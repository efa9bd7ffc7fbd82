//! Goal tracking commands.
//!
//! Commands: set, list, progress, delete

use anyhow::Result;
use clap::{Args, Subcommand};
use fitlog_store::Database;

use super::user::parse_positive_f64;

#[derive(Args, Debug)]
pub struct GoalArgs {
    #[command(subcommand)]
    pub command: GoalCommands,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Create a new goal for a user
    Set(SetGoalArgs),
    /// List a user's goals
    List(ListGoalArgs),
    /// Record progress towards a goal
    Progress(ProgressArgs),
    /// Delete a goal
    Delete(DeleteGoalArgs),
}

#[derive(Args, Debug)]
pub struct SetGoalArgs {
    /// Id of the user the goal belongs to
    user_id: i64,

    /// What the goal is, in your own words
    #[arg(long)]
    description: String,

    /// Numeric target to reach
    #[arg(long, value_parser = parse_positive_f64)]
    target: f64,
}

#[derive(Args, Debug)]
pub struct ListGoalArgs {
    /// Id of the user whose goals to list
    user_id: i64,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Id of the goal to update
    goal_id: i64,

    /// Current progress value (absolute, not an increment)
    #[arg(value_parser = parse_non_negative_f64)]
    value: f64,
}

#[derive(Args, Debug)]
pub struct DeleteGoalArgs {
    /// Id of the goal to delete
    goal_id: i64,
}

pub fn run_goal(db: &Database, args: GoalArgs, json: bool) -> Result<()> {
    match args.command {
        GoalCommands::Set(args) => {
            let goal_id = db.create_goal(args.user_id, &args.description, args.target)?;
            if json {
                println!("{}", serde_json::json!({ "goal_id": goal_id }));
            } else {
                println!("Created goal {goal_id}.");
            }
        }
        GoalCommands::List(args) => {
            let goals = db.get_goals_for_user(args.user_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&goals)?);
            } else if goals.is_empty() {
                println!("No goals set for user {}.", args.user_id);
            } else {
                println!(
                    "{:<6} {:<40} {:>10} {:>10}",
                    "ID", "Goal", "Target", "Progress"
                );
                for goal in &goals {
                    println!(
                        "{:<6} {:<40} {:>10.1} {:>10.1}",
                        goal.id, goal.description, goal.target_value, goal.progress_value
                    );
                }
            }
        }
        GoalCommands::Progress(args) => {
            let updated = db.update_goal_progress(args.goal_id, args.value)?;
            if json {
                println!("{}", serde_json::json!({ "updated": updated }));
            } else if updated {
                println!("Progress on goal {} set to {}.", args.goal_id, args.value);
            } else {
                println!("No goal with id {}.", args.goal_id);
            }
        }
        GoalCommands::Delete(args) => {
            let deleted = db.delete_goal(args.goal_id)?;
            if json {
                println!("{}", serde_json::json!({ "deleted": deleted }));
            } else if deleted {
                println!("Deleted goal {}.", args.goal_id);
            } else {
                println!("No goal with id {}.", args.goal_id);
            }
        }
    }
    Ok(())
}

/// Clap value parser for progress values, which may legitimately be zero.
fn parse_non_negative_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err("must not be negative".to_string())
    }
}
