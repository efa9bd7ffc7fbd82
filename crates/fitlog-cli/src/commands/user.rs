//! User profile commands.
//!
//! Commands: create, list, show, update, delete

use anyhow::Result;
use clap::{Args, Subcommand};
use fitlog_store::Database;

use super::print_user_table;

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a new user
    Create(CreateUserArgs),
    /// List all users
    List,
    /// Show one user's profile
    Show(ShowUserArgs),
    /// Update a user's profile
    Update(UpdateUserArgs),
    /// Delete a user and everything they own (workouts, goals, friendships)
    Delete(DeleteUserArgs),
}

#[derive(Args, Debug)]
pub struct CreateUserArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Email address (must be unique)
    #[arg(long)]
    email: String,

    /// Body weight in kilograms
    #[arg(long, value_parser = parse_positive_f64)]
    weight: f64,
}

#[derive(Args, Debug)]
pub struct ShowUserArgs {
    /// Id of the user to show
    user_id: i64,
}

#[derive(Args, Debug)]
pub struct UpdateUserArgs {
    /// Id of the user to update
    user_id: i64,

    /// New display name
    #[arg(long)]
    name: String,

    /// New email address (must be unique)
    #[arg(long)]
    email: String,

    /// New body weight in kilograms
    #[arg(long, value_parser = parse_positive_f64)]
    weight: f64,
}

#[derive(Args, Debug)]
pub struct DeleteUserArgs {
    /// Id of the user to delete
    user_id: i64,
}

pub fn run_user(db: &mut Database, args: UserArgs, json: bool) -> Result<()> {
    match args.command {
        UserCommands::Create(args) => {
            let id = db.create_user(&args.name, &args.email, args.weight)?;
            if json {
                println!("{}", serde_json::json!({ "user_id": id }));
            } else {
                println!("Created user {id}.");
            }
        }
        UserCommands::List => {
            let users = db.list_users()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                print_user_table(&users);
            }
        }
        UserCommands::Show(args) => match db.get_user(args.user_id)? {
            Some(user) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&user)?);
                } else {
                    println!("Id:     {}", user.id);
                    println!("Name:   {}", user.name);
                    println!("Email:  {}", user.email);
                    println!("Weight: {:.1} kg", user.weight);
                }
            }
            None => report_missing_user(args.user_id, json),
        },
        UserCommands::Update(args) => {
            let updated = db.update_user(args.user_id, &args.name, &args.email, args.weight)?;
            if json {
                println!("{}", serde_json::json!({ "updated": updated }));
            } else if updated {
                println!("Updated user {}.", args.user_id);
            } else {
                println!("No user with id {}.", args.user_id);
            }
        }
        UserCommands::Delete(args) => {
            let deleted = db.delete_user(args.user_id)?;
            if json {
                println!("{}", serde_json::json!({ "deleted": deleted }));
            } else if deleted {
                println!("Deleted user {} and all their data.", args.user_id);
            } else {
                println!("No user with id {}.", args.user_id);
            }
        }
    }
    Ok(())
}

fn report_missing_user(user_id: i64, json: bool) {
    if json {
        println!("null");
    } else {
        println!("No user with id {user_id}.");
    }
}

/// Clap value parser for weights and other strictly positive quantities.
pub(crate) fn parse_positive_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err("must be greater than zero".to_string())
    }
}
