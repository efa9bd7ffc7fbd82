//! Friends list commands.
//!
//! Commands: add, remove, list

use anyhow::Result;
use clap::{Args, Subcommand};
use fitlog_store::{Database, StoreError};

use super::print_user_table;

#[derive(Args, Debug)]
pub struct FriendArgs {
    #[command(subcommand)]
    pub command: FriendCommands,
}

#[derive(Subcommand, Debug)]
pub enum FriendCommands {
    /// Connect two users as friends
    Add(FriendPairArgs),
    /// Remove a friendship (no-op if they were not friends)
    Remove(FriendPairArgs),
    /// List a user's friends
    List(ListFriendArgs),
}

#[derive(Args, Debug)]
pub struct FriendPairArgs {
    /// Id of the first user
    user_id: i64,

    /// Id of the second user
    friend_id: i64,
}

#[derive(Args, Debug)]
pub struct ListFriendArgs {
    /// Id of the user whose friends to list
    user_id: i64,
}

pub fn run_friend(db: &Database, args: FriendArgs, json: bool) -> Result<()> {
    match args.command {
        FriendCommands::Add(args) => {
            // A pair that is already connected (or a self-add) is reported,
            // not treated as a command failure.
            match db.add_friend(args.user_id, args.friend_id) {
                Ok(()) => {
                    if json {
                        println!("{}", serde_json::json!({ "added": true }));
                    } else {
                        println!(
                            "Users {} and {} are now friends.",
                            args.user_id, args.friend_id
                        );
                    }
                }
                Err(e @ (StoreError::SelfFriendship | StoreError::AlreadyFriends(..))) => {
                    if json {
                        println!(
                            "{}",
                            serde_json::json!({ "added": false, "reason": e.to_string() })
                        );
                    } else {
                        println!("{e}");
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
        FriendCommands::Remove(args) => {
            let removed = db.remove_friend(args.user_id, args.friend_id)?;
            if json {
                println!("{}", serde_json::json!({ "removed": removed }));
            } else if removed {
                println!(
                    "Users {} and {} are no longer friends.",
                    args.user_id, args.friend_id
                );
            } else {
                println!(
                    "Users {} and {} were not friends.",
                    args.user_id, args.friend_id
                );
            }
        }
        FriendCommands::List(args) => {
            let friends = db.list_friends(args.user_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&friends)?);
            } else if friends.is_empty() {
                println!("User {} has no friends yet.", args.user_id);
            } else {
                print_user_table(&friends);
            }
        }
    }
    Ok(())
}
