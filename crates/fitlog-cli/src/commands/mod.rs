//! Command implementations for the fitlog CLI.

pub mod friend;
pub mod goal;
pub mod stats;
pub mod user;
pub mod workout;

// Re-export the dispatcher functions for flat access from main.rs
pub use friend::run_friend;
pub use goal::run_goal;
pub use stats::{run_insights, run_leaderboard};
pub use user::run_user;
pub use workout::run_workout;

/// Print a table of user profiles. Shared between `user list` and
/// `friend list`.
pub(crate) fn print_user_table(users: &[fitlog_store::User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    println!("{:<6} {:<20} {:<30} {:>8}", "ID", "Name", "Email", "Weight");
    for user in users {
        println!(
            "{:<6} {:<20} {:<30} {:>8.1}",
            user.id, user.name, user.email, user.weight
        );
    }
}
