//! Aggregate statistics commands: insights and leaderboard.

use anyhow::Result;
use clap::{Args, ValueEnum};
use fitlog_store::{Database, LeaderboardMetric};

#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Id of the user to compute statistics for
    user_id: i64,
}

#[derive(Args, Debug)]
pub struct LeaderboardArgs {
    /// Id of the user whose friend circle to rank
    user_id: i64,

    /// Metric to rank by
    #[arg(long, value_enum, default_value = "total-duration-all-time")]
    metric: MetricArg,
}

/// Command-line spelling of the leaderboard metrics.
///
/// Named explicitly: the derived kebab-case would split "Last30Days" as
/// "last30-days".
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MetricArg {
    /// Workouts in the last 30 days
    #[value(name = "total-workouts-last-30-days")]
    TotalWorkoutsLast30Days,
    /// Minutes trained in the last 30 days
    #[value(name = "total-duration-last-30-days")]
    TotalDurationLast30Days,
    /// Average workout length, all time
    #[value(name = "average-duration-all-time")]
    AvgDurationAllTime,
    /// Minutes trained, all time
    #[value(name = "total-duration-all-time")]
    TotalDurationAllTime,
}

impl From<MetricArg> for LeaderboardMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::TotalWorkoutsLast30Days => LeaderboardMetric::TotalWorkoutsLast30Days,
            MetricArg::TotalDurationLast30Days => LeaderboardMetric::TotalDurationLast30Days,
            MetricArg::AvgDurationAllTime => LeaderboardMetric::AvgDurationAllTime,
            MetricArg::TotalDurationAllTime => LeaderboardMetric::TotalDurationAllTime,
        }
    }
}

pub fn run_insights(db: &Database, args: InsightsArgs, json: bool) -> Result<()> {
    let insights = db.get_workout_insights(args.user_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else if insights.total_workouts == 0 {
        println!("No workouts logged for user {}.", args.user_id);
    } else {
        println!("Workouts:      {}", insights.total_workouts);
        println!("Total minutes: {}", insights.total_duration);
        println!("Average:       {:.1} min", insights.avg_duration);
        println!("Shortest:      {} min", insights.min_duration);
        println!("Longest:       {} min", insights.max_duration);
    }
    Ok(())
}

pub fn run_leaderboard(db: &Database, args: LeaderboardArgs, json: bool) -> Result<()> {
    let entries = db.get_leaderboard(args.user_id, args.metric.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No leaderboard to show for user {}.", args.user_id);
    } else {
        for (rank, entry) in entries.iter().enumerate() {
            println!("{:>3}. {:<20} {}", rank + 1, entry.name, format_value(entry.value));
        }
    }
    Ok(())
}

/// Counts and sums are whole numbers; only averages need a decimal place.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
