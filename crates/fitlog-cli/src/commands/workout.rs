//! Workout logging and inspection commands.
//!
//! Commands: log, list, exercises

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};
use fitlog_store::{Database, NewExercise};

#[derive(Args, Debug)]
pub struct WorkoutArgs {
    #[command(subcommand)]
    pub command: WorkoutCommands,
}

#[derive(Subcommand, Debug)]
pub enum WorkoutCommands {
    /// Log a workout session together with its exercises
    Log(LogWorkoutArgs),
    /// List all workouts of a user, most recent first
    List(ListWorkoutArgs),
    /// Show the exercises of one workout
    Exercises(ExercisesArgs),
}

#[derive(Args, Debug)]
pub struct LogWorkoutArgs {
    /// Id of the user who trained
    user_id: i64,

    /// Calendar date of the session (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Duration in minutes
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    duration: i64,

    /// Exercise performed, as "NAME,SETS,REPS,WEIGHT" (repeatable)
    #[arg(long = "exercise", value_name = "SPEC", value_parser = parse_exercise)]
    exercises: Vec<NewExercise>,
}

#[derive(Args, Debug)]
pub struct ListWorkoutArgs {
    /// Id of the user whose workouts to list
    user_id: i64,
}

#[derive(Args, Debug)]
pub struct ExercisesArgs {
    /// Id of the workout to inspect
    workout_id: i64,
}

pub fn run_workout(db: &mut Database, args: WorkoutArgs, json: bool) -> Result<()> {
    match args.command {
        WorkoutCommands::Log(args) => {
            let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
            let workout_id = db.create_workout_with_exercises(
                args.user_id,
                date,
                args.duration,
                &args.exercises,
            )?;
            if json {
                println!("{}", serde_json::json!({ "workout_id": workout_id }));
            } else {
                println!(
                    "Logged workout {workout_id} on {date} with {} exercise(s).",
                    args.exercises.len()
                );
            }
        }
        WorkoutCommands::List(args) => {
            let workouts = db.get_workouts_for_user(args.user_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&workouts)?);
            } else if workouts.is_empty() {
                println!("No workouts logged for user {}.", args.user_id);
            } else {
                println!("{:<6} {:<12} {:>8}", "ID", "Date", "Minutes");
                for workout in &workouts {
                    println!(
                        "{:<6} {:<12} {:>8}",
                        workout.id, workout.date, workout.duration_minutes
                    );
                }
            }
        }
        WorkoutCommands::Exercises(args) => {
            let exercises = db.get_exercises_for_workout(args.workout_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&exercises)?);
            } else if exercises.is_empty() {
                println!("No exercises recorded for workout {}.", args.workout_id);
            } else {
                println!(
                    "{:<6} {:<24} {:>5} {:>5} {:>8}",
                    "ID", "Exercise", "Sets", "Reps", "Weight"
                );
                for exercise in &exercises {
                    println!(
                        "{:<6} {:<24} {:>5} {:>5} {:>8.1}",
                        exercise.id, exercise.name, exercise.sets, exercise.reps, exercise.weight
                    );
                }
            }
        }
    }
    Ok(())
}

/// Clap value parser for `--exercise NAME,SETS,REPS,WEIGHT`.
///
/// Sets and reps must be at least 1; weight may be 0 for bodyweight
/// exercises.
fn parse_exercise(spec: &str) -> Result<NewExercise, String> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected NAME,SETS,REPS,WEIGHT, got {} field(s)",
            parts.len()
        ));
    }

    let name = parts[0];
    if name.is_empty() {
        return Err("exercise name must not be empty".to_string());
    }

    let sets: i64 = parts[1]
        .parse()
        .map_err(|_| format!("invalid sets: {}", parts[1]))?;
    let reps: i64 = parts[2]
        .parse()
        .map_err(|_| format!("invalid reps: {}", parts[2]))?;
    let weight: f64 = parts[3]
        .parse()
        .map_err(|_| format!("invalid weight: {}", parts[3]))?;

    if sets < 1 {
        return Err("sets must be at least 1".to_string());
    }
    if reps < 1 {
        return Err("reps must be at least 1".to_string());
    }
    if weight < 0.0 {
        return Err("weight must not be negative".to_string());
    }

    Ok(NewExercise {
        name: name.to_string(),
        sets,
        reps,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_exercise;

    #[test]
    fn well_formed_spec_parses() {
        let exercise = parse_exercise("Bench Press, 3, 10, 40").unwrap();
        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.sets, 3);
        assert_eq!(exercise.reps, 10);
        assert!((exercise.weight - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bodyweight_exercises_may_have_zero_weight() {
        let exercise = parse_exercise("Pull Up,4,8,0").unwrap();
        assert_eq!(exercise.weight, 0.0);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert!(parse_exercise("Bench Press,3,10").is_err());
        assert!(parse_exercise("Bench Press,3,10,40,extra").is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(parse_exercise(",3,10,40").is_err());
        assert!(parse_exercise("Bench,zero,10,40").is_err());
        assert!(parse_exercise("Bench,0,10,40").is_err());
        assert!(parse_exercise("Bench,3,0,40").is_err());
        assert!(parse_exercise("Bench,3,10,-5").is_err());
    }
}
