//! Friends leaderboard.
//!
//! Ranks a user together with all their friends on one workout metric. The
//! roster comes from the friends table matched in both directions plus the
//! viewer themself, and every member appears even with no qualifying
//! workouts, which is what the `LEFT JOIN` below is for.

use chrono::{Duration, Utc};
use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Result;

/// How leaderboard members are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeaderboardMetric {
    /// Number of workouts in the last 30 days.
    TotalWorkoutsLast30Days,
    /// Minutes trained in the last 30 days.
    TotalDurationLast30Days,
    /// Mean workout length in minutes, all time.
    AvgDurationAllTime,
    /// Minutes trained, all time.
    #[default]
    TotalDurationAllTime,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub value: f64,
}

// All four queries share the same shape: the ego network in the WHERE
// clause, one aggregate over a LEFT JOIN on workouts, grouped by user id so
// two members who happen to share a name stay separate rows. The 30-day
// cutoff lives in the join condition, not the WHERE clause, so members
// without recent workouts keep their zero row.

const TOTAL_WORKOUTS_30D_SQL: &str = "\
    SELECT u.name, COUNT(w.workout_id) AS metric_value
    FROM users u
    LEFT JOIN workouts w ON w.user_id = u.user_id AND w.workout_date >= ?2
    WHERE u.user_id IN (SELECT friend_id FROM friends WHERE user_id = ?1
                        UNION
                        SELECT user_id FROM friends WHERE friend_id = ?1
                        UNION
                        SELECT ?1)
    GROUP BY u.user_id, u.name
    ORDER BY metric_value DESC, u.name ASC";

const TOTAL_DURATION_30D_SQL: &str = "\
    SELECT u.name, COALESCE(SUM(w.duration_minutes), 0) AS metric_value
    FROM users u
    LEFT JOIN workouts w ON w.user_id = u.user_id AND w.workout_date >= ?2
    WHERE u.user_id IN (SELECT friend_id FROM friends WHERE user_id = ?1
                        UNION
                        SELECT user_id FROM friends WHERE friend_id = ?1
                        UNION
                        SELECT ?1)
    GROUP BY u.user_id, u.name
    ORDER BY metric_value DESC, u.name ASC";

const AVG_DURATION_SQL: &str = "\
    SELECT u.name, COALESCE(AVG(w.duration_minutes), 0) AS metric_value
    FROM users u
    LEFT JOIN workouts w ON w.user_id = u.user_id
    WHERE u.user_id IN (SELECT friend_id FROM friends WHERE user_id = ?1
                        UNION
                        SELECT user_id FROM friends WHERE friend_id = ?1
                        UNION
                        SELECT ?1)
    GROUP BY u.user_id, u.name
    ORDER BY metric_value DESC, u.name ASC";

const TOTAL_DURATION_SQL: &str = "\
    SELECT u.name, COALESCE(SUM(w.duration_minutes), 0) AS metric_value
    FROM users u
    LEFT JOIN workouts w ON w.user_id = u.user_id
    WHERE u.user_id IN (SELECT friend_id FROM friends WHERE user_id = ?1
                        UNION
                        SELECT user_id FROM friends WHERE friend_id = ?1
                        UNION
                        SELECT ?1)
    GROUP BY u.user_id, u.name
    ORDER BY metric_value DESC, u.name ASC";

impl LeaderboardMetric {
    fn query(self) -> &'static str {
        match self {
            LeaderboardMetric::TotalWorkoutsLast30Days => TOTAL_WORKOUTS_30D_SQL,
            LeaderboardMetric::TotalDurationLast30Days => TOTAL_DURATION_30D_SQL,
            LeaderboardMetric::AvgDurationAllTime => AVG_DURATION_SQL,
            LeaderboardMetric::TotalDurationAllTime => TOTAL_DURATION_SQL,
        }
    }

    /// Whether the metric only counts the last 30 days.
    fn is_windowed(self) -> bool {
        matches!(
            self,
            LeaderboardMetric::TotalWorkoutsLast30Days
                | LeaderboardMetric::TotalDurationLast30Days
        )
    }
}

impl Database {
    /// Rank a user and all their friends by the given metric.
    ///
    /// Entries are sorted best first; ties are broken by name. Count and sum
    /// metrics come back as whole-numbered `f64`s so all metrics share one
    /// row shape.
    pub fn get_leaderboard(
        &self,
        user_id: i64,
        metric: LeaderboardMetric,
    ) -> Result<Vec<LeaderboardEntry>> {
        let mut stmt = self.conn().prepare(metric.query())?;

        let rows = if metric.is_windowed() {
            let cutoff = (Utc::now().date_naive() - Duration::days(30)).to_string();
            stmt.query_map(params![user_id, cutoff], row_to_entry)?
        } else {
            stmt.query_map(params![user_id], row_to_entry)?
        };

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<LeaderboardEntry> {
    Ok(LeaderboardEntry {
        name: row.get(0)?,
        value: row.get(1)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};

    use super::LeaderboardMetric;
    use crate::database::testutil::open_test_db;
    use crate::database::Database;

    fn days_ago(days: i64) -> NaiveDate {
        Utc::now().date_naive() - Duration::days(days)
    }

    fn board(db: &Database, viewer: i64, metric: LeaderboardMetric) -> Vec<(String, f64)> {
        db.get_leaderboard(viewer, metric)
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.value))
            .collect()
    }

    #[test]
    fn members_without_workouts_still_appear_with_zero() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();
        db.add_friend(ada, zoe).unwrap();

        db.create_workout_with_exercises(ada, days_ago(1), 30, &[])
            .unwrap();
        db.create_workout_with_exercises(ada, days_ago(2), 45, &[])
            .unwrap();

        let entries = board(&db, ada, LeaderboardMetric::TotalWorkoutsLast30Days);
        assert_eq!(
            entries,
            [("Ada".to_string(), 2.0), ("Zoe".to_string(), 0.0)]
        );
    }

    #[test]
    fn todays_workout_counts_toward_the_window() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();
        db.add_friend(ada, zoe).unwrap();

        db.create_workout_with_exercises(ada, days_ago(0), 30, &[])
            .unwrap();

        let entries = board(&db, ada, LeaderboardMetric::TotalDurationLast30Days);
        assert_eq!(
            entries,
            [("Ada".to_string(), 30.0), ("Zoe".to_string(), 0.0)]
        );
    }

    #[test]
    fn viewer_is_ranked_even_with_no_friends() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        db.create_workout_with_exercises(ada, days_ago(3), 40, &[])
            .unwrap();

        let entries = board(&db, ada, LeaderboardMetric::TotalDurationAllTime);
        assert_eq!(entries, [("Ada".to_string(), 40.0)]);
    }

    #[test]
    fn non_friends_are_excluded() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();
        let mia = db.create_user("Mia", "mia@example.com", 64.0).unwrap();
        db.add_friend(ada, zoe).unwrap();

        db.create_workout_with_exercises(mia, days_ago(1), 300, &[])
            .unwrap();

        let entries = board(&db, ada, LeaderboardMetric::TotalDurationAllTime);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|(name, _)| name != "Mia"));
    }

    #[test]
    fn both_edge_directions_feed_the_roster() {
        let (_dir, db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();
        let mia = db.create_user("Mia", "mia@example.com", 64.0).unwrap();

        // Ada sits on the user_id side of one edge and the friend_id side
        // of the other.
        db.add_friend(ada, zoe).unwrap();
        db.add_friend(mia, ada).unwrap();

        let entries = board(&db, ada, LeaderboardMetric::TotalDurationAllTime);
        let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Ada", "Mia", "Zoe"]);
    }

    #[test]
    fn windowed_metrics_ignore_workouts_older_than_30_days() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();

        db.create_workout_with_exercises(ada, days_ago(40), 90, &[])
            .unwrap();
        db.create_workout_with_exercises(ada, days_ago(5), 30, &[])
            .unwrap();

        let windowed = board(&db, ada, LeaderboardMetric::TotalDurationLast30Days);
        assert_eq!(windowed, [("Ada".to_string(), 30.0)]);

        let all_time = board(&db, ada, LeaderboardMetric::TotalDurationAllTime);
        assert_eq!(all_time, [("Ada".to_string(), 120.0)]);
    }

    #[test]
    fn average_duration_is_a_mean_over_all_workouts() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();
        db.add_friend(ada, zoe).unwrap();

        db.create_workout_with_exercises(ada, days_ago(10), 30, &[])
            .unwrap();
        db.create_workout_with_exercises(ada, days_ago(5), 60, &[])
            .unwrap();
        db.create_workout_with_exercises(zoe, days_ago(5), 50, &[])
            .unwrap();

        let entries = board(&db, ada, LeaderboardMetric::AvgDurationAllTime);
        assert_eq!(
            entries,
            [("Zoe".to_string(), 50.0), ("Ada".to_string(), 45.0)]
        );
    }

    #[test]
    fn ties_are_broken_by_name() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();
        db.add_friend(ada, zoe).unwrap();

        db.create_workout_with_exercises(ada, days_ago(2), 60, &[])
            .unwrap();
        db.create_workout_with_exercises(zoe, days_ago(3), 60, &[])
            .unwrap();

        let entries = board(&db, ada, LeaderboardMetric::TotalDurationAllTime);
        assert_eq!(
            entries,
            [("Ada".to_string(), 60.0), ("Zoe".to_string(), 60.0)]
        );
    }

    #[test]
    fn members_sharing_a_name_keep_separate_rows() {
        let (_dir, mut db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let sam1 = db.create_user("Sam", "sam.w@example.com", 80.0).unwrap();
        let sam2 = db.create_user("Sam", "sam.k@example.com", 75.0).unwrap();
        db.add_friend(ada, sam1).unwrap();
        db.add_friend(ada, sam2).unwrap();

        db.create_workout_with_exercises(sam1, days_ago(4), 25, &[])
            .unwrap();
        db.create_workout_with_exercises(sam2, days_ago(4), 55, &[])
            .unwrap();

        let entries = board(&db, ada, LeaderboardMetric::TotalDurationAllTime);
        assert_eq!(
            entries,
            [
                ("Sam".to_string(), 55.0),
                ("Sam".to_string(), 25.0),
                ("Ada".to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn default_metric_is_all_time_duration() {
        assert_eq!(
            LeaderboardMetric::default(),
            LeaderboardMetric::TotalDurationAllTime
        );
    }
}
