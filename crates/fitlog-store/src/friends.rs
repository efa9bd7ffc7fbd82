//! The friends graph.
//!
//! Friendship is symmetric but stored as a single directed row per pair. A
//! unique index over the normalized pair `(MIN(user_id, friend_id),
//! MAX(user_id, friend_id))` guarantees at most one row regardless of which
//! side initiated, so every query here must match both directions.

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::{is_unique_violation, Result, StoreError};
use crate::models::User;
use crate::users::row_to_user;

impl Database {
    /// Connect two users as friends.
    ///
    /// Fails with [`StoreError::SelfFriendship`] when both ids are the same
    /// and [`StoreError::AlreadyFriends`] when a row for the pair exists in
    /// either direction. Two concurrent adds for the same pair cannot both
    /// succeed: the loser's insert trips the pair index and is reported as
    /// [`StoreError::AlreadyFriends`] too.
    pub fn add_friend(&self, user_id: i64, friend_id: i64) -> Result<()> {
        if user_id == friend_id {
            return Err(StoreError::SelfFriendship);
        }

        let existing: Option<i64> = self
            .conn()
            .query_row(
                "SELECT 1 FROM friends
                 WHERE (user_id = ?1 AND friend_id = ?2)
                    OR (user_id = ?2 AND friend_id = ?1)",
                params![user_id, friend_id],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(StoreError::AlreadyFriends(user_id, friend_id));
        }

        self.conn()
            .execute(
                "INSERT INTO friends (user_id, friend_id) VALUES (?1, ?2)",
                params![user_id, friend_id],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::AlreadyFriends(user_id, friend_id)
                } else {
                    StoreError::Sqlite(e)
                }
            })?;

        tracing::debug!(user_id, friend_id, "friendship added");
        Ok(())
    }

    /// Remove a friendship. Returns `true` if a row was deleted.
    ///
    /// Idempotent: removing a pair that was never connected is a no-op.
    pub fn remove_friend(&self, user_id: i64, friend_id: i64) -> Result<bool> {
        let affected = self.conn().execute(
            "DELETE FROM friends
             WHERE (user_id = ?1 AND friend_id = ?2)
                OR (user_id = ?2 AND friend_id = ?1)",
            params![user_id, friend_id],
        )?;
        Ok(affected > 0)
    }

    /// All friends of a user, ordered by name.
    ///
    /// The union of both row directions, so the result is identical no
    /// matter which side of each friendship `user_id` is stored on.
    pub fn list_friends(&self, user_id: i64) -> Result<Vec<User>> {
        let mut stmt = self.conn().prepare(
            "SELECT u.user_id, u.name, u.email, u.weight
             FROM friends f JOIN users u ON u.user_id = f.friend_id
             WHERE f.user_id = ?1
             UNION
             SELECT u.user_id, u.name, u.email, u.weight
             FROM friends f JOIN users u ON u.user_id = f.user_id
             WHERE f.friend_id = ?1
             ORDER BY name ASC",
        )?;

        let rows = stmt.query_map(params![user_id], row_to_user)?;

        let mut friends = Vec::new();
        for row in rows {
            friends.push(row?);
        }
        Ok(friends)
    }
}

#[cfg(test)]
mod tests {
    use crate::database::testutil::open_test_db;
    use crate::error::{is_unique_violation, StoreError};

    #[test]
    fn friendship_is_visible_from_both_sides() {
        let (_dir, db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();

        db.add_friend(ada, zoe).unwrap();

        let of_ada = db.list_friends(ada).unwrap();
        let of_zoe = db.list_friends(zoe).unwrap();
        assert_eq!(of_ada.len(), 1);
        assert_eq!(of_ada[0].id, zoe);
        assert_eq!(of_zoe.len(), 1);
        assert_eq!(of_zoe[0].id, ada);
    }

    #[test]
    fn self_friendship_is_rejected() {
        let (_dir, db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();

        let err = db.add_friend(ada, ada).unwrap_err();
        assert!(matches!(err, StoreError::SelfFriendship));
        assert!(db.list_friends(ada).unwrap().is_empty());
    }

    #[test]
    fn duplicate_add_is_rejected_in_either_direction() {
        let (_dir, db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();

        db.add_friend(ada, zoe).unwrap();

        let same = db.add_friend(ada, zoe).unwrap_err();
        assert!(matches!(same, StoreError::AlreadyFriends(..)));

        let reversed = db.add_friend(zoe, ada).unwrap_err();
        assert!(matches!(reversed, StoreError::AlreadyFriends(..)));

        assert_eq!(db.list_friends(ada).unwrap().len(), 1);
    }

    #[test]
    fn pair_index_blocks_a_reversed_duplicate_row() {
        // Bypasses add_friend's existence check to hit the index directly,
        // the way a second writer racing past the check would.
        let (_dir, db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();

        db.add_friend(ada, zoe).unwrap();

        let err = db
            .conn()
            .execute(
                "INSERT INTO friends (user_id, friend_id) VALUES (?1, ?2)",
                rusqlite::params![zoe, ada],
            )
            .unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn remove_friend_works_from_either_side_and_is_idempotent() {
        let (_dir, db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();

        db.add_friend(ada, zoe).unwrap();
        assert!(db.remove_friend(zoe, ada).unwrap());
        assert!(db.list_friends(ada).unwrap().is_empty());
        assert!(db.list_friends(zoe).unwrap().is_empty());

        assert!(!db.remove_friend(ada, zoe).unwrap());
        assert!(!db.remove_friend(1, 999).unwrap());
    }

    #[test]
    fn friends_are_listed_by_name_and_do_not_leak_across_users() {
        let (_dir, db) = open_test_db();
        let ada = db.create_user("Ada", "ada@example.com", 58.2).unwrap();
        let zoe = db.create_user("Zoe", "zoe@example.com", 70.0).unwrap();
        let mia = db.create_user("Mia", "mia@example.com", 64.0).unwrap();

        // Ada is stored on different sides of her two friendships.
        db.add_friend(ada, zoe).unwrap();
        db.add_friend(mia, ada).unwrap();

        let names: Vec<String> = db
            .list_friends(ada)
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Mia", "Zoe"]);

        let of_zoe = db.list_friends(zoe).unwrap();
        assert_eq!(of_zoe.len(), 1);
        assert_eq!(of_zoe[0].id, ada);
    }
}
