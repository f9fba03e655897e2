use super::{from_millis, Database};
use crate::error::StoreError;
use common::model::review::{ModerationReview, Review};
use rusqlite::{params, Connection, OptionalExtension, Row};

const REVIEW_COLUMNS: &str =
    "r.id, r.app_id, r.name, r.rating, r.text, r.approved, r.user_id, r.created_at";

fn review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        app_id: row.get(1)?,
        name: row.get(2)?,
        rating: row.get(3)?,
        text: row.get(4)?,
        approved: row.get(5)?,
        user_id: row.get(6)?,
        created_at: from_millis(row.get(7)?),
    })
}

fn find(conn: &Connection, id: &str) -> Result<Option<Review>, StoreError> {
    let review = conn
        .query_row(
            &format!("SELECT {REVIEW_COLUMNS} FROM reviews r WHERE r.id = ?1"),
            params![id],
            review_from_row,
        )
        .optional()?;
    Ok(review)
}

impl Database {
    pub fn insert_review(&self, review: &Review) -> Result<(), StoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO reviews (id, app_id, name, rating, text, approved, user_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                review.id,
                review.app_id,
                review.name,
                review.rating,
                review.text,
                review.approved,
                review.user_id,
                review.created_at.timestamp_millis()
            ],
        )?;
        Ok(())
    }

    /// Every review of one app, newest first. Reviews created within the
    /// same millisecond are ordered by insertion, latest first.
    pub fn reviews_for_app(&self, app_id: &str) -> Result<Vec<Review>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews r WHERE r.app_id = ?1
             ORDER BY r.created_at DESC, r.rowid DESC"
        ))?;
        let reviews = stmt
            .query_map(params![app_id], review_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reviews)
    }

    /// Every review across all apps with the parent app's name, newest first.
    pub fn list_reviews_with_app(&self) -> Result<Vec<ModerationReview>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {REVIEW_COLUMNS}, a.name FROM reviews r
             LEFT JOIN apps a ON a.id = r.app_id
             ORDER BY r.created_at DESC, r.rowid DESC"
        ))?;
        let reviews = stmt
            .query_map([], |row| {
                Ok(ModerationReview {
                    review: review_from_row(row)?,
                    app_name: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reviews)
    }

    pub fn set_review_approval(
        &self,
        id: &str,
        approved: bool,
    ) -> Result<Option<Review>, StoreError> {
        let conn = self.lock();
        let changed = conn.execute(
            "UPDATE reviews SET approved = ?1 WHERE id = ?2",
            params![approved, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        find(&conn, id)
    }

    pub fn delete_review(&self, id: &str) -> Result<bool, StoreError> {
        let conn = self.lock();
        let removed = conn.execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::now;
    use chrono::Duration;
    use common::model::app::{App, AppDraft};
    use common::model::review::ReviewDraft;

    fn review(id: &str, app_id: &str, minutes_ago: i64) -> Review {
        Review::from_draft(
            id.to_string(),
            app_id.to_string(),
            format!("token-{id}"),
            ReviewDraft {
                name: "Alex".to_string(),
                rating: 4,
                text: "Nice".to_string(),
            },
            now() - Duration::minutes(minutes_ago),
        )
    }

    #[test]
    fn reviews_for_app_newest_first() {
        let db = Database::open_in_memory().unwrap();
        db.insert_review(&review("old", "a", 10)).unwrap();
        db.insert_review(&review("new", "a", 1)).unwrap();
        db.insert_review(&review("other", "b", 0)).unwrap();

        let ids: Vec<_> = db
            .reviews_for_app("a")
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["new", "old"]);
    }

    #[test]
    fn moderation_list_joins_app_names() {
        let db = Database::open_in_memory().unwrap();
        let app = App::from_draft(
            "a".to_string(),
            AppDraft {
                name: "Notes".to_string(),
                ..Default::default()
            },
            now(),
        );
        db.insert_app(&app).unwrap();
        db.insert_review(&review("r1", "a", 5)).unwrap();
        db.insert_review(&review("r2", "deleted-app", 1)).unwrap();

        let listed = db.list_reviews_with_app().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].review.id, "r2");
        assert_eq!(listed[0].app_name, None);
        assert_eq!(listed[1].app_name.as_deref(), Some("Notes"));
    }

    #[test]
    fn approval_updates_and_reports_missing() {
        let db = Database::open_in_memory().unwrap();
        let stored = review("r1", "a", 0);
        db.insert_review(&stored).unwrap();

        let approved = db.set_review_approval("r1", true).unwrap().unwrap();
        assert!(approved.approved);
        assert_eq!(approved.created_at, stored.created_at);
        assert!(db.set_review_approval("missing", true).unwrap().is_none());
    }

    #[test]
    fn app_deletion_leaves_reviews() {
        let db = Database::open_in_memory().unwrap();
        db.insert_review(&review("r1", "a", 0)).unwrap();
        db.delete_app("a").unwrap();
        assert_eq!(db.list_reviews_with_app().unwrap().len(), 1);
        assert!(db.delete_review("r1").unwrap());
        assert!(!db.delete_review("r1").unwrap());
    }
}
