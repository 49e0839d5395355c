//! Saved roadmap repository.

use chrono::Utc;

use compass_core::ids::PREFIX_ROADMAP;
use compass_core::roadmap::{NewRoadmap, SavedRoadmap};

use crate::CompassDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_json_column};

const SELECT_COLUMNS: &str =
    "SELECT id, user_id, title, phases, branch, interests, focus, created_at, updated_at FROM roadmaps";

fn row_to_roadmap(row: &libsql::Row) -> Result<SavedRoadmap, DatabaseError> {
    Ok(SavedRoadmap {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        phases: parse_json_column(&row.get::<String>(3)?)?,
        branch: get_opt_string(row, 4)?,
        interests: parse_json_column(&row.get::<String>(5)?)?,
        focus: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl CompassDb {
    /// Persist a roadmap for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if ID generation, JSON encoding, or the insert fails.
    pub async fn create_roadmap(
        &self,
        user_id: &str,
        roadmap: NewRoadmap,
    ) -> Result<SavedRoadmap, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_ROADMAP).await?;
        let phases = serde_json::to_string(&roadmap.phases)?;
        let interests = serde_json::to_string(&roadmap.interests)?;

        self.conn()
            .execute(
                "INSERT INTO roadmaps (id, user_id, title, phases, branch, interests, focus, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    user_id,
                    roadmap.title.as_str(),
                    phases,
                    roadmap.branch.as_deref(),
                    interests,
                    roadmap.focus.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(%id, user_id, "roadmap saved");

        Ok(SavedRoadmap {
            id,
            user_id: user_id.to_string(),
            title: roadmap.title,
            phases: roadmap.phases,
            branch: roadmap.branch,
            interests: roadmap.interests,
            focus: roadmap.focus,
            created_at: now,
            updated_at: now,
        })
    }

    /// Every roadmap owned by `user_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_roadmaps(&self, user_id: &str) -> Result<Vec<SavedRoadmap>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("{SELECT_COLUMNS} WHERE user_id = ?1 ORDER BY created_at DESC, rowid DESC"),
                [user_id],
            )
            .await?;

        let mut roadmaps = Vec::new();
        while let Some(row) = rows.next().await? {
            roadmaps.push(row_to_roadmap(&row)?);
        }
        Ok(roadmaps)
    }

    /// Look up a roadmap by id. `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn get_roadmap(&self, id: &str) -> Result<Option<SavedRoadmap>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_roadmap(&row)?)),
            None => Ok(None),
        }
    }

    /// Delete a roadmap by id. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn delete_roadmap(&self, id: &str) -> Result<bool, DatabaseError> {
        let affected = self
            .conn()
            .execute("DELETE FROM roadmaps WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}
