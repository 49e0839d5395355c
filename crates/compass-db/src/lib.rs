//! # compass-db
//!
//! libSQL persistence for saved roadmaps.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode. `:memory:` opens a
//! throwaway database for tests and demo servers.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use libsql::Builder;

pub use error::DatabaseError;

/// Database handle for saved roadmaps.
pub struct CompassDb {
    // Keeps the database alive for the lifetime of `conn`.
    _db: libsql::Database,
    conn: libsql::Connection,
}

impl CompassDb {
    /// Open a local database at the given path.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let compass_db = Self { _db: db, conn };
        compass_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(compass_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rmp-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Round-trip a trivial query. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot answer.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(())
    }
}
