//! Server-side session storage.
//!
//! A session is a row mapping a random token (held by the client inside a
//! private cookie) to a user id and an expiry. Created on login, deleted on
//! logout; expired rows are purged lazily on lookup.

use chrono::{DateTime, Duration, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::db::SqlitePool;
use crate::error::DeskError;

#[derive(Clone)]
pub struct SessionStore {
    pool: SqlitePool,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(pool: SqlitePool, ttl_hours: i64) -> Self {
        Self {
            pool,
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Session lifetime in hours, as configured at construction. The login
    /// handler derives the cookie max-age from this so the client-held token
    /// and the server-side row expire together.
    pub fn ttl_hours(&self) -> i64 {
        self.ttl.num_hours()
    }

    /// Establish a session for `user_id` and return the fresh token.
    pub async fn create(&self, user_id: i64) -> Result<String, DeskError> {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.ttl;
        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(user_id)
            .bind(expires_at.to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(token)
    }

    /// Resolve a token to its user id. Unknown tokens yield `None`; expired
    /// ones are deleted and yield `None`. The user row itself is not
    /// re-checked, so a session outlives deletion of its user.
    pub async fn resolve(&self, token: &str) -> Result<Option<i64>, DeskError> {
        let row = sqlx::query("SELECT user_id, expires_at FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };

        let user_id: i64 = row.try_get("user_id")?;
        let expires_str: String = row.try_get("expires_at")?;
        let expires_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&expires_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        if expires_at < Utc::now() {
            self.destroy(token).await?;
            return Ok(None);
        }
        Ok(Some(user_id))
    }

    /// Delete a session row. Deleting an unknown token is not an error.
    pub async fn destroy(&self, token: &str) -> Result<(), DeskError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
