use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};

use crate::db::models::{DbItem, DbUser, ItemFields};
use crate::db::schema::SQLITE_INIT;
use crate::error::DeskError;

pub type SqlitePool = Pool<Sqlite>;

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Open (and create if missing) the SQLite database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new().connect_with(opts).await
}

#[derive(Clone)]
pub struct DeskStorage {
    pool: SqlitePool,
}

impl DeskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), DeskError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All items in insertion order, image blobs included.
    pub async fn list_items(&self) -> Result<Vec<DbItem>, DeskError> {
        let rows = sqlx::query(
            r#"SELECT id, name, age, salary, gender, profession, jadagam,
               image, image_content_type
               FROM items ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_item).collect()
    }

    pub async fn get_item(&self, id: i64) -> Result<Option<DbItem>, DeskError> {
        let row = sqlx::query(
            r#"SELECT id, name, age, salary, gender, profession, jadagam,
               image, image_content_type
               FROM items WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_item).transpose()
    }

    /// Insert a new item with its freshly rendered image. Returns the row id.
    pub async fn insert_item(&self, fields: &ItemFields, image: &[u8]) -> Result<i64, DeskError> {
        let result = sqlx::query(
            r#"INSERT INTO items (name, age, salary, gender, profession, jadagam,
               image, image_content_type)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.salary)
        .bind(&fields.gender)
        .bind(&fields.profession)
        .bind(&fields.jadagam)
        .bind(image)
        .bind(PNG_CONTENT_TYPE)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Replace every field of an existing item, regenerated image included.
    pub async fn update_item(
        &self,
        id: i64,
        fields: &ItemFields,
        image: &[u8],
    ) -> Result<(), DeskError> {
        let result = sqlx::query(
            r#"UPDATE items SET
                name = ?,
                age = ?,
                salary = ?,
                gender = ?,
                profession = ?,
                jadagam = ?,
                image = ?,
                image_content_type = ?
              WHERE id = ?"#,
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.salary)
        .bind(&fields.gender)
        .bind(&fields.profession)
        .bind(&fields.jadagam)
        .bind(image)
        .bind(PNG_CONTENT_TYPE)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(DeskError::ItemNotFound);
        }
        Ok(())
    }

    pub async fn delete_item(&self, id: i64) -> Result<(), DeskError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DeskError::ItemNotFound);
        }
        Ok(())
    }

    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DbUser>, DeskError> {
        let row = sqlx::query("SELECT id, username, password_hash FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| {
            Ok(DbUser {
                id: r.try_get("id")?,
                username: r.try_get("username")?,
                password_hash: r.try_get("password_hash")?,
            })
        })
        .transpose()
        .map_err(DeskError::Database)
    }

    /// Upsert by unique username. Used by the `seed-user` tool and tests;
    /// there is no registration route.
    pub async fn upsert_user(&self, username: &str, password_hash: &str) -> Result<i64, DeskError> {
        sqlx::query(
            r#"INSERT INTO users (username, password_hash) VALUES (?, ?)
               ON CONFLICT(username) DO UPDATE SET
                   password_hash=excluded.password_hash"#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        let rec: (i64,) = sqlx::query_as("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    fn row_to_item(row: SqliteRow) -> Result<DbItem, DeskError> {
        Ok(DbItem {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            salary: row.try_get("salary")?,
            gender: row.try_get("gender")?,
            profession: row.try_get("profession")?,
            jadagam: row.try_get("jadagam")?,
            image: row.try_get("image")?,
            image_content_type: row.try_get("image_content_type")?,
        })
    }
}
