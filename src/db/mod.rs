//! Database module for SQLite persistence.
//!
//! SQLite is the record store for contacts and blog posts.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        if let Err(e) = tokio::fs::create_dir_all(parent).await {
            tracing::warn!("Failed to create database directory {:?}: {}", parent, e);
        }
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    seed_contacts(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS persons (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL CHECK (length(name) > 0),
            number TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // rowid keeps insertion order for listing
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blogs (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            url TEXT NOT NULL,
            likes INTEGER NOT NULL DEFAULT 0 CHECK (likes >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Contacts present in every fresh phonebook.
pub const SEED_CONTACTS: [(i64, &str, &str); 4] = [
    (1, "Arto Hellas", "040-123456"),
    (2, "Ada Lovelace", "39-44-5323523"),
    (3, "Dan Abramov", "12-43-234345"),
    (4, "asdq", "-2323-232-3"),
];

/// Insert the seed contacts, leaving existing rows untouched.
async fn seed_contacts(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for (id, name, number) in SEED_CONTACTS {
        sqlx::query("INSERT OR IGNORE INTO persons (id, name, number) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(number)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::debug!("Seeded {} contacts", SEED_CONTACTS.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_unusable_parent_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let result = init_database(&blocker.join("app.sqlite")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_parent_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("app.sqlite");

        init_database(&db_path).await.unwrap();
        assert!(db_path.exists());
    }
}
