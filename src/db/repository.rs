//! Database repository for the contact and blog collections.
//!
//! Every row is turned into its wire model by an explicit `*_from_row` mapping.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Blog, Contact, CreateBlogRequest};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== CONTACT OPERATIONS ====================

    /// List all contacts in storage order.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let rows = sqlx::query("SELECT id, name, number FROM persons ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(contact_from_row).collect())
    }

    // ==================== BLOG OPERATIONS ====================

    /// List all blog posts in insertion order.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query("SELECT id, title, author, url, likes FROM blogs ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(blog_from_row).collect())
    }

    /// Insert a new blog post and return it as stored, in a single statement.
    ///
    /// Missing `likes` is stored as zero. Other missing fields are bound as NULL
    /// and rejected by the table constraints.
    pub async fn create_blog(&self, request: &CreateBlogRequest) -> Result<Blog, AppError> {
        let id = uuid::Uuid::new_v4().to_string();

        let row = sqlx::query(
            "INSERT INTO blogs (id, title, author, url, likes) VALUES (?, ?, ?, ?, ?) \
             RETURNING id, title, author, url, likes",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.author)
        .bind(&request.url)
        .bind(request.likes.unwrap_or(0))
        .fetch_one(&self.pool)
        .await?;

        let blog = blog_from_row(&row);
        tracing::debug!("Created blog {} ({})", blog.id, blog.title);
        Ok(blog)
    }
}

fn contact_from_row(row: &sqlx::sqlite::SqliteRow) -> Contact {
    Contact {
        id: row.get("id"),
        name: row.get("name"),
        number: row.get("number"),
    }
}

fn blog_from_row(row: &sqlx::sqlite::SqliteRow) -> Blog {
    Blog {
        id: row.get("id"),
        title: row.get("title"),
        author: row.get("author"),
        url: row.get("url"),
        likes: row.get("likes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_database, SEED_CONTACTS};
    use tempfile::TempDir;

    async fn repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("repo.sqlite"))
            .await
            .unwrap();
        (Repository::new(pool), temp_dir)
    }

    fn request(title: Option<&str>, likes: i64) -> CreateBlogRequest {
        CreateBlogRequest {
            title: title.map(str::to_string),
            author: Some("A".to_string()),
            url: Some("U".to_string()),
            likes: Some(likes),
        }
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.sqlite");

        let first = init_database(&path).await.unwrap();
        first.close().await;
        let pool = init_database(&path).await.unwrap();

        let contacts = Repository::new(pool).list_contacts().await.unwrap();
        assert_eq!(contacts.len(), SEED_CONTACTS.len());
    }

    #[tokio::test]
    async fn test_create_blog_assigns_unique_ids() {
        let (repo, _dir) = repo().await;

        let first = repo.create_blog(&request(Some("one"), 1)).await.unwrap();
        let second = repo.create_blog(&request(Some("two"), 2)).await.unwrap();
        assert_ne!(first.id, second.id);

        let blogs = repo.list_blogs().await.unwrap();
        assert_eq!(blogs, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_blog_returns_stored_row() {
        let (repo, _dir) = repo().await;

        let mut without_likes = request(Some("T"), 0);
        without_likes.likes = None;
        let blog = repo.create_blog(&without_likes).await.unwrap();
        assert_eq!(blog.likes, 0);
        assert_eq!(blog.title, "T");

        let blogs = repo.list_blogs().await.unwrap();
        assert_eq!(blogs, vec![blog]);
    }

    #[tokio::test]
    async fn test_create_blog_without_title_is_validation_error() {
        let (repo, _dir) = repo().await;

        let err = repo.create_blog(&request(None, 0)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
        assert!(repo.list_blogs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_likes_rejected() {
        let (repo, _dir) = repo().await;

        let err = repo.create_blog(&request(Some("T"), -1)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }
}
