//! PostgreSQL implementation of PostRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use bonheur_core::entities::{Comment, Post};
use bonheur_core::error::DomainError;
use bonheur_core::traits::{PostRepository, RepoResult};
use bonheur_core::value_objects::Snowflake;

use crate::mappers::{post_with_comments, CommentInsert, PostInsert};
use crate::models::{CommentModel, PostModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of PostRepository
///
/// Counter updates are single `UPDATE ... SET x = x + 1` statements, so the
/// row lock taken by Postgres serializes concurrent writers on one post.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Comments of one post in append order
    async fn comments_of(conn: &mut PgConnection, post_id: i64) -> RepoResult<Vec<CommentModel>> {
        sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, author, body, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY position ASC
            ",
        )
        .bind(post_id)
        .fetch_all(conn)
        .await
        .map_err(map_db_error)
    }

    /// Start a read-only transaction that sees one consistent snapshot
    async fn snapshot(&self) -> RepoResult<sqlx::Transaction<'static, sqlx::Postgres>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        Ok(tx)
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let mut tx = self.snapshot().await?;

        let Some(model) = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, author, body, created_at, vote_count, comment_count
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        else {
            return Ok(None);
        };

        let comments = Self::comments_of(&mut *tx, model.id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(post_with_comments(model, comments)))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        let mut tx = self.snapshot().await?;

        let posts = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, author, body, created_at, vote_count, comment_count
            FROM posts
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let comments = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, author, body, created_at
            FROM comments
            ORDER BY post_id, position ASC
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let mut by_post: HashMap<i64, Vec<CommentModel>> = HashMap::new();
        for comment in comments {
            by_post.entry(comment.post_id).or_default().push(comment);
        }

        Ok(posts
            .into_iter()
            .map(|model| {
                let comments = by_post.remove(&model.id).unwrap_or_default();
                post_with_comments(model, comments)
            })
            .collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let insert = PostInsert::new(post);

        sqlx::query(
            r"
            INSERT INTO posts (id, author, body, created_at, vote_count, comment_count)
            VALUES ($1, $2, $3, $4, 0, 0)
            ",
        )
        .bind(insert.id)
        .bind(insert.author)
        .bind(insert.body)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!("post {} already exists", post.id))
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_votes(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let Some(model) = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET vote_count = vote_count + 1
            WHERE id = $1
            RETURNING id, author, body, created_at, vote_count, comment_count
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        else {
            return Ok(None);
        };

        let comments = Self::comments_of(&mut *tx, model.id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(post_with_comments(model, comments)))
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.post_id, comment_id = %comment.id))]
    async fn append_comment(&self, comment: &Comment) -> RepoResult<Option<Post>> {
        let insert = CommentInsert::new(comment);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Bumping the counter first locks the post row until commit
        let Some(model) = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET comment_count = comment_count + 1
            WHERE id = $1
            RETURNING id, author, body, created_at, vote_count, comment_count
            ",
        )
        .bind(insert.post_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        else {
            return Ok(None);
        };

        sqlx::query(
            r"
            INSERT INTO comments (id, post_id, position, author, body, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.post_id)
        .bind(model.comment_count)
        .bind(insert.author)
        .bind(insert.body)
        .bind(insert.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let comments = Self::comments_of(&mut *tx, model.id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(post_with_comments(model, comments)))
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
