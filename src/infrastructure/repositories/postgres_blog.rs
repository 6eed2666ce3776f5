// src/infrastructure/repositories/postgres_blog.rs
use super::map_sqlx;
use crate::domain::blog::{
    Blog, BlogFilter, BlogId, BlogReadRepository, BlogWriteRepository, NewBlog, SafeBlog,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const FULL_COLUMNS: &str =
    "id, title, summary, content, cover_url, published, author_id, created_at, updated_at";
const SAFE_COLUMNS: &str =
    "id, title, summary, cover_url, published, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBlogWriteRepository {
    pool: PgPool,
}

impl PostgresBlogWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlogReadRepository {
    pool: PgPool,
}

impl PostgresBlogReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    summary: String,
    content: String,
    cover_url: Option<String>,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId::new(row.id)?,
            title: row.title,
            summary: row.summary,
            content: row.content,
            cover_url: row.cover_url,
            published: row.published,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Projected row; the query never selects `content`.
#[derive(Debug, FromRow)]
struct SafeBlogRow {
    id: i64,
    title: String,
    summary: String,
    cover_url: Option<String>,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SafeBlogRow> for SafeBlog {
    type Error = DomainError;

    fn try_from(row: SafeBlogRow) -> Result<Self, Self::Error> {
        Ok(SafeBlog {
            id: BlogId::new(row.id)?,
            title: row.title,
            summary: row.summary,
            cover_url: row.cover_url,
            published: row.published,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: BlogFilter) {
    let mut keyword = " WHERE ";

    if let Some(id) = filter.id {
        builder.push(keyword).push("id = ").push_bind(i64::from(id));
        keyword = " AND ";
    }
    if let Some(author_id) = filter.author_id {
        builder
            .push(keyword)
            .push("author_id = ")
            .push_bind(i64::from(author_id));
        keyword = " AND ";
    }
    if let Some(published) = filter.published {
        builder
            .push(keyword)
            .push("published = ")
            .push_bind(published);
    }
}

#[async_trait]
impl BlogReadRepository for PostgresBlogReadRepository {
    async fn find(&self, filter: BlogFilter) -> DomainResult<Vec<SafeBlog>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {SAFE_COLUMNS} FROM blogs"));
        apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<SafeBlogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(SafeBlog::try_from).collect()
    }

    async fn find_one(&self, filter: BlogFilter) -> DomainResult<Option<Blog>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {FULL_COLUMNS} FROM blogs"));
        apply_filter(&mut builder, filter);
        builder.push(" ORDER BY id LIMIT 1");

        let row = builder
            .build_query_as::<BlogRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Blog::try_from).transpose()
    }
}

#[async_trait]
impl BlogWriteRepository for PostgresBlogWriteRepository {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let NewBlog {
            title,
            summary,
            content,
            cover_url,
            author_id,
            created_at,
        } = blog;

        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "INSERT INTO blogs (title, summary, content, cover_url, published, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, FALSE, $5, $6, $6)
             RETURNING {FULL_COLUMNS}"
        ))
        .bind(title)
        .bind(summary)
        .bind(content)
        .bind(cover_url)
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Blog::try_from(row)
    }

    async fn save(&self, blog: &Blog) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE blogs
             SET title = $1, summary = $2, content = $3, cover_url = $4, published = $5, updated_at = $6
             WHERE id = $7",
        )
        .bind(&blog.title)
        .bind(&blog.summary)
        .bind(&blog.content)
        .bind(&blog.cover_url)
        .bind(blog.published)
        .bind(blog.updated_at)
        .bind(i64::from(blog.id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blog not found".into()));
        }
        Ok(())
    }
}
