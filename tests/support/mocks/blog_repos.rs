// tests/support/mocks/blog_repos.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use resdev_core::domain::blog::{
    Blog, BlogFilter, BlogId, BlogReadRepository, BlogWriteRepository, NewBlog, SafeBlog,
};
use resdev_core::domain::errors::{DomainError, DomainResult};

/// One table backing both the read and the write port.
#[derive(Default)]
pub struct InMemoryBlogStore {
    blogs: Mutex<Vec<Blog>>,
    saves: AtomicUsize,
}

impl InMemoryBlogStore {
    pub fn put(&self, blog: Blog) {
        self.blogs.lock().unwrap().push(blog);
    }

    pub fn get(&self, id: i64) -> Option<Blog> {
        let id = BlogId::new(id).ok()?;
        self.blogs.lock().unwrap().iter().find(|b| b.id == id).cloned()
    }

    /// Number of `save` calls that reached storage.
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn matching(&self, filter: BlogFilter) -> Vec<Blog> {
        let mut rows: Vec<Blog> = self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| filter.matches(b.id, b.author_id, b.published))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        rows
    }
}

#[async_trait]
impl BlogReadRepository for InMemoryBlogStore {
    async fn find(&self, filter: BlogFilter) -> DomainResult<Vec<SafeBlog>> {
        Ok(self.matching(filter).into_iter().map(SafeBlog::from).collect())
    }

    async fn find_one(&self, filter: BlogFilter) -> DomainResult<Option<Blog>> {
        Ok(self.matching(filter).into_iter().next())
    }
}

#[async_trait]
impl BlogWriteRepository for InMemoryBlogStore {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let mut blogs = self.blogs.lock().unwrap();
        let next_id = blogs.iter().map(|b| i64::from(b.id)).max().unwrap_or(0) + 1;
        let stored = Blog {
            id: BlogId::new(next_id)?,
            title: blog.title,
            summary: blog.summary,
            content: blog.content,
            cover_url: blog.cover_url,
            published: false,
            author_id: blog.author_id,
            created_at: blog.created_at,
            updated_at: blog.created_at,
        };
        blogs.push(stored.clone());
        Ok(stored)
    }

    async fn save(&self, blog: &Blog) -> DomainResult<()> {
        let mut blogs = self.blogs.lock().unwrap();
        let row = blogs
            .iter_mut()
            .find(|b| b.id == blog.id)
            .ok_or_else(|| DomainError::NotFound("blog not found".into()))?;
        let author_id = row.author_id;
        *row = Blog {
            author_id,
            ..blog.clone()
        };
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A gateway that ignores the `published` filter, returning drafts too.
pub struct LeakyBlogReader(pub Arc<InMemoryBlogStore>);

#[async_trait]
impl BlogReadRepository for LeakyBlogReader {
    async fn find(&self, filter: BlogFilter) -> DomainResult<Vec<SafeBlog>> {
        self.0
            .find(BlogFilter {
                published: None,
                ..filter
            })
            .await
    }

    async fn find_one(&self, filter: BlogFilter) -> DomainResult<Option<Blog>> {
        self.0
            .find_one(BlogFilter {
                published: None,
                ..filter
            })
            .await
    }
}
