// src/domain/blog/entity.rs
use crate::domain::blog::publication::{PublicationState, PublicationTransition};
use crate::domain::blog::value_objects::BlogId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_url: Option<String>,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    pub fn publication_state(&self) -> PublicationState {
        PublicationState::from(self.published)
    }

    /// Moves the blog into the transition's target state.
    ///
    /// Returns `false` when the blog was already there, in which case nothing
    /// (not even `updated_at`) is touched.
    pub fn apply_transition(
        &mut self,
        transition: PublicationTransition,
        now: DateTime<Utc>,
    ) -> bool {
        let target = transition.target();
        if self.publication_state() == target {
            return false;
        }
        self.published = target.is_published();
        self.updated_at = now;
        true
    }

    pub fn apply_edit(&mut self, edit: BlogEdit, now: DateTime<Utc>) {
        let BlogEdit {
            title,
            summary,
            content,
            cover_url,
        } = edit;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(cover_url) = cover_url {
            self.cover_url = cover_url;
        }
        self.updated_at = now;
    }
}

/// A blog that has not been stored yet. There is no `published` field: every
/// blog starts out unpublished.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_url: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewBlog {
    pub fn draft(
        title: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
        cover_url: Option<String>,
        author_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            content: content.into(),
            cover_url,
            author_id,
            created_at,
        }
    }
}

/// Author edits. `cover_url` is doubly optional so an edit can clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogEdit {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<Option<String>>,
}

impl BlogEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.content.is_none()
            && self.cover_url.is_none()
    }
}
