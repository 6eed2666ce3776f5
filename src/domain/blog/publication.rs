// src/domain/blog/publication.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationState {
    Unpublished,
    Published,
}

impl PublicationState {
    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpublished => "unpublished",
            Self::Published => "published",
        }
    }
}

impl From<bool> for PublicationState {
    fn from(published: bool) -> Self {
        if published {
            Self::Published
        } else {
            Self::Unpublished
        }
    }
}

impl fmt::Display for PublicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationTransition {
    Publish,
    Unpublish,
}

impl PublicationTransition {
    pub fn target(self) -> PublicationState {
        match self {
            Self::Publish => PublicationState::Published,
            Self::Unpublish => PublicationState::Unpublished,
        }
    }

    pub fn from_flag(publish: bool) -> Self {
        if publish { Self::Publish } else { Self::Unpublish }
    }
}
