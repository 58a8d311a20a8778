use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::content::{Author, Interest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Article,
    Blog,
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostKind::Article => write!(f, "article"),
            PostKind::Blog => write!(f, "blog"),
        }
    }
}

impl FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(PostKind::Article),
            "blog" => Ok(PostKind::Blog),
            other => Err(format!("unknown post kind '{}'", other)),
        }
    }
}

/// Kind-specific part of a post
#[derive(Debug, Clone, PartialEq)]
pub enum PostBody {
    Article { introduction: String },
    /// Plain-text excerpt of the blog's HTML content
    Blog { excerpt: String },
}

/// Identifies a post across the merged feed. Articles and blogs come from
/// independent id spaces, so the id alone is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostKey {
    pub kind: PostKind,
    pub id: String,
}

impl fmt::Display for PostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}

/// An article or blog normalized for the feed
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: PostBody,
    pub category: Option<Interest>,
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
}

impl Post {
    pub fn kind(&self) -> PostKind {
        match self.body {
            PostBody::Article { .. } => PostKind::Article,
            PostBody::Blog { .. } => PostKind::Blog,
        }
    }

    pub fn preview(&self) -> &str {
        match &self.body {
            PostBody::Article { introduction } => introduction,
            PostBody::Blog { excerpt } => excerpt,
        }
    }

    pub fn key(&self) -> PostKey {
        PostKey {
            kind: self.kind(),
            id: self.id.clone(),
        }
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.id.as_str())
    }

    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.id.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    #[default]
    User,
    Admin,
}

/// The identity a feed is ranked for. `id == None` is an anonymous viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewer {
    pub id: Option<String>,
    pub interest_ids: HashSet<String>,
    pub role: ViewerRole,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn identified<I, S>(id: impl Into<String>, interest_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Some(id.into()),
            interest_ids: interest_ids.into_iter().map(Into::into).collect(),
            role: ViewerRole::User,
        }
    }

    pub fn with_role(mut self, role: ViewerRole) -> Self {
        self.role = role;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.id.is_some() && self.role == ViewerRole::Admin
    }

    /// Whether ranking should apply the interest partition for this viewer
    pub fn personalizes(&self) -> bool {
        self.id.is_some() && !self.interest_ids.is_empty()
    }

    /// Posts without a category never match
    pub fn is_interested_in(&self, post: &Post) -> bool {
        post.category_id()
            .is_some_and(|id| self.interest_ids.contains(id))
    }

    /// Authors manage their own posts; admins manage every post
    pub fn can_manage(&self, post: &Post) -> bool {
        match &self.id {
            None => false,
            Some(_) if self.role == ViewerRole::Admin => true,
            Some(id) => post.author_id() == Some(id.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(PostKind),
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(KindFilter::All),
            other => other.parse().map(KindFilter::Only),
        }
    }
}

/// Search, category and kind predicates chosen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: CategoryFilter,
    pub kind: KindFilter,
}

impl FilterCriteria {
    pub fn new(search_text: impl Into<String>, category: &str, kind: KindFilter) -> Self {
        let category = match category {
            "" | "all" => CategoryFilter::All,
            id => CategoryFilter::Only(id.to_string()),
        };
        Self {
            search_text: search_text.into(),
            category,
            kind,
        }
    }
}
