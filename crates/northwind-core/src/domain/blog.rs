//! Blogging domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `blog_articles` table.
///
/// `author_id` references an employee; the blogging store carries no
/// foreign key for it, so the check happens at the controller layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogArticle {
    pub article_id: i32,
    pub title: String,
    pub text: String,
    pub posted: Option<DateTime<Utc>>,
    pub author_id: i32,
}

/// A row of the `blog_comments` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogComment {
    pub comment_id: i32,
    pub article_id: i32,
    pub text: String,
    pub published: Option<DateTime<Utc>>,
}

/// A row of the `blog_article_products` link table.
///
/// An association record: no identity beyond its own id, and at most one
/// link per (article, product) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogArticleProduct {
    pub id: i32,
    pub article_id: i32,
    pub product_id: i32,
}
