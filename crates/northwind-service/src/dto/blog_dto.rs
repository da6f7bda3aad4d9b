//! Blogging DTOs.

use chrono::{DateTime, Utc};
use northwind_core::{rules::not_blank, BlogArticle, BlogComment};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or replacing a blog article.
///
/// `author_id` matters on create; replacement keeps the original author.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogArticleRequest {
    #[validate(custom(function = not_blank))]
    pub title: String,

    #[validate(custom(function = not_blank))]
    pub text: String,

    #[validate(range(min = 1))]
    pub author_id: i32,
}

/// Blog article list view: everything but the body text, plus the author's
/// display name resolved at the controller layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogArticleSummaryResponse {
    pub article_id: i32,
    pub title: String,
    pub posted: Option<DateTime<Utc>>,
    pub author_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

impl From<BlogArticle> for BlogArticleSummaryResponse {
    fn from(article: BlogArticle) -> Self {
        Self {
            article_id: article.article_id,
            title: article.title,
            posted: article.posted,
            author_id: article.author_id,
            author_name: None,
        }
    }
}

/// Blog article detail view: the summary plus the body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogArticleResponse {
    pub article_id: i32,
    pub title: String,
    pub posted: Option<DateTime<Utc>>,
    pub author_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub text: String,
}

impl From<BlogArticle> for BlogArticleResponse {
    fn from(article: BlogArticle) -> Self {
        Self {
            article_id: article.article_id,
            title: article.title,
            posted: article.posted,
            author_id: article.author_id,
            author_name: None,
            text: article.text,
        }
    }
}

/// Request body for creating or replacing a blog comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogCommentRequest {
    #[validate(custom(function = not_blank))]
    pub text: String,
}

/// Blog comment response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCommentResponse {
    pub comment_id: i32,
    pub article_id: i32,
    pub text: String,
    pub published: Option<DateTime<Utc>>,
}

impl From<BlogComment> for BlogCommentResponse {
    fn from(comment: BlogComment) -> Self {
        Self {
            comment_id: comment.comment_id,
            article_id: comment.article_id,
            text: comment.text,
            published: comment.published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_request_requires_title_and_text() {
        let request = BlogArticleRequest {
            title: "".to_string(),
            text: "Body".to_string(),
            author_id: 1,
        };
        assert!(request.validate().is_err());

        let request = BlogArticleRequest {
            title: "Title".to_string(),
            text: "Body".to_string(),
            author_id: 1,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_article_request_rejects_non_positive_author() {
        let request = BlogArticleRequest {
            title: "Title".to_string(),
            text: "Body".to_string(),
            author_id: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_summary_omits_text_and_absent_author_name() {
        let article = BlogArticle {
            article_id: 1,
            title: "Gourmet coffee".to_string(),
            text: "Long body".to_string(),
            posted: None,
            author_id: 2,
        };
        let json = serde_json::to_string(&BlogArticleSummaryResponse::from(article)).unwrap();
        assert!(!json.contains("Long body"));
        assert!(!json.contains("author_name"));
    }

    #[test]
    fn test_comment_request_requires_text() {
        assert!(BlogCommentRequest {
            text: "  ".to_string()
        }
        .validate()
        .is_err());
    }
}
