//! Blogging management service: articles, comments, article-product links.

use crate::dto::{
    BlogArticleRequest, BlogArticleResponse, BlogArticleSummaryResponse, BlogCommentRequest,
    BlogCommentResponse,
};
use async_trait::async_trait;
use chrono::Utc;
use northwind_core::{
    BlogArticle, BlogArticleProduct, BlogComment, NorthwindResult, PageRequest, ValidateExt,
};
use northwind_dao::{BlogArticleDao, BlogArticleProductDao, BlogCommentDao, RetryPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// Blogging management service trait.
#[async_trait]
pub trait BloggingService: Send + Sync {
    /// Shows a page of articles (list view, no body text).
    async fn show_articles(
        &self,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogArticleSummaryResponse>>;

    /// Shows a single article; `None` when absent.
    async fn try_show_article(&self, id: i32) -> NorthwindResult<Option<BlogArticleResponse>>;

    /// Creates a new article stamped with the current time.
    async fn create_article(&self, request: BlogArticleRequest) -> NorthwindResult<i32>;

    /// Replaces an article's title and text. Returns `false` when absent.
    async fn update_article(&self, id: i32, request: BlogArticleRequest) -> NorthwindResult<bool>;

    /// Deletes an article (and, at the store, its comments and links).
    async fn destroy_article(&self, id: i32) -> NorthwindResult<bool>;

    /// Shows a page of an article's comments.
    async fn show_comments(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogCommentResponse>>;

    /// Shows a single comment scoped to an article; `None` when the
    /// comment is absent or belongs to another article.
    async fn try_show_comment(
        &self,
        article_id: i32,
        comment_id: i32,
    ) -> NorthwindResult<Option<BlogCommentResponse>>;

    /// Creates a comment on an article, stamped with the current time.
    async fn create_comment(
        &self,
        article_id: i32,
        request: BlogCommentRequest,
    ) -> NorthwindResult<i32>;

    /// Replaces a comment's text. Returns `false` when the comment is
    /// absent or belongs to another article.
    async fn update_comment(
        &self,
        article_id: i32,
        comment_id: i32,
        request: BlogCommentRequest,
    ) -> NorthwindResult<bool>;

    /// Deletes a comment scoped to an article.
    async fn destroy_comment(&self, article_id: i32, comment_id: i32) -> NorthwindResult<bool>;

    /// Shows a page of an article's product links.
    async fn show_article_products(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogArticleProduct>>;

    /// Links a product to an article. Duplicate pairs and dangling ids
    /// are rejected by the store's constraints.
    async fn link_product(&self, article_id: i32, product_id: i32) -> NorthwindResult<i32>;

    /// Removes a product link. Returns `false` when no such link exists.
    async fn unlink_product(&self, article_id: i32, product_id: i32) -> NorthwindResult<bool>;
}

/// Blogging management service backed by the blogging DAOs.
pub struct BloggingServiceImpl {
    articles: Arc<dyn BlogArticleDao>,
    comments: Arc<dyn BlogCommentDao>,
    links: Arc<dyn BlogArticleProductDao>,
    read_retry: RetryPolicy,
}

impl BloggingServiceImpl {
    /// Creates a new blogging service.
    #[must_use]
    pub fn new(
        articles: Arc<dyn BlogArticleDao>,
        comments: Arc<dyn BlogCommentDao>,
        links: Arc<dyn BlogArticleProductDao>,
    ) -> Self {
        Self {
            articles,
            comments,
            links,
            read_retry: RetryPolicy::default(),
        }
    }

    /// Finds a comment if it exists and belongs to the article.
    async fn find_scoped_comment(
        &self,
        article_id: i32,
        comment_id: i32,
    ) -> NorthwindResult<Option<BlogComment>> {
        match self.read_retry.execute(|| self.comments.find(comment_id)).await {
            Ok(comment) if comment.article_id == article_id => Ok(Some(comment)),
            Ok(_) => Ok(None),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl BloggingService for BloggingServiceImpl {
    async fn show_articles(
        &self,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogArticleSummaryResponse>> {
        debug!(
            "Showing articles, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let articles = self
            .read_retry
            .execute(|| self.articles.select_page(page))
            .await?;
        Ok(articles
            .into_iter()
            .map(BlogArticleSummaryResponse::from)
            .collect())
    }

    async fn try_show_article(&self, id: i32) -> NorthwindResult<Option<BlogArticleResponse>> {
        debug!("Showing article: {}", id);

        match self.read_retry.execute(|| self.articles.find(id)).await {
            Ok(article) => Ok(Some(BlogArticleResponse::from(article))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_article(&self, request: BlogArticleRequest) -> NorthwindResult<i32> {
        request.validate_request()?;

        let article = BlogArticle {
            article_id: 0,
            title: request.title,
            text: request.text,
            posted: Some(Utc::now()),
            author_id: request.author_id,
        };

        let id = self.articles.insert(&article).await?;
        info!("Blog article created: {}", id);
        Ok(id)
    }

    async fn update_article(&self, id: i32, request: BlogArticleRequest) -> NorthwindResult<bool> {
        request.validate_request()?;

        let article = BlogArticle {
            article_id: id,
            title: request.title,
            text: request.text,
            posted: None,
            author_id: request.author_id,
        };

        let updated = self.articles.update(&article).await?;
        if updated {
            info!("Blog article updated: {}", id);
        }
        Ok(updated)
    }

    async fn destroy_article(&self, id: i32) -> NorthwindResult<bool> {
        let deleted = self.articles.delete(id).await?;
        if deleted {
            info!("Blog article deleted: {}", id);
        }
        Ok(deleted)
    }

    async fn show_comments(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogCommentResponse>> {
        let comments = self
            .read_retry
            .execute(|| self.comments.select_by_article(article_id, page))
            .await?;
        Ok(comments.into_iter().map(BlogCommentResponse::from).collect())
    }

    async fn try_show_comment(
        &self,
        article_id: i32,
        comment_id: i32,
    ) -> NorthwindResult<Option<BlogCommentResponse>> {
        Ok(self
            .find_scoped_comment(article_id, comment_id)
            .await?
            .map(BlogCommentResponse::from))
    }

    async fn create_comment(
        &self,
        article_id: i32,
        request: BlogCommentRequest,
    ) -> NorthwindResult<i32> {
        request.validate_request()?;

        let comment = BlogComment {
            comment_id: 0,
            article_id,
            text: request.text,
            published: Some(Utc::now()),
        };

        let id = self.comments.insert(&comment).await?;
        info!("Blog comment created: {} on article {}", id, article_id);
        Ok(id)
    }

    async fn update_comment(
        &self,
        article_id: i32,
        comment_id: i32,
        request: BlogCommentRequest,
    ) -> NorthwindResult<bool> {
        request.validate_request()?;

        let Some(mut comment) = self.find_scoped_comment(article_id, comment_id).await? else {
            return Ok(false);
        };

        comment.text = request.text;
        let updated = self.comments.update(&comment).await?;
        if updated {
            info!("Blog comment updated: {}", comment_id);
        }
        Ok(updated)
    }

    async fn destroy_comment(&self, article_id: i32, comment_id: i32) -> NorthwindResult<bool> {
        if self.find_scoped_comment(article_id, comment_id).await?.is_none() {
            return Ok(false);
        }

        let deleted = self.comments.delete(comment_id).await?;
        if deleted {
            info!("Blog comment deleted: {}", comment_id);
        }
        Ok(deleted)
    }

    async fn show_article_products(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogArticleProduct>> {
        self.read_retry
            .execute(|| self.links.select_by_article(article_id, page))
            .await
    }

    async fn link_product(&self, article_id: i32, product_id: i32) -> NorthwindResult<i32> {
        let id = self.links.link(article_id, product_id).await?;
        info!("Article {} linked to product {}", article_id, product_id);
        Ok(id)
    }

    async fn unlink_product(&self, article_id: i32, product_id: i32) -> NorthwindResult<bool> {
        let removed = self.links.unlink(article_id, product_id).await?;
        if removed {
            info!("Article {} unlinked from product {}", article_id, product_id);
        }
        Ok(removed)
    }
}

impl std::fmt::Debug for BloggingServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloggingServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::NorthwindError;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct MockBlogStore {
        articles: Mutex<BTreeMap<i32, BlogArticle>>,
        comments: Mutex<BTreeMap<i32, BlogComment>>,
        links: Mutex<BTreeMap<i32, BlogArticleProduct>>,
        next_id: Mutex<i32>,
    }

    impl MockBlogStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                articles: Mutex::new(BTreeMap::new()),
                comments: Mutex::new(BTreeMap::new()),
                links: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
            })
        }

        fn next_id(&self) -> i32 {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        }
    }

    #[async_trait]
    impl BlogArticleDao for MockBlogStore {
        async fn insert(&self, article: &BlogArticle) -> NorthwindResult<i32> {
            let id = self.next_id();
            let mut stored = article.clone();
            stored.article_id = id;
            self.articles.lock().unwrap().insert(id, stored);
            Ok(id)
        }

        async fn delete(&self, id: i32) -> NorthwindResult<bool> {
            let removed = self.articles.lock().unwrap().remove(&id).is_some();
            if removed {
                self.comments.lock().unwrap().retain(|_, c| c.article_id != id);
                self.links.lock().unwrap().retain(|_, l| l.article_id != id);
            }
            Ok(removed)
        }

        async fn update(&self, article: &BlogArticle) -> NorthwindResult<bool> {
            let mut articles = self.articles.lock().unwrap();
            match articles.get_mut(&article.article_id) {
                Some(existing) => {
                    existing.title = article.title.clone();
                    existing.text = article.text.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn find(&self, id: i32) -> NorthwindResult<BlogArticle> {
            self.articles
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(NorthwindError::not_found("BlogArticle", id))
        }

        async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<BlogArticle>> {
            Ok(self
                .articles
                .lock()
                .unwrap()
                .values()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl BlogCommentDao for MockBlogStore {
        async fn insert(&self, comment: &BlogComment) -> NorthwindResult<i32> {
            if !self.articles.lock().unwrap().contains_key(&comment.article_id) {
                return Err(NorthwindError::constraint("no such article"));
            }
            let id = self.next_id();
            let mut stored = comment.clone();
            stored.comment_id = id;
            self.comments.lock().unwrap().insert(id, stored);
            Ok(id)
        }

        async fn delete(&self, id: i32) -> NorthwindResult<bool> {
            Ok(self.comments.lock().unwrap().remove(&id).is_some())
        }

        async fn update(&self, comment: &BlogComment) -> NorthwindResult<bool> {
            let mut comments = self.comments.lock().unwrap();
            match comments.get_mut(&comment.comment_id) {
                Some(existing) => {
                    existing.text = comment.text.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn find(&self, id: i32) -> NorthwindResult<BlogComment> {
            self.comments
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(NorthwindError::not_found("BlogComment", id))
        }

        async fn select_by_article(
            &self,
            article_id: i32,
            page: PageRequest,
        ) -> NorthwindResult<Vec<BlogComment>> {
            Ok(self
                .comments
                .lock()
                .unwrap()
                .values()
                .filter(|c| c.article_id == article_id)
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl BlogArticleProductDao for MockBlogStore {
        async fn select_by_article(
            &self,
            article_id: i32,
            page: PageRequest,
        ) -> NorthwindResult<Vec<BlogArticleProduct>> {
            Ok(self
                .links
                .lock()
                .unwrap()
                .values()
                .filter(|l| l.article_id == article_id)
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }

        async fn link(&self, article_id: i32, product_id: i32) -> NorthwindResult<i32> {
            if !self.articles.lock().unwrap().contains_key(&article_id) {
                return Err(NorthwindError::constraint("no such article"));
            }
            let mut links = self.links.lock().unwrap();
            if links
                .values()
                .any(|l| l.article_id == article_id && l.product_id == product_id)
            {
                return Err(NorthwindError::constraint("duplicate link"));
            }
            let id = self.next_id();
            links.insert(
                id,
                BlogArticleProduct {
                    id,
                    article_id,
                    product_id,
                },
            );
            Ok(id)
        }

        async fn unlink(&self, article_id: i32, product_id: i32) -> NorthwindResult<bool> {
            let mut links = self.links.lock().unwrap();
            let target = links
                .iter()
                .find(|(_, l)| l.article_id == article_id && l.product_id == product_id)
                .map(|(id, _)| *id);
            Ok(target.is_some_and(|id| links.remove(&id).is_some()))
        }
    }

    fn service() -> (BloggingServiceImpl, Arc<MockBlogStore>) {
        let store = MockBlogStore::new();
        let service = BloggingServiceImpl::new(store.clone(), store.clone(), store.clone());
        (service, store)
    }

    fn article_request(title: &str) -> BlogArticleRequest {
        BlogArticleRequest {
            title: title.to_string(),
            text: "Body".to_string(),
            author_id: 1,
        }
    }

    #[tokio::test]
    async fn test_create_article_stamps_posted() {
        let (service, store) = service();

        let id = service.create_article(article_request("Coffee")).await.unwrap();
        let stored = store.articles.lock().unwrap().get(&id).cloned().unwrap();
        assert!(stored.posted.is_some());
    }

    #[tokio::test]
    async fn test_try_show_article_absent_is_none() {
        let (service, _) = service();
        assert!(service.try_show_article(9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_article_replaces_text_only() {
        let (service, store) = service();
        let id = service.create_article(article_request("Coffee")).await.unwrap();
        let posted_before = store.articles.lock().unwrap().get(&id).unwrap().posted;

        let mut request = article_request("Tea");
        request.text = "New body".to_string();
        assert!(service.update_article(id, request).await.unwrap());

        let stored = store.articles.lock().unwrap().get(&id).cloned().unwrap();
        assert_eq!(stored.title, "Tea");
        assert_eq!(stored.text, "New body");
        assert_eq!(stored.posted, posted_before);
    }

    #[tokio::test]
    async fn test_comment_lifecycle_scoped_to_article() {
        let (service, _) = service();
        let first = service.create_article(article_request("First")).await.unwrap();
        let second = service.create_article(article_request("Second")).await.unwrap();

        let comment_id = service
            .create_comment(
                first,
                BlogCommentRequest {
                    text: "Nice".to_string(),
                },
            )
            .await
            .unwrap();

        // Visible under its own article, invisible under another.
        assert!(service
            .try_show_comment(first, comment_id)
            .await
            .unwrap()
            .is_some());
        assert!(service
            .try_show_comment(second, comment_id)
            .await
            .unwrap()
            .is_none());

        // Updates and deletes respect the same scope.
        assert!(!service
            .update_comment(
                second,
                comment_id,
                BlogCommentRequest {
                    text: "Hijack".to_string()
                }
            )
            .await
            .unwrap());
        assert!(service
            .update_comment(
                first,
                comment_id,
                BlogCommentRequest {
                    text: "Edited".to_string()
                }
            )
            .await
            .unwrap());

        assert!(!service.destroy_comment(second, comment_id).await.unwrap());
        assert!(service.destroy_comment(first, comment_id).await.unwrap());
        assert!(service
            .try_show_comment(first, comment_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_comment_on_missing_article_is_constraint_error() {
        let (service, _) = service();
        let err = service
            .create_comment(
                99,
                BlogCommentRequest {
                    text: "Orphan".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "CONSTRAINT_VIOLATION");
    }

    #[tokio::test]
    async fn test_duplicate_link_is_rejected() {
        let (service, _) = service();
        let article_id = service.create_article(article_request("Linked")).await.unwrap();

        service.link_product(article_id, 7).await.unwrap();
        let err = service.link_product(article_id, 7).await.unwrap_err();
        assert_eq!(err.error_code(), "CONSTRAINT_VIOLATION");

        let links = service
            .show_article_products(article_id, PageRequest::first())
            .await
            .unwrap();
        assert_eq!(links.len(), 1);
    }

    #[tokio::test]
    async fn test_unlink_twice_returns_false() {
        let (service, _) = service();
        let article_id = service.create_article(article_request("Linked")).await.unwrap();
        service.link_product(article_id, 7).await.unwrap();

        assert!(service.unlink_product(article_id, 7).await.unwrap());
        assert!(!service.unlink_product(article_id, 7).await.unwrap());
    }
}
