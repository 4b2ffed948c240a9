//! 数据库未配置时的降级包装器
//!
//! 零配置本地运行是刻意保留的设计：没有提供链接字符串时，
//! 服务照常启动，所有读操作返回空结果，所有写操作变成 no-op，
//! 绝不因为后端不可达而让进程崩溃或请求报错。
//!
//! 原实现把 `isDatabaseConfigured()` 的判断散落在每个数据访问函数开头，
//! 这里收拢为一个包装具体实现的装饰器。

use crate::models::admin::{AdminCreate, AdminInfo};
use crate::models::article::{ArticleCreate, ArticleInfo, ArticleStats, ArticleUpdate};
use crate::models::product::{ProductCreate, ProductInfo, ProductUpdate};
use crate::models::profile::{ProfileInfo, ProfileUpdate};
use crate::repositories::traits::{
    AdminRepositoryTrait, ArticleRepositoryTrait, ProductRepositoryTrait, ProfileRepositoryTrait,
};
use crate::DatabaseResult;

/// 配置门控装饰器
///
/// `inner` 为 `Some` 时透传给具体实现；为 `None`（未配置）时
/// 每个操作返回各自的空值：列表为空、查询为 `None`、写入为 `false` / no-op
pub struct ConfigGated<R> {
    inner: Option<R>,
}

impl<R> ConfigGated<R> {
    /// 包装一个已就绪的后端
    pub fn new(inner: R) -> Self {
        Self { inner: Some(inner) }
    }

    /// 未配置状态
    pub fn unconfigured() -> Self {
        Self { inner: None }
    }

    /// 后端是否已配置
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

#[async_trait::async_trait]
impl<R: ArticleRepositoryTrait> ArticleRepositoryTrait for ConfigGated<R> {
    async fn list_articles(&self) -> DatabaseResult<Vec<ArticleInfo>> {
        match &self.inner {
            Some(repo) => repo.list_articles().await,
            None => Ok(Vec::new()),
        }
    }

    async fn list_published_articles(&self) -> DatabaseResult<Vec<ArticleInfo>> {
        match &self.inner {
            Some(repo) => repo.list_published_articles().await,
            None => Ok(Vec::new()),
        }
    }

    async fn get_article_by_slug(&self, slug: &str) -> DatabaseResult<Option<ArticleInfo>> {
        match &self.inner {
            Some(repo) => repo.get_article_by_slug(slug).await,
            None => Ok(None),
        }
    }

    async fn get_article_by_id(&self, id: i64) -> DatabaseResult<Option<ArticleInfo>> {
        match &self.inner {
            Some(repo) => repo.get_article_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn create_article(&self, article: ArticleCreate) -> DatabaseResult<Option<ArticleInfo>> {
        match &self.inner {
            Some(repo) => repo.create_article(article).await,
            None => Ok(None),
        }
    }

    async fn update_article(&self, id: i64, update: ArticleUpdate) -> DatabaseResult<bool> {
        match &self.inner {
            Some(repo) => repo.update_article(id, update).await,
            None => Ok(false),
        }
    }

    async fn delete_article(&self, id: i64) -> DatabaseResult<bool> {
        match &self.inner {
            Some(repo) => repo.delete_article(id).await,
            None => Ok(false),
        }
    }

    async fn increment_article_views(&self, id: i64) -> DatabaseResult<()> {
        match &self.inner {
            Some(repo) => repo.increment_article_views(id).await,
            None => Ok(()),
        }
    }

    async fn get_article_stats(&self) -> DatabaseResult<ArticleStats> {
        match &self.inner {
            Some(repo) => repo.get_article_stats().await,
            None => Ok(ArticleStats::default()),
        }
    }
}

#[async_trait::async_trait]
impl<R: ProductRepositoryTrait> ProductRepositoryTrait for ConfigGated<R> {
    async fn list_products(&self) -> DatabaseResult<Vec<ProductInfo>> {
        match &self.inner {
            Some(repo) => repo.list_products().await,
            None => Ok(Vec::new()),
        }
    }

    async fn get_product_by_slug(&self, slug: &str) -> DatabaseResult<Option<ProductInfo>> {
        match &self.inner {
            Some(repo) => repo.get_product_by_slug(slug).await,
            None => Ok(None),
        }
    }

    async fn get_product_by_id(&self, id: i64) -> DatabaseResult<Option<ProductInfo>> {
        match &self.inner {
            Some(repo) => repo.get_product_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn create_product(&self, product: ProductCreate) -> DatabaseResult<Option<ProductInfo>> {
        match &self.inner {
            Some(repo) => repo.create_product(product).await,
            None => Ok(None),
        }
    }

    async fn update_product(&self, id: i64, update: ProductUpdate) -> DatabaseResult<bool> {
        match &self.inner {
            Some(repo) => repo.update_product(id, update).await,
            None => Ok(false),
        }
    }

    async fn delete_product(&self, id: i64) -> DatabaseResult<bool> {
        match &self.inner {
            Some(repo) => repo.delete_product(id).await,
            None => Ok(false),
        }
    }

    async fn count_products(&self) -> DatabaseResult<i64> {
        match &self.inner {
            Some(repo) => repo.count_products().await,
            None => Ok(0),
        }
    }
}

#[async_trait::async_trait]
impl<R: AdminRepositoryTrait> AdminRepositoryTrait for ConfigGated<R> {
    async fn get_admin_by_username(&self, username: &str) -> DatabaseResult<Option<AdminInfo>> {
        match &self.inner {
            Some(repo) => repo.get_admin_by_username(username).await,
            None => Ok(None),
        }
    }

    async fn count_admins(&self) -> DatabaseResult<i64> {
        match &self.inner {
            Some(repo) => repo.count_admins().await,
            None => Ok(0),
        }
    }

    async fn create_admin(&self, admin: AdminCreate) -> DatabaseResult<Option<AdminInfo>> {
        match &self.inner {
            Some(repo) => repo.create_admin(admin).await,
            None => Ok(None),
        }
    }

    async fn update_admin_last_login(&self, id: i64) -> DatabaseResult<()> {
        match &self.inner {
            Some(repo) => repo.update_admin_last_login(id).await,
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl<R: ProfileRepositoryTrait> ProfileRepositoryTrait for ConfigGated<R> {
    async fn get_profile(&self) -> DatabaseResult<Option<ProfileInfo>> {
        match &self.inner {
            Some(repo) => repo.get_profile().await,
            None => Ok(None),
        }
    }

    async fn insert_profile(&self, profile: ProfileInfo) -> DatabaseResult<()> {
        match &self.inner {
            Some(repo) => repo.insert_profile(profile).await,
            None => Ok(()),
        }
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DatabaseResult<bool> {
        match &self.inner {
            Some(repo) => repo.update_profile(update).await,
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::postgres::PostgresRepository;
    use crate::STATUS_PUBLISHED;

    fn unconfigured() -> ConfigGated<PostgresRepository> {
        ConfigGated::unconfigured()
    }

    #[tokio::test]
    async fn unconfigured_reads_are_empty() {
        let repo = unconfigured();
        assert!(!repo.is_configured());

        assert!(repo.list_articles().await.unwrap().is_empty());
        assert!(repo.list_published_articles().await.unwrap().is_empty());
        assert!(repo.get_article_by_slug("a").await.unwrap().is_none());
        assert!(repo.get_article_by_id(1).await.unwrap().is_none());
        assert!(repo.list_products().await.unwrap().is_empty());
        assert!(repo.get_product_by_slug("p").await.unwrap().is_none());
        assert!(repo.get_admin_by_username("admin").await.unwrap().is_none());
        assert!(repo.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unconfigured_writes_are_noops() {
        let repo = unconfigured();

        let created = repo
            .create_article(ArticleCreate {
                title: "A".to_string(),
                slug: "a".to_string(),
                content: "hello".to_string(),
                excerpt: String::new(),
                cover_image: None,
                category: String::new(),
                tags: String::new(),
                status: STATUS_PUBLISHED.to_string(),
            })
            .await
            .unwrap();
        assert!(created.is_none());

        let updated = repo
            .update_article(
                1,
                ArticleUpdate {
                    title: "A".to_string(),
                    slug: "a".to_string(),
                    content: "hello".to_string(),
                    excerpt: String::new(),
                    cover_image: None,
                    category: String::new(),
                    tags: String::new(),
                    status: STATUS_PUBLISHED.to_string(),
                },
            )
            .await
            .unwrap();
        assert!(!updated);

        assert!(!repo.delete_article(1).await.unwrap());
        repo.increment_article_views(1).await.unwrap();
        repo.update_admin_last_login(1).await.unwrap();
    }

    #[tokio::test]
    async fn unconfigured_stats_are_zeroed() {
        let repo = unconfigured();

        let stats = repo.get_article_stats().await.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.published, 0);
        assert_eq!(stats.total_views, 0);
        assert_eq!(repo.count_products().await.unwrap(), 0);
        assert_eq!(repo.count_admins().await.unwrap(), 0);
    }
}
