//! JSON 文件仓库实现
//!
//! 整个数据集是一份内存结构，每次变更后全量写回单个 JSON 文件。
//! 文件顶层结构固定为 `articles` / `products` / `admins` / `profile`。
//!
//! 写入采用"临时文件 + rename"的原子替换，保证文件任何时刻都是合法 JSON，
//! 不会出现写一半的截断内容。进程内所有变更由互斥锁串行化；
//! 多进程同时写同一个文件仍然是后写覆盖先写，这是已接受的限制。

use crate::models::admin::{AdminCreate, AdminInfo};
use crate::models::article::{ArticleCreate, ArticleInfo, ArticleStats, ArticleUpdate};
use crate::models::product::{ProductCreate, ProductInfo, ProductUpdate};
use crate::models::profile::{ProfileInfo, ProfileUpdate};
use crate::repositories::traits::{
    AdminRepositoryTrait, ArticleRepositoryTrait, ProductRepositoryTrait, ProfileRepositoryTrait,
};
use crate::{DatabaseError, DatabaseResult, STATUS_PUBLISHED};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// 数据文件的顶层结构
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteData {
    articles: Vec<ArticleInfo>,
    products: Vec<ProductInfo>,
    admins: Vec<AdminInfo>,
    profile: ProfileInfo,
}

impl SiteData {
    /// 首次启动的种子数据：空集合 + 默认个人资料
    fn default_seed() -> Self {
        SiteData {
            articles: Vec::new(),
            products: Vec::new(),
            admins: Vec::new(),
            profile: ProfileInfo::default_seed(),
        }
    }
}

/// JSON 文件仓库结构体
///
/// 数据集整体持有在一个互斥锁后面，文件路径固定
pub struct JsonFileRepository {
    path: PathBuf,
    data: Mutex<SiteData>,
}

impl JsonFileRepository {
    /// 打开（或初始化）数据文件
    ///
    /// - 文件不存在：创建父目录并写入种子数据
    /// - 文件损坏或不可读：打印告警后回退到内存种子数据，
    ///   读操作照常工作，下一次成功写入会替换掉损坏的文件
    pub async fn open(path: impl Into<PathBuf>) -> DatabaseResult<Self> {
        let path = path.into();

        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<SiteData>(&bytes) {
                Ok(data) => data,
                Err(e) => {
                    warn!("⚠️ 数据文件解析失败，回退到默认种子数据: {}", e);
                    SiteData::default_seed()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("📄 数据文件不存在，初始化: {}", path.display());
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                let seed = SiteData::default_seed();
                write_atomic(&path, &seed).await?;
                seed
            }
            Err(e) => {
                warn!("⚠️ 数据文件读取失败，回退到默认种子数据: {}", e);
                SiteData::default_seed()
            }
        };

        Ok(JsonFileRepository {
            path,
            data: Mutex::new(data),
        })
    }

    /// 全量写回数据文件
    ///
    /// 调用方必须持有数据锁，保证写入串行
    async fn persist(&self, data: &SiteData) -> DatabaseResult<()> {
        if let Err(e) = write_atomic(&self.path, data).await {
            error!("❌ 数据文件写入失败: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

/// 序列化后先写临时文件再 rename，原子替换
async fn write_atomic(path: &std::path::Path, data: &SiteData) -> DatabaseResult<()> {
    let bytes = serde_json::to_vec_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// 生成新记录 id
///
/// 以当前毫秒时间戳为基础，与现有 id 冲突时顺延到最大值 + 1
fn next_id(existing: impl Iterator<Item = i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    let max = existing.max().unwrap_or(0);
    if now > max {
        now
    } else {
        max + 1
    }
}

/// 文章排序：created_at 降序
fn sort_articles(articles: &mut [ArticleInfo]) {
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// 产品排序：featured 降序、display_order 升序、created_at 降序
fn sort_products(products: &mut [ProductInfo]) {
    products.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| a.display_order.cmp(&b.display_order))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[async_trait::async_trait]
impl ArticleRepositoryTrait for JsonFileRepository {
    async fn list_articles(&self) -> DatabaseResult<Vec<ArticleInfo>> {
        let data = self.data.lock().await;
        let mut articles = data.articles.clone();
        sort_articles(&mut articles);
        Ok(articles)
    }

    /// 已发布文章就是全量列表按 status 过滤，排序保持一致
    async fn list_published_articles(&self) -> DatabaseResult<Vec<ArticleInfo>> {
        let mut articles = self.list_articles().await?;
        articles.retain(|a| a.status == STATUS_PUBLISHED);
        Ok(articles)
    }

    async fn get_article_by_slug(&self, slug: &str) -> DatabaseResult<Option<ArticleInfo>> {
        let data = self.data.lock().await;
        Ok(data.articles.iter().find(|a| a.slug == slug).cloned())
    }

    async fn get_article_by_id(&self, id: i64) -> DatabaseResult<Option<ArticleInfo>> {
        let data = self.data.lock().await;
        Ok(data.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn create_article(&self, article: ArticleCreate) -> DatabaseResult<Option<ArticleInfo>> {
        debug!("📝 创建文章: {}", article.slug);

        let mut data = self.data.lock().await;
        if data.articles.iter().any(|a| a.slug == article.slug) {
            return Err(DatabaseError::DuplicateSlug(article.slug));
        }

        let now = Utc::now();
        let new_article = ArticleInfo {
            id: next_id(data.articles.iter().map(|a| a.id)),
            title: article.title,
            slug: article.slug,
            content: article.content,
            excerpt: article.excerpt,
            cover_image: article.cover_image,
            category: article.category,
            tags: article.tags,
            status: article.status,
            view_count: 0,
            created_at: now,
            updated_at: now,
        };
        data.articles.push(new_article.clone());
        self.persist(&data).await?;

        debug!("✅ 文章创建成功: id={}", new_article.id);
        Ok(Some(new_article))
    }

    async fn update_article(&self, id: i64, update: ArticleUpdate) -> DatabaseResult<bool> {
        debug!("🔄 更新文章 {}: {}", id, update.slug);

        let mut data = self.data.lock().await;
        // id 不存在直接返回 false，优先于 slug 冲突检查
        if !data.articles.iter().any(|a| a.id == id) {
            return Ok(false);
        }
        if data.articles.iter().any(|a| a.slug == update.slug && a.id != id) {
            return Err(DatabaseError::DuplicateSlug(update.slug));
        }

        let Some(article) = data.articles.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        article.title = update.title;
        article.slug = update.slug;
        article.content = update.content;
        article.excerpt = update.excerpt;
        article.category = update.category;
        article.tags = update.tags;
        article.status = update.status;
        article.updated_at = Utc::now();
        // 未重新上传封面时保留原值
        if let Some(cover) = update.cover_image {
            article.cover_image = Some(cover);
        }

        self.persist(&data).await?;
        Ok(true)
    }

    async fn delete_article(&self, id: i64) -> DatabaseResult<bool> {
        debug!("🗑️ 删除文章: {}", id);

        let mut data = self.data.lock().await;
        let before = data.articles.len();
        data.articles.retain(|a| a.id != id);
        if data.articles.len() == before {
            return Ok(false);
        }
        self.persist(&data).await?;
        Ok(true)
    }

    async fn increment_article_views(&self, id: i64) -> DatabaseResult<()> {
        let mut data = self.data.lock().await;
        let Some(article) = data.articles.iter_mut().find(|a| a.id == id) else {
            return Ok(());
        };
        article.view_count += 1;
        self.persist(&data).await?;
        Ok(())
    }

    async fn get_article_stats(&self) -> DatabaseResult<ArticleStats> {
        let data = self.data.lock().await;
        Ok(ArticleStats {
            total: data.articles.len() as i64,
            published: data
                .articles
                .iter()
                .filter(|a| a.status == STATUS_PUBLISHED)
                .count() as i64,
            total_views: data.articles.iter().map(|a| a.view_count).sum(),
        })
    }
}

#[async_trait::async_trait]
impl ProductRepositoryTrait for JsonFileRepository {
    async fn list_products(&self) -> DatabaseResult<Vec<ProductInfo>> {
        let data = self.data.lock().await;
        let mut products = data.products.clone();
        sort_products(&mut products);
        Ok(products)
    }

    async fn get_product_by_slug(&self, slug: &str) -> DatabaseResult<Option<ProductInfo>> {
        let data = self.data.lock().await;
        Ok(data.products.iter().find(|p| p.slug == slug).cloned())
    }

    async fn get_product_by_id(&self, id: i64) -> DatabaseResult<Option<ProductInfo>> {
        let data = self.data.lock().await;
        Ok(data.products.iter().find(|p| p.id == id).cloned())
    }

    async fn create_product(&self, product: ProductCreate) -> DatabaseResult<Option<ProductInfo>> {
        debug!("📝 创建产品: {}", product.slug);

        let mut data = self.data.lock().await;
        if data.products.iter().any(|p| p.slug == product.slug) {
            return Err(DatabaseError::DuplicateSlug(product.slug));
        }

        let now = Utc::now();
        let new_product = ProductInfo {
            id: next_id(data.products.iter().map(|p| p.id)),
            name: product.name,
            slug: product.slug,
            description: product.description,
            short_description: product.short_description,
            images: product.images,
            tech_stack: product.tech_stack,
            project_url: product.project_url,
            github_url: product.github_url,
            featured: product.featured,
            display_order: product.display_order,
            created_at: now,
            updated_at: now,
        };
        data.products.push(new_product.clone());
        self.persist(&data).await?;

        debug!("✅ 产品创建成功: id={}", new_product.id);
        Ok(Some(new_product))
    }

    async fn update_product(&self, id: i64, update: ProductUpdate) -> DatabaseResult<bool> {
        debug!("🔄 更新产品 {}: {}", id, update.slug);

        let mut data = self.data.lock().await;
        // id 不存在直接返回 false，优先于 slug 冲突检查
        if !data.products.iter().any(|p| p.id == id) {
            return Ok(false);
        }
        if data.products.iter().any(|p| p.slug == update.slug && p.id != id) {
            return Err(DatabaseError::DuplicateSlug(update.slug));
        }

        let Some(product) = data.products.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        product.name = update.name;
        product.slug = update.slug;
        product.description = update.description;
        product.short_description = update.short_description;
        product.tech_stack = update.tech_stack;
        product.project_url = update.project_url;
        product.github_url = update.github_url;
        product.featured = update.featured;
        product.display_order = update.display_order;
        product.updated_at = Utc::now();
        // 未重新上传图片时保留原值
        if let Some(images) = update.images {
            product.images = images;
        }

        self.persist(&data).await?;
        Ok(true)
    }

    async fn delete_product(&self, id: i64) -> DatabaseResult<bool> {
        debug!("🗑️ 删除产品: {}", id);

        let mut data = self.data.lock().await;
        let before = data.products.len();
        data.products.retain(|p| p.id != id);
        if data.products.len() == before {
            return Ok(false);
        }
        self.persist(&data).await?;
        Ok(true)
    }

    async fn count_products(&self) -> DatabaseResult<i64> {
        let data = self.data.lock().await;
        Ok(data.products.len() as i64)
    }
}

#[async_trait::async_trait]
impl AdminRepositoryTrait for JsonFileRepository {
    async fn get_admin_by_username(&self, username: &str) -> DatabaseResult<Option<AdminInfo>> {
        let data = self.data.lock().await;
        Ok(data.admins.iter().find(|a| a.username == username).cloned())
    }

    async fn count_admins(&self) -> DatabaseResult<i64> {
        let data = self.data.lock().await;
        Ok(data.admins.len() as i64)
    }

    async fn create_admin(&self, admin: AdminCreate) -> DatabaseResult<Option<AdminInfo>> {
        debug!("📝 创建管理员: {}", admin.username);

        let mut data = self.data.lock().await;
        let new_admin = AdminInfo {
            id: next_id(data.admins.iter().map(|a| a.id)),
            username: admin.username,
            password_hash: admin.password_hash,
            email: admin.email,
            created_at: Utc::now(),
            last_login: None,
        };
        data.admins.push(new_admin.clone());
        self.persist(&data).await?;
        Ok(Some(new_admin))
    }

    async fn update_admin_last_login(&self, id: i64) -> DatabaseResult<()> {
        let mut data = self.data.lock().await;
        let Some(admin) = data.admins.iter_mut().find(|a| a.id == id) else {
            return Ok(());
        };
        admin.last_login = Some(Utc::now());
        self.persist(&data).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileRepositoryTrait for JsonFileRepository {
    async fn get_profile(&self) -> DatabaseResult<Option<ProfileInfo>> {
        let data = self.data.lock().await;
        Ok(Some(data.profile.clone()))
    }

    async fn insert_profile(&self, profile: ProfileInfo) -> DatabaseResult<()> {
        let mut data = self.data.lock().await;
        data.profile = profile;
        self.persist(&data).await?;
        Ok(())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DatabaseResult<bool> {
        debug!("🔄 更新个人资料");

        let mut data = self.data.lock().await;
        let profile = &mut data.profile;
        profile.name = update.name;
        profile.title = update.title;
        profile.bio = update.bio;
        profile.email = update.email;
        profile.phone = update.phone;
        profile.location = update.location;
        profile.github = update.github;
        profile.twitter = update.twitter;
        profile.linkedin = update.linkedin;
        profile.wechat = update.wechat;
        profile.skills = update.skills;
        profile.updated_at = Utc::now();
        // 未重新上传头像时保留原值
        if let Some(avatar) = update.avatar {
            profile.avatar = Some(avatar);
        }

        self.persist(&data).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn make_repo(dir: &TempDir) -> JsonFileRepository {
        JsonFileRepository::open(dir.path().join("site.json"))
            .await
            .unwrap()
    }

    fn article_create(slug: &str, status: &str) -> ArticleCreate {
        ArticleCreate {
            title: format!("标题 {slug}"),
            slug: slug.to_string(),
            content: "hello".to_string(),
            excerpt: "摘要".to_string(),
            cover_image: None,
            category: "AI".to_string(),
            tags: "rust,web".to_string(),
            status: status.to_string(),
        }
    }

    fn product_create(slug: &str, featured: bool, display_order: i32) -> ProductCreate {
        ProductCreate {
            name: format!("产品 {slug}"),
            slug: slug.to_string(),
            description: "描述".to_string(),
            short_description: "短描述".to_string(),
            images: "/images/p1.png".to_string(),
            tech_stack: "Rust,Axum".to_string(),
            project_url: String::new(),
            github_url: String::new(),
            featured,
            display_order,
        }
    }

    #[tokio::test]
    async fn create_then_get_by_slug_roundtrip() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let created = repo
            .create_article(article_create("a", crate::STATUS_DRAFT))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.view_count, 0);

        let fetched = repo.get_article_by_slug("a").await.unwrap().unwrap();
        assert_eq!(fetched, created);

        // slug 精确匹配，区分大小写
        assert!(repo.get_article_by_slug("A").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_slug_on_create_is_rejected() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        repo.create_article(article_create("a", crate::STATUS_DRAFT))
            .await
            .unwrap();
        let err = repo
            .create_article(article_create("a", crate::STATUS_PUBLISHED))
            .await
            .unwrap_err();
        assert!(err.is_duplicate_slug());
        assert_eq!(repo.list_articles().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_slug_on_update_is_rejected() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        repo.create_article(article_create("a", crate::STATUS_DRAFT))
            .await
            .unwrap();
        let b = repo
            .create_article(article_create("b", crate::STATUS_DRAFT))
            .await
            .unwrap()
            .unwrap();

        let mut update = article_update_from(&b);
        update.slug = "a".to_string();
        let err = repo.update_article(b.id, update).await.unwrap_err();
        assert!(err.is_duplicate_slug());

        // 改回自己的 slug 不算冲突
        let update = article_update_from(&b);
        assert!(repo.update_article(b.id, update).await.unwrap());
    }

    fn article_update_from(a: &ArticleInfo) -> ArticleUpdate {
        ArticleUpdate {
            title: a.title.clone(),
            slug: a.slug.clone(),
            content: a.content.clone(),
            excerpt: a.excerpt.clone(),
            cover_image: None,
            category: a.category.clone(),
            tags: a.tags.clone(),
            status: a.status.clone(),
        }
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let mut create = article_create("a", crate::STATUS_DRAFT);
        create.cover_image = Some("/images/old.png".to_string());
        let created = repo.create_article(create).await.unwrap().unwrap();

        // cover_image 为 None：保留原封面，其他字段覆盖
        let mut update = article_update_from(&created);
        update.title = "新标题".to_string();
        assert!(repo.update_article(created.id, update).await.unwrap());

        let after = repo.get_article_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(after.title, "新标题");
        assert_eq!(after.cover_image, Some("/images/old.png".to_string()));
        assert_eq!(after.content, created.content);
        assert_eq!(after.view_count, created.view_count);
        assert_eq!(after.created_at, created.created_at);
        assert!(after.updated_at >= created.updated_at);

        // cover_image 为 Some：覆盖封面
        let mut update = article_update_from(&after);
        update.cover_image = Some("/images/new.png".to_string());
        assert!(repo.update_article(created.id, update).await.unwrap());
        let after = repo.get_article_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(after.cover_image, Some("/images/new.png".to_string()));
    }

    #[tokio::test]
    async fn update_missing_id_returns_false() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;
        let a = repo
            .create_article(article_create("a", crate::STATUS_DRAFT))
            .await
            .unwrap()
            .unwrap();

        let mut update = article_update_from(&a);
        update.slug = "missing".to_string();
        assert!(!repo.update_article(a.id + 999, update).await.unwrap());

        // id 不存在优先于 slug 冲突：即使 slug 已被占用也返回 false
        let mut update = article_update_from(&a);
        update.slug = "a".to_string();
        assert!(!repo.update_article(a.id + 999, update).await.unwrap());
    }

    #[tokio::test]
    async fn update_missing_product_id_returns_false_even_with_taken_slug() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;
        let p = repo
            .create_product(product_create("p1", false, 0))
            .await
            .unwrap()
            .unwrap();

        let update = ProductUpdate {
            name: p.name.clone(),
            slug: "p1".to_string(),
            description: p.description.clone(),
            short_description: p.short_description.clone(),
            images: None,
            tech_stack: p.tech_stack.clone(),
            project_url: p.project_url.clone(),
            github_url: p.github_url.clone(),
            featured: p.featured,
            display_order: p.display_order,
        };
        assert!(!repo.update_product(p.id + 999, update).await.unwrap());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let created = repo
            .create_article(article_create("a", crate::STATUS_DRAFT))
            .await
            .unwrap()
            .unwrap();
        assert!(repo.delete_article(created.id).await.unwrap());
        assert!(repo.get_article_by_id(created.id).await.unwrap().is_none());

        // 再删一次：返回 false，集合大小不变
        assert!(!repo.delete_article(created.id).await.unwrap());
        assert_eq!(repo.list_articles().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn increment_views_n_times_adds_exactly_n() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let created = repo
            .create_article(article_create("a", crate::STATUS_PUBLISHED))
            .await
            .unwrap()
            .unwrap();
        for _ in 0..5 {
            repo.increment_article_views(created.id).await.unwrap();
        }
        let after = repo.get_article_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(after.view_count, 5);

        // 不存在的 id 自增是 no-op
        repo.increment_article_views(created.id + 999).await.unwrap();
    }

    #[tokio::test]
    async fn published_list_is_filter_of_full_list() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        for (slug, status) in [
            ("a", crate::STATUS_DRAFT),
            ("b", crate::STATUS_PUBLISHED),
            ("c", crate::STATUS_PUBLISHED),
            ("d", crate::STATUS_DRAFT),
        ] {
            repo.create_article(article_create(slug, status)).await.unwrap();
        }

        let all = repo.list_articles().await.unwrap();
        let expected: Vec<_> = all
            .into_iter()
            .filter(|a| a.status == crate::STATUS_PUBLISHED)
            .collect();
        assert_eq!(repo.list_published_articles().await.unwrap(), expected);
        assert_eq!(expected.len(), 2);
    }

    #[tokio::test]
    async fn draft_to_published_flow() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let created = repo
            .create_article(article_create("a", crate::STATUS_DRAFT))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.view_count, 0);

        repo.increment_article_views(created.id).await.unwrap();
        let a = repo.get_article_by_slug("a").await.unwrap().unwrap();
        assert_eq!(a.view_count, 1);

        // 草稿不出现在已发布列表里
        assert!(repo.list_published_articles().await.unwrap().is_empty());

        let mut update = article_update_from(&a);
        update.status = crate::STATUS_PUBLISHED.to_string();
        assert!(repo.update_article(a.id, update).await.unwrap());
        let published = repo.list_published_articles().await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].id, a.id);
    }

    #[tokio::test]
    async fn featured_products_sort_first() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        repo.create_product(product_create("p1", true, 5)).await.unwrap();
        repo.create_product(product_create("p2", false, 1)).await.unwrap();

        // featured 优先于 display_order
        let products = repo.list_products().await.unwrap();
        assert_eq!(products[0].slug, "p1");
        assert_eq!(products[1].slug, "p2");

        assert_eq!(repo.count_products().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn article_stats_are_computed_fresh() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let a = repo
            .create_article(article_create("a", crate::STATUS_PUBLISHED))
            .await
            .unwrap()
            .unwrap();
        repo.create_article(article_create("b", crate::STATUS_DRAFT))
            .await
            .unwrap();
        repo.increment_article_views(a.id).await.unwrap();
        repo.increment_article_views(a.id).await.unwrap();

        let stats = repo.get_article_stats().await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.published, 1);
        assert_eq!(stats.total_views, 2);
    }

    #[tokio::test]
    async fn data_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");

        let repo = JsonFileRepository::open(&path).await.unwrap();
        let created = repo
            .create_article(article_create("a", crate::STATUS_PUBLISHED))
            .await
            .unwrap()
            .unwrap();
        drop(repo);

        let repo = JsonFileRepository::open(&path).await.unwrap();
        let fetched = repo.get_article_by_slug("a").await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_seed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        tokio::fs::write(&path, b"{not valid json").await.unwrap();

        let repo = JsonFileRepository::open(&path).await.unwrap();
        assert!(repo.list_articles().await.unwrap().is_empty());
        assert!(repo.list_products().await.unwrap().is_empty());
        let profile = repo.get_profile().await.unwrap().unwrap();
        let seed = ProfileInfo::default_seed();
        assert_eq!(profile.name, seed.name);
        assert_eq!(profile.skills, seed.skills);
    }

    #[tokio::test]
    async fn profile_update_preserves_avatar_when_none() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let before = repo.get_profile().await.unwrap().unwrap();
        let update = ProfileUpdate {
            name: "新名字".to_string(),
            title: before.title.clone(),
            bio: before.bio.clone(),
            email: before.email.clone(),
            phone: before.phone.clone(),
            location: before.location.clone(),
            github: before.github.clone(),
            twitter: before.twitter.clone(),
            linkedin: before.linkedin.clone(),
            wechat: before.wechat.clone(),
            skills: before.skills.clone(),
            avatar: None,
        };
        assert!(repo.update_profile(update).await.unwrap());

        let after = repo.get_profile().await.unwrap().unwrap();
        assert_eq!(after.name, "新名字");
        assert_eq!(after.avatar, before.avatar);
    }

    #[tokio::test]
    async fn ids_are_unique_for_rapid_creates() {
        let dir = TempDir::new().unwrap();
        let repo = make_repo(&dir).await;

        let a = repo
            .create_article(article_create("a", crate::STATUS_DRAFT))
            .await
            .unwrap()
            .unwrap();
        let b = repo
            .create_article(article_create("b", crate::STATUS_DRAFT))
            .await
            .unwrap()
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}
