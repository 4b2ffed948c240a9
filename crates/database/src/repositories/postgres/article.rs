//! 文章表的 PostgreSQL 实现

use super::PostgresRepository;
use crate::models::article::{ArticleCreate, ArticleInfo, ArticleStats, ArticleUpdate};
use crate::repositories::traits::ArticleRepositoryTrait;
use crate::{DatabaseError, DatabaseResult, STATUS_PUBLISHED};
use tracing::debug;

/// 文章表的全部列，查询时统一使用，保证和 [`ArticleInfo`] 字段一一对应
const ARTICLE_COLUMNS: &str =
    "id, title, slug, content, excerpt, cover_image, category, tags, status, \
     view_count, created_at, updated_at";

#[async_trait::async_trait]
impl ArticleRepositoryTrait for PostgresRepository {
    async fn list_articles(&self) -> DatabaseResult<Vec<ArticleInfo>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC");
        let articles = sqlx::query_as::<_, ArticleInfo>(&sql)
            .fetch_all(self.pool())
            .await?;
        Ok(articles)
    }

    async fn list_published_articles(&self) -> DatabaseResult<Vec<ArticleInfo>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE status = $1 ORDER BY created_at DESC"
        );
        let articles = sqlx::query_as::<_, ArticleInfo>(&sql)
            .bind(STATUS_PUBLISHED)
            .fetch_all(self.pool())
            .await?;
        Ok(articles)
    }

    async fn get_article_by_slug(&self, slug: &str) -> DatabaseResult<Option<ArticleInfo>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let article = sqlx::query_as::<_, ArticleInfo>(&sql)
            .bind(slug)
            .fetch_optional(self.pool())
            .await?;
        Ok(article)
    }

    async fn get_article_by_id(&self, id: i64) -> DatabaseResult<Option<ArticleInfo>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let article = sqlx::query_as::<_, ArticleInfo>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(article)
    }

    /// 创建文章
    ///
    /// 先做一次 slug 查重再插入。查重和插入之间存在并发窗口，
    /// 表上的 UNIQUE 约束兜底，约束冲突同样转换为 `DuplicateSlug`
    async fn create_article(&self, article: ArticleCreate) -> DatabaseResult<Option<ArticleInfo>> {
        debug!("📝 创建文章: {}", article.slug);

        if self.get_article_by_slug(&article.slug).await?.is_some() {
            return Err(DatabaseError::DuplicateSlug(article.slug));
        }

        let sql = format!(
            "INSERT INTO articles (title, slug, content, excerpt, cover_image, category, tags, status, view_count) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0) \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let created = sqlx::query_as::<_, ArticleInfo>(&sql)
            .bind(&article.title)
            .bind(&article.slug)
            .bind(&article.content)
            .bind(&article.excerpt)
            .bind(&article.cover_image)
            .bind(&article.category)
            .bind(&article.tags)
            .bind(&article.status)
            .fetch_one(self.pool())
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DatabaseError::DuplicateSlug(article.slug.clone())
                }
                _ => DatabaseError::from(e),
            })?;

        debug!("✅ 文章创建成功: id={}", created.id);
        Ok(Some(created))
    }

    /// 更新文章
    ///
    /// `cover_image` 使用 coalesce 实现"未提供则保留原值"，
    /// 其余字段全量覆盖，updated_at 由数据库写入
    async fn update_article(&self, id: i64, update: ArticleUpdate) -> DatabaseResult<bool> {
        debug!("🔄 更新文章 {}: {}", id, update.slug);

        // id 不存在直接返回 false，优先于 slug 冲突检查
        if self.get_article_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM articles WHERE slug = $1 AND id <> $2",
        )
        .bind(&update.slug)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        if taken.is_some() {
            return Err(DatabaseError::DuplicateSlug(update.slug));
        }

        let result = sqlx::query(
            "UPDATE articles \
             SET title = $2, slug = $3, content = $4, excerpt = $5, \
                 cover_image = coalesce($6, cover_image), \
                 category = $7, tags = $8, status = $9, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.slug)
        .bind(&update.content)
        .bind(&update.excerpt)
        .bind(&update.cover_image)
        .bind(&update.category)
        .bind(&update.tags)
        .bind(&update.status)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_article(&self, id: i64) -> DatabaseResult<bool> {
        debug!("🗑️ 删除文章: {}", id);

        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// 浏览计数 +1
    ///
    /// 单条自增语句，并发自增不会丢失更新
    async fn increment_article_views(&self, id: i64) -> DatabaseResult<()> {
        sqlx::query("UPDATE articles SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// 获取文章统计数据
    ///
    /// 三条独立查询，相互之间不在同一个事务里，不保证快照一致
    async fn get_article_stats(&self) -> DatabaseResult<ArticleStats> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool())
            .await?;
        let published =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles WHERE status = $1")
                .bind(STATUS_PUBLISHED)
                .fetch_one(self.pool())
                .await?;
        let total_views =
            sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(view_count), 0) FROM articles")
                .fetch_one(self.pool())
                .await?;

        Ok(ArticleStats {
            total,
            published,
            total_views,
        })
    }
}
