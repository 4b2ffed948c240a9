//! 文章仓库 trait 定义
//!
//! 定义文章数据库操作的抽象接口

use crate::models::article::{ArticleCreate, ArticleInfo, ArticleStats, ArticleUpdate};
use crate::DatabaseResult;

/// 文章仓库trait定义
///
/// 定义了文章相关的数据库操作接口，支持：
/// - 文章列表（全部 / 仅已发布）
/// - slug / id 查询
/// - 文章创建、更新、删除
/// - 浏览计数自增
/// - 统计数据
#[async_trait::async_trait]
pub trait ArticleRepositoryTrait: Send + Sync + 'static {
    /// 获取全部文章
    ///
    /// # 返回值
    /// 按 created_at 降序排列的文章列表
    async fn list_articles(&self) -> DatabaseResult<Vec<ArticleInfo>>;

    /// 获取已发布文章
    ///
    /// 结果等价于对 [`list_articles`](Self::list_articles) 按 status 过滤，
    /// 排序一致
    ///
    /// # 返回值
    /// 按 created_at 降序排列的已发布文章列表
    async fn list_published_articles(&self) -> DatabaseResult<Vec<ArticleInfo>>;

    /// 根据 slug 获取文章
    ///
    /// slug 精确匹配，区分大小写
    ///
    /// # 参数
    /// - `slug`: 文章的 URL 别名
    ///
    /// # 返回值
    /// 找到返回 `Some`，不存在返回 `None`（不是错误，由调用方决定是 404 还是创建前提）
    async fn get_article_by_slug(&self, slug: &str) -> DatabaseResult<Option<ArticleInfo>>;

    /// 根据 ID 获取文章
    ///
    /// # 参数
    /// - `id`: 文章 ID
    async fn get_article_by_id(&self, id: i64) -> DatabaseResult<Option<ArticleInfo>>;

    /// 创建文章
    ///
    /// 创建前先做一次 slug 查重，已被占用则返回
    /// [`DatabaseError::DuplicateSlug`](crate::DatabaseError::DuplicateSlug)
    ///
    /// # 参数
    /// - `article`: 文章创建参数
    ///
    /// # 返回值
    /// 返回带生成 id 和时间戳的新文章；数据库未配置时返回 `None`
    async fn create_article(&self, article: ArticleCreate) -> DatabaseResult<Option<ArticleInfo>>;

    /// 更新文章
    ///
    /// 普通字段全量覆盖，`cover_image` 为 `None` 时保留原值。
    /// 新 slug 与其他文章冲突时返回 `DuplicateSlug`
    ///
    /// # 参数
    /// - `id`: 文章 ID
    /// - `update`: 更新参数
    ///
    /// # 返回值
    /// id 不存在时返回 `false`，不报错；该判断先于 slug 冲突检查
    async fn update_article(&self, id: i64, update: ArticleUpdate) -> DatabaseResult<bool>;

    /// 删除文章
    ///
    /// 硬删除，幂等：id 不存在时返回 `false`，不报错
    ///
    /// # 参数
    /// - `id`: 文章 ID
    async fn delete_article(&self, id: i64) -> DatabaseResult<bool>;

    /// 文章浏览计数 +1
    ///
    /// SQL 后端是单条 `SET view_count = view_count + 1`，并发安全；
    /// JSON 文件后端是进程内互斥锁保护的读改写
    ///
    /// # 参数
    /// - `id`: 文章 ID
    async fn increment_article_views(&self, id: i64) -> DatabaseResult<()>;

    /// 获取文章统计数据
    ///
    /// 每次调用实时计算；SQL 后端是三条独立查询，相互之间不保证快照一致
    async fn get_article_stats(&self) -> DatabaseResult<ArticleStats>;
}
