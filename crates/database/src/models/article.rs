//! 文章数据库模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 文章信息结构体
///
/// `tags` 为逗号分隔的标签列表，`status` 取值为
/// [`STATUS_DRAFT`](crate::STATUS_DRAFT) / [`STATUS_PUBLISHED`](crate::STATUS_PUBLISHED)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArticleInfo {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Markdown 原文
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: String,
    /// 浏览计数，只增不减，只能通过 increment_article_views 修改
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 文章创建参数
///
/// id 与时间戳由后端生成
#[derive(Debug, Clone)]
pub struct ArticleCreate {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: String,
}

/// 文章更新参数
///
/// 普通字段全量覆盖；`cover_image` 为 `None` 时保留原值（对应"未重新上传封面"）
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: String,
}

/// 文章统计数据
///
/// 每次调用都实时计算，不做缓存
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleStats {
    /// 文章总数
    pub total: i64,
    /// 已发布文章数
    pub published: i64,
    /// 总浏览量
    pub total_views: i64,
}
