//! 产品数据库模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 产品信息结构体
///
/// `images` 为逗号分隔的图片地址列表，`featured` 的产品在列表中置顶展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductInfo {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub images: String,
    pub tech_stack: String,
    pub project_url: String,
    pub github_url: String,
    pub featured: bool,
    /// 展示排序值，越小越靠前
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 产品创建参数
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub images: String,
    pub tech_stack: String,
    pub project_url: String,
    pub github_url: String,
    pub featured: bool,
    pub display_order: i32,
}

/// 产品更新参数
///
/// 普通字段全量覆盖；`images` 为 `None` 时保留原值
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub images: Option<String>,
    pub tech_stack: String,
    pub project_url: String,
    pub github_url: String,
    pub featured: bool,
    pub display_order: i32,
}
