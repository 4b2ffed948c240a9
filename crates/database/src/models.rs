//! 数据库模型
//!
//! 定义各实体的数据库模型结构体，与具体后端无关：
//! JSON 文件后端直接对这些结构体做 serde 序列化，
//! PostgreSQL 后端通过 `sqlx::FromRow` 从行映射。

pub mod admin;
pub mod article;
pub mod product;
pub mod profile;

/// 文章状态：草稿
pub const STATUS_DRAFT: &str = "draft";

/// 文章状态：已发布
pub const STATUS_PUBLISHED: &str = "published";
