//! 文章接口的请求/响应模型

use chrono::{DateTime, Utc};
use database::{ArticleCreate, ArticleInfo, ArticleUpdate, STATUS_DRAFT, STATUS_PUBLISHED};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// slug 校验：非空，仅允许小写字母、数字、`-`、`_`
///
/// slug 直接进 URL，所以这里比原站更严格一点
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::new("slug_empty"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ValidationError::new("slug_invalid_chars"));
    }
    Ok(())
}

/// 文章状态校验：仅接受 draft / published
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status == STATUS_DRAFT || status == STATUS_PUBLISHED {
        Ok(())
    } else {
        Err(ValidationError::new("status_invalid"))
    }
}

fn default_status() -> String {
    STATUS_DRAFT.to_string()
}

/// 文章创建/更新请求
///
/// 更新时 `cover_image` 为 null 表示"未重新上传封面"，保留原值
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ArticleRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[schema(example = "hello-world")]
    #[validate(custom(function = validate_slug))]
    pub slug: String,

    /// Markdown 原文
    #[validate(length(min = 1))]
    pub content: String,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub category: String,

    /// 逗号分隔的标签列表
    #[serde(default)]
    pub tags: String,

    #[schema(example = "draft")]
    #[serde(default = "default_status")]
    #[validate(custom(function = validate_status))]
    pub status: String,
}

impl From<ArticleRequest> for ArticleCreate {
    fn from(req: ArticleRequest) -> Self {
        ArticleCreate {
            title: req.title,
            slug: req.slug,
            content: req.content,
            excerpt: req.excerpt,
            cover_image: req.cover_image,
            category: req.category,
            tags: req.tags,
            status: req.status,
        }
    }
}

impl From<ArticleRequest> for ArticleUpdate {
    fn from(req: ArticleRequest) -> Self {
        ArticleUpdate {
            title: req.title,
            slug: req.slug,
            content: req.content,
            excerpt: req.excerpt,
            cover_image: req.cover_image,
            category: req.category,
            tags: req.tags,
            status: req.status,
        }
    }
}

/// 文章响应对象
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleInfo> for ArticleResponse {
    fn from(info: ArticleInfo) -> Self {
        ArticleResponse {
            id: info.id,
            title: info.title,
            slug: info.slug,
            content: info.content,
            excerpt: info.excerpt,
            cover_image: info.cover_image,
            category: info.category,
            tags: info.tags,
            status: info.status,
            view_count: info.view_count,
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}

/// 前台文章列表的查询参数
#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListQuery {
    /// 按分类精确过滤，不传则返回全部已发布文章
    pub category: Option<String>,
}

/// 前台文章详情响应
///
/// `related` 是同分类下的其他已发布文章，最多 3 篇
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleDetailReply {
    pub data: ArticleResponse,
    pub related: Vec<ArticleResponse>,
}

/// 前台文章列表响应
///
/// `categories` 是全部已发布文章的去重分类列表，供前端渲染过滤器
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleListReply {
    pub data: Vec<ArticleResponse>,
    pub total: u32,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_validation_accepts_url_safe_values() {
        assert!(validate_slug("hello-world_01").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Hello").is_err());
        assert!(validate_slug("中文slug").is_err());
        assert!(validate_slug("a b").is_err());
    }

    #[test]
    fn status_validation_accepts_known_values() {
        assert!(validate_status("draft").is_ok());
        assert!(validate_status("published").is_ok());
        assert!(validate_status("archived").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn article_request_validation() {
        let req = ArticleRequest {
            title: "标题".to_string(),
            slug: "hello".to_string(),
            content: "正文".to_string(),
            excerpt: String::new(),
            cover_image: None,
            category: String::new(),
            tags: String::new(),
            status: "draft".to_string(),
        };
        assert!(req.validate().is_ok());

        let bad = ArticleRequest {
            slug: "Bad Slug".to_string(),
            ..req
        };
        assert!(bad.validate().is_err());
    }
}
