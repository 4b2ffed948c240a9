//! 登录 / 后台面板 / 编程发布接口的请求与响应模型

use crate::models::articles::{validate_slug, validate_status, ArticleResponse};
use crate::models::products::ProductResponse;
use database::STATUS_PUBLISHED;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 管理员登录请求
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// 管理员登录响应
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// 会话 token，后续请求放在 `Authorization: Bearer <token>` 里
    pub token: String,
    pub username: String,
}

/// 后台面板统计数据
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardReply {
    /// 文章总数（含草稿）
    pub total_articles: i64,
    /// 已发布文章数
    pub published_articles: i64,
    /// 全站文章浏览总数
    pub total_views: i64,
    /// 产品总数
    pub total_products: i64,
    /// 最近更新的文章（含草稿），最多 5 篇
    pub recent_articles: Vec<ArticleResponse>,
    /// 最近更新的产品，最多 5 个
    pub recent_products: Vec<ProductResponse>,
}

fn default_publish_status() -> String {
    STATUS_PUBLISHED.to_string()
}

/// 编程发布请求
///
/// 与后台创建文章的区别：status 缺省即为 published，
/// 供写作工具一键发布
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PublishRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(custom(function = validate_slug))]
    pub slug: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: String,

    #[serde(default = "default_publish_status")]
    #[validate(custom(function = validate_status))]
    pub status: String,
}

/// 用于从查询参数里携带发布密钥（`?token=`）
#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishTokenQuery {
    pub token: Option<String>,
}

/// 编程发布响应
#[derive(Debug, Serialize, ToSchema)]
pub struct PublishResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// 站内访问路径
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_request_defaults_to_published() {
        let req: PublishRequest = serde_json::from_str(
            r#"{"title": "标题", "slug": "hello", "content": "正文"}"#,
        )
        .unwrap();
        assert_eq!(req.status, STATUS_PUBLISHED);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn publish_request_rejects_unknown_status() {
        let req: PublishRequest = serde_json::from_str(
            r#"{"title": "标题", "slug": "hello", "content": "正文", "status": "archived"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
