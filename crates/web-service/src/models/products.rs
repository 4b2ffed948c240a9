//! 产品接口的请求/响应模型

use crate::models::articles::validate_slug;
use chrono::{DateTime, Utc};
use database::{ProductCreate, ProductInfo, ProductUpdate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 产品创建/更新请求
///
/// 更新时 `images` 为 null 表示"未重新上传图片"，保留原值；
/// 创建时 null 按空列表处理
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[schema(example = "my-project")]
    #[validate(custom(function = validate_slug))]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub short_description: String,

    /// 逗号分隔的图片地址列表
    #[serde(default)]
    pub images: Option<String>,

    #[serde(default)]
    pub tech_stack: String,

    #[serde(default)]
    pub project_url: String,

    #[serde(default)]
    pub github_url: String,

    #[serde(default)]
    pub featured: bool,

    /// 展示排序值，越小越靠前
    #[serde(default)]
    pub display_order: i32,
}

impl From<ProductRequest> for ProductCreate {
    fn from(req: ProductRequest) -> Self {
        ProductCreate {
            name: req.name,
            slug: req.slug,
            description: req.description,
            short_description: req.short_description,
            images: req.images.unwrap_or_default(),
            tech_stack: req.tech_stack,
            project_url: req.project_url,
            github_url: req.github_url,
            featured: req.featured,
            display_order: req.display_order,
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(req: ProductRequest) -> Self {
        ProductUpdate {
            name: req.name,
            slug: req.slug,
            description: req.description,
            short_description: req.short_description,
            images: req.images,
            tech_stack: req.tech_stack,
            project_url: req.project_url,
            github_url: req.github_url,
            featured: req.featured,
            display_order: req.display_order,
        }
    }
}

/// 产品响应对象
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
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
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductInfo> for ProductResponse {
    fn from(info: ProductInfo) -> Self {
        ProductResponse {
            id: info.id,
            name: info.name,
            slug: info.slug,
            description: info.description,
            short_description: info.short_description,
            images: info.images,
            tech_stack: info.tech_stack,
            project_url: info.project_url,
            github_url: info.github_url,
            featured: info.featured,
            display_order: info.display_order,
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}
