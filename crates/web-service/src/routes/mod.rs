//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 业务接口统一挂在 `/api/v1` 下，健康检查挂在根路径，
//! 在线文档通过 `/docs` 访问。

use crate::models::err::AppError;
use crate::routes::articles::__path_create_article;
use crate::routes::articles::__path_delete_article;
use crate::routes::articles::__path_find_articles;
use crate::routes::articles::__path_find_published_articles;
use crate::routes::articles::__path_get_published_article;
use crate::routes::articles::__path_update_article;
use crate::routes::articles::{
    create_article, delete_article, find_articles, find_published_articles, get_published_article,
    update_article,
};
use crate::routes::auth::__path_admin_login;
use crate::routes::auth::__path_get_dashboard;
use crate::routes::auth::{admin_login, get_dashboard};
use crate::routes::products::__path_create_product;
use crate::routes::products::__path_delete_product;
use crate::routes::products::__path_find_admin_products;
use crate::routes::products::__path_find_products;
use crate::routes::products::__path_get_product;
use crate::routes::products::__path_update_product;
use crate::routes::products::{
    create_product, delete_product, find_admin_products, find_products, get_product, update_product,
};
use crate::routes::profile::__path_get_admin_profile;
use crate::routes::profile::__path_get_public_profile;
use crate::routes::profile::__path_update_admin_profile;
use crate::routes::profile::{get_admin_profile, get_public_profile, update_admin_profile};
use crate::routes::publish::__path_publish_article;
use crate::routes::publish::publish_article;
use crate::AppState;
use axum::extract::State;
use axum::{Json, Router};
use chrono::Utc;
use database::ContentRepositoryTrait;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod articles;
pub mod auth;
pub mod products;
pub mod profile;
pub mod publish;

/// 健康检查响应
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthReply {
    pub status: String,
    /// 服务器当前时间（RFC 3339）
    pub timestamp: String,
    /// postgres 数据库是否已配置（文件后端下恒为 false）
    pub database_configured: bool,
}

/// 健康检查
///
/// 无需认证，供部署平台探活
#[utoipa::path(get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthReply)
    ),
)]
pub async fn health<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
) -> Result<Json<HealthReply>, AppError> {
    Ok(Json(HealthReply {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        database_configured: state.config.database_configured(),
    }))
}

/// 导出 `/api/v1` 下的全部业务路由
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏里的 handler 必须挂在同一个路径上，
/// 且不能出现重复的 http 方法，否则会 Panic。因此这里按路径分组。
fn routers<R: ContentRepositoryTrait>(state: AppState<R>) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_published_articles))
        .routes(routes!(get_published_article))
        .routes(routes!(find_products))
        .routes(routes!(get_product))
        .routes(routes!(get_public_profile))
        .routes(routes!(admin_login))
        .routes(routes!(get_dashboard))
        .routes(routes!(find_articles, create_article))
        .routes(routes!(update_article, delete_article))
        .routes(routes!(find_admin_products, create_product))
        .routes(routes!(update_product, delete_product))
        .routes(routes!(get_admin_profile, update_admin_profile))
        .routes(routes!(publish_article))
        .with_state(state)
}

/// 根路径下的路由（健康检查）
fn root_routers<R: ContentRepositoryTrait>(state: AppState<R>) -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(health)).with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router<R: ContentRepositoryTrait>(shared_state: AppState<R>) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "jianbing-site", description = r#"
个人站点内容服务：

- 前台内容接口（文章 / 产品 / 个人资料）
- 后台管理接口（JWT 会话）
- 编程发布接口与健康检查
            "#)
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state.clone()))
        .merge(root_routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api))
}
