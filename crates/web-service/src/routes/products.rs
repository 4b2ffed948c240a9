//! 产品相关接口
//!
//! 产品没有草稿状态，前台列表即全量列表（精选置顶）

use crate::auth::AuthAdmin;
use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::models::products::{ProductRequest, ProductResponse};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use color_eyre::eyre::eyre;
use database::ContentRepositoryTrait;
use tracing::{debug, info};
use validator::Validate;

/// 前台产品列表
///
/// 按 (featured 降序, display_order 升序, created_at 降序) 排列
#[utoipa::path(get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = ReplyList<ProductResponse>)
    ),
)]
pub async fn find_products<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
) -> Result<Json<ReplyList<ProductResponse>>, AppError> {
    let products = state.repository.list_products().await?;
    Ok(Json(ReplyList::new(products.into_iter().map(Into::into).collect())))
}

/// 前台产品详情
#[utoipa::path(get, path = "/products/{slug}", tag = "products")]
pub async fn get_product<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
    Path(slug): Path<String>,
) -> Result<Json<Reply<ProductResponse>>, AppError> {
    debug!("🔍 前台产品详情 slug={slug}");

    let product = state
        .repository
        .get_product_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound("产品不存在"))?;
    Ok(Json(Reply { data: product.into() }))
}

/// 后台产品列表
///
/// 与前台列表内容一致（产品没有草稿状态），单独成接口方便后台统一走鉴权
#[utoipa::path(get,
    path = "/admin/products",
    tag = "admin",
    responses(
        (status = 200, description = "All products", body = ReplyList<ProductResponse>)
    ),
)]
pub async fn find_admin_products<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
) -> Result<Json<ReplyList<ProductResponse>>, AppError> {
    let products = state.repository.list_products().await?;
    Ok(Json(ReplyList::new(products.into_iter().map(Into::into).collect())))
}

/// 后台创建产品
#[utoipa::path(post,
    path = "/admin/products",
    tag = "admin",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Created product", body = Reply<ProductResponse>),
        (status = 409, description = "Slug already taken"),
    ),
)]
pub async fn create_product<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<Reply<ProductResponse>>, AppError> {
    debug!("📝 创建产品 slug={}", request.slug);
    request.validate()?;

    let product = state
        .repository
        .create_product(request.into())
        .await?
        .ok_or_else(|| AppError::InternalError(eyre!("存储后端未配置，无法写入")))?;

    info!("✅ 产品已创建 id={} slug={}", product.id, product.slug);
    Ok(Json(Reply { data: product.into() }))
}

/// 后台更新产品
///
/// 请求中 `images` 为 null 时保留原图片列表
#[utoipa::path(patch, path = "/admin/products/{id}", tag = "admin")]
pub async fn update_product<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<Reply<ProductResponse>>, AppError> {
    debug!("📝 更新产品 id={id}");
    request.validate()?;

    let updated = state.repository.update_product(id, request.into()).await?;
    if !updated {
        return Err(AppError::NotFound("产品不存在"));
    }

    let product = state
        .repository
        .get_product_by_id(id)
        .await?
        .ok_or(AppError::NotFound("产品不存在"))?;
    Ok(Json(Reply { data: product.into() }))
}

/// 后台删除产品
#[utoipa::path(delete, path = "/admin/products/{id}", tag = "admin")]
pub async fn delete_product<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<(), AppError> {
    debug!("🗑️ 删除产品 id={id}");

    let deleted = state.repository.delete_product(id).await?;
    if !deleted {
        return Err(AppError::NotFound("产品不存在"));
    }
    info!("✅ 产品已删除 id={id}");
    Ok(())
}
