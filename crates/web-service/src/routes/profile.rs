//! 个人资料接口
//!
//! 资料是全站单例，前台只读，后台整体更新

use crate::auth::AuthAdmin;
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::profile::{ProfileRequest, ProfileResponse};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use database::ContentRepositoryTrait;
use tracing::{debug, info};
use validator::Validate;

/// 前台个人资料
#[utoipa::path(get,
    path = "/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Site profile", body = Reply<ProfileResponse>),
        (status = 404, description = "Profile not initialized"),
    ),
)]
pub async fn get_public_profile<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
) -> Result<Json<Reply<ProfileResponse>>, AppError> {
    let profile = state
        .repository
        .get_profile()
        .await?
        .ok_or(AppError::NotFound("个人资料不存在"))?;
    Ok(Json(Reply { data: profile.into() }))
}

/// 后台个人资料
#[utoipa::path(get, path = "/admin/profile", tag = "admin")]
pub async fn get_admin_profile<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
) -> Result<Json<Reply<ProfileResponse>>, AppError> {
    let profile = state
        .repository
        .get_profile()
        .await?
        .ok_or(AppError::NotFound("个人资料不存在"))?;
    Ok(Json(Reply { data: profile.into() }))
}

/// 后台更新个人资料
///
/// 请求中 `avatar` 为 null 时保留原头像
#[utoipa::path(put, path = "/admin/profile", tag = "admin")]
pub async fn update_admin_profile<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<Reply<ProfileResponse>>, AppError> {
    debug!("📝 更新个人资料");
    request.validate()?;

    let updated = state.repository.update_profile(request.into()).await?;
    if !updated {
        return Err(AppError::NotFound("个人资料不存在"));
    }

    let profile = state
        .repository
        .get_profile()
        .await?
        .ok_or(AppError::NotFound("个人资料不存在"))?;
    info!("✅ 个人资料已更新");
    Ok(Json(Reply { data: profile.into() }))
}
