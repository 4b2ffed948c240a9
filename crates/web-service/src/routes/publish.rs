//! 编程发布接口
//!
//! 面向写作工具的一键发布：用共享密钥认证，不走后台会话

use crate::models::auth::{PublishRequest, PublishResponse, PublishTokenQuery};
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use color_eyre::eyre::eyre;
use database::ContentRepositoryTrait;
use tracing::{info, warn};
use validator::Validate;

/// 校验发布密钥
///
/// 密钥可放在 `X-Publish-Token` 头或 `?token=` 查询参数里；
/// 服务端未配置密钥时一律拒绝
fn check_publish_token(
    configured: Option<&str>,
    headers: &HeaderMap,
    query: &PublishTokenQuery,
) -> Result<(), AppError> {
    let Some(expected) = configured else {
        warn!("⚠️ 发布请求被拒绝：服务端未配置 PUBLISH_API_TOKEN");
        return Err(AppError::Unauthorized("发布接口未启用"));
    };

    let provided = headers
        .get("X-Publish-Token")
        .and_then(|v| v.to_str().ok())
        .or(query.token.as_deref());

    match provided {
        Some(token) if token == expected => Ok(()),
        _ => Err(AppError::Unauthorized("发布密钥无效")),
    }
}

/// 发布文章
///
/// 成功返回 201 和站内访问路径；slug 冲突返回 409，不会覆盖已有文章
#[utoipa::path(post,
    path = "/publish",
    tag = "publish",
    request_body = PublishRequest,
    responses(
        (status = 201, description = "Article published", body = PublishResponse),
        (status = 401, description = "Bad or missing publish token"),
        (status = 409, description = "Slug already taken"),
        (status = 422, description = "Validation failed"),
    ),
)]
pub async fn publish_article<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
    headers: HeaderMap,
    Query(query): Query<PublishTokenQuery>,
    Json(request): Json<PublishRequest>,
) -> Result<(StatusCode, Json<PublishResponse>), AppError> {
    check_publish_token(state.config.auth.publish_token.as_deref(), &headers, &query)?;

    request.validate()?;

    let article = state
        .repository
        .create_article(database::ArticleCreate {
            title: request.title,
            slug: request.slug,
            content: request.content,
            excerpt: request.excerpt,
            cover_image: request.cover_image,
            category: request.category,
            tags: request.tags,
            status: request.status,
        })
        .await?
        .ok_or_else(|| AppError::InternalError(eyre!("存储后端未配置，无法写入")))?;

    info!("✅ 文章已发布 id={} slug={}", article.id, article.slug);
    let url = format!("/articles/{}", article.slug);
    Ok((
        StatusCode::CREATED,
        Json(PublishResponse {
            id: article.id,
            title: article.title,
            slug: article.slug,
            url,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(token: Option<&str>) -> PublishTokenQuery {
        PublishTokenQuery {
            token: token.map(|t| t.to_string()),
        }
    }

    #[test]
    fn rejects_when_server_has_no_token() {
        let headers = HeaderMap::new();
        assert!(check_publish_token(None, &headers, &query(Some("secret"))).is_err());
    }

    #[test]
    fn accepts_matching_header_token() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Publish-Token", "secret".parse().unwrap());
        assert!(check_publish_token(Some("secret"), &headers, &query(None)).is_ok());
    }

    #[test]
    fn accepts_matching_query_token() {
        let headers = HeaderMap::new();
        assert!(check_publish_token(Some("secret"), &headers, &query(Some("secret"))).is_ok());
    }

    #[test]
    fn header_token_takes_precedence_over_query() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Publish-Token", "wrong".parse().unwrap());
        assert!(check_publish_token(Some("secret"), &headers, &query(Some("secret"))).is_err());
    }

    #[test]
    fn rejects_wrong_token() {
        let headers = HeaderMap::new();
        assert!(check_publish_token(Some("secret"), &headers, &query(Some("nope"))).is_err());
        assert!(check_publish_token(Some("secret"), &headers, &query(None)).is_err());
    }
}
