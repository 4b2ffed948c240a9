//! 文章相关接口
//!
//! 前台只暴露已发布文章；后台 CRUD 覆盖全部文章（含草稿）

use crate::auth::AuthAdmin;
use crate::models::articles::{
    ArticleDetailReply, ArticleListQuery, ArticleListReply, ArticleRequest, ArticleResponse,
};
use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use color_eyre::eyre::eyre;
use database::{ArticleInfo, ContentRepositoryTrait};
use tracing::{debug, info};
use validator::Validate;

/// 从已发布文章中提取去重后的分类列表
///
/// 保持文章排序中的首次出现顺序，空分类跳过
fn distinct_categories(articles: &[ArticleInfo]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for article in articles {
        if !article.category.is_empty() && !categories.contains(&article.category) {
            categories.push(article.category.clone());
        }
    }
    categories
}

/// 相关文章：同分类下的其他已发布文章，最多 3 篇
///
/// `published` 按 created_at 降序传入，结果保持该顺序
fn related_articles(published: Vec<ArticleInfo>, current: &ArticleInfo) -> Vec<ArticleInfo> {
    published
        .into_iter()
        .filter(|a| a.id != current.id && a.category == current.category)
        .take(3)
        .collect()
}

/// 前台文章列表
///
/// 仅返回已发布文章，支持 `?category=` 精确过滤。
/// 响应附带全量去重分类列表，过滤不影响分类集合。
#[utoipa::path(get,
    path = "/articles",
    tag = "articles",
    params(ArticleListQuery),
    responses(
        (status = 200, description = "Published articles", body = ArticleListReply)
    ),
)]
pub async fn find_published_articles<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
    Query(query): Query<ArticleListQuery>,
) -> Result<Json<ArticleListReply>, AppError> {
    debug!("🔍 前台文章列表 category={:?}", query.category);

    let articles = state.repository.list_published_articles().await?;
    let categories = distinct_categories(&articles);

    let articles: Vec<ArticleInfo> = match query.category {
        Some(category) => articles.into_iter().filter(|a| a.category == category).collect(),
        None => articles,
    };

    Ok(Json(ArticleListReply {
        total: articles.len() as u32,
        data: articles.into_iter().map(Into::into).collect(),
        categories,
    }))
}

/// 前台文章详情
///
/// 仅已发布文章可见，草稿一律 404。
/// 每次访问浏览计数 +1，响应里带的是加一后的值，
/// 并附带同分类下最多 3 篇相关文章。
#[utoipa::path(get,
    path = "/articles/{slug}",
    tag = "articles",
    responses(
        (status = 200, description = "Published article with related list", body = ArticleDetailReply),
        (status = 404, description = "No published article with this slug"),
    ),
)]
pub async fn get_published_article<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetailReply>, AppError> {
    debug!("🔍 前台文章详情 slug={slug}");

    let article = state
        .repository
        .get_article_by_slug(&slug)
        .await?
        .filter(|a| a.status == database::STATUS_PUBLISHED)
        .ok_or(AppError::NotFound("文章不存在"))?;

    state.repository.increment_article_views(article.id).await?;

    let published = state.repository.list_published_articles().await?;
    let related = related_articles(published, &article);

    let mut response: ArticleResponse = article.into();
    response.view_count += 1;
    Ok(Json(ArticleDetailReply {
        data: response,
        related: related.into_iter().map(Into::into).collect(),
    }))
}

/// 后台文章列表（含草稿）
#[utoipa::path(get,
    path = "/admin/articles",
    tag = "admin",
    responses(
        (status = 200, description = "All articles", body = ReplyList<ArticleResponse>)
    ),
)]
pub async fn find_articles<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
) -> Result<Json<ReplyList<ArticleResponse>>, AppError> {
    let articles = state.repository.list_articles().await?;
    Ok(Json(ReplyList::new(articles.into_iter().map(Into::into).collect())))
}

/// 后台创建文章
///
/// slug 已被占用返回 409
#[utoipa::path(post,
    path = "/admin/articles",
    tag = "admin",
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Created article", body = Reply<ArticleResponse>),
        (status = 409, description = "Slug already taken"),
    ),
)]
pub async fn create_article<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
    Json(request): Json<ArticleRequest>,
) -> Result<Json<Reply<ArticleResponse>>, AppError> {
    debug!("📝 创建文章 slug={}", request.slug);
    request.validate()?;

    let article = state
        .repository
        .create_article(request.into())
        .await?
        .ok_or_else(|| AppError::InternalError(eyre!("存储后端未配置，无法写入")))?;

    info!("✅ 文章已创建 id={} slug={}", article.id, article.slug);
    Ok(Json(Reply { data: article.into() }))
}

/// 后台更新文章
///
/// 除封面外的字段全量覆盖；请求中 `cover_image` 为 null 时保留原封面
#[utoipa::path(patch, path = "/admin/articles/{id}", tag = "admin")]
pub async fn update_article<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(request): Json<ArticleRequest>,
) -> Result<Json<Reply<ArticleResponse>>, AppError> {
    debug!("📝 更新文章 id={id}");
    request.validate()?;

    let updated = state.repository.update_article(id, request.into()).await?;
    if !updated {
        return Err(AppError::NotFound("文章不存在"));
    }

    let article = state
        .repository
        .get_article_by_id(id)
        .await?
        .ok_or(AppError::NotFound("文章不存在"))?;
    Ok(Json(Reply { data: article.into() }))
}

/// 后台删除文章
#[utoipa::path(delete, path = "/admin/articles/{id}", tag = "admin")]
pub async fn delete_article<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<(), AppError> {
    debug!("🗑️ 删除文章 id={id}");

    let deleted = state.repository.delete_article(id).await?;
    if !deleted {
        return Err(AppError::NotFound("文章不存在"));
    }
    info!("✅ 文章已删除 id={id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(id: i64, category: &str) -> ArticleInfo {
        let now = Utc::now();
        ArticleInfo {
            id,
            title: format!("文章 {id}"),
            slug: format!("article-{id}"),
            content: "正文".to_string(),
            excerpt: String::new(),
            cover_image: None,
            category: category.to_string(),
            tags: String::new(),
            status: database::STATUS_PUBLISHED.to_string(),
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn categories_are_distinct_and_skip_empty() {
        let articles = vec![
            article(1, "AI"),
            article(2, ""),
            article(3, "Web"),
            article(4, "AI"),
        ];
        assert_eq!(distinct_categories(&articles), vec!["AI", "Web"]);
    }

    #[test]
    fn related_articles_share_category_and_exclude_current() {
        let current = article(1, "AI");
        let published = vec![
            current.clone(),
            article(2, "AI"),
            article(3, "Web"),
            article(4, "AI"),
            article(5, "AI"),
            article(6, "AI"),
        ];

        let related = related_articles(published, &current);
        // 最多 3 篇，不含当前文章，顺序保持传入顺序
        assert_eq!(
            related.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![2, 4, 5]
        );
        assert!(related.iter().all(|a| a.category == "AI"));
    }

    #[test]
    fn related_articles_may_be_empty() {
        let current = article(1, "AI");
        let related = related_articles(vec![current.clone()], &current);
        assert!(related.is_empty());
    }
}
