//! 后台认证接口：登录与面板统计

use crate::auth::{self, AuthAdmin};
use crate::models::auth::{DashboardReply, LoginRequest, LoginResponse};
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use database::{ArticleInfo, ContentRepositoryTrait, ProductInfo};
use tracing::{info, warn};
use validator::Validate;

/// 面板里展示的"最近更新"条数
const RECENT_LIMIT: usize = 5;

/// 按 updated_at 降序取最近更新的文章（含草稿）
fn recent_articles(mut articles: Vec<ArticleInfo>) -> Vec<ArticleInfo> {
    articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    articles.truncate(RECENT_LIMIT);
    articles
}

/// 按 updated_at 降序取最近更新的产品
fn recent_products(mut products: Vec<ProductInfo>) -> Vec<ProductInfo> {
    products.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    products.truncate(RECENT_LIMIT);
    products
}

/// 管理员登录
///
/// 用户名不存在与密码错误返回同一条提示，避免账号枚举
#[utoipa::path(post,
    path = "/admin/login",
    tag = "admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 401, description = "Bad credentials"),
    ),
)]
pub async fn admin_login<R: ContentRepositoryTrait>(
    State(state): State<AppState<R>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    request.validate()?;

    let admin = match state.repository.get_admin_by_username(&request.username).await? {
        Some(admin) => admin,
        None => {
            warn!("⚠️ 登录失败：用户名不存在 username={}", request.username);
            return Err(AppError::Unauthorized("用户名或密码错误"));
        }
    };

    let verified = auth::verify_password(request.password, admin.password_hash.clone()).await?;
    if !verified {
        warn!("⚠️ 登录失败：密码错误 username={}", admin.username);
        return Err(AppError::Unauthorized("用户名或密码错误"));
    }

    state.repository.update_admin_last_login(admin.id).await?;
    let token = auth::create_session_token(admin.id, &state.config.auth.session_secret)?;

    info!("✅ 管理员登录成功 username={}", admin.username);
    Ok(Json(LoginResponse {
        token,
        username: admin.username,
    }))
}

/// 后台面板统计
///
/// 统计数据之外附带最近更新的 5 篇文章和 5 个产品
#[utoipa::path(get,
    path = "/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Dashboard stats", body = DashboardReply)
    ),
)]
pub async fn get_dashboard<R: ContentRepositoryTrait>(
    _admin: AuthAdmin,
    State(state): State<AppState<R>>,
) -> Result<Json<DashboardReply>, AppError> {
    let stats = state.repository.get_article_stats().await?;
    let total_products = state.repository.count_products().await?;
    let articles = recent_articles(state.repository.list_articles().await?);
    let products = recent_products(state.repository.list_products().await?);

    Ok(Json(DashboardReply {
        total_articles: stats.total,
        published_articles: stats.published,
        total_views: stats.total_views,
        total_products,
        recent_articles: articles.into_iter().map(Into::into).collect(),
        recent_products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn article(id: i64, updated_hours_ago: i64) -> ArticleInfo {
        let now = Utc::now();
        ArticleInfo {
            id,
            title: format!("文章 {id}"),
            slug: format!("article-{id}"),
            content: "正文".to_string(),
            excerpt: String::new(),
            cover_image: None,
            category: String::new(),
            tags: String::new(),
            status: database::STATUS_DRAFT.to_string(),
            view_count: 0,
            created_at: now - Duration::hours(updated_hours_ago),
            updated_at: now - Duration::hours(updated_hours_ago),
        }
    }

    fn product(id: i64, updated_hours_ago: i64) -> ProductInfo {
        let now = Utc::now();
        ProductInfo {
            id,
            name: format!("产品 {id}"),
            slug: format!("product-{id}"),
            description: String::new(),
            short_description: String::new(),
            images: String::new(),
            tech_stack: String::new(),
            project_url: String::new(),
            github_url: String::new(),
            featured: false,
            display_order: 0,
            created_at: now - Duration::hours(updated_hours_ago),
            updated_at: now - Duration::hours(updated_hours_ago),
        }
    }

    #[test]
    fn recent_articles_sort_by_updated_at_and_cap_at_five() {
        let articles = vec![
            article(1, 7),
            article(2, 1),
            article(3, 5),
            article(4, 2),
            article(5, 6),
            article(6, 3),
            article(7, 4),
        ];

        let recent = recent_articles(articles);
        assert_eq!(
            recent.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![2, 4, 6, 7, 3]
        );
    }

    #[test]
    fn recent_products_include_everything_under_the_cap() {
        let recent = recent_products(vec![product(1, 2), product(2, 1)]);
        assert_eq!(recent.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
    }
}
