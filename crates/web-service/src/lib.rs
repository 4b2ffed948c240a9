//! Web服务模块
//!
//! 提供站点的 HTTP API：
//! - 前台内容接口（文章 / 产品 / 个人资料）
//! - 后台管理接口（登录 + 内容 CRUD）
//! - 编程发布接口与健康检查
//!
//! 所有数据访问都通过 [`ContentRepositoryTrait`] 抽象，
//! 具体后端（JSON 文件 / PostgreSQL）在启动时由配置决定。

use color_eyre::eyre::Context;
use color_eyre::Result;
use database::{ensure_seed_data, ContentRepositoryTrait, SeedAdmin};
use shared_lib::AppConfig;
use std::sync::Arc;
use tracing::info;

pub mod auth;
pub mod models;
pub mod routes;

/// 应用共享状态
pub struct AppState<R: ContentRepositoryTrait> {
    pub repository: Arc<R>,
    pub config: Arc<AppConfig>,
}

impl<R: ContentRepositoryTrait> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: Arc::clone(&self.config),
        }
    }
}

/// 启动 Web 服务
///
/// 先做种子数据初始化（幂等），再绑定端口开始服务，
/// 收到 ctrl-c 后优雅退出
pub async fn start_web_service<R: ContentRepositoryTrait>(
    repository: R,
    config: Arc<AppConfig>,
) -> Result<()> {
    let repository = Arc::new(repository);

    // 默认管理员密码只在这里做一次哈希，数据库层不接触明文
    let password_hash = auth::hash_password(config.auth.seed_admin.password.clone())
        .await
        .context("计算默认管理员密码哈希失败")?;
    ensure_seed_data(
        repository.as_ref(),
        SeedAdmin {
            username: config.auth.seed_admin.username.clone(),
            password_hash,
            email: config.auth.seed_admin.email.clone(),
        },
    )
    .await?;

    let shared_state = AppState {
        repository,
        config: config.clone(),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
