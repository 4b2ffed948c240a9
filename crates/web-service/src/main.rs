//! 站点内容服务入口
//!
//! 根据配置选择存储后端并启动 HTTP 服务：
//! - `file`（默认）：单个 JSON 文件，零配置即可本地运行
//! - `postgres`：通过 `DATABASE_URL` 连接，未配置或连不上时
//!   降级为只读空站点，不会直接退出

use color_eyre::Result;
use database::{initialize_database, ConfigGated, JsonFileRepository, PostgresRepository};
use shared_lib::{AppConfig, StorageBackend};
use tracing::{info, warn};
use web_service::start_web_service;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志
    tracing_subscriber::fmt::init();

    let config = AppConfig::load()?;

    match config.storage.backend {
        StorageBackend::File => {
            info!("📂 使用 JSON 文件存储: {}", config.storage.data_file.display());
            let repository = JsonFileRepository::open(&config.storage.data_file).await?;
            start_web_service(repository, config).await
        }
        StorageBackend::Postgres => {
            let repository = match &config.storage.database_url {
                Some(url) => match initialize_database(url).await {
                    Ok(pool) => {
                        info!("✅ PostgreSQL 连接就绪");
                        ConfigGated::new(PostgresRepository::new(pool))
                    }
                    Err(err) => {
                        warn!("⚠️ PostgreSQL 初始化失败，降级为未配置模式: {err}");
                        ConfigGated::unconfigured()
                    }
                },
                None => {
                    warn!("⚠️ 未设置 DATABASE_URL，数据库操作将返回空结果");
                    ConfigGated::unconfigured()
                }
            };
            start_web_service(repository, config).await
        }
    }
}
