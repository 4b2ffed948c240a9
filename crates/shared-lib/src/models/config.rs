use color_eyre::{Help, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// 存储后端类型
///
/// - `File`: 单个 JSON 文件，零配置即可本地运行
/// - `Postgres`: 关系型数据库，通过 `DATABASE_URL` 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Postgres,
}

/// 存储相关配置
pub struct StorageConfig {
    /// 使用哪种存储后端
    ///
    /// 可通过环境变量 `STORAGE_BACKEND` 调整（`file` / `postgres`），默认 `file`
    pub backend: StorageBackend,

    /// JSON 文件后端的数据文件路径
    ///
    /// 可通过环境变量 `DATA_FILE` 调整
    pub data_file: PathBuf,

    /// postgresql 数据库链接字符串
    ///
    /// 未设置时视为"数据库未配置"，所有数据库操作降级为空结果，不会报错
    pub database_url: Option<String>,
}

/// 默认管理员种子数据
///
/// 仅在管理员表为空时插入一次，之后修改密码不会被重置
pub struct SeedAdmin {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// 认证相关配置
pub struct AuthConfig {
    /// 管理员会话 token 的签名密钥
    ///
    /// 可通过环境变量 `SESSION_SECRET` 调整，线上环境务必修改默认值
    pub session_secret: String,

    /// 编程发布接口的共享密钥
    ///
    /// 未设置时发布接口直接拒绝所有请求
    pub publish_token: Option<String>,

    /// 默认管理员种子数据
    pub seed_admin: SeedAdmin,
}

/// 程序配置
pub struct AppConfig {
    /// 存储配置
    pub storage: StorageConfig,

    /// 服务监听地址，可通过环境变量 `BIND_ADDR` 调整
    pub bind_addr: String,

    /// 认证配置
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").ok();

        // 存储后端选择：默认使用 JSON 文件，零配置即可启动
        let backend = match std::env::var("STORAGE_BACKEND").as_deref() {
            Ok("postgres") => StorageBackend::Postgres,
            Ok("file") | Err(_) => StorageBackend::File,
            Ok(other) => {
                return Err(color_eyre::eyre::eyre!("未知的存储后端: {other}"))
                    .suggestion("STORAGE_BACKEND 仅支持 file 或 postgres");
            }
        };

        let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| "data/site.json".to_string());

        let session_secret = std::env::var("SESSION_SECRET")
            .unwrap_or_else(|_| "jianbing-secret-key-2024".to_string());

        let seed_admin = SeedAdmin {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "jianbing2024".to_string()),
            email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@jianbing.dev".to_string()),
        };

        let config = AppConfig {
            storage: StorageConfig {
                backend,
                data_file: PathBuf::from(data_file),
                database_url,
            },
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            auth: AuthConfig {
                session_secret,
                publish_token: std::env::var("PUBLISH_API_TOKEN").ok(),
                seed_admin,
            },
        };
        Ok(Arc::new(config))
    }
}

impl AppConfig {
    /// 数据库是否已配置
    ///
    /// 选择了 postgres 后端且提供了链接字符串才算"已配置"
    pub fn database_configured(&self) -> bool {
        self.storage.backend == StorageBackend::Postgres && self.storage.database_url.is_some()
    }
}
