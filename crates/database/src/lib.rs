//! 内容仓库模块
//!
//! 这个模块提供了站点内容（文章 / 产品 / 管理员 / 个人资料）的统一数据访问层：
//! - 按实体划分的仓库 trait，路由层只依赖这些抽象接口
//! - 两种可互换的后端实现：单 JSON 文件 与 PostgreSQL
//! - 数据库未配置时的降级包装器 [`ConfigGated`]
//! - 首次启动时的种子数据初始化

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::admin::{AdminCreate, AdminInfo};
pub use models::article::{ArticleCreate, ArticleInfo, ArticleStats, ArticleUpdate};
pub use models::product::{ProductCreate, ProductInfo, ProductUpdate};
pub use models::profile::{ProfileInfo, ProfileUpdate};
pub use models::{STATUS_DRAFT, STATUS_PUBLISHED};
pub use repositories::gated::ConfigGated;
pub use repositories::json_file::JsonFileRepository;
pub use repositories::postgres::PostgresRepository;
pub use seed::{ensure_seed_data, SeedAdmin};
pub use repositories::traits::{
    AdminRepositoryTrait, ArticleRepositoryTrait, ContentRepositoryTrait, ProductRepositoryTrait,
    ProfileRepositoryTrait,
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
