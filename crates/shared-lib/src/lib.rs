//! 🔧 共享库模块
//!
//! 这个模块包含了在多个 crate 之间共享的通用代码，目前主要是程序配置：
//! - 存储后端选择（JSON 文件 / PostgreSQL）
//! - 服务监听地址
//! - 认证相关密钥与默认管理员种子数据

pub mod models;

// 重新导出常用类型
pub use models::{AppConfig, AuthConfig, SeedAdmin, StorageBackend, StorageConfig};
