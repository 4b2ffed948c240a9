//! 仓库实现
//!
//! 内容仓库的抽象接口与两种后端实现：
//! - [`json_file::JsonFileRepository`]: 单 JSON 文件，零配置本地运行
//! - [`postgres::PostgresRepository`]: PostgreSQL，配合 [`gated::ConfigGated`]
//!   在数据库未配置时降级为空结果

pub mod gated;
pub mod json_file;
pub mod postgres;
pub mod traits;
