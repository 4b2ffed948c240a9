//! PostgreSQL 仓库实现
//!
//! 每个实体对应一张表，仓库方法编译为参数化查询。
//! 查询使用运行时校验的 `sqlx::query_as` / `sqlx::query`，
//! 构建时不需要连接数据库。

mod admin;
mod article;
mod product;
mod profile;

use sqlx::PgPool;

/// PostgreSQL 仓库结构体
///
/// 持有有界连接池，每个操作从池中获取一个连接，结束后无条件归还
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// 创建新的 PostgreSQL 仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
