use thiserror::Error;

/// 数据库操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误
    #[error("数据库操作错误: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// slug 已被占用
    ///
    /// 创建或更新时发现同名 slug 属于另一条记录，调用方应向用户展示冲突提示
    #[error("slug 已存在: {0}")]
    DuplicateSlug(String),

    /// JSON 文件读写错误
    #[error("数据文件读写错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化/反序列化错误
    #[error("数据文件序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 连接错误
    #[error("数据库连接错误: {0}")]
    ConnectionError(String),

    /// 迁移错误
    #[error("数据库迁移错误: {0}")]
    MigrationError(String),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    /// 创建迁移错误
    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::MigrationError(msg.to_string())
    }

    /// 是否是 slug 冲突错误
    ///
    /// 除了仓库层自己的前置检查外，数据库层面的 UNIQUE 约束冲突也算
    pub fn is_duplicate_slug(&self) -> bool {
        match self {
            Self::DuplicateSlug(_) => true,
            Self::SqlxError(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }
}
