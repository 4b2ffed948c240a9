//! 管理员数据库模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 管理员信息结构体
///
/// `password_hash` 是不透明的密码凭据，任何情况下不存储、不打印明文密码
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdminInfo {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// 最近一次成功登录时间，从未登录过则为 None
    pub last_login: Option<DateTime<Utc>>,
}

/// 管理员创建参数
///
/// 仅用于种子数据初始化，密码哈希由调用方提前计算好传入
#[derive(Debug, Clone)]
pub struct AdminCreate {
    pub username: String,
    pub password_hash: String,
    pub email: String,
}
