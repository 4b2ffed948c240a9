//! 管理员仓库 trait 定义
//!
//! 定义管理员数据库操作的抽象接口。管理员不提供公开的删除操作，
//! 只在首次启动时通过种子数据创建。

use crate::models::admin::{AdminCreate, AdminInfo};
use crate::DatabaseResult;

/// 管理员仓库trait定义
#[async_trait::async_trait]
pub trait AdminRepositoryTrait: Send + Sync + 'static {
    /// 根据用户名获取管理员
    ///
    /// 用户名精确匹配
    ///
    /// # 参数
    /// - `username`: 用户名
    async fn get_admin_by_username(&self, username: &str) -> DatabaseResult<Option<AdminInfo>>;

    /// 获取管理员总数
    ///
    /// 种子数据初始化时用来判断"管理员表是否为空"
    async fn count_admins(&self) -> DatabaseResult<i64>;

    /// 创建管理员
    ///
    /// # 参数
    /// - `admin`: 管理员创建参数，密码哈希已由调用方计算好
    ///
    /// # 返回值
    /// 返回创建的管理员；数据库未配置时返回 `None`
    async fn create_admin(&self, admin: AdminCreate) -> DatabaseResult<Option<AdminInfo>>;

    /// 更新管理员最后登录时间为当前时间
    ///
    /// 仅在登录成功时调用
    ///
    /// # 参数
    /// - `id`: 管理员 ID
    async fn update_admin_last_login(&self, id: i64) -> DatabaseResult<()>;
}
