//! 个人资料仓库 trait 定义
//!
//! 个人资料是全站单例，只有查询、种子插入和更新三个操作，没有删除。

use crate::models::profile::{ProfileInfo, ProfileUpdate};
use crate::DatabaseResult;

/// 个人资料仓库trait定义
#[async_trait::async_trait]
pub trait ProfileRepositoryTrait: Send + Sync + 'static {
    /// 获取个人资料
    ///
    /// # 返回值
    /// 资料不存在（例如数据库未配置）时返回 `None`
    async fn get_profile(&self) -> DatabaseResult<Option<ProfileInfo>>;

    /// 插入个人资料
    ///
    /// 仅用于种子数据初始化，调用方必须先确认资料不存在，
    /// 绝不能覆盖用户已自定义的资料
    ///
    /// # 参数
    /// - `profile`: 完整的资料内容
    async fn insert_profile(&self, profile: ProfileInfo) -> DatabaseResult<()>;

    /// 更新个人资料
    ///
    /// 普通字段全量覆盖，`avatar` 为 `None` 时保留原值
    ///
    /// # 参数
    /// - `update`: 更新参数
    ///
    /// # 返回值
    /// 资料不存在时返回 `false`
    async fn update_profile(&self, update: ProfileUpdate) -> DatabaseResult<bool>;
}
