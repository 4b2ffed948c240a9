//! 产品仓库 trait 定义
//!
//! 定义产品数据库操作的抽象接口

use crate::models::product::{ProductCreate, ProductInfo, ProductUpdate};
use crate::DatabaseResult;

/// 产品仓库trait定义
///
/// 定义了产品相关的数据库操作接口，支持：
/// - 产品列表（精选置顶）
/// - slug / id 查询
/// - 产品创建、更新、删除
/// - 产品计数
#[async_trait::async_trait]
pub trait ProductRepositoryTrait: Send + Sync + 'static {
    /// 获取全部产品
    ///
    /// # 返回值
    /// 按 (featured 降序, display_order 升序, created_at 降序) 排列的产品列表
    async fn list_products(&self) -> DatabaseResult<Vec<ProductInfo>>;

    /// 根据 slug 获取产品
    ///
    /// 产品 slug 与文章 slug 是相互独立的命名空间
    ///
    /// # 参数
    /// - `slug`: 产品的 URL 别名
    async fn get_product_by_slug(&self, slug: &str) -> DatabaseResult<Option<ProductInfo>>;

    /// 根据 ID 获取产品
    ///
    /// # 参数
    /// - `id`: 产品 ID
    async fn get_product_by_id(&self, id: i64) -> DatabaseResult<Option<ProductInfo>>;

    /// 创建产品
    ///
    /// 创建前先做一次 slug 查重，已被占用则返回
    /// [`DatabaseError::DuplicateSlug`](crate::DatabaseError::DuplicateSlug)
    ///
    /// # 参数
    /// - `product`: 产品创建参数
    ///
    /// # 返回值
    /// 返回带生成 id 和时间戳的新产品；数据库未配置时返回 `None`
    async fn create_product(&self, product: ProductCreate) -> DatabaseResult<Option<ProductInfo>>;

    /// 更新产品
    ///
    /// 普通字段全量覆盖，`images` 为 `None` 时保留原值
    ///
    /// # 参数
    /// - `id`: 产品 ID
    /// - `update`: 更新参数
    ///
    /// # 返回值
    /// id 不存在时返回 `false`，不报错；该判断先于 slug 冲突检查
    async fn update_product(&self, id: i64, update: ProductUpdate) -> DatabaseResult<bool>;

    /// 删除产品
    ///
    /// 硬删除，幂等：id 不存在时返回 `false`，不报错
    ///
    /// # 参数
    /// - `id`: 产品 ID
    async fn delete_product(&self, id: i64) -> DatabaseResult<bool>;

    /// 获取产品总数
    async fn count_products(&self) -> DatabaseResult<i64>;
}
