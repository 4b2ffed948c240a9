//! 仓库 trait 定义
//!
//! 按实体划分的数据库操作抽象接口。路由层只依赖这些 trait，
//! 不直接接触任何具体后端。

mod admin;
mod article;
mod product;
mod profile;

pub use admin::AdminRepositoryTrait;
pub use article::ArticleRepositoryTrait;
pub use product::ProductRepositoryTrait;
pub use profile::ProfileRepositoryTrait;

/// 内容仓库总接口
///
/// 把各实体的仓库 trait 聚合为一个接口，启动时根据配置选择具体实现，
/// 调用方只需要这一个泛型约束。
pub trait ContentRepositoryTrait:
    ArticleRepositoryTrait + ProductRepositoryTrait + AdminRepositoryTrait + ProfileRepositoryTrait
{
}

impl<T> ContentRepositoryTrait for T where
    T: ArticleRepositoryTrait + ProductRepositoryTrait + AdminRepositoryTrait + ProfileRepositoryTrait
{
}
