use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 封装符合json-api的单个返回对象
///
/// 具体参考：<https://jsonapi.org>
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    pub data: T,
}

/// 封装符合json-api的列表对象
///
/// 站点内容量有限，列表接口不做分页，`total` 即全量条数
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    pub data: Vec<T>,
    #[schema(example = 42)]
    /// 列表总数
    pub total: u32,
}

impl<T> ReplyList<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len() as u32;
        Self { data, total }
    }
}
