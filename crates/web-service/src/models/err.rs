use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 资源不存在
    #[error("{0}")]
    NotFound(&'static str),

    /// 未认证或认证失败
    #[error("{0}")]
    Unauthorized(&'static str),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
///
/// slug 冲突单独映射为 409，方便调用方渲染冲突提示；
/// 其余后端错误一律 500，细节只进日志不回给客户端
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, format!("Validate failed: {err}")).into_response()
            }
            AppError::RepositoryError(err) if err.is_duplicate_slug() => {
                (StatusCode::CONFLICT, format!("{err}")).into_response()
            }
            AppError::RepositoryError(err) => {
                error!("❌ 数据库错误: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
                    .into_response()
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()).into_response(),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, msg.to_string()).into_response()
            }
            AppError::InternalError(err) => {
                error!("❌ 内部错误: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
                    .into_response()
            }
        }
    }
}
