//! 认证能力
//!
//! - 密码哈希/校验：argon2，放在 `spawn_blocking` 里避免阻塞运行时
//! - 管理员会话：有效期 24 小时的 JWT，签名密钥来自配置
//! - [`AuthAdmin`] 提取器：后台接口在参数里声明它即可完成鉴权
//!
//! 对外这是两个不透明能力：`hash(password) -> credential` 与
//! `verify(password, credential) -> bool`，其余模块不关心具体算法。

use crate::models::err::AppError;
use crate::AppState;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use database::ContentRepositoryTrait;
use serde::{Deserialize, Serialize};

/// 会话有效期：24 小时
const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaim {
    /// 管理员 ID
    id: i64,
    /// 过期时间（unix 秒）
    exp: i64,
}

/// 已通过鉴权的管理员身份
pub struct AuthAdmin {
    pub admin_id: i64,
}

impl<R> FromRequestParts<AppState<R>> for AuthAdmin
where
    R: ContentRepositoryTrait,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("Authorization")
            .ok_or(AppError::Unauthorized("请先登录"))?;
        let header = header
            .to_str()
            .map_err(|_| AppError::Unauthorized("无效的会话凭据"))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized("无效的会话凭据"))?;

        let admin_id = verify_session_token(token, &state.config.auth.session_secret)?;
        Ok(AuthAdmin { admin_id })
    }
}

/// 签发管理员会话 token
pub fn create_session_token(admin_id: i64, secret: &str) -> Result<String> {
    let claim = SessionClaim {
        id: admin_id,
        exp: (Utc::now() + chrono::Duration::hours(SESSION_TTL_HOURS)).timestamp(),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claim,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_ref()),
    )
    .context("签发会话 token 失败")
}

/// 校验会话 token，返回管理员 ID
///
/// 过期、伪造、格式错误一律视为未认证
pub fn verify_session_token(token: &str, secret: &str) -> Result<i64, AppError> {
    let token_data = jsonwebtoken::decode::<SessionClaim>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(secret.as_ref()),
        &jsonwebtoken::Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("会话已失效，请重新登录"))?;
    Ok(token_data.claims.id)
}

/// 计算密码哈希
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(rand::thread_rng());
        let hash = PasswordHash::generate(Argon2::default(), password, salt.as_salt())
            .map_err(|_| eyre!("密码哈希计算失败"))?;
        Ok(hash.to_string())
    })
    .await
    .context("密码哈希任务执行失败")?
}

/// 校验密码与存储的哈希是否匹配
pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        let hash = PasswordHash::new(&hash).map_err(|_| eyre!("密码凭据格式错误"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok())
    })
    .await
    .context("密码校验任务执行失败")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn password_hash_roundtrip() {
        let hash = hash_password("jianbing2024".to_string()).await.unwrap();
        // 哈希结果是不透明凭据，不包含明文
        assert!(!hash.contains("jianbing2024"));

        assert!(verify_password("jianbing2024".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password("wrong-password".to_string(), hash)
            .await
            .unwrap());
    }

    #[test]
    fn session_token_roundtrip() {
        let token = create_session_token(42, "test-secret").unwrap();
        assert_eq!(verify_session_token(&token, "test-secret").unwrap(), 42);

        // 换密钥校验失败
        assert!(verify_session_token(&token, "other-secret").is_err());
        // 乱码直接拒绝
        assert!(verify_session_token("not-a-token", "test-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let claim = SessionClaim {
            id: 1,
            exp: (Utc::now() - chrono::Duration::hours(1)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claim,
            &jsonwebtoken::EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();
        assert!(verify_session_token(&token, "test-secret").is_err());
    }
}
